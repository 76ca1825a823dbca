use crate::command::System;
use crate::platform;
use std::env as stdenv;
use std::path::{Path, PathBuf};

/// Mutable, per-session state threaded through command handlers.
///
/// The session carries:
/// - `current_dir`: the working directory, mutated by `cd` and read by every
///   path-relative operation that follows.
/// - `windows`: the platform flavor, consulted by the commands whose
///   underlying utility differs between POSIX and Windows.
/// - `system`: the injected file-system-and-process capability handlers run
///   against.
///
/// Note: fields are public for simplicity to keep the crate small.
/// Production code would prefer accessor methods over public fields.
pub struct Session {
    /// The current working directory for command execution.
    pub current_dir: PathBuf,
    /// Whether the running environment looks Windows-like.
    pub windows: bool,
    /// The capability implementation backing this session.
    pub system: Box<dyn System>,
}

impl Session {
    /// Capture the current process state into a new `Session` backed by the
    /// provided capability implementation.
    ///
    /// `current_dir` is initialized from `std::env::current_dir()` and
    /// `windows` from the platform probe.
    pub fn new(system: Box<dyn System>) -> Self {
        let current_dir = stdenv::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            current_dir,
            windows: platform::is_windows(),
            system,
        }
    }

    /// Resolve a user-supplied path against the session's working directory.
    pub fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.current_dir.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::external::OsSystem;

    #[test]
    fn test_new_captures_process_state() {
        let session = Session::new(Box::new(OsSystem));
        assert_eq!(session.current_dir, stdenv::current_dir().unwrap());
        assert_eq!(session.windows, platform::is_windows());
    }

    #[test]
    fn test_resolve_joins_relative_paths() {
        let session = Session {
            current_dir: PathBuf::from("/work"),
            windows: false,
            system: Box::new(OsSystem),
        };
        assert_eq!(session.resolve("notes.txt"), PathBuf::from("/work/notes.txt"));
        assert_eq!(session.resolve("a/b"), PathBuf::from("/work/a/b"));
    }

    #[test]
    fn test_resolve_keeps_absolute_paths() {
        let session = Session {
            current_dir: PathBuf::from("/work"),
            windows: false,
            system: Box::new(OsSystem),
        };
        assert_eq!(session.resolve("/etc/hosts"), PathBuf::from("/etc/hosts"));
    }
}

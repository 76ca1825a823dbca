use crate::env::Session;
use anyhow::Result;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// How a delegated program's streams are wired to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StdioMode {
    /// Stdout and stderr are captured and printed once the child exits.
    Captured,
    /// The child shares the shell's own terminal streams. Used for pagers,
    /// whose output must be paged interactively rather than dumped.
    Inherited,
}

/// A single external-program invocation: program name plus verbatim
/// arguments. Created per dispatch, consumed immediately by the process
/// invoker, and discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: &'static str,
    pub args: Vec<String>,
    pub stdio: StdioMode,
}

impl Invocation {
    pub fn captured(program: &'static str, args: Vec<String>) -> Self {
        Self {
            program,
            args,
            stdio: StdioMode::Captured,
        }
    }

    pub fn interactive(program: &'static str, args: Vec<String>) -> Self {
        Self {
            program,
            args,
            stdio: StdioMode::Inherited,
        }
    }
}

/// A native handler performs the work in-process through the session's
/// [`System`] capability and writes any output to `out`.
pub type NativeFn = fn(&mut Session, &[String], &mut dyn Write) -> Result<()>;

/// A delegated handler only decides *what* to run; the dispatcher hands the
/// result to the process invoker. Builders stay pure so tests can assert on
/// the constructed argument vector without spawning anything.
pub type DelegateFn = fn(&Session, &[String]) -> Invocation;

/// The two kinds of command the table can hold.
#[derive(Clone, Copy)]
pub enum Handler {
    /// A thin wrapper over a direct file-system call.
    Native(NativeFn),
    /// A forwarding shim around an external program.
    Delegated(DelegateFn),
}

/// Capability surface the shell runs against: the file-system calls the
/// native handlers need, plus process execution for delegated commands.
///
/// [`crate::Interpreter`] injects the real implementation; tests substitute
/// an in-memory fake to exercise handlers without touching the machine.
pub trait System {
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

    fn set_current_dir(&mut self, path: &Path) -> io::Result<()>;

    fn create_dir(&mut self, path: &Path) -> io::Result<()>;

    /// Removes a single empty directory, non-recursively.
    fn remove_dir(&mut self, path: &Path) -> io::Result<()>;

    /// Removes a file or a whole directory tree. A path that does not exist
    /// is not an error.
    fn remove_all(&mut self, path: &Path) -> io::Result<()>;

    fn rename(&mut self, from: &Path, to: &Path) -> io::Result<()>;

    /// Creates an empty file, truncating it if it already exists.
    fn create_file(&mut self, path: &Path) -> io::Result<()>;

    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Runs the invocation to completion and returns its combined
    /// stdout/stderr bytes. Non-zero exit and launch failure are both errors.
    fn run_captured(&mut self, invocation: &Invocation) -> Result<Vec<u8>>;

    /// Runs the invocation wired to the shell's own terminal streams and
    /// waits for it to finish.
    fn run_interactive(&mut self, invocation: &Invocation) -> Result<()>;
}

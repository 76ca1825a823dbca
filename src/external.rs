use crate::command::{Invocation, System};
use crate::env::Session;
use anyhow::{bail, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// The real capability implementation: direct std file-system calls plus
/// child processes spawned through the environment's executable search path.
#[derive(Default)]
pub struct OsSystem;

impl System for OsSystem {
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }

    fn set_current_dir(&mut self, path: &Path) -> io::Result<()> {
        std::env::set_current_dir(path)
    }

    fn create_dir(&mut self, path: &Path) -> io::Result<()> {
        fs::create_dir(path)
    }

    fn remove_dir(&mut self, path: &Path) -> io::Result<()> {
        fs::remove_dir(path)
    }

    fn remove_all(&mut self, path: &Path) -> io::Result<()> {
        match fs::symlink_metadata(path) {
            Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
            Ok(_) => fs::remove_file(path),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err),
        }
    }

    fn rename(&mut self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }

    fn create_file(&mut self, path: &Path) -> io::Result<()> {
        fs::File::create(path).map(|_| ())
    }

    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    /// Children inherit the process working directory, which `cd` keeps
    /// current, so path-relative arguments resolve the same way they would in
    /// the native handlers.
    fn run_captured(&mut self, invocation: &Invocation) -> Result<Vec<u8>> {
        let output = Command::new(invocation.program)
            .args(&invocation.args)
            .output()?;
        if !output.status.success() {
            bail!("{}", output.status);
        }
        let mut combined = output.stdout;
        combined.extend_from_slice(&output.stderr);
        Ok(combined)
    }

    fn run_interactive(&mut self, invocation: &Invocation) -> Result<()> {
        let status = Command::new(invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .status()?;
        if !status.success() {
            bail!("{}", status);
        }
        Ok(())
    }
}

// Invocation builders for the delegated commands. Builders may index into
// `args`: the dispatcher has already enforced each entry's minimum count.

pub(crate) fn clear_screen(session: &Session, _args: &[String]) -> Invocation {
    if session.windows {
        Invocation::captured("cmd", vec!["/c".into(), "cls".into()])
    } else {
        Invocation::captured("clear", Vec::new())
    }
}

pub(crate) fn list_directory(session: &Session, _args: &[String]) -> Invocation {
    if session.windows {
        Invocation::captured("cmd", vec!["/c".into(), "dir".into()])
    } else {
        Invocation::captured("ls", vec!["-l".into()])
    }
}

/// Copying is delegated rather than reimplemented; `-r` makes it recursive
/// for files and directories alike.
pub(crate) fn copy(_session: &Session, args: &[String]) -> Invocation {
    Invocation::captured("cp", vec!["-r".into(), args[0].clone(), args[1].clone()])
}

/// Both `more` and `less` page through `less`, wired to the shell's own
/// terminal streams.
pub(crate) fn page_file(_session: &Session, args: &[String]) -> Invocation {
    Invocation::interactive("less", vec![args[0].clone()])
}

pub(crate) fn first_lines(_session: &Session, args: &[String]) -> Invocation {
    Invocation::captured("head", vec![args[0].clone()])
}

pub(crate) fn last_lines(_session: &Session, args: &[String]) -> Invocation {
    Invocation::captured("tail", vec![args[0].clone()])
}

pub(crate) fn find_entries(_session: &Session, args: &[String]) -> Invocation {
    Invocation::captured("find", args.to_vec())
}

pub(crate) fn search_files(_session: &Session, args: &[String]) -> Invocation {
    Invocation::captured("grep", args.to_vec())
}

pub(crate) fn change_mode(_session: &Session, args: &[String]) -> Invocation {
    Invocation::captured("chmod", args.to_vec())
}

pub(crate) fn change_owner(_session: &Session, args: &[String]) -> Invocation {
    Invocation::captured("chown", args.to_vec())
}

pub(crate) fn change_group(_session: &Session, args: &[String]) -> Invocation {
    Invocation::captured("chgrp", args.to_vec())
}

pub(crate) fn disk_free(_session: &Session, args: &[String]) -> Invocation {
    Invocation::captured("df", args.to_vec())
}

pub(crate) fn disk_usage(_session: &Session, args: &[String]) -> Invocation {
    Invocation::captured("du", args.to_vec())
}

use crate::env::Session;
use anyhow::Result;
use std::io::Write;

/// Keyword/summary pairs printed by `help`, one line per command.
const HELP: &[(&str, &str)] = &[
    ("cat", "Display the contents of a file"),
    ("cd", "Change the current directory"),
    ("cls", "Clear the screen"),
    ("cp", "Copy files or directories"),
    ("dir", "List the contents of the current directory"),
    ("head", "Display the first few lines of a file"),
    ("help", "Display this help message"),
    ("less", "Display the contents of a file one page at a time"),
    ("ls", "List the contents of the current directory"),
    ("mkdir", "Create a new directory"),
    ("more", "Display the contents of a file one page at a time"),
    ("mv", "Move or rename files or directories"),
    ("pwd", "Print the current directory path"),
    ("rm", "Remove a file or directory"),
    ("rmdir", "Remove an empty directory"),
    ("tail", "Display the last few lines of a file"),
    ("touch", "Create an empty file"),
    (
        "find",
        "Searches for files or directories based on specified criteria",
    ),
    ("grep", "Searches for text within files"),
    ("chmod", "Modifies file permissions"),
    ("chown", "Changes the owner of a file or directory"),
    ("chgrp", "Changes the group of a file or directory"),
    ("df", "Displays disk space usage"),
    ("du", "Displays the disk usage of files and directories"),
];

/// Change the working directory: canonicalize the target, move the process
/// there, then record it in the session so later commands resolve against it.
pub(crate) fn cd(session: &mut Session, args: &[String], _out: &mut dyn Write) -> Result<()> {
    let target = session.resolve(&args[0]);
    let canonical = session.system.canonicalize(&target)?;
    session.system.set_current_dir(&canonical)?;
    session.current_dir = canonical;
    Ok(())
}

pub(crate) fn pwd(session: &mut Session, _args: &[String], out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", session.current_dir.to_string_lossy())?;
    Ok(())
}

/// Create a directory with the default permission mode.
pub(crate) fn mkdir(session: &mut Session, args: &[String], _out: &mut dyn Write) -> Result<()> {
    let path = session.resolve(&args[0]);
    session.system.create_dir(&path)?;
    Ok(())
}

pub(crate) fn rmdir(session: &mut Session, args: &[String], _out: &mut dyn Write) -> Result<()> {
    let path = session.resolve(&args[0]);
    session.system.remove_dir(&path)?;
    Ok(())
}

/// Remove a file or a whole directory tree.
pub(crate) fn rm(session: &mut Session, args: &[String], _out: &mut dyn Write) -> Result<()> {
    let path = session.resolve(&args[0]);
    session.system.remove_all(&path)?;
    Ok(())
}

pub(crate) fn mv(session: &mut Session, args: &[String], _out: &mut dyn Write) -> Result<()> {
    let from = session.resolve(&args[0]);
    let to = session.resolve(&args[1]);
    session.system.rename(&from, &to)?;
    Ok(())
}

/// Create an empty file, truncating any existing contents.
pub(crate) fn touch(session: &mut Session, args: &[String], _out: &mut dyn Write) -> Result<()> {
    let path = session.resolve(&args[0]);
    session.system.create_file(&path)?;
    Ok(())
}

/// Read the whole file and print it followed by a newline.
pub(crate) fn cat(session: &mut Session, args: &[String], out: &mut dyn Write) -> Result<()> {
    let path = session.resolve(&args[0]);
    let data = session.system.read_file(&path)?;
    out.write_all(&data)?;
    writeln!(out)?;
    Ok(())
}

pub(crate) fn help(_session: &mut Session, _args: &[String], out: &mut dyn Write) -> Result<()> {
    writeln!(out, "Available commands:")?;
    for (name, summary) in HELP {
        writeln!(out, "{}:\t{}", name, summary)?;
    }
    Ok(())
}

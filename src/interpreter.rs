use crate::builtin;
use crate::command::{Handler, StdioMode};
use crate::env::Session;
use crate::external::{self, OsSystem};
use anyhow::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::collections::HashMap;
use std::io::Write;

/// One row of the command table: the minimum argument count the dispatcher
/// enforces before the handler runs, and the handler itself.
#[derive(Clone, Copy)]
struct Entry {
    min_args: usize,
    handler: Handler,
}

/// Every command the shell knows, registered once at startup. Lookup is by
/// lower-cased keyword; `dir`/`ls` and `more`/`less` are aliases sharing a
/// handler.
pub(crate) static COMMANDS: &[(&str, usize, Handler)] = &[
    ("cls", 0, Handler::Delegated(external::clear_screen)),
    ("dir", 0, Handler::Delegated(external::list_directory)),
    ("ls", 0, Handler::Delegated(external::list_directory)),
    ("cd", 1, Handler::Native(builtin::cd)),
    ("pwd", 0, Handler::Native(builtin::pwd)),
    ("mkdir", 1, Handler::Native(builtin::mkdir)),
    ("rmdir", 1, Handler::Native(builtin::rmdir)),
    ("rm", 1, Handler::Native(builtin::rm)),
    ("cp", 2, Handler::Delegated(external::copy)),
    ("mv", 2, Handler::Native(builtin::mv)),
    ("touch", 1, Handler::Native(builtin::touch)),
    ("cat", 1, Handler::Native(builtin::cat)),
    ("more", 1, Handler::Delegated(external::page_file)),
    ("less", 1, Handler::Delegated(external::page_file)),
    ("head", 1, Handler::Delegated(external::first_lines)),
    ("tail", 1, Handler::Delegated(external::last_lines)),
    ("find", 1, Handler::Delegated(external::find_entries)),
    ("grep", 2, Handler::Delegated(external::search_files)),
    ("chmod", 2, Handler::Delegated(external::change_mode)),
    ("chown", 2, Handler::Delegated(external::change_owner)),
    ("chgrp", 2, Handler::Delegated(external::change_group)),
    ("df", 0, Handler::Delegated(external::disk_free)),
    ("du", 0, Handler::Delegated(external::disk_usage)),
    ("help", 0, Handler::Native(builtin::help)),
];

/// True when the line is the exit sentinel: the word `exit` in any casing,
/// surrounding whitespace ignored.
fn is_exit(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("exit")
}

/// The interactive shell: a fixed command table plus the per-session state
/// the handlers run against.
///
/// [`Interpreter::dispatch`] executes one raw input line;
/// [`Interpreter::repl`] wraps it in the interactive prompt loop.
pub struct Interpreter {
    session: Session,
    table: HashMap<&'static str, Entry>,
}

impl Interpreter {
    /// Create an interpreter around an existing session.
    pub fn new(session: Session) -> Self {
        let table = COMMANDS
            .iter()
            .map(|&(keyword, min_args, handler)| (keyword, Entry { min_args, handler }))
            .collect();
        Self { session, table }
    }

    /// Tokenize one raw input line and execute it.
    ///
    /// Splitting is on whitespace only: no quoting, escaping, globbing, or
    /// variable expansion. The first token, lower-cased, selects the command;
    /// the rest pass through verbatim.
    ///
    /// User-level failures are printed to `out` and never returned: a handler
    /// error as `<command>: <error>`, a failed delegated program as
    /// `Error executing command: <error>`, an unmatched keyword as
    /// `Unknown command: <keyword>`. Only writer failures propagate.
    pub fn dispatch(&mut self, line: &str, out: &mut dyn Write) -> Result<()> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((first, rest)) = tokens.split_first() else {
            return Ok(());
        };
        let keyword = first.to_lowercase();
        let args: Vec<String> = rest.iter().map(|s| s.to_string()).collect();

        let entry = match self.table.get(keyword.as_str()) {
            Some(entry) => *entry,
            None => {
                writeln!(out, "Unknown command: {}", first)?;
                return Ok(());
            }
        };
        if args.len() < entry.min_args {
            writeln!(out, "{}: missing argument", keyword)?;
            return Ok(());
        }

        match entry.handler {
            Handler::Native(run) => {
                if let Err(err) = run(&mut self.session, &args, out) {
                    writeln!(out, "{}: {}", keyword, err)?;
                }
            }
            Handler::Delegated(build) => {
                let invocation = build(&self.session, &args);
                match invocation.stdio {
                    StdioMode::Captured => {
                        match self.session.system.run_captured(&invocation) {
                            Ok(output) => {
                                out.write_all(&output)?;
                                writeln!(out)?;
                            }
                            Err(err) => writeln!(out, "Error executing command: {}", err)?,
                        }
                    }
                    StdioMode::Inherited => {
                        out.flush()?;
                        if let Err(err) = self.session.system.run_interactive(&invocation) {
                            writeln!(out, "{}: {}", keyword, err)?;
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// The interactive prompt loop: read a line, dispatch it, repeat until
    /// the exit sentinel or end of input. One command is in flight at a time;
    /// a dispatched command runs to completion before the next prompt.
    pub fn repl(&mut self) -> Result<()> {
        let mut rl = DefaultEditor::new()?;
        println!("Welcome to the CLI! Type 'exit' to quit.");
        loop {
            match rl.readline("> ") {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    if is_exit(&line) {
                        break;
                    }
                    self.dispatch(&line, &mut std::io::stdout())?;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => break,
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }
        Ok(())
    }
}

impl Default for Interpreter {
    /// An interpreter wired to the real file system and process spawner.
    fn default() -> Self {
        Self::new(Session::new(Box::new(OsSystem)))
    }
}

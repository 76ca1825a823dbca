//! An interactive shell front-end over the host's own utilities.
//!
//! The shell reads a line, resolves the first word against a fixed command
//! table, and either performs a thin native file-system call (`cd`, `mkdir`,
//! `cat`, ...) or forwards the remaining arguments verbatim to an external
//! program (`ls`, `grep`, `find`, ...). No utility semantics are
//! reimplemented here; the interesting part is the dispatch loop itself.
//!
//! The main entry point is [`Interpreter`], which owns the command table and
//! a [`env::Session`] holding the per-session state. The [`command`] module
//! exposes the seams — the handler kinds and the [`command::System`]
//! capability — that let handlers be exercised without touching the real
//! machine.

mod builtin;
pub mod command;
pub mod env;
mod external;
mod interpreter;
mod platform;

/// Just a convenient re-export of the interactive command runner.
///
/// See [`Interpreter`] for the high-level API.
pub use interpreter::Interpreter;

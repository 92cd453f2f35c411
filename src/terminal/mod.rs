//! Line-oriented terminal command table: parse -> lookup -> execute ->
//! record, with input recall. The TUI bottom pane and the `exec` CLI
//! subcommand both drive this module.

mod session;
mod table;

pub use session::{TerminalRecord, TerminalSession};
pub use table::{
    CommandResult, CommandSpec, TerminalCommand, TerminalHandler, TerminalTable, UnknownCommand,
    parse,
};

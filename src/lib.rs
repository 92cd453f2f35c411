pub mod catalog;
pub mod config;
pub mod palette;
pub mod providers;
pub mod terminal;
pub mod tui_shell;

//! CLI command implementations for process-finder.
//!
//! This module provides implementations for all CLI subcommands:
//! - `list`: Process enumeration
//! - `pid`: Package identifier to PID lookup
//! - `check`: System validation
//! - `config`: Configuration file generation

pub mod check;
pub mod config;
pub mod list;
pub mod pid;

// Re-export command functions
pub use check::command_check;
pub use config::command_config;
pub use list::command_list;
pub use pid::command_pid;

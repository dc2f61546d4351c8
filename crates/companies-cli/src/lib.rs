//! Terminal frontend for the companies directory.
//!
//! This crate provides the line-oriented presentation layer:
//! - Command parsing and dispatch onto the coordinator
//! - Text rendering of view snapshots
//! - The read-eval-print loop

pub mod commands;
pub mod render;
pub mod repl;

pub use commands::{apply_command, parse_command, Command, CommandError, Outcome};
pub use render::{render_options, render_snapshot, CARD_WIDTH};
pub use repl::run_repl;

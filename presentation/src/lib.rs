//! Presentation layer for jobshift
//!
//! This crate contains CLI definitions, the report formatter, progress
//! reporters and the interactive prompt.

pub mod cli;
pub mod output;
pub mod progress;
pub mod repl;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use repl::JobRepl;

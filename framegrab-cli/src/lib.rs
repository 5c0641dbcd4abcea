// framegrab-cli/src/lib.rs
//
// Library portion of the framegrab CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;

// Re-export items needed by the binary or integration tests
pub use cli::Cli;
pub use commands::extract::{run_extract, run_extract_with};

//! Command implementations for the CLI.

/// Extracts a single frame and reports the outcome.
pub mod extract;

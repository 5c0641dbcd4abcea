// framegrab-cli/src/main.rs
//
// Entry point for the framegrab command-line tool.
//
// Responsibilities:
// - Parsing user-provided arguments.
// - Setting up logging.
// - Running the extraction via framegrab-core.
// - Reporting errors and managing the process exit code.

use clap::Parser;
use owo_colors::{OwoColorize, Stream};
use std::process;

use framegrab_cli::error::exit_code_for;
use framegrab_cli::{Cli, logging, run_extract};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run_extract(&cli) {
        eprintln!(
            "{} {}",
            "Error:".if_supports_color(Stream::Stderr, |text| text.bright_red()),
            e
        );
        process::exit(exit_code_for(&e));
    }
}

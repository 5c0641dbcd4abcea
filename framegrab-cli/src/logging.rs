// ============================================================================
// framegrab-cli/src/logging.rs
// ============================================================================
//
// LOGGING SETUP: env_logger backend for the `log` facade
//
// Diagnostics go to stderr through env_logger; user-facing notices are
// printed to stdout by the command itself.
// - default: warnings and errors only
// - --verbose: debug output, including every external command line
// - RUST_LOG overrides both (e.g. RUST_LOG=framegrab_core=trace)

use std::io::Write;

use env_logger::Env;
use log::Level;
use owo_colors::{OwoColorize, Stream, Style};

/// Filter used when RUST_LOG is not set.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

fn level_style(level: Level) -> Style {
    match level {
        Level::Error => Style::new().bright_red().bold(),
        Level::Warn => Style::new().yellow(),
        Level::Info => Style::new().green(),
        Level::Debug => Style::new().blue(),
        Level::Trace => Style::new().magenta(),
    }
}

/// Initializes the global logger. Later calls are ignored.
pub fn init(verbose: bool) {
    let result = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter(verbose)))
        .format(|buf, record| {
            let label = format!("{:<5}", record.level());
            let style = level_style(record.level());
            writeln!(
                buf,
                "{} {}",
                label.if_supports_color(Stream::Stderr, |text| text.style(style)),
                record.args()
            )
        })
        .try_init();

    if result.is_ok() {
        log::debug!("Logger initialized (verbose: {})", verbose);
    }
}

// ============================================================================
// framegrab-core/src/external/ffmpeg_executor.rs
// ============================================================================
//
// FFMPEG EXECUTOR: Single-frame extraction command
//
// Builds the ffmpeg command line that seeks to a timestamp and writes one
// frame as a JPEG, then runs it through a CommandRunner. A non-zero exit is
// surfaced as CommandFailed rather than ignored.

use std::path::Path;

use super::CommandRunner;
use crate::config::{ExtractConfig, OUTPUT_PIXEL_FORMAT};
use crate::error::CoreResult;
use crate::timestamp::SeekTimestamp;

/// Command line that extracts the frame at `timestamp` into `output_path`.
///
/// `-y` is only passed when `overwrite` is set; without it ffmpeg refuses to
/// replace an existing file on its own.
pub fn build_extract_args(
    config: &ExtractConfig,
    input_path: &Path,
    output_path: &Path,
    timestamp: &SeekTimestamp,
    overwrite: bool,
) -> Vec<String> {
    let mut args = vec![config.ffmpeg_program()];
    if overwrite {
        args.push("-y".to_string());
    }
    args.extend([
        "-i".to_string(),
        input_path.to_string_lossy().into_owned(),
        "-ss".to_string(),
        timestamp.to_string(),
        "-frames:v".to_string(),
        "1".to_string(),
        "-pix_fmt".to_string(),
        OUTPUT_PIXEL_FORMAT.to_string(),
        output_path.to_string_lossy().into_owned(),
    ]);
    args
}

/// Runs a prepared extraction command and checks its exit status.
pub fn run_extract<R: CommandRunner>(runner: &R, args: &[String]) -> CoreResult<()> {
    let program = args.first().map(String::as_str).unwrap_or("ffmpeg");
    runner.run(args)?.ensure_success(program)?;
    log::debug!("Frame extraction finished: {}", args.join(" "));
    Ok(())
}

//! Single-frame extraction.
//!
//! [`extract_frame`] ties the pieces together: resolve the output path,
//! honor the overwrite policy, probe the frame rate, convert the frame index
//! to a seek timestamp and run ffmpeg.

use std::path::{Path, PathBuf};

use crate::config::ExtractConfig;
use crate::error::CoreResult;
use crate::external::{CommandRunner, build_extract_args, probe, run_extract};
use crate::output_path::resolve_output_path;
use crate::timestamp::{FrameRate, SeekTimestamp};

/// Frame extracted when the caller does not choose one.
pub const DEFAULT_FRAME_INDEX: u64 = 1;

/// What to extract and where to put it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractRequest {
    pub video_path: PathBuf,
    /// Frame to extract, counted from 1. Frame 0 seeks to the start.
    pub frame_index: u64,
    /// Explicit output; derived from `video_path` when `None`.
    pub output_path: Option<PathBuf>,
    /// Replace an existing output file instead of skipping.
    pub overwrite: bool,
}

impl ExtractRequest {
    /// Request for frame 1 of `video_path` with overwriting enabled.
    pub fn new(video_path: impl Into<PathBuf>) -> Self {
        Self {
            video_path: video_path.into(),
            frame_index: DEFAULT_FRAME_INDEX,
            output_path: None,
            overwrite: true,
        }
    }

    pub fn frame(mut self, frame_index: u64) -> Self {
        self.frame_index = frame_index;
        self
    }

    pub fn output(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(output_path.into());
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }
}

/// Result of a call to [`extract_frame`].
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractOutcome {
    /// The frame was written.
    Extracted {
        output: PathBuf,
        timestamp: SeekTimestamp,
        frame_rate: FrameRate,
        /// An existing file at `output` was replaced.
        replaced_existing: bool,
    },
    /// The output already existed and overwriting was disabled. Nothing ran.
    Skipped { output: PathBuf },
}

impl ExtractOutcome {
    pub fn output(&self) -> &Path {
        match self {
            ExtractOutcome::Extracted { output, .. } | ExtractOutcome::Skipped { output } => output,
        }
    }
}

/// Probes `video_path` and returns the frame rate of its first video stream.
pub fn probe_frame_rate<R: CommandRunner>(
    runner: &R,
    config: &ExtractConfig,
    video_path: &Path,
) -> CoreResult<FrameRate> {
    let result = probe(runner, config, video_path)?;
    let rate = result.video_frame_rate(video_path)?;
    log::debug!(
        "Frame rate of {}: {} ({:.3} fps)",
        video_path.display(),
        rate,
        rate.as_f64()
    );
    Ok(rate)
}

/// Extracts one frame of `request.video_path` as a JPEG.
///
/// An invalid explicit output path fails before any process is started. If
/// the output exists and `request.overwrite` is false the call returns
/// [`ExtractOutcome::Skipped`] without probing or extracting.
pub fn extract_frame<R: CommandRunner>(
    runner: &R,
    config: &ExtractConfig,
    request: &ExtractRequest,
) -> CoreResult<ExtractOutcome> {
    let output = resolve_output_path(
        &request.video_path,
        request.output_path.as_deref(),
        config.output_naming,
    )?;

    let replaced_existing = output.exists();
    if replaced_existing {
        if !request.overwrite {
            log::warn!(
                "{} already exists and overwriting is disabled; skipping extraction",
                output.display()
            );
            return Ok(ExtractOutcome::Skipped { output });
        }
        log::warn!("{} already exists and will be overwritten", output.display());
    }

    let frame_rate = probe_frame_rate(runner, config, &request.video_path)?;
    let timestamp = SeekTimestamp::from_frame(request.frame_index, &frame_rate);
    log::info!(
        "Extracting frame {} of {} at {}",
        request.frame_index,
        request.video_path.display(),
        timestamp
    );

    let args = build_extract_args(
        config,
        &request.video_path,
        &output,
        &timestamp,
        request.overwrite,
    );
    run_extract(runner, &args)?;

    Ok(ExtractOutcome::Extracted {
        output,
        timestamp,
        frame_rate,
        replaced_existing,
    })
}

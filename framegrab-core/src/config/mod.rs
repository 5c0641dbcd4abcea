//! Configuration structures and constants for the framegrab-core library.
//!
//! Per-invocation inputs (which video, which frame) live in
//! [`ExtractRequest`](crate::ExtractRequest). This module holds the settings
//! that describe the environment: where the external tools live, how long
//! they may run, and how default output names are derived.

mod builder;

use std::path::PathBuf;
use std::time::Duration;

use crate::output_path::OutputNaming;

pub use builder::ExtractConfigBuilder;

// Default constants

/// Program used to inspect the input when no override is configured.
pub const DEFAULT_FFPROBE: &str = "ffprobe";

/// Program used to extract the frame when no override is configured.
pub const DEFAULT_FFMPEG: &str = "ffmpeg";

/// Upper bound on the runtime of each external invocation.
pub const DEFAULT_COMMAND_TIMEOUT_SECS: u64 = 300;

/// Appended to the input stem when no output path is supplied.
pub const EXTRACTED_FRAME_SUFFIX: &str = "_extractedFrame.jpg";

/// Required suffix of an explicit output path.
pub const OUTPUT_EXTENSION: &str = ".jpg";

/// Full-range 4:2:0 format accepted by the mjpeg encoder.
pub const OUTPUT_PIXEL_FORMAT: &str = "yuvj420p";

/// Environment-level settings for frame extraction.
///
/// # Examples
///
/// ```rust
/// use framegrab_core::config::ExtractConfigBuilder;
/// use std::time::Duration;
///
/// let config = ExtractConfigBuilder::new()
///     .ffmpeg_path("/opt/ffmpeg/bin/ffmpeg")
///     .command_timeout(Some(Duration::from_secs(30)))
///     .build();
/// assert_eq!(config.ffprobe_path.to_str(), Some("ffprobe"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Program invoked for probing (looked up on PATH when bare)
    pub ffprobe_path: PathBuf,

    /// Program invoked for extraction (looked up on PATH when bare)
    pub ffmpeg_path: PathBuf,

    /// Per-invocation timeout; `None` waits indefinitely
    pub command_timeout: Option<Duration>,

    /// How a default output name is derived from the input file name
    pub output_naming: OutputNaming,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            ffprobe_path: PathBuf::from(DEFAULT_FFPROBE),
            ffmpeg_path: PathBuf::from(DEFAULT_FFMPEG),
            command_timeout: Some(Duration::from_secs(DEFAULT_COMMAND_TIMEOUT_SECS)),
            output_naming: OutputNaming::default(),
        }
    }
}

impl ExtractConfig {
    /// Display name of the probe program, used in argv and error messages.
    pub fn ffprobe_program(&self) -> String {
        self.ffprobe_path.to_string_lossy().into_owned()
    }

    /// Display name of the extraction program, used in argv and error messages.
    pub fn ffmpeg_program(&self) -> String {
        self.ffmpeg_path.to_string_lossy().into_owned()
    }
}

//! ffprobe integration: probe invocation and typed result
//!
//! The probe asks ffprobe for its JSON description of the container and all
//! streams, then deserializes the parts we use into [`ProbeResult`]. Keys we
//! do not model are ignored; a document without a `streams` array is
//! rejected as malformed.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use super::CommandRunner;
use crate::config::ExtractConfig;
use crate::error::{CoreError, CoreResult};
use crate::timestamp::FrameRate;

/// Stream kind as reported in ffprobe's `codec_type`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum CodecType {
    Video,
    Audio,
    Subtitle,
    Data,
    Attachment,
    Other(String),
}

impl Default for CodecType {
    fn default() -> Self {
        CodecType::Other(String::new())
    }
}

impl From<String> for CodecType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "video" => CodecType::Video,
            "audio" => CodecType::Audio,
            "subtitle" => CodecType::Subtitle,
            "data" => CodecType::Data,
            "attachment" => CodecType::Attachment,
            _ => CodecType::Other(value),
        }
    }
}

impl fmt::Display for CodecType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CodecType::Video => "video",
            CodecType::Audio => "audio",
            CodecType::Subtitle => "subtitle",
            CodecType::Data => "data",
            CodecType::Attachment => "attachment",
            CodecType::Other(other) => other.as_str(),
        };
        f.write_str(name)
    }
}

/// One entry of ffprobe's `streams` array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StreamInfo {
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub codec_type: CodecType,
    pub codec_name: Option<String>,
    /// Real base frame rate as `num/den`; present on video streams.
    pub r_frame_rate: Option<String>,
    pub avg_frame_rate: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// The `format` section (container level).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FormatInfo {
    pub filename: Option<String>,
    pub format_name: Option<String>,
    pub duration: Option<String>,
}

/// Parsed ffprobe output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProbeResult {
    pub streams: Vec<StreamInfo>,
    #[serde(default)]
    pub format: Option<FormatInfo>,
}

impl ProbeResult {
    /// Deserializes ffprobe's JSON output.
    pub fn from_json(bytes: &[u8]) -> CoreResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// The first stream whose `codec_type` is `video`, in stream order.
    pub fn first_video_stream(&self) -> Option<&StreamInfo> {
        self.streams
            .iter()
            .find(|s| s.codec_type == CodecType::Video)
    }

    /// Frame rate of the first video stream of `input_path`.
    pub fn video_frame_rate(&self, input_path: &Path) -> CoreResult<FrameRate> {
        let stream = self
            .first_video_stream()
            .ok_or_else(|| CoreError::NoVideoStream(input_path.to_path_buf()))?;
        let rate = stream.r_frame_rate.as_deref().ok_or_else(|| {
            CoreError::FrameRateParse(format!(
                "video stream {} of {} has no r_frame_rate",
                stream.index,
                input_path.display()
            ))
        })?;
        FrameRate::parse(rate)
    }
}

/// Command line for probing `input_path`.
pub fn build_probe_args(config: &ExtractConfig, input_path: &Path) -> Vec<String> {
    vec![
        config.ffprobe_program(),
        "-i".to_string(),
        input_path.to_string_lossy().into_owned(),
        "-v".to_string(),
        "quiet".to_string(),
        "-print_format".to_string(),
        "json".to_string(),
        "-show_format".to_string(),
        "-show_streams".to_string(),
    ]
}

/// Runs ffprobe on `input_path` and parses its output.
pub fn probe<R: CommandRunner>(
    runner: &R,
    config: &ExtractConfig,
    input_path: &Path,
) -> CoreResult<ProbeResult> {
    log::debug!("Probing {}", input_path.display());
    let program = config.ffprobe_program();
    let output = runner
        .run(&build_probe_args(config, input_path))?
        .ensure_success(&program)?;

    let result = ProbeResult::from_json(&output.stdout).inspect_err(|e| {
        log::error!("ffprobe output for {} is not valid: {}", input_path.display(), e);
    })?;
    log::debug!(
        "ffprobe found {} stream(s) in {}: [{}]",
        result.streams.len(),
        input_path.display(),
        result
            .streams
            .iter()
            .map(|s| s.codec_type.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );
    Ok(result)
}

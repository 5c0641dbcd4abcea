// framegrab-cli/src/cli.rs
//
// Defines the command-line argument structure using clap.

use clap::Parser;
use std::path::PathBuf;

use framegrab_core::config::{DEFAULT_COMMAND_TIMEOUT_SECS, DEFAULT_FFMPEG, DEFAULT_FFPROBE};
use framegrab_core::{DEFAULT_FRAME_INDEX, ExtractConfig, ExtractConfigBuilder, ExtractRequest, OutputNaming};

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Framegrab: extract a single video frame as a JPEG",
    long_about = "Uses ffprobe to read the frame rate of the first video stream and ffmpeg \
                  to write the requested frame as a JPEG image."
)]
pub struct Cli {
    /// Input video file
    #[arg(short = 'i', long = "input", required = true, value_name = "INPUT_PATH")]
    pub input: PathBuf,

    /// Output image path, must end in .jpg (defaults to <input>_extractedFrame.jpg next to the input)
    #[arg(short = 'o', long = "output", value_name = "OUTPUT_JPG")]
    pub output: Option<PathBuf>,

    /// Frame to extract, counted from 1
    #[arg(short = 'f', long = "frame", default_value_t = DEFAULT_FRAME_INDEX, value_name = "FRAME")]
    pub frame: u64,

    /// Overwrite an existing file at the output path
    #[arg(long, default_value_t = false)]
    pub overwrite: bool,

    /// Strip only the last extension when deriving the default output name
    /// (clip.v2.mov -> clip.v2_extractedFrame.jpg instead of clip_extractedFrame.jpg)
    #[arg(long, default_value_t = false)]
    pub keep_inner_dots: bool,

    // --- External Tools ---
    /// ffprobe executable to use
    #[arg(long, value_name = "PATH", env = "FRAMEGRAB_FFPROBE", default_value = DEFAULT_FFPROBE)]
    pub ffprobe: PathBuf,

    /// ffmpeg executable to use
    #[arg(long, value_name = "PATH", env = "FRAMEGRAB_FFMPEG", default_value = DEFAULT_FFMPEG)]
    pub ffmpeg: PathBuf,

    /// Seconds each external tool may run before it is killed (0 disables the limit)
    #[arg(long, value_name = "SECS", env = "FRAMEGRAB_TIMEOUT", default_value_t = DEFAULT_COMMAND_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Enable detailed logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn output_naming(&self) -> OutputNaming {
        if self.keep_inner_dots {
            OutputNaming::LastDot
        } else {
            OutputNaming::FirstDot
        }
    }

    pub fn to_config(&self) -> ExtractConfig {
        ExtractConfigBuilder::new()
            .ffprobe_path(&self.ffprobe)
            .ffmpeg_path(&self.ffmpeg)
            .command_timeout_secs(self.timeout)
            .output_naming(self.output_naming())
            .build()
    }

    pub fn to_request(&self) -> ExtractRequest {
        let request = ExtractRequest::new(&self.input)
            .frame(self.frame)
            .overwrite(self.overwrite);
        match &self.output {
            Some(output) => request.output(output),
            None => request,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_parse_minimal_args() {
        let cli = Cli::try_parse_from(["framegrab", "-i", "clip.mov"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("clip.mov"));
        assert!(cli.output.is_none());
        assert_eq!(cli.frame, 1);
        assert!(!cli.overwrite);
        assert!(!cli.keep_inner_dots);
        assert!(!cli.verbose);

        let request = cli.to_request();
        assert_eq!(request.frame_index, 1);
        assert_eq!(request.output_path, None);
        assert!(!request.overwrite, "CLI overwrite is opt-in");
    }

    #[test]
    fn test_parse_all_short_flags() {
        let cli = Cli::try_parse_from([
            "framegrab", "-i", "in.mov", "-o", "out.jpg", "-f", "240", "--overwrite", "-v",
        ])
        .unwrap();
        assert_eq!(cli.output, Some(PathBuf::from("out.jpg")));
        assert_eq!(cli.frame, 240);
        assert!(cli.overwrite);
        assert!(cli.verbose);

        let request = cli.to_request();
        assert_eq!(request.output_path, Some(PathBuf::from("out.jpg")));
        assert!(request.overwrite);
    }

    #[test]
    fn test_parse_long_flags_and_config() {
        let cli = Cli::try_parse_from([
            "framegrab",
            "--input",
            "in.mov",
            "--frame",
            "3",
            "--keep-inner-dots",
            "--ffprobe",
            "/opt/ffprobe",
            "--ffmpeg",
            "/opt/ffmpeg",
            "--timeout",
            "0",
        ])
        .unwrap();
        let config = cli.to_config();
        assert_eq!(config.ffprobe_program(), "/opt/ffprobe");
        assert_eq!(config.ffmpeg_program(), "/opt/ffmpeg");
        assert_eq!(config.command_timeout, None);
        assert_eq!(config.output_naming, OutputNaming::LastDot);
    }

    #[test]
    fn test_default_timeout() {
        let cli = Cli::try_parse_from(["framegrab", "-i", "in.mov"]).unwrap();
        assert_eq!(
            cli.to_config().command_timeout,
            Some(Duration::from_secs(DEFAULT_COMMAND_TIMEOUT_SECS))
        );
    }

    #[test]
    fn test_input_is_required_and_frame_is_numeric() {
        assert!(Cli::try_parse_from(["framegrab"]).is_err());
        assert!(Cli::try_parse_from(["framegrab", "-i", "a.mov", "-f", "-3"]).is_err());
        assert!(Cli::try_parse_from(["framegrab", "-i", "a.mov", "-f", "ten"]).is_err());
    }

    #[test]
    fn test_self_test_flags_are_gone() {
        for flag in ["--dev", "--debug", "--doctest"] {
            assert!(Cli::try_parse_from(["framegrab", "-i", "a.mov", flag]).is_err());
        }
    }
}

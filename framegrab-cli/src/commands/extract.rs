//! Implementation of the frame extraction command.
//!
//! Builds the core configuration from CLI arguments, runs the extraction
//! and prints the user-facing notices to stdout. The input path is handed
//! to ffprobe untouched so URLs and `pipe:` inputs keep working.

use crate::cli::Cli;
use crate::error::CliResult;

use framegrab_core::{
    CommandRunner, ExtractConfig, ExtractOutcome, ExtractRequest, SystemCommandRunner,
    extract_frame, resolve_output_path,
};

use log::debug;

/// Runs the extraction with real ffprobe/ffmpeg processes.
pub fn run_extract(args: &Cli) -> CliResult<ExtractOutcome> {
    let config = args.to_config();
    let runner = SystemCommandRunner::new(config.command_timeout);
    run_extract_with(&runner, args)
}

/// Runs the extraction through `runner` and prints the outcome.
pub fn run_extract_with<R: CommandRunner>(runner: &R, args: &Cli) -> CliResult<ExtractOutcome> {
    let config = args.to_config();
    let request = args.to_request();
    debug!("Extraction config: {:?}", config);
    debug!("Extraction request: {:?}", request);

    if let Some(notice) = overwrite_notice(&config, &request) {
        println!("{notice}");
    }

    let outcome = extract_frame(runner, &config, &request)?;
    println!("{}", describe_outcome(&outcome, request.frame_index));
    Ok(outcome)
}

/// Notice printed before extraction when an existing output is about to be
/// replaced. Path errors are left for [`extract_frame`] to report.
pub fn overwrite_notice(config: &ExtractConfig, request: &ExtractRequest) -> Option<String> {
    if !request.overwrite {
        return None;
    }
    let output = resolve_output_path(
        &request.video_path,
        request.output_path.as_deref(),
        config.output_naming,
    )
    .ok()?;
    output.exists().then(|| {
        format!(
            "A file named {} already exists and will be overwritten.",
            output.display()
        )
    })
}

/// Human-readable notice for an extraction outcome.
pub fn describe_outcome(outcome: &ExtractOutcome, frame_index: u64) -> String {
    match outcome {
        ExtractOutcome::Skipped { output } => format!(
            "A file named {} already exists and will not be overwritten. \
             Please provide a different output path or use the '--overwrite' flag.",
            output.display()
        ),
        ExtractOutcome::Extracted {
            output, timestamp, ..
        } => format!(
            "Extracted frame {} ({}) to {}",
            frame_index,
            timestamp,
            output.display()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use framegrab_core::external::mocks::{EXTRACT_PATTERN, FakeCommandRunner, PROBE_PATTERN};
    use framegrab_core::{CoreError, FrameRate, SeekTimestamp};
    use std::path::PathBuf;
    use tempfile::tempdir;

    const PROBE_25FPS: &str =
        r#"{"streams": [{"index": 0, "codec_type": "video", "r_frame_rate": "25/1"}]}"#;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["framegrab"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn test_missing_input_with_non_jpg_output_is_invalid_argument() {
        let runner = FakeCommandRunner::new();
        let cli = parse(&["-i", "/nope/clip.mov", "-o", "/tmp/out.png"]);
        let err = run_extract_with(&runner, &cli).unwrap_err();
        assert!(matches!(err, CoreError::InvalidArgument(_)), "got {err:?}");
        assert!(runner.get_received_calls().is_empty());
    }

    #[test]
    fn test_url_input_is_handed_to_the_tools() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        let output = tmp.path().join("remote.jpg");
        let output_arg = output.to_string_lossy().into_owned();

        let runner = FakeCommandRunner::new();
        runner.expect_probe(PROBE_25FPS);
        runner.expect_extract();

        let cli = parse(&["-i", "http://example.com/clip.mp4", "-o", output_arg.as_str()]);
        let outcome = run_extract_with(&runner, &cli)?;

        assert_eq!(outcome.output(), output.as_path());
        for pattern in [PROBE_PATTERN, EXTRACT_PATTERN] {
            let calls = runner.calls_matching(pattern);
            assert_eq!(calls.len(), 1);
            assert!(calls[0].iter().any(|a| a == "http://example.com/clip.mp4"));
        }
        Ok(())
    }

    #[test]
    fn test_existing_output_with_missing_input_is_skipped() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        let output = tmp.path().join("keep.jpg");
        std::fs::write(&output, "keep")?;
        let output_arg = output.to_string_lossy().into_owned();

        let runner = FakeCommandRunner::new();
        let cli = parse(&["-i", "/nope/clip.mov", "-o", output_arg.as_str()]);
        let outcome = run_extract_with(&runner, &cli)?;

        assert!(matches!(outcome, ExtractOutcome::Skipped { .. }));
        assert!(runner.get_received_calls().is_empty());
        assert_eq!(std::fs::read_to_string(&output)?, "keep");
        Ok(())
    }

    #[test]
    fn test_overwrite_notice_only_for_existing_output_with_overwrite() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        let input = tmp.path().join("clip.mov");
        let existing = tmp.path().join("clip_extractedFrame.jpg");
        std::fs::write(&existing, "old")?;
        let input_arg = input.to_string_lossy().into_owned();

        let replacing = parse(&["-i", input_arg.as_str(), "--overwrite"]);
        let notice = overwrite_notice(&replacing.to_config(), &replacing.to_request());
        assert_eq!(
            notice,
            Some(format!(
                "A file named {} already exists and will be overwritten.",
                existing.display()
            ))
        );

        let keeping = parse(&["-i", input_arg.as_str()]);
        assert_eq!(overwrite_notice(&keeping.to_config(), &keeping.to_request()), None);

        std::fs::remove_file(&existing)?;
        assert_eq!(overwrite_notice(&replacing.to_config(), &replacing.to_request()), None);

        let bad = parse(&["-i", input_arg.as_str(), "-o", "out.png", "--overwrite"]);
        assert_eq!(overwrite_notice(&bad.to_config(), &bad.to_request()), None);
        Ok(())
    }

    #[test]
    fn test_cli_passes_frame_and_overwrite_through() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        let input = tmp.path().join("clip.mov");
        std::fs::write(&input, "not really a video")?;
        let input_arg = input.to_string_lossy().into_owned();

        let runner = FakeCommandRunner::new();
        runner.expect_probe(PROBE_25FPS);
        runner.expect_extract();

        let cli = parse(&["-i", input_arg.as_str(), "-f", "50"]);
        let outcome = run_extract_with(&runner, &cli)?;

        assert_eq!(outcome.output(), tmp.path().join("clip_extractedFrame.jpg").as_path());
        let calls = runner.calls_matching(EXTRACT_PATTERN);
        assert_eq!(calls.len(), 1);
        assert!(!calls[0].iter().any(|a| a == "-y"), "no --overwrite given");
        assert!(calls[0].iter().any(|a| a == "00:00:02.00"));
        Ok(())
    }

    #[test]
    fn test_existing_output_is_left_alone_without_overwrite() -> Result<(), Box<dyn std::error::Error>> {
        let tmp = tempdir()?;
        let input = tmp.path().join("clip.mov");
        std::fs::write(&input, "video")?;
        std::fs::write(tmp.path().join("clip_extractedFrame.jpg"), "keep")?;
        let input_arg = input.to_string_lossy().into_owned();

        let runner = FakeCommandRunner::new();
        let outcome = run_extract_with(&runner, &parse(&["-i", input_arg.as_str()]))?;

        assert!(matches!(outcome, ExtractOutcome::Skipped { .. }));
        assert!(runner.get_received_calls().is_empty());
        Ok(())
    }

    #[test]
    fn test_describe_outcomes() {
        let output = PathBuf::from("/v/clip_extractedFrame.jpg");
        let skipped = describe_outcome(
            &ExtractOutcome::Skipped {
                output: output.clone(),
            },
            1,
        );
        assert!(skipped.contains("will not be overwritten"));
        assert!(skipped.contains("--overwrite"));

        let rate = FrameRate::parse("24/1").unwrap();
        let extracted = ExtractOutcome::Extracted {
            output: output.clone(),
            timestamp: SeekTimestamp::from_frame(240, &rate),
            frame_rate: rate,
            replaced_existing: false,
        };
        assert_eq!(
            describe_outcome(&extracted, 240),
            "Extracted frame 240 (00:00:10.00) to /v/clip_extractedFrame.jpg"
        );

        let replaced = ExtractOutcome::Extracted {
            output,
            timestamp: SeekTimestamp::from_frame(1, &rate),
            frame_rate: rate,
            replaced_existing: true,
        };
        assert_eq!(
            describe_outcome(&replaced, 1),
            "Extracted frame 1 (00:00:00.04) to /v/clip_extractedFrame.jpg"
        );
    }
}

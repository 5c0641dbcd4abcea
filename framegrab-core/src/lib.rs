//! Extracts a single frame from a video file as a JPEG image.
//!
//! ffprobe supplies the frame rate of the first video stream, the requested
//! frame index is converted to a seek timestamp, and ffmpeg writes the frame.
//! All process access goes through [`CommandRunner`], so callers can swap in
//! their own runner (tests use `external::mocks::FakeCommandRunner`).
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use framegrab_core::{ExtractConfig, ExtractOutcome, ExtractRequest, SystemCommandRunner, extract_frame};
//!
//! let config = ExtractConfig::default();
//! let runner = SystemCommandRunner::new(config.command_timeout);
//! let request = ExtractRequest::new("/videos/clip.mov").frame(240).overwrite(false);
//!
//! match extract_frame(&runner, &config, &request).unwrap() {
//!     ExtractOutcome::Extracted { output, timestamp, .. } => {
//!         println!("wrote {} at {}", output.display(), timestamp)
//!     }
//!     ExtractOutcome::Skipped { output } => println!("kept {}", output.display()),
//! }
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod external;
pub mod output_path;
pub mod timestamp;

// Re-exports for public API
pub use config::{ExtractConfig, ExtractConfigBuilder};
pub use error::{CoreError, CoreResult};
pub use extract::{DEFAULT_FRAME_INDEX, ExtractOutcome, ExtractRequest, extract_frame, probe_frame_rate};
pub use external::{CommandOutput, CommandRunner, ProbeResult, SystemCommandRunner, probe};
pub use output_path::{OutputNaming, default_output_path, resolve_output_path};
pub use timestamp::{FrameRate, SeekTimestamp};

// ============================================================================
// framegrab-core/src/external/mod.rs
// ============================================================================
//
// EXTERNAL TOOLS: Process boundary to ffprobe and ffmpeg
//
// Everything that leaves the process goes through the `CommandRunner` trait.
// Production code uses `SystemCommandRunner`; tests substitute
// `mocks::FakeCommandRunner` so no media binaries are needed.
//
// KEY COMPONENTS:
// - CommandRunner / CommandOutput: the process capability
// - SystemCommandRunner: std::process implementation with a deadline
// - ffprobe_executor: probe invocation and typed JSON result
// - ffmpeg_executor: extraction argv and invocation

use crate::error::{CoreError, CoreResult};

use std::process::ExitStatus;

pub mod ffmpeg_executor;
pub mod ffprobe_executor;
pub mod runner;

#[cfg(any(test, feature = "test-mocks"))]
pub mod mocks;

pub use ffmpeg_executor::{build_extract_args, run_extract};
pub use ffprobe_executor::{CodecType, FormatInfo, ProbeResult, StreamInfo, probe};
pub use runner::SystemCommandRunner;

// ============================================================================
// PROCESS CAPABILITY
// ============================================================================

/// Captured result of a finished external process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl CommandOutput {
    pub fn from_parts(status: ExitStatus, stdout: Vec<u8>, stderr: Vec<u8>) -> Self {
        Self {
            stdout,
            stderr,
            exit_code: status.code(),
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).trim().to_string()
    }

    /// Turns a non-zero exit into [`CoreError::CommandFailed`](crate::CoreError::CommandFailed).
    pub fn ensure_success(self, cmd: &str) -> CoreResult<Self> {
        if self.success() {
            return Ok(self);
        }
        let stderr = self.stderr_lossy();
        log::error!(
            "{} failed with exit code {:?}: {}",
            cmd,
            self.exit_code,
            stderr
        );
        Err(CoreError::CommandFailed {
            cmd: cmd.to_string(),
            status: self.exit_code,
            stderr,
        })
    }
}

/// Runs an external program given as a full argv (program first).
///
/// Implementations return `Ok` for any process that ran to completion,
/// whatever its exit code, and `Err` when it could not be started, waited
/// on, or exceeded its deadline.
pub trait CommandRunner {
    fn run(&self, argv: &[String]) -> CoreResult<CommandOutput>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, argv: &[String]) -> CoreResult<CommandOutput> {
        (**self).run(argv)
    }
}

/// Logs a command line at debug level.
pub fn log_command(argv: &[String]) {
    log::debug!("Executing command: {}", argv.join(" "));
}

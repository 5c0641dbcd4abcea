// ============================================================================
// framegrab-core/src/error.rs
// ============================================================================
//
// ERROR TYPES: Failure modes of probing and extraction
//
// Every fallible operation in the library returns `CoreResult`. The variants
// fall into four families: invalid arguments, lookup failures in the probe
// result, process failures of the external tools, and parse failures of
// their output.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Errors produced by framegrab-core.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("No video stream found in {}", .0.display())]
    NoVideoStream(PathBuf),

    #[error("Required tool '{0}' was not found")]
    DependencyNotFound(String),

    #[error("Failed to start {cmd}: {source}")]
    CommandStart {
        cmd: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed while waiting for {cmd}: {source}")]
    CommandWait {
        cmd: String,
        #[source]
        source: io::Error,
    },

    #[error("{cmd} exited with {}: {stderr}", describe_status(.status))]
    CommandFailed {
        cmd: String,
        status: Option<i32>,
        stderr: String,
    },

    #[error("{cmd} timed out after {}s", .timeout.as_secs_f64())]
    CommandTimeout { cmd: String, timeout: Duration },

    #[error("Failed to parse ffprobe output: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid frame rate: {0}")]
    FrameRateParse(String),
}

impl CoreError {
    /// True for every failure that originates from running an external tool.
    pub fn is_process_failure(&self) -> bool {
        matches!(
            self,
            CoreError::DependencyNotFound(_)
                | CoreError::CommandStart { .. }
                | CoreError::CommandWait { .. }
                | CoreError::CommandFailed { .. }
                | CoreError::CommandTimeout { .. }
        )
    }

    /// True when the probe output could not be understood.
    pub fn is_parse_failure(&self) -> bool {
        matches!(self, CoreError::JsonParse(_) | CoreError::FrameRateParse(_))
    }
}

fn describe_status(status: &Option<i32>) -> String {
    match *status {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

/// Result type for framegrab-core operations.
pub type CoreResult<T> = Result<T, CoreError>;

pub fn command_start_error(cmd: impl Into<String>, source: io::Error) -> CoreError {
    let cmd = cmd.into();
    if source.kind() == io::ErrorKind::NotFound {
        CoreError::DependencyNotFound(cmd)
    } else {
        CoreError::CommandStart { cmd, source }
    }
}

pub fn command_wait_error(cmd: impl Into<String>, source: io::Error) -> CoreError {
    CoreError::CommandWait {
        cmd: cmd.into(),
        source,
    }
}

// ============================================================================
// framegrab-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Result alias and exit codes
//
// The CLI reuses framegrab-core's error type and adds only the mapping from
// an error to the process exit status. The variants already carry the
// command line, exit status and stderr, so messages are printed as-is.

use framegrab_core::{CoreError, CoreResult};

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

/// Exit status for bad user input (matches clap's usage-error code).
pub const EXIT_USAGE: i32 = 2;

/// Exit status for every other failure.
pub const EXIT_FAILURE: i32 = 1;

/// Maps an error to the exit status of the process.
pub fn exit_code_for(error: &CoreError) -> i32 {
    match error {
        CoreError::InvalidArgument(_) => EXIT_USAGE,
        _ => EXIT_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn usage_errors_exit_with_two() {
        assert_eq!(exit_code_for(&CoreError::InvalidArgument("x".into())), 2);
    }

    #[test]
    fn runtime_errors_exit_with_one() {
        assert_eq!(exit_code_for(&CoreError::NoVideoStream(PathBuf::from("a"))), 1);
        assert_eq!(exit_code_for(&CoreError::DependencyNotFound("ffmpeg".into())), 1);
    }

    #[test]
    fn failure_messages_carry_their_own_context() {
        let err = CoreError::CommandFailed {
            cmd: "ffmpeg".into(),
            status: Some(1),
            stderr: "seek beyond end of file".into(),
        };
        let message = err.to_string();
        assert!(message.contains("ffmpeg"), "{message}");
        assert!(message.contains("exit code 1"), "{message}");
        assert!(message.contains("seek beyond end of file"), "{message}");
        assert_eq!(exit_code_for(&err), EXIT_FAILURE);
    }
}

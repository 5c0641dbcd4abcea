// ============================================================================
// framegrab-core/src/external/runner.rs
// ============================================================================
//
// SYSTEM RUNNER: std::process implementation of CommandRunner
//
// The child's stdout and stderr are drained on reader threads so a chatty
// process cannot block on a full pipe while we poll for its exit. When a
// timeout is configured the child is killed once the deadline passes.

use std::io::Read;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use super::{CommandOutput, CommandRunner, log_command};
use crate::error::{CoreError, CoreResult, command_start_error, command_wait_error};

/// How often a running child is checked against its deadline.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Runs commands as real child processes.
#[derive(Debug, Clone, Default)]
pub struct SystemCommandRunner {
    timeout: Option<Duration>,
}

impl SystemCommandRunner {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    fn wait_with_deadline(
        &self,
        cmd: &str,
        child: &mut Child,
        timeout: Duration,
    ) -> CoreResult<ExitStatus> {
        let start = Instant::now();
        loop {
            match child.try_wait() {
                Ok(Some(status)) => return Ok(status),
                Ok(None) if start.elapsed() >= timeout => {
                    log::error!("{} exceeded timeout of {:?}, killing it", cmd, timeout);
                    if let Err(e) = child.kill() {
                        log::warn!("Failed to kill {}: {}", cmd, e);
                    }
                    // Reap the child so it does not linger as a zombie.
                    let _ = child.wait();
                    return Err(CoreError::CommandTimeout {
                        cmd: cmd.to_string(),
                        timeout,
                    });
                }
                Ok(None) => thread::sleep(POLL_INTERVAL),
                Err(e) => return Err(command_wait_error(cmd, e)),
            }
        }
    }
}

fn drain<R: Read + Send + 'static>(pipe: Option<R>) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        if let Some(mut pipe) = pipe {
            if let Err(e) = pipe.read_to_end(&mut buf) {
                log::debug!("Error reading child output: {}", e);
            }
        }
        buf
    })
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, argv: &[String]) -> CoreResult<CommandOutput> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| CoreError::InvalidArgument("empty command line".to_string()))?;
        log_command(argv);

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| command_start_error(program.as_str(), e))?;

        let stdout_handle = drain(child.stdout.take());
        let stderr_handle = drain(child.stderr.take());

        let status = match self.timeout {
            Some(timeout) => self.wait_with_deadline(program, &mut child, timeout)?,
            None => child.wait().map_err(|e| command_wait_error(program.as_str(), e))?,
        };

        let stdout = stdout_handle.join().unwrap_or_default();
        let stderr = stderr_handle.join().unwrap_or_default();
        log::debug!(
            "{} finished with {} ({} bytes stdout, {} bytes stderr)",
            program,
            status,
            stdout.len(),
            stderr.len()
        );

        Ok(CommandOutput::from_parts(status, stdout, stderr))
    }
}

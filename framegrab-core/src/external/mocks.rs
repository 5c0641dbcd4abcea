// framegrab-core/src/external/mocks.rs

// --- Fake process runner (for testing) ---

// Compiled for unit tests and when the "test-mocks" feature is enabled.

use super::{CommandOutput, CommandRunner};
use crate::error::{CoreError, CoreResult};
use std::cell::RefCell;
use std::rc::Rc;

/// Argument that identifies a probe invocation.
pub const PROBE_PATTERN: &str = "-show_streams";

/// Argument that identifies an extraction invocation.
pub const EXTRACT_PATTERN: &str = "-frames:v";

/// Represents an expected command call and its canned result.
pub struct FakeExpectation {
    pub arg_pattern: String,
    pub result: CoreResult<CommandOutput>,
    /// Create the last argv entry as an empty file before returning.
    pub create_output_file: bool,
}

/// `CommandRunner` that replays queued results and records every call.
///
/// Expectations are matched in insertion order by the first one whose
/// pattern equals one of the call's arguments; each is consumed once.
#[derive(Clone, Default)]
pub struct FakeCommandRunner {
    expectations: Rc<RefCell<Vec<FakeExpectation>>>,
    received_calls: Rc<RefCell<Vec<Vec<String>>>>,
}

impl FakeCommandRunner {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn add_expectation(
        &self,
        arg_pattern: &str,
        result: CoreResult<CommandOutput>,
        create_output_file: bool,
    ) {
        self.expectations.borrow_mut().push(FakeExpectation {
            arg_pattern: arg_pattern.to_string(),
            result,
            create_output_file,
        });
    }

    pub fn add_success_expectation(
        &self,
        arg_pattern: &str,
        stdout: impl Into<Vec<u8>>,
        create_output_file: bool,
    ) {
        let output = CommandOutput {
            stdout: stdout.into(),
            stderr: Vec::new(),
            exit_code: Some(0),
        };
        self.add_expectation(arg_pattern, Ok(output), create_output_file);
    }

    pub fn add_exit_error_expectation(&self, arg_pattern: &str, exit_code: i32, stderr: &str) {
        let output = CommandOutput {
            stdout: Vec::new(),
            stderr: stderr.as_bytes().to_vec(),
            exit_code: Some(exit_code),
        };
        self.add_expectation(arg_pattern, Ok(output), false);
    }

    pub fn add_run_error_expectation(&self, arg_pattern: &str, error: CoreError) {
        self.add_expectation(arg_pattern, Err(error), false);
    }

    /// Queues a successful ffprobe call printing `json`.
    pub fn expect_probe(&self, json: &str) {
        self.add_success_expectation(PROBE_PATTERN, json, false);
    }

    /// Queues a successful ffmpeg call that leaves an output file behind.
    pub fn expect_extract(&self) {
        self.add_success_expectation(EXTRACT_PATTERN, Vec::new(), true);
    }

    pub fn get_received_calls(&self) -> Vec<Vec<String>> {
        self.received_calls.borrow().clone()
    }

    /// Calls containing `arg_pattern` as one of their arguments.
    pub fn calls_matching(&self, arg_pattern: &str) -> Vec<Vec<String>> {
        self.received_calls
            .borrow()
            .iter()
            .filter(|call| call.iter().any(|a| a == arg_pattern))
            .cloned()
            .collect()
    }

    pub fn pending_expectations(&self) -> usize {
        self.expectations.borrow().len()
    }
}

impl CommandRunner for FakeCommandRunner {
    fn run(&self, argv: &[String]) -> CoreResult<CommandOutput> {
        self.received_calls.borrow_mut().push(argv.to_vec());

        let mut expectations = self.expectations.borrow_mut();
        let found_index = expectations
            .iter()
            .position(|exp| argv.iter().any(|arg| *arg == exp.arg_pattern));

        let Some(index) = found_index else {
            panic!("FakeCommandRunner: No expectation found for command args: {argv:?}");
        };
        let expectation = expectations.remove(index);
        log::info!(
            "FakeCommandRunner: Matched expectation with pattern '{}'",
            expectation.arg_pattern
        );

        if expectation.create_output_file {
            if let Some(output_path) = argv.last() {
                if let Err(e) = std::fs::write(output_path, b"\xFF\xD8\xFF\xD9") {
                    log::error!(
                        "FakeCommandRunner failed to create output file {}: {}",
                        output_path,
                        e
                    );
                }
            }
        }
        expectation.result
    }
}

use std::path::Path;
use std::process::{Command, ExitStatus};

use crate::errors::{Error, Result};
use crate::extract::ExtractionCommand;

/// Exit status of one tool invocation. `code` is `None` when the process
/// was killed by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolStatus {
    pub code: Option<i32>,
}

impl ToolStatus {
    pub const SUCCESS: ToolStatus = ToolStatus { code: Some(0) };

    pub fn exited(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<ExitStatus> for ToolStatus {
    fn from(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// Runs an extraction command to completion inside `dir`.
pub trait ToolRunner {
    fn run(&mut self, command: &ExtractionCommand, dir: &Path) -> Result<ToolStatus>;
}

/// Spawns the tool as a child process sharing this process's stdio, and
/// blocks until it exits.
#[derive(Debug, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ToolRunner for ProcessRunner {
    fn run(&mut self, command: &ExtractionCommand, dir: &Path) -> Result<ToolStatus> {
        Command::new(command.program())
            .args(command.args())
            .current_dir(dir)
            .status()
            .map(ToolStatus::from)
            .map_err(|source| Error::ToolUnavailable {
                program: command.program().to_string(),
                source,
            })
    }
}

//! Scripted command runner for tests.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use goforge_core::{
    application::{
        ports::{CommandOutcome, CommandRunner},
        ApplicationError,
    },
    error::GoforgeResult,
};

/// A single recorded invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

/// Command runner that returns a scripted outcome and records calls.
///
/// Shared across clones so tests can hand one copy to the service and
/// keep another for assertions.
#[derive(Debug, Clone)]
pub struct ScriptedCommandRunner {
    outcome: CommandOutcome,
    launch_error: Option<String>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl ScriptedCommandRunner {
    /// Runner whose commands always exit 0 with no output.
    pub fn succeeding() -> Self {
        Self::with_outcome(CommandOutcome {
            status: 0,
            output: String::new(),
        })
    }

    /// Runner whose commands always exit non-zero with the given output.
    pub fn failing(status: i32, output: impl Into<String>) -> Self {
        Self::with_outcome(CommandOutcome {
            status,
            output: output.into(),
        })
    }

    /// Runner returning the exact outcome for every call.
    pub fn with_outcome(outcome: CommandOutcome) -> Self {
        Self {
            outcome,
            launch_error: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Runner that fails to launch, as if the binary is missing.
    pub fn launch_failure(reason: impl Into<String>) -> Self {
        Self {
            outcome: CommandOutcome {
                status: -1,
                output: String::new(),
            },
            launch_error: Some(reason.into()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Invocations seen so far.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl CommandRunner for ScriptedCommandRunner {
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> GoforgeResult<CommandOutcome> {
        self.calls
            .lock()
            .map_err(|_| ApplicationError::LockPoisoned)?
            .push(RecordedCall {
                program: program.to_string(),
                args: args.to_vec(),
                cwd: cwd.to_path_buf(),
            });

        if let Some(reason) = &self.launch_error {
            return Err(ApplicationError::CommandLaunchFailed {
                command: format!("{} {}", program, args.join(" ")),
                reason: reason.clone(),
            }
            .into());
        }

        Ok(self.outcome.clone())
    }
}

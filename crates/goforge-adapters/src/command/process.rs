//! Command runner backed by std::process.

use std::path::Path;
use std::process::Command;

use goforge_core::{
    application::{
        ports::{CommandOutcome, CommandRunner},
        ApplicationError,
    },
    error::GoforgeResult,
};
use tracing::{debug, instrument};

/// Runs external commands as child processes with captured output.
#[derive(Debug, Clone, Copy)]
pub struct ProcessCommandRunner;

impl ProcessCommandRunner {
    /// Create a new process command runner.
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for ProcessCommandRunner {
    #[instrument(skip(self), fields(program = %program))]
    fn run(&self, program: &str, args: &[String], cwd: &Path) -> GoforgeResult<CommandOutcome> {
        debug!(?args, cwd = %cwd.display(), "Running external command");

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|e| ApplicationError::CommandLaunchFailed {
                command: format!("{} {}", program, args.join(" ")),
                reason: e.to_string(),
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(CommandOutcome {
            status: output.status.code().unwrap_or(-1),
            output: combined,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn reports_success_status() {
        let temp = TempDir::new().unwrap();
        let runner = ProcessCommandRunner::new();

        let outcome = runner.run("true", &[], temp.path()).unwrap();
        assert!(outcome.success());
        assert_eq!(outcome.status, 0);
    }

    #[test]
    fn reports_non_zero_status_without_erroring() {
        let temp = TempDir::new().unwrap();
        let runner = ProcessCommandRunner::new();

        let outcome = runner.run("false", &[], temp.path()).unwrap();
        assert!(!outcome.success());
        assert_ne!(outcome.status, 0);
    }

    #[test]
    fn captures_stdout() {
        let temp = TempDir::new().unwrap();
        let runner = ProcessCommandRunner::new();

        let outcome = runner
            .run("echo", &["hello".to_string()], temp.path())
            .unwrap();
        assert!(outcome.output.contains("hello"));
    }

    #[test]
    fn missing_program_is_a_launch_error() {
        let temp = TempDir::new().unwrap();
        let runner = ProcessCommandRunner::new();

        let err = runner
            .run("definitely-not-a-real-binary", &[], temp.path())
            .unwrap_err();
        assert!(err.to_string().contains("definitely-not-a-real-binary"));
    }
}

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::domain::{AppError, ComposeAction, ComposeOutput, manifest_args};
use crate::ports::ComposePort;

/// Default orchestrator program.
pub const DEFAULT_COMPOSE_PROGRAM: &str = "docker-compose";

/// `ComposePort` backed by spawning the orchestrator binary.
#[derive(Debug, Clone)]
pub struct ComposeCommandAdapter {
    program: String,
}

impl ComposeCommandAdapter {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    fn execute(&self, args: &[String], action: &str) -> Result<ComposeOutput, AppError> {
        debug!(program = %self.program, ?args, "invoking orchestrator");

        let output = Command::new(&self.program).args(args).output().map_err(|e| {
            AppError::OrchestratorInvocation {
                program: self.program.clone(),
                action: action.to_string(),
                stderr: format!("Failed to execute {}: {}", self.program, e),
            }
        })?;

        let result = ComposeOutput {
            program: self.program.clone(),
            args: args.to_vec(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code(),
        };
        debug!(program = %self.program, exit_code = ?result.exit_code, "orchestrator exited");
        Ok(result)
    }
}

impl Default for ComposeCommandAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_COMPOSE_PROGRAM)
    }
}

impl ComposePort for ComposeCommandAdapter {
    fn program(&self) -> &str {
        &self.program
    }

    fn probe_version(&self) -> Result<ComposeOutput, AppError> {
        self.execute(&["--version".to_string()], "--version")
    }

    fn run(&self, manifest: &Path, action: ComposeAction) -> Result<ComposeOutput, AppError> {
        self.execute(&manifest_args(manifest, action), &action.to_string())
    }
}

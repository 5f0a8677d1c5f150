use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for dcm operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The invoked binary could not be located through `PATH`.
    #[error(
        "Command {binary} not found in PATH variable. Please make sure it's installed and available in your system."
    )]
    BinaryNotFound { binary: String },

    /// The orchestrator binary is absent or failed its version probe.
    #[error("{program} not found in your system")]
    OrchestratorMissing { program: String },

    /// A required directory could not be created.
    #[error("Failed to create directory {}: {source}", path.display())]
    EnvironmentSetup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Start/stop target has no folder under the workloads directory.
    #[error("Compose {0} not found")]
    WorkloadNotFound(String),

    /// The orchestrator returned a non-zero status for `up`/`down`.
    #[error("Error on running {program} {action}: {stderr}")]
    OrchestratorInvocation { program: String, action: String, stderr: String },
}

impl AppError {
    /// Whether the error aborts the run before any lifecycle command executes.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            AppError::BinaryNotFound { .. }
                | AppError::OrchestratorMissing { .. }
                | AppError::EnvironmentSetup { .. }
        )
    }
}

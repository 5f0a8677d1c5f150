use std::path::Path;

use crate::domain::{AppError, ComposeAction, ComposeOutput};

/// Client for the external container orchestrator.
///
/// Implementations return `Ok` whenever the process ran, regardless of its exit status;
/// interpreting the status is left to the caller. `Err` means the process could not be
/// spawned at all.
pub trait ComposePort {
    /// Program name used in user-facing messages.
    fn program(&self) -> &str;

    /// Run the orchestrator's version query.
    fn probe_version(&self) -> Result<ComposeOutput, AppError>;

    /// Run `-f <manifest> <action>`.
    fn run(&self, manifest: &Path, action: ComposeAction) -> Result<ComposeOutput, AppError>;

    /// Start the workload in detached mode.
    fn up(&self, manifest: &Path) -> Result<ComposeOutput, AppError> {
        self.run(manifest, ComposeAction::Up)
    }

    /// Tear the workload down.
    fn down(&self, manifest: &Path) -> Result<ComposeOutput, AppError> {
        self.run(manifest, ComposeAction::Down)
    }

    /// Query container status for the workload.
    fn status(&self, manifest: &Path) -> Result<ComposeOutput, AppError> {
        self.run(manifest, ComposeAction::Status)
    }
}

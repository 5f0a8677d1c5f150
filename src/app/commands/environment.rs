use std::path::PathBuf;

use tracing::debug;

use crate::app::AppContext;
use crate::domain::AppError;
use crate::ports::{ComposePort, WorkloadStore};

/// What environment validation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentReport {
    pub workloads_dir: PathBuf,
    pub created_workloads_dir: bool,
}

/// Check the orchestrator responds and the workloads directory exists.
///
/// Idempotent: a second call against an unchanged environment creates nothing.
pub fn execute<C, S>(ctx: &AppContext<C, S>) -> Result<EnvironmentReport, AppError>
where
    C: ComposePort,
    S: WorkloadStore,
{
    let compose = ctx.compose();
    match compose.probe_version() {
        Ok(output) if output.success() => {
            debug!(version = %output.stdout.trim(), "orchestrator available");
        }
        Ok(output) => {
            debug!(exit_code = ?output.exit_code, "orchestrator version probe failed");
            return Err(AppError::OrchestratorMissing { program: compose.program().to_string() });
        }
        Err(err) => {
            debug!(error = %err, "orchestrator could not be spawned");
            return Err(AppError::OrchestratorMissing { program: compose.program().to_string() });
        }
    }

    let created_workloads_dir = ctx.store().ensure_workloads_dir()?;
    Ok(EnvironmentReport { workloads_dir: ctx.store().workloads_dir(), created_workloads_dir })
}

use tracing::debug;

use crate::app::AppContext;
use crate::domain::{AppError, WorkloadName};
use crate::ports::{ComposePort, WorkloadStore};

/// Status output captured for one workload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadStatus {
    pub name: WorkloadName,
    pub output: String,
}

/// Query every discovered workload, in discovery order.
///
/// Best-effort sweep: a workload whose query fails to spawn or exits non-zero is skipped and
/// only logged at debug level, so one failure never hides the others.
pub fn execute<C, S>(ctx: &AppContext<C, S>) -> Result<Vec<WorkloadStatus>, AppError>
where
    C: ComposePort,
    S: WorkloadStore,
{
    let names = ctx.store().discover()?;
    let mut statuses = Vec::with_capacity(names.len());

    for name in names {
        let manifest = ctx.layout().manifest_path(&name);
        match ctx.compose().status(&manifest) {
            Ok(output) if output.success() => {
                statuses.push(WorkloadStatus { name, output: output.stdout });
            }
            Ok(output) => {
                debug!(
                    workload = %name,
                    exit_code = ?output.exit_code,
                    stderr = %output.stderr.trim(),
                    "skipping workload status"
                );
            }
            Err(err) => {
                debug!(workload = %name, error = %err, "skipping workload status");
            }
        }
    }

    Ok(statuses)
}

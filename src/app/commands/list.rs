use crate::app::AppContext;
use crate::domain::{AppError, WorkloadName};
use crate::ports::{ComposePort, WorkloadStore};

/// Discover workloads. An empty directory yields an empty list.
pub fn execute<C, S>(ctx: &AppContext<C, S>) -> Result<Vec<WorkloadName>, AppError>
where
    C: ComposePort,
    S: WorkloadStore,
{
    ctx.store().discover()
}

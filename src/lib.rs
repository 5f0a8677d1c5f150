//! dcm: list, inspect, start, and stop docker-compose workloads kept next to the binary.
//!
//! Workloads live at `<installation root>/docker_composes/<name>/docker-compose.yml`, where the
//! installation root is the directory holding the `dcm` binary as found on `PATH`.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use app::commands::{environment, lifecycle, list as list_cmd, status as status_cmd};
use ports::{ComposePort, WorkloadStore};

pub use adapters::{resolve_installation_root, resolve_installation_root_in};
pub use app::cli::bootstrap;
pub use app::commands::environment::EnvironmentReport;
pub use app::commands::lifecycle::{Lifecycle, LifecycleOutcome};
pub use app::commands::status::WorkloadStatus;
pub use app::{AppConfig, AppContext};
pub use domain::{AppError, Command, WorkloadLayout, WorkloadName};

/// Verify the orchestrator responds and create the workloads directory if absent.
pub fn ensure_environment<C: ComposePort, S: WorkloadStore>(
    ctx: &AppContext<C, S>,
) -> Result<EnvironmentReport, AppError> {
    environment::execute(ctx)
}

/// Names of workloads holding a manifest, ordered by folder path.
pub fn list<C: ComposePort, S: WorkloadStore>(
    ctx: &AppContext<C, S>,
) -> Result<Vec<WorkloadName>, AppError> {
    list_cmd::execute(ctx)
}

/// Status output for every workload whose query succeeds.
pub fn status<C: ComposePort, S: WorkloadStore>(
    ctx: &AppContext<C, S>,
) -> Result<Vec<WorkloadStatus>, AppError> {
    status_cmd::execute(ctx)
}

/// Start a workload in detached mode.
pub fn start<C: ComposePort, S: WorkloadStore>(
    ctx: &AppContext<C, S>,
    name: &WorkloadName,
) -> Result<LifecycleOutcome, AppError> {
    lifecycle::start(ctx, name)
}

/// Stop a workload.
pub fn stop<C: ComposePort, S: WorkloadStore>(
    ctx: &AppContext<C, S>,
    name: &WorkloadName,
) -> Result<LifecycleOutcome, AppError> {
    lifecycle::stop(ctx, name)
}

use crate::app::AppContext;
use crate::domain::{AppError, ComposeAction, WorkloadName};
use crate::ports::{ComposePort, WorkloadStore};

/// Lifecycle transition requested for a workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Start,
    Stop,
}

impl Lifecycle {
    fn action(self) -> ComposeAction {
        match self {
            Lifecycle::Start => ComposeAction::Up,
            Lifecycle::Stop => ComposeAction::Down,
        }
    }

    fn past_tense(self) -> &'static str {
        match self {
            Lifecycle::Start => "started",
            Lifecycle::Stop => "stopped",
        }
    }
}

/// Result of a successful start or stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleOutcome {
    pub name: WorkloadName,
    pub lifecycle: Lifecycle,
    pub stdout: String,
}

impl LifecycleOutcome {
    /// Confirmation line printed after the orchestrator output.
    pub fn confirmation(&self) -> String {
        format!("Compose {} {} successfully", self.name, self.lifecycle.past_tense())
    }
}

/// Start a workload in detached mode.
pub fn start<C, S>(
    ctx: &AppContext<C, S>,
    name: &WorkloadName,
) -> Result<LifecycleOutcome, AppError>
where
    C: ComposePort,
    S: WorkloadStore,
{
    execute(ctx, name, Lifecycle::Start)
}

/// Tear a workload down.
pub fn stop<C, S>(
    ctx: &AppContext<C, S>,
    name: &WorkloadName,
) -> Result<LifecycleOutcome, AppError>
where
    C: ComposePort,
    S: WorkloadStore,
{
    execute(ctx, name, Lifecycle::Stop)
}

// Only the folder is checked, not the manifest: a folder without a manifest can still be
// targeted and fails at the orchestrator, even though discovery never lists it.
fn execute<C, S>(
    ctx: &AppContext<C, S>,
    name: &WorkloadName,
    lifecycle: Lifecycle,
) -> Result<LifecycleOutcome, AppError>
where
    C: ComposePort,
    S: WorkloadStore,
{
    if !name.is_path_safe() || !ctx.store().workload_exists(name) {
        return Err(AppError::WorkloadNotFound(name.to_string()));
    }

    let action = lifecycle.action();
    let manifest = ctx.layout().manifest_path(name);
    let output = ctx.compose().run(&manifest, action)?;

    if !output.success() {
        return Err(AppError::OrchestratorInvocation {
            program: ctx.compose().program().to_string(),
            action: action.to_string(),
            stderr: output.stderr,
        });
    }

    Ok(LifecycleOutcome { name: name.clone(), lifecycle, stdout: output.stdout })
}

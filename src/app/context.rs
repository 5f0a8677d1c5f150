use crate::domain::WorkloadLayout;
use crate::ports::{ComposePort, WorkloadStore};

/// Application context holding the resolved layout and port implementations.
pub struct AppContext<C: ComposePort, S: WorkloadStore> {
    layout: WorkloadLayout,
    compose: C,
    store: S,
}

impl<C: ComposePort, S: WorkloadStore> AppContext<C, S> {
    /// Create a new application context.
    pub fn new(layout: WorkloadLayout, compose: C, store: S) -> Self {
        Self { layout, compose, store }
    }

    /// Paths derived from the installation root.
    pub fn layout(&self) -> &WorkloadLayout {
        &self.layout
    }

    /// Get a reference to the orchestrator client.
    pub fn compose(&self) -> &C {
        &self.compose
    }

    /// Get a reference to the workload store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

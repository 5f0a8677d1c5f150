mod compose;
mod workload_store;

pub use compose::ComposePort;
pub use workload_store::WorkloadStore;

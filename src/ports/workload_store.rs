use std::path::PathBuf;

use crate::domain::{AppError, WorkloadName};

/// Filesystem view of the workloads directory.
pub trait WorkloadStore {
    /// Path of the workloads directory.
    fn workloads_dir(&self) -> PathBuf;

    /// Create the workloads directory if absent. Returns `true` if it was created.
    fn ensure_workloads_dir(&self) -> Result<bool, AppError>;

    /// Whether `<workloads_dir>/<name>` exists as a directory.
    fn workload_exists(&self, name: &WorkloadName) -> bool;

    /// Names of folders holding a manifest, ordered by full folder path.
    fn discover(&self) -> Result<Vec<WorkloadName>, AppError>;
}

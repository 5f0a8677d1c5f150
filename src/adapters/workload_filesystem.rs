use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::domain::{AppError, MANIFEST_FILE, WorkloadLayout, WorkloadName};
use crate::ports::WorkloadStore;

/// Filesystem-based workload store rooted at the workloads directory.
#[derive(Debug, Clone)]
pub struct FilesystemWorkloadStore {
    root: PathBuf,
}

impl FilesystemWorkloadStore {
    /// Create a store for an explicit workloads directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a store for the workloads directory of a layout.
    pub fn from_layout(layout: &WorkloadLayout) -> Self {
        Self::new(layout.workloads_dir())
    }
}

impl WorkloadStore for FilesystemWorkloadStore {
    fn workloads_dir(&self) -> PathBuf {
        self.root.clone()
    }

    fn ensure_workloads_dir(&self) -> Result<bool, AppError> {
        if self.root.is_dir() {
            return Ok(false);
        }

        fs::create_dir(&self.root)
            .map_err(|source| AppError::EnvironmentSetup { path: self.root.clone(), source })?;
        info!(path = %self.root.display(), "created workloads directory");
        Ok(true)
    }

    fn workload_exists(&self, name: &WorkloadName) -> bool {
        name.is_path_safe() && self.root.join(name.as_str()).is_dir()
    }

    fn discover(&self) -> Result<Vec<WorkloadName>, AppError> {
        if !self.root.is_dir() {
            return Ok(Vec::new());
        }

        // Workload folders are direct children; nothing below them is read.
        let mut found = BTreeSet::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let dir = entry.path();
            if dir.join(MANIFEST_FILE).is_file() {
                found.insert(dir);
            }
        }

        let names = found
            .into_iter()
            .filter_map(|dir| dir.file_name().map(|n| n.to_string_lossy().into_owned()))
            .map(WorkloadName::new)
            .collect::<Vec<_>>();
        debug!(count = names.len(), "discovered workloads");
        Ok(names)
    }
}

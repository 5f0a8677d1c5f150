use std::path::{Path, PathBuf};

use crate::domain::WorkloadName;

/// Directory under the installation root holding one folder per workload.
pub const WORKLOADS_DIR: &str = "docker_composes";

/// Manifest filename expected directly inside each workload folder.
pub const MANIFEST_FILE: &str = "docker-compose.yml";

/// Paths derived from the installation root.
///
/// The root is resolved once per run and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadLayout {
    root: PathBuf,
}

impl WorkloadLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory containing the running binary.
    pub fn installation_root(&self) -> &Path {
        &self.root
    }

    /// `<root>/docker_composes/`
    pub fn workloads_dir(&self) -> PathBuf {
        self.root.join(WORKLOADS_DIR)
    }

    /// `<root>/docker_composes/<name>/`
    pub fn workload_dir(&self, name: &WorkloadName) -> PathBuf {
        self.workloads_dir().join(name.as_str())
    }

    /// `<root>/docker_composes/<name>/docker-compose.yml`
    pub fn manifest_path(&self, name: &WorkloadName) -> PathBuf {
        self.workload_dir(name).join(MANIFEST_FILE)
    }
}

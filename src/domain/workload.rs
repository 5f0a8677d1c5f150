use std::fmt;

/// Name of a workload: the folder name under the workloads directory.
///
/// Case-sensitive and taken verbatim; no normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkloadName(String);

impl WorkloadName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the name is a single path component under the workloads directory.
    ///
    /// Rejects empty names, `.`, `..`, and anything containing `/`, `\`, or NUL.
    pub fn is_path_safe(&self) -> bool {
        let name = self.0.as_str();
        if name.is_empty() || name == "." || name == ".." {
            return false;
        }
        !name.contains(['/', '\\', '\0'])
    }
}

impl fmt::Display for WorkloadName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for WorkloadName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WorkloadName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for WorkloadName {
    fn from(value: String) -> Self {
        Self(value)
    }
}

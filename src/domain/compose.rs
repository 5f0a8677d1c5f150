use std::fmt;
use std::path::Path;

/// Orchestrator operations issued against a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeAction {
    /// `up -d`
    Up,
    /// `down`
    Down,
    /// `ps`
    Status,
}

impl ComposeAction {
    /// Arguments appended after `-f <manifest>`.
    pub fn args(self) -> &'static [&'static str] {
        match self {
            ComposeAction::Up => &["up", "-d"],
            ComposeAction::Down => &["down"],
            ComposeAction::Status => &["ps"],
        }
    }
}

impl fmt::Display for ComposeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.args().join(" "))
    }
}

/// Result of a single orchestrator call.
///
/// `exit_code` is `None` when the process was terminated by a signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeOutput {
    pub program: String,
    pub args: Vec<String>,
    pub stdout: String,
    pub stderr: String,
    pub exit_code: Option<i32>,
}

impl ComposeOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Full argument vector for an action against a manifest.
pub fn manifest_args(manifest: &Path, action: ComposeAction) -> Vec<String> {
    let mut args = vec!["-f".to_string(), manifest.to_string_lossy().into_owned()];
    args.extend(action.args().iter().map(|arg| arg.to_string()));
    args
}

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::domain::{AppError, ComposeAction, ComposeOutput, manifest_args};
use crate::ports::ComposePort;

/// Scripted orchestrator recording every call it receives.
pub struct FakeCompose {
    pub calls: Mutex<Vec<Vec<String>>>,
    version_ok: Mutex<bool>,
    spawn_fails: Mutex<bool>,
    responses: Mutex<HashMap<PathBuf, (i32, String, String)>>,
}

impl FakeCompose {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            version_ok: Mutex::new(true),
            spawn_fails: Mutex::new(false),
            responses: Mutex::new(HashMap::new()),
        }
    }

    /// Make the version probe exit non-zero.
    pub fn set_version_failing(&self) {
        *self.version_ok.lock().unwrap() = false;
    }

    /// Make every call fail to spawn.
    pub fn set_spawn_failing(&self) {
        *self.spawn_fails.lock().unwrap() = true;
    }

    /// Script the exit code and streams for calls against a manifest.
    pub fn respond(&self, manifest: &Path, exit_code: i32, stdout: &str, stderr: &str) {
        self.responses
            .lock()
            .unwrap()
            .insert(manifest.to_path_buf(), (exit_code, stdout.to_string(), stderr.to_string()));
    }

    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    fn spawn_error(&self, action: &str) -> AppError {
        AppError::OrchestratorInvocation {
            program: "fake-compose".into(),
            action: action.into(),
            stderr: "Failed to execute fake-compose".into(),
        }
    }
}

impl Default for FakeCompose {
    fn default() -> Self {
        Self::new()
    }
}

impl ComposePort for FakeCompose {
    fn program(&self) -> &str {
        "fake-compose"
    }

    fn probe_version(&self) -> Result<ComposeOutput, AppError> {
        let args = vec!["--version".to_string()];
        self.calls.lock().unwrap().push(args.clone());
        if *self.spawn_fails.lock().unwrap() {
            return Err(self.spawn_error("--version"));
        }
        let ok = *self.version_ok.lock().unwrap();
        Ok(ComposeOutput {
            program: "fake-compose".into(),
            args,
            stdout: if ok { "fake-compose version 1.0\n".into() } else { String::new() },
            stderr: String::new(),
            exit_code: Some(if ok { 0 } else { 1 }),
        })
    }

    fn run(&self, manifest: &Path, action: ComposeAction) -> Result<ComposeOutput, AppError> {
        let args = manifest_args(manifest, action);
        self.calls.lock().unwrap().push(args.clone());
        if *self.spawn_fails.lock().unwrap() {
            return Err(self.spawn_error(&action.to_string()));
        }
        let (code, stdout, stderr) = self
            .responses
            .lock()
            .unwrap()
            .get(manifest)
            .cloned()
            .unwrap_or((0, String::new(), String::new()));
        Ok(ComposeOutput {
            program: "fake-compose".into(),
            args,
            stdout,
            stderr,
            exit_code: Some(code),
        })
    }
}

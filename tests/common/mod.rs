//! Shared testing utilities for dcm CLI tests.

use assert_cmd::Command;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated installation root holding a copy of `dcm` and a fake `docker-compose`.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    bin_dir: PathBuf,
    log_file: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Install `dcm` and a fake `docker-compose` into a fresh directory.
    pub fn new() -> Self {
        let ctx = Self::without_compose();
        ctx.install_fake_compose("docker-compose");
        ctx
    }

    /// Install only `dcm`, leaving no orchestrator on the search path.
    pub fn without_compose() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        let log_file = root.path().join("compose.log");

        let built = assert_cmd::cargo::cargo_bin("dcm");
        fs::copy(&built, bin_dir.join("dcm")).expect("Failed to copy dcm binary");

        Self { root, bin_dir, log_file }
    }

    /// Write an executable orchestrator stub named `program` that logs its arguments.
    ///
    /// `FAKE_COMPOSE_VERSION_EXIT` sets the version probe status; manifests whose path contains
    /// `FAKE_COMPOSE_FAIL_MATCH` exit 1 with `boom` on stderr.
    pub fn install_fake_compose(&self, program: &str) {
        let script = format!(
            r#"#!/bin/sh
echo "$*" >> "{}"
if [ "$1" = "--version" ]; then
    echo "{} version 1.29.2"
    exit "${{FAKE_COMPOSE_VERSION_EXIT:-0}}"
fi
case "$2" in
    *"${{FAKE_COMPOSE_FAIL_MATCH:-__never__}}"*)
        echo "boom" >&2
        exit 1
        ;;
esac
echo "ok $3"
exit 0
"#,
            self.log_file.to_string_lossy(),
            program
        );

        let path = self.bin_dir.join(program);
        fs::write(&path, script).expect("Failed to write compose script");
        let mut perms = fs::metadata(&path).expect("Failed to get metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).expect("Failed to set permissions");
    }

    /// Absolute path of an installed orchestrator stub.
    pub fn compose_program(&self, program: &str) -> String {
        self.bin_dir.join(program).to_string_lossy().into_owned()
    }

    /// Directory acting as the installation root.
    pub fn install_root(&self) -> &Path {
        &self.bin_dir
    }

    /// `<install_root>/docker_composes`
    pub fn workloads_dir(&self) -> PathBuf {
        self.bin_dir.join("docker_composes")
    }

    /// Create `<name>/docker-compose.yml` and return the manifest path.
    pub fn add_workload(&self, name: &str) -> PathBuf {
        let dir = self.workloads_dir().join(name);
        fs::create_dir_all(&dir).expect("Failed to create workload dir");
        let manifest = dir.join("docker-compose.yml");
        fs::write(&manifest, "services: {}\n").expect("Failed to write manifest");
        manifest
    }

    /// Build a command invoking the installed `dcm` with only the bin dir on `PATH`.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::new(self.bin_dir.join("dcm"));
        cmd.current_dir(self.root.path())
            .env("PATH", &self.bin_dir)
            .env_remove("DCM_COMPOSE_BIN")
            .env_remove("DCM_LOG")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Arguments received by the fake orchestrator, one call per line.
    pub fn compose_log(&self) -> Vec<String> {
        fs::read_to_string(&self.log_file)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Logged calls other than the version probe.
    pub fn lifecycle_calls(&self) -> Vec<String> {
        self.compose_log().into_iter().filter(|line| line != "--version").collect()
    }
}

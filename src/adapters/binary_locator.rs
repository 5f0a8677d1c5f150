//! Installation-root resolution through `PATH` lookup.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::AppError;

/// Binary name to look up for a given `argv[0]`.
///
/// Only the final path component is used, so an invocation through a relative or absolute path
/// still resolves through `PATH`.
pub fn binary_name(argv0: &str) -> &str {
    Path::new(argv0).file_name().and_then(OsStr::to_str).unwrap_or(argv0)
}

/// Resolve the directory containing `binary` by searching the process `PATH`.
pub fn resolve_installation_root(binary: &str) -> Result<PathBuf, AppError> {
    let located = which::which(binary)
        .map_err(|_| AppError::BinaryNotFound { binary: binary.to_string() })?;
    strip_binary(binary, located)
}

/// Resolve the directory containing `binary` within an explicit search path.
pub fn resolve_installation_root_in(
    binary: &str,
    search_path: impl AsRef<OsStr>,
    cwd: impl AsRef<Path>,
) -> Result<PathBuf, AppError> {
    let located = which::which_in(binary, Some(search_path), cwd)
        .map_err(|_| AppError::BinaryNotFound { binary: binary.to_string() })?;
    strip_binary(binary, located)
}

fn strip_binary(binary: &str, located: PathBuf) -> Result<PathBuf, AppError> {
    let root = located
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| AppError::BinaryNotFound { binary: binary.to_string() })?;
    debug!(binary, root = %root.display(), "resolved installation root");
    Ok(root)
}

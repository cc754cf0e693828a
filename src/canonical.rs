//! Path canonicalization for agent directories.

use crate::error::ResolutionError;
use std::path::{Path, PathBuf};

/// Canonicalize an agent directory.
///
/// This function:
/// 1. Resolves all symlinks (and relative components) using `dunce::canonicalize`
/// 2. Verifies the result is a directory
///
/// The returned path is absolute, so entries joined onto it are absolute too.
/// On Windows it is the plain `C:\...` form rather than a `\\?\` verbatim
/// path, which the JVM's `-javaagent:` option does not accept.
///
/// # Errors
///
/// - `DirNotFound` if the path doesn't exist
/// - `NotADirectory` if it resolves to anything but a directory
/// - `DirUnreadable` for other canonicalization failures
pub fn canonicalize_agent_dir(path: &Path) -> Result<PathBuf, ResolutionError> {
    let path_str = path.display().to_string();

    let canonical = dunce::canonicalize(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ResolutionError::DirNotFound {
            path: path_str.clone(),
        },
        _ => ResolutionError::DirUnreadable {
            path: path_str.clone(),
            reason: e.to_string(),
        },
    })?;

    if !canonical.is_dir() {
        return Err(ResolutionError::NotADirectory { path: path_str });
    }

    Ok(canonical)
}

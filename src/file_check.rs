//! File type checks for agent artifacts.

use std::ffi::OsStr;
use std::path::Path;

/// Extension (without the dot) that marks a file as a Java agent.
pub const AGENT_EXTENSION: &str = "jar";

/// Check that a directory entry is an agent artifact.
///
/// This function verifies:
/// 1. The file extension is exactly `jar` (case-sensitive)
/// 2. The path, after following symlinks, is a regular file
///
/// Entries whose metadata cannot be read (e.g. broken symlinks) are not agents.
/// A file named exactly `.jar` has no extension and is not an agent either.
pub fn is_agent_file(path: &Path) -> bool {
    if path.extension() != Some(OsStr::new(AGENT_EXTENSION)) {
        return false;
    }

    match std::fs::metadata(path) {
        Ok(metadata) => metadata.is_file(),
        Err(e) => {
            tracing::trace!(path = %path.display(), error = %e, "Skipping unreadable entry");
            false
        }
    }
}

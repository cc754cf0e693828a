//! Agent artifact resolution.
//!
//! Determines which Java agents are injected into a spawn. The set is either
//! fixed when the slot is armed or rescanned from a directory on every spawn,
//! so agents dropped into the directory later are picked up.

use crate::canonical::canonicalize_agent_dir;
use crate::error::ResolutionError;
use crate::file_check::is_agent_file;
use std::path::{Path, PathBuf};

/// Where the agents injected into each spawn come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AgentSource {
    /// An explicit ordered list of absolute agent paths.
    ///
    /// Agents are injected in exactly this order; load order can change
    /// how agents interact, so it is never rearranged.
    Fixed(Vec<PathBuf>),

    /// A directory scanned on every spawn.
    ///
    /// Regular files with a `.jar` extension are injected, sorted by file name.
    Directory(PathBuf),
}

impl AgentSource {
    /// Create a fixed source from any list of paths.
    pub fn fixed<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        AgentSource::Fixed(paths.into_iter().map(Into::into).collect())
    }

    /// Create a directory source.
    pub fn directory(dir: impl Into<PathBuf>) -> Self {
        AgentSource::Directory(dir.into())
    }

    /// Scan the directory that contains the running executable.
    ///
    /// Agent jars are commonly shipped next to the binary that loads them.
    pub fn beside_executable() -> Result<Self, ResolutionError> {
        let exe = std::env::current_exe().map_err(|e| ResolutionError::NoExecutableDir {
            reason: e.to_string(),
        })?;

        let dir = exe
            .parent()
            .ok_or_else(|| ResolutionError::NoExecutableDir {
                reason: format!("{} has no parent directory", exe.display()),
            })?;

        Ok(AgentSource::Directory(dir.to_path_buf()))
    }

    /// Resolve the current agent set.
    ///
    /// # Returns
    ///
    /// Absolute, UTF-8 agent paths in injection order.
    ///
    /// # Errors
    ///
    /// - `NotAbsolute` / `NonUtf8Path` for an unusable fixed path
    /// - `NonUtf8Path` if the canonical directory isn't UTF-8
    /// - `DirNotFound`, `NotADirectory`, `DirUnreadable` if the directory can't be scanned
    pub fn resolve(&self) -> Result<Vec<PathBuf>, ResolutionError> {
        match self {
            AgentSource::Fixed(paths) => {
                for path in paths {
                    check_fixed_path(path)?;
                }
                Ok(paths.clone())
            }
            AgentSource::Directory(dir) => scan_dir(dir),
        }
    }

    /// Short label for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            AgentSource::Fixed(_) => "fixed",
            AgentSource::Directory(_) => "directory",
        }
    }
}

fn check_fixed_path(path: &Path) -> Result<(), ResolutionError> {
    if !path.is_absolute() {
        return Err(ResolutionError::NotAbsolute {
            path: path.display().to_string(),
        });
    }
    if path.to_str().is_none() {
        return Err(ResolutionError::NonUtf8Path {
            path: path.display().to_string(),
        });
    }
    Ok(())
}

/// List the agent jars directly inside `dir`, sorted by file name.
fn scan_dir(dir: &Path) -> Result<Vec<PathBuf>, ResolutionError> {
    let canonical = canonicalize_agent_dir(dir)?;
    if canonical.to_str().is_none() {
        return Err(ResolutionError::NonUtf8Path {
            path: canonical.display().to_string(),
        });
    }

    let unreadable = |e: std::io::Error| ResolutionError::DirUnreadable {
        path: dir.display().to_string(),
        reason: e.to_string(),
    };

    let mut names = Vec::new();
    for entry in std::fs::read_dir(&canonical).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        let path = entry.path();

        // A name that isn't UTF-8 can't be passed as a `-javaagent:` argument
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            tracing::trace!(path = %path.display(), "Skipping non UTF-8 entry");
            continue;
        };

        if is_agent_file(&path) {
            names.push(name);
        } else {
            tracing::trace!(path = %path.display(), "Skipping non-agent entry");
        }
    }

    names.sort();

    Ok(names.into_iter().map(|name| canonical.join(name)).collect())
}

//! Argument vector rewriting for JVM launches.
//!
//! This module handles removing the flag that disables the attach mechanism
//! and prepending one `-javaagent:` argument per resolved agent.

use crate::error::ResolutionError;
use std::path::{Path, PathBuf};

/// JVM flag that turns off dynamic attach. Matched exactly, never as a prefix.
pub const DISABLE_ATTACH_FLAG: &str = "-XX:+DisableAttachMechanism";

/// Prefix of the argument that loads an agent at JVM startup.
pub const JAVAAGENT_PREFIX: &str = "-javaagent:";

/// Remove every occurrence of [`DISABLE_ATTACH_FLAG`].
///
/// All other arguments keep their relative order.
pub fn strip_disable_attach(argv: Vec<String>) -> Vec<String> {
    argv.into_iter()
        .filter(|arg| arg != DISABLE_ATTACH_FLAG)
        .collect()
}

/// Build the `-javaagent:<path>` argument for one agent.
///
/// The path is used exactly as given, without quoting.
///
/// # Errors
///
/// `NonUtf8Path` if the path can't be carried in a `String` argument
/// without altering it.
pub fn javaagent_arg(path: &Path) -> Result<String, ResolutionError> {
    let path = path.to_str().ok_or_else(|| ResolutionError::NonUtf8Path {
        path: path.display().to_string(),
    })?;
    Ok(format!("{JAVAAGENT_PREFIX}{path}"))
}

/// Prepend one `-javaagent:` argument per agent, in agent order.
pub fn prepend_agents(
    agents: &[PathBuf],
    argv: Vec<String>,
) -> Result<Vec<String>, ResolutionError> {
    let mut result = Vec::with_capacity(agents.len() + argv.len());
    for agent in agents {
        result.push(javaagent_arg(agent)?);
    }
    result.extend(argv);
    Ok(result)
}

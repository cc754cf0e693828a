//! Environment-driven configuration for preload bootstraps.
//!
//! A bootstrap that loads this crate into a host process usually has no way
//! to pass arguments, so the agent source can be read from the environment:
//!
//! - `AGENT_INJECT_DIR`: a directory to scan on every spawn
//! - `AGENT_INJECT_AGENTS`: an explicit agent list, separated like `PATH`
//!
//! With neither set, the directory containing the executable is scanned.

use crate::error::{ConfigError, InitError};
use crate::resolver::AgentSource;
use crate::slot::activate;
use std::ffi::OsString;
use std::path::PathBuf;

/// Names a directory of agent jars to scan.
pub const AGENT_DIR_VAR: &str = "AGENT_INJECT_DIR";

/// Lists agent jars explicitly, in injection order.
pub const AGENT_LIST_VAR: &str = "AGENT_INJECT_AGENTS";

impl AgentSource {
    /// Build the agent source from `AGENT_INJECT_DIR` / `AGENT_INJECT_AGENTS`.
    ///
    /// Empty values count as unset.
    ///
    /// # Errors
    ///
    /// - `ConfigError::Conflicting` if both variables are set
    /// - `ConfigError::Resolution` if neither is set and the executable's
    ///   directory can't be determined
    pub fn from_env() -> Result<Self, ConfigError> {
        source_from_vars(
            std::env::var_os(AGENT_DIR_VAR),
            std::env::var_os(AGENT_LIST_VAR),
        )
    }
}

/// Read the agent source from the environment and arm the process-wide slot.
pub fn activate_from_env() -> Result<(), InitError> {
    let source = AgentSource::from_env()?;
    activate(source)?;
    Ok(())
}

fn source_from_vars(
    dir: Option<OsString>,
    list: Option<OsString>,
) -> Result<AgentSource, ConfigError> {
    let dir = dir.filter(|v| !v.is_empty());
    let list = list.filter(|v| !v.is_empty());

    match (dir, list) {
        (Some(_), Some(_)) => Err(ConfigError::Conflicting {
            first: AGENT_DIR_VAR,
            second: AGENT_LIST_VAR,
        }),
        (Some(dir), None) => Ok(AgentSource::Directory(PathBuf::from(dir))),
        (None, Some(list)) => Ok(AgentSource::Fixed(
            std::env::split_paths(&list)
                .filter(|p| !p.as_os_str().is_empty())
                .collect(),
        )),
        (None, None) => Ok(AgentSource::beside_executable()?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os(s: &str) -> Option<OsString> {
        Some(OsString::from(s))
    }

    #[test]
    fn test_dir_var() {
        let source = source_from_vars(os("/opt/agents"), None).unwrap();
        assert_eq!(source, AgentSource::directory("/opt/agents"));
    }

    #[test]
    fn test_list_var_keeps_order() {
        let source = source_from_vars(None, os("/opt/b.jar:/opt/a.jar")).unwrap();
        assert_eq!(source, AgentSource::fixed(["/opt/b.jar", "/opt/a.jar"]));
    }

    #[test]
    fn test_list_var_skips_empty_entries() {
        let source = source_from_vars(None, os("/opt/a.jar::/opt/b.jar:")).unwrap();
        assert_eq!(source, AgentSource::fixed(["/opt/a.jar", "/opt/b.jar"]));
    }

    #[test]
    fn test_both_vars_conflict() {
        let result = source_from_vars(os("/opt/agents"), os("/opt/a.jar"));
        assert_eq!(
            result,
            Err(ConfigError::Conflicting {
                first: AGENT_DIR_VAR,
                second: AGENT_LIST_VAR,
            })
        );
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let source = source_from_vars(os(""), os("/opt/a.jar")).unwrap();
        assert_eq!(source, AgentSource::fixed(["/opt/a.jar"]));
    }

    #[test]
    fn test_default_is_beside_executable() {
        let source = source_from_vars(None, None).unwrap();
        assert_eq!(source, AgentSource::beside_executable().unwrap());
    }
}

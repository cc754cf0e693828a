//! The spawn rewrite applied to every intercepted request.

use crate::argv::{prepend_agents, strip_disable_attach};
use crate::env_policy::strip_java_options;
use crate::error::ResolutionError;
use crate::request::SpawnRequest;
use std::path::PathBuf;

/// Rewrite a request for an already-resolved agent set.
///
/// 1. Drops every `-XX:+DisableAttachMechanism` argument
/// 2. Strips the JVM option variables from an explicit environment
/// 3. Prepends one `-javaagent:<path>` per agent, in agent order
///
/// A request without an explicit environment keeps inheriting the parent's;
/// no environment is fabricated for it. Everything else passes through as-is.
///
/// # Errors
///
/// `NonUtf8Path` if an agent path can't be passed through unaltered.
pub fn rewrite_request(
    mut request: SpawnRequest,
    agents: &[PathBuf],
) -> Result<SpawnRequest, ResolutionError> {
    let argv = std::mem::take(&mut request.args);
    request.args = prepend_agents(agents, strip_disable_attach(argv))?;

    request.env = request.env.as_ref().map(strip_java_options);

    Ok(request)
}

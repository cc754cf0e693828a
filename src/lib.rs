//! # agent_inject
//!
//! Java agent injection for every process a host spawns.
//!
//! `agent_inject` owns a process-wide creation slot. Once armed, every child
//! launched through [`spawn`] or [`output`] is rewritten so a JVM starts with
//! the configured Java agents attached and without the settings that would
//! keep those agents from working.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use agent_inject::{AgentSource, SpawnRequest};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Arm once, before anything else spawns
//! agent_inject::activate(AgentSource::directory("/opt/agents"))?;
//!
//! // Every spawn is now rewritten
//! let request = SpawnRequest::new(
//!     "java",
//!     vec!["-jar".to_string(), "app.jar".to_string()],
//! );
//! let mut child = agent_inject::spawn(request)?;
//! child.wait()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Rewrite Rules
//!
//! - **Attach stays enabled**: `-XX:+DisableAttachMechanism` is removed
//! - **No competing options**: `_JAVA_OPTIONS`, `JAVA_TOOL_OPTIONS` and
//!   `JDK_JAVA_OPTIONS` are removed from an explicit child environment
//! - **Agents first**: one `-javaagent:<path>` per agent is prepended, in order
//! - **Fail closed**: if the agent set can't be resolved, nothing is spawned
//! - **Armed once**: a second activation is rejected instead of wrapping twice
//!
//! Everything else (stdio wiring, exit status, errors from the OS) passes
//! through unchanged.
//!
//! ## Platform Support
//!
//! Unix and Windows. Agent directories are canonicalized with `dunce`, so on
//! Windows the injected paths are plain `C:\...` paths rather than `\\?\`
//! verbatim paths. The test suite exercises Unix only.

mod argv;
mod canonical;
mod config;
mod env_policy;
mod error;
mod file_check;
mod interceptor;
mod request;
mod resolver;
mod rewrite;
mod slot;
mod spawner;

#[cfg(test)]
mod test_utils;

// Public API
pub use argv::{javaagent_arg, strip_disable_attach, DISABLE_ATTACH_FLAG, JAVAAGENT_PREFIX};
pub use config::{activate_from_env, AGENT_DIR_VAR, AGENT_LIST_VAR};
pub use env_policy::{strip_java_options, STRIPPED_ENV_VARS};
pub use error::{ActivationError, ConfigError, InitError, ResolutionError, SpawnError};
pub use file_check::AGENT_EXTENSION;
pub use interceptor::Interceptor;
pub use request::{SpawnRequest, StdioMode};
pub use resolver::AgentSource;
pub use rewrite::rewrite_request;
pub use slot::{activate, is_armed, output, spawn, SpawnSlot};
pub use spawner::{OsSpawner, Spawner};

//! Error types for agent_inject.
//!
//! This module defines the error categories of the interception layer:
//! - [`ResolutionError`]: the agent set could not be determined - the spawn is refused
//! - [`ActivationError`]: the creation slot could not be armed
//! - [`SpawnError`]: what an intercepted spawn returns to its caller
//! - [`ConfigError`] / [`InitError`]: environment-driven bootstrap failures

use thiserror::Error;

/// Failure to resolve the agent artifacts for a spawn.
///
/// Raised before any process is created. All error messages are safe to log
/// (they carry paths, never environment values).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// A fixed agent path is not absolute
    #[error("agent path must be absolute: {path}")]
    NotAbsolute { path: String },

    /// A fixed agent path cannot be passed as a UTF-8 argument
    #[error("agent path is not valid UTF-8: {path}")]
    NonUtf8Path { path: String },

    /// The agent directory does not exist
    #[error("agent directory not found: {path}")]
    DirNotFound { path: String },

    /// The agent directory path points to something else
    #[error("agent path is not a directory: {path}")]
    NotADirectory { path: String },

    /// The agent directory exists but could not be listed
    #[error("failed to read agent directory {path}: {reason}")]
    DirUnreadable { path: String, reason: String },

    /// The running executable's directory could not be determined
    #[error("cannot locate the executable directory: {reason}")]
    NoExecutableDir { reason: String },
}

/// Failure to arm a creation slot.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ActivationError {
    /// The slot already holds an interceptor.
    ///
    /// Wrapping it again would inject every agent twice.
    #[error("spawn interception is already armed")]
    AlreadyArmed,
}

/// Error returned by an intercepted spawn.
#[derive(Debug, Error)]
pub enum SpawnError {
    /// Agent resolution failed; no process was created
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// The underlying process-creation primitive failed, passed through as-is
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Invalid environment-driven configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Both a directory and an explicit list were configured
    #[error("{first} and {second} are mutually exclusive")]
    Conflicting {
        first: &'static str,
        second: &'static str,
    },

    /// The default agent source could not be built
    #[error(transparent)]
    Resolution(#[from] ResolutionError),
}

/// Combined error type for the configure-and-activate bootstrap flow.
#[derive(Debug, Error)]
pub enum InitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Activation(#[from] ActivationError),
}

//! Process creation primitives.
//!
//! A [`Spawner`] is whatever turns a [`SpawnRequest`] into a running child.
//! The creation slot holds one; [`OsSpawner`] is the operating-system default.

use crate::error::SpawnError;
use crate::request::SpawnRequest;
use std::process::{Child, Command};

/// A process-creation function.
///
/// Implementations must be shareable across threads: the creation slot hands
/// the same spawner to every caller in the process.
pub trait Spawner: Send + Sync {
    /// Handle to a created process.
    type Child;

    /// Create a process for `request`.
    fn spawn(&self, request: SpawnRequest) -> Result<Self::Child, SpawnError>;
}

/// Spawns real processes with `std::process::Command`.
///
/// Spawning is synchronous and needs no async runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsSpawner;

impl OsSpawner {
    /// Build the `Command` a request describes.
    pub fn command(request: &SpawnRequest) -> Command {
        let mut cmd = Command::new(&request.command);
        cmd.args(&request.args)
            .stdin(request.stdin.to_stdio())
            .stdout(request.stdout.to_stdio())
            .stderr(request.stderr.to_stdio());

        if let Some(env) = &request.env {
            cmd.env_clear().envs(env);
        }

        if let Some(cwd) = &request.cwd {
            cmd.current_dir(cwd);
        }

        cmd
    }
}

impl Spawner for OsSpawner {
    type Child = Child;

    fn spawn(&self, request: SpawnRequest) -> Result<Child, SpawnError> {
        Ok(Self::command(&request).spawn()?)
    }
}

//! The process creation slot.
//!
//! A [`SpawnSlot`] holds "the function invoked whenever code wants a child
//! process". It starts unarmed, holding the original spawner. Activation
//! captures that spawner and replaces it with an [`Interceptor`] wrapping it.
//! There is no way back to the unarmed state.
//!
//! The process-wide slot behind [`spawn`], [`output`] and [`activate`] uses
//! [`OsSpawner`] as its original spawner.

use crate::error::{ActivationError, SpawnError};
use crate::interceptor::Interceptor;
use crate::request::{SpawnRequest, StdioMode};
use crate::resolver::AgentSource;
use crate::spawner::{OsSpawner, Spawner};
use std::process::{Child, Output};
use std::sync::{Arc, LazyLock, RwLock};

/// Process-wide creation slot.
static GLOBAL_SLOT: LazyLock<SpawnSlot> = LazyLock::new(SpawnSlot::default);

struct SlotState<C: 'static> {
    current: Arc<dyn Spawner<Child = C>>,
    armed: bool,
}

/// A replaceable process-creation function with an armed/unarmed flag.
pub struct SpawnSlot<C: 'static = Child> {
    state: RwLock<SlotState<C>>,
}

impl<C: 'static> SpawnSlot<C> {
    /// Create an unarmed slot holding `original`.
    pub fn new(original: Arc<dyn Spawner<Child = C>>) -> Self {
        Self {
            state: RwLock::new(SlotState {
                current: original,
                armed: false,
            }),
        }
    }

    /// Arm the slot: wrap the current spawner in an [`Interceptor`].
    ///
    /// Capture and install happen under one write lock, so concurrent
    /// activators are serialized and exactly one of them wins.
    ///
    /// # Errors
    ///
    /// `ActivationError::AlreadyArmed` if the slot already holds an
    /// interceptor. The slot is left untouched.
    pub fn activate(&self, source: AgentSource) -> Result<(), ActivationError> {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());

        if state.armed {
            tracing::warn!(source = source.kind(), "Spawn interception already armed");
            return Err(ActivationError::AlreadyArmed);
        }

        tracing::info!(source = source.kind(), "Arming spawn interception");

        let original = Arc::clone(&state.current);
        state.current = Arc::new(Interceptor::new(source, original));
        state.armed = true;

        Ok(())
    }

    /// Spawn through whatever the slot currently holds.
    ///
    /// The lock is released before the spawner runs, so spawns never wait on
    /// each other.
    pub fn spawn(&self, request: SpawnRequest) -> Result<C, SpawnError> {
        self.current().spawn(request)
    }

    /// Whether an interceptor has been installed.
    pub fn is_armed(&self) -> bool {
        self.state.read().unwrap_or_else(|e| e.into_inner()).armed
    }

    fn current(&self) -> Arc<dyn Spawner<Child = C>> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&state.current)
    }
}

impl SpawnSlot<Child> {
    /// Spawn with captured stdout/stderr and wait for the child to exit.
    ///
    /// Stdin defaults to the null device unless the request wired it
    /// explicitly. The wait runs on a blocking task, so the calling async
    /// task is never blocked.
    pub async fn output(&self, mut request: SpawnRequest) -> Result<Output, SpawnError> {
        request.stdout = StdioMode::Piped;
        request.stderr = StdioMode::Piped;
        if request.stdin == StdioMode::Inherit {
            request.stdin = StdioMode::Null;
        }

        let child = self.spawn(request)?;

        let output = tokio::task::spawn_blocking(move || child.wait_with_output())
            .await
            .map_err(std::io::Error::other)??;

        Ok(output)
    }
}

impl Default for SpawnSlot<Child> {
    fn default() -> Self {
        Self::new(Arc::new(OsSpawner))
    }
}

impl<C: 'static> std::fmt::Debug for SpawnSlot<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpawnSlot")
            .field("armed", &self.is_armed())
            .finish_non_exhaustive()
    }
}

/// Arm the process-wide creation slot.
///
/// Call once, before any other code spawns processes.
///
/// # Errors
///
/// `ActivationError::AlreadyArmed` on every call after the first successful one.
pub fn activate(source: AgentSource) -> Result<(), ActivationError> {
    GLOBAL_SLOT.activate(source)
}

/// Spawn a child through the process-wide creation slot.
pub fn spawn(request: SpawnRequest) -> Result<Child, SpawnError> {
    GLOBAL_SLOT.spawn(request)
}

/// Spawn through the process-wide slot and collect the child's output.
pub async fn output(request: SpawnRequest) -> Result<Output, SpawnError> {
    GLOBAL_SLOT.output(request).await
}

/// Whether the process-wide slot is armed.
pub fn is_armed() -> bool {
    GLOBAL_SLOT.is_armed()
}

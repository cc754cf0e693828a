//! Shared test utilities for the crate.

use crate::error::SpawnError;
use crate::request::SpawnRequest;
use crate::spawner::Spawner;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Counts how many requests reached a [`RecordingSpawner`].
///
/// Clones share the same counter.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    calls: Arc<AtomicUsize>,
}

impl Recorder {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

/// A spawner that creates no process and hands back the request it received.
#[derive(Debug, Default)]
pub struct RecordingSpawner {
    recorder: Recorder,
    fail_with: Option<std::io::ErrorKind>,
}

impl RecordingSpawner {
    pub fn new(recorder: Recorder) -> Self {
        Self {
            recorder,
            fail_with: None,
        }
    }

    /// A spawner whose every call fails like the OS would.
    pub fn failing(kind: std::io::ErrorKind) -> Self {
        Self {
            recorder: Recorder::default(),
            fail_with: Some(kind),
        }
    }
}

impl Spawner for RecordingSpawner {
    type Child = SpawnRequest;

    fn spawn(&self, request: SpawnRequest) -> Result<SpawnRequest, SpawnError> {
        self.recorder.calls.fetch_add(1, Ordering::SeqCst);
        match self.fail_with {
            Some(kind) => Err(std::io::Error::from(kind).into()),
            None => Ok(request),
        }
    }
}

//! The spawn wrapper installed by activation.

use crate::error::{ResolutionError, SpawnError};
use crate::request::SpawnRequest;
use crate::resolver::AgentSource;
use crate::rewrite::rewrite_request;
use crate::spawner::Spawner;
use std::sync::Arc;

/// Wraps the original spawner and injects agents into every request.
///
/// The wrapper only ever calls the spawner it captured, never the public
/// entry point, so it cannot recurse into itself.
pub struct Interceptor<C> {
    source: AgentSource,
    original: Arc<dyn Spawner<Child = C>>,
}

impl<C> Interceptor<C> {
    /// Wrap `original`, injecting the agents `source` resolves to.
    pub fn new(source: AgentSource, original: Arc<dyn Spawner<Child = C>>) -> Self {
        Self { source, original }
    }
}

impl<C> Spawner for Interceptor<C> {
    type Child = C;

    /// Resolve agents, rewrite the request, and delegate.
    ///
    /// # Errors
    ///
    /// - `SpawnError::Resolution` if agents can't be resolved; nothing is spawned
    /// - whatever the original spawner returns, unchanged
    fn spawn(&self, request: SpawnRequest) -> Result<C, SpawnError> {
        let command = request.command.clone();
        let refuse = |e: ResolutionError| {
            tracing::warn!(
                command = %command.display(),
                source = self.source.kind(),
                error = %e,
                "Refusing spawn, agent resolution failed"
            );
            e
        };

        let agents = self.source.resolve().map_err(refuse)?;

        let original_len = request.args.len();
        let had_env = request.env.is_some();
        let rewritten = rewrite_request(request, &agents).map_err(refuse)?;

        tracing::debug!(
            command = %rewritten.command.display(),
            agents = agents.len(),
            dropped_args = original_len + agents.len() - rewritten.args.len(),
            explicit_env = had_env,
            "Injecting agents into spawn"
        );

        self.original.spawn(rewritten)
    }
}

impl<C> std::fmt::Debug for Interceptor<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interceptor")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

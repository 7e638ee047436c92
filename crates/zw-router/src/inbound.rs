//! # Inbound Dispatch
//!
//! Bridges the transport/decoder boundary to the router: an async loop that
//! consumes decoded envelopes from a source and routes each one.

use crate::router::CommandRouter;
use crate::DEFAULT_QUEUE_CAPACITY;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::info;
use zw_types::ZwEnvelope;

/// Errors from inbound configuration validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The envelope queue must be able to hold at least one message.
    #[error("inbound queue capacity must be non-zero")]
    ZeroQueueCapacity,
}

/// Configuration for the inbound envelope queue.
#[derive(Debug, Clone)]
pub struct InboundConfig {
    /// Bounded capacity of the decoder → router queue. The decoder blocks
    /// (applies backpressure) when the router falls behind by this much.
    pub queue_capacity: usize,
}

impl Default for InboundConfig {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl InboundConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroQueueCapacity`] when the queue capacity
    /// is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.queue_capacity == 0 {
            return Err(ConfigError::ZeroQueueCapacity);
        }
        Ok(())
    }
}

/// Source of decoded envelopes (the inbound port of the router).
///
/// The production implementation is the receiving half of the decoder's
/// channel; tests substitute scripted sources.
#[async_trait]
pub trait EnvelopeSource: Send {
    /// Receive the next decoded envelope.
    ///
    /// # Returns
    ///
    /// - `Some(envelope)` - The next decoded message
    /// - `None` - The transport shut down; no further envelopes will arrive
    async fn next_envelope(&mut self) -> Option<ZwEnvelope>;
}

#[async_trait]
impl EnvelopeSource for mpsc::Receiver<ZwEnvelope> {
    async fn next_envelope(&mut self) -> Option<ZwEnvelope> {
        self.recv().await
    }
}

/// The async loop feeding a [`CommandRouter`] from an [`EnvelopeSource`].
///
/// Runs until the source is exhausted. Routing is synchronous per envelope,
/// so envelopes from one source are dispatched in arrival order; ordering
/// across handlers within one dispatch remains unspecified.
pub struct DispatchLoop<S> {
    /// Where decoded envelopes come from.
    source: S,
    /// The shared router instance.
    router: Arc<CommandRouter>,
}

impl<S: EnvelopeSource> DispatchLoop<S> {
    /// Create a dispatch loop over an existing source.
    pub fn new(source: S, router: Arc<CommandRouter>) -> Self {
        Self { source, router }
    }

    /// Run until the source reports shutdown.
    pub async fn run(mut self) {
        info!("Command dispatch loop started");

        while let Some(envelope) = self.source.next_envelope().await {
            self.router.route(&envelope);
        }

        info!("Transport closed, command dispatch loop exiting");
    }
}

impl DispatchLoop<mpsc::Receiver<ZwEnvelope>> {
    /// Build the decoder-facing sender and the dispatch loop in one step.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when `config` fails validation.
    pub fn channel(
        router: Arc<CommandRouter>,
        config: &InboundConfig,
    ) -> Result<(mpsc::Sender<ZwEnvelope>, Self), ConfigError> {
        config.validate()?;
        let (sender, receiver) = mpsc::channel(config.queue_capacity);
        Ok((sender, Self::new(receiver, router)))
    }
}

//! # Command Router
//!
//! Fans decoded commands out to every registered handler.

use crate::handler::DynCmdHandler;
use parking_lot::RwLock;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, trace, warn};
use zw_types::{Decoded, ZwEnvelope};

/// Registry key: allocation identity of the handler.
///
/// Two clones of one `Arc` share a key; two separately constructed handlers
/// never do, even when their types and state are equal.
type HandlerKey = usize;

fn handler_key(handler: &DynCmdHandler) -> HandlerKey {
    DynCmdHandler::as_ptr(handler) as *const () as usize
}

/// Routes decoded Z-Wave commands to registered handlers.
///
/// The router is a stateless dispatcher over a synchronized registry: it owns
/// no handler and keeps nothing per message. Construct one per controller at
/// subsystem startup and share it via `Arc` with the decoder feed and with
/// every module that registers handlers.
///
/// `route` may be called concurrently with registration from other threads.
/// Dispatch works on a snapshot of the registry: a handler added or removed
/// while a `route` call is in flight may or may not see that call's command.
/// This is the documented best-effort semantics, not a defect.
pub struct CommandRouter {
    /// Registered handlers by allocation identity.
    handlers: RwLock<HashMap<HandlerKey, DynCmdHandler>>,

    /// Total commands fanned out.
    commands_routed: AtomicU64,
}

impl CommandRouter {
    /// Create a new router with an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
            commands_routed: AtomicU64::new(0),
        }
    }

    /// Register a handler for future dispatches.
    ///
    /// Idempotent by identity: registering a clone of an already registered
    /// `Arc` has no additional effect.
    ///
    /// # Returns
    ///
    /// `true` when the handler was newly added, `false` when it was already
    /// registered.
    pub fn register_handler(&self, handler: DynCmdHandler) -> bool {
        let key = handler_key(&handler);
        let mut handlers = self.handlers.write();

        match handlers.entry(key) {
            Entry::Occupied(_) => {
                trace!(handler = handler.name(), "Handler already registered");
                false
            }
            Entry::Vacant(entry) => {
                debug!(handler = handler.name(), "Handler registered");
                entry.insert(handler);
                true
            }
        }
    }

    /// Remove a handler from the registry.
    ///
    /// No-op when the handler is not registered. A dispatch already in flight
    /// that snapshotted the registry before removal may still deliver one
    /// last command to the handler.
    ///
    /// # Returns
    ///
    /// `true` when the handler was present and removed.
    pub fn unregister_handler(&self, handler: &DynCmdHandler) -> bool {
        let removed = self.handlers.write().remove(&handler_key(handler));
        if removed.is_some() {
            debug!(handler = handler.name(), "Handler unregistered");
        }
        removed.is_some()
    }

    /// Get the number of registered handlers.
    #[must_use]
    pub fn handler_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// Get the total number of commands fanned out so far.
    #[must_use]
    pub fn commands_routed(&self) -> u64 {
        self.commands_routed.load(Ordering::Relaxed)
    }

    /// Dispatch one decoded envelope.
    ///
    /// Non-command messages and command frames without an extractable payload
    /// are skipped; they belong to other collaborators or carry nothing to
    /// deliver. Otherwise every currently registered handler receives the
    /// command with its originating node identifier, in unspecified order.
    ///
    /// Never fails: a handler error is logged under that handler's name and
    /// delivery continues with the remaining handlers.
    pub fn route(&self, envelope: &ZwEnvelope) {
        let cmd = match &envelope.decoded {
            Decoded::Cmd(Some(cmd)) => cmd,
            Decoded::Cmd(None) => {
                // Command-tagged but nothing to deliver.
                debug!(
                    home = %envelope.home_id,
                    node = %envelope.node_id,
                    "Command frame without payload, skipping"
                );
                return;
            }
            other => {
                trace!(
                    node = %envelope.node_id,
                    kind = ?other.kind(),
                    "Non-command message ignored by router"
                );
                return;
            }
        };

        // Snapshot under the read lock, dispatch outside it. Handlers can
        // re-enter the registry (e.g. unregister themselves) without
        // deadlocking, and registration never waits on a slow handler.
        let snapshot: Vec<DynCmdHandler> = self.handlers.read().values().cloned().collect();

        self.commands_routed.fetch_add(1, Ordering::Relaxed);

        if snapshot.is_empty() {
            debug!(
                node = %envelope.node_id,
                cmd = %cmd,
                "Command dropped (no handlers registered)"
            );
            return;
        }

        trace!(
            node = %envelope.node_id,
            cmd = %cmd,
            handlers = snapshot.len(),
            "Dispatching command"
        );

        for handler in snapshot {
            if let Err(e) = handler.process_cmd(envelope.node_id, cmd) {
                warn!(
                    handler = handler.name(),
                    node = %envelope.node_id,
                    cmd = %cmd,
                    error = %e,
                    "Command handler failed"
                );
            }
        }
    }
}

impl Default for CommandRouter {
    fn default() -> Self {
        Self::new()
    }
}

//! # Command Handler Capability
//!
//! The contract handler modules implement to receive dispatched commands.

use std::sync::Arc;
use zw_types::{HandlerError, NodeId, ZwCommand};

/// A registered capability that reacts to dispatched commands.
///
/// Implementations live in external modules (device drivers, scene engines,
/// diagnostics); the router only holds shared references to them.
///
/// Implementations must not depend on fanout order, and should treat each
/// delivery as at-most-once: the router never retries a failed handler.
pub trait CmdHandler: Send + Sync {
    /// Short name used to attribute log lines to this handler.
    fn name(&self) -> &'static str;

    /// Process one command originating from `node_id`.
    ///
    /// # Errors
    ///
    /// Returns a [`HandlerError`] when the command cannot be processed. The
    /// error is logged by the dispatch site and not propagated further.
    fn process_cmd(&self, node_id: NodeId, cmd: &ZwCommand) -> Result<(), HandlerError>;
}

/// A shared, type-erased handler reference as stored in the registry.
pub type DynCmdHandler = Arc<dyn CmdHandler>;

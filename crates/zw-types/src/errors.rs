//! # Error Types
//!
//! Defines error types shared across the Z-Wave subsystem.

use crate::entities::NodeId;
use thiserror::Error;

/// Errors a command handler can report while processing a dispatched command.
///
/// These never propagate past the dispatch site; the router logs them and
/// continues with the remaining handlers.
#[derive(Debug, Clone, Error)]
pub enum HandlerError {
    /// The handler does not implement this command class.
    #[error("unsupported command class 0x{command_class:02x}")]
    UnsupportedCommandClass { command_class: u8 },

    /// The handler has no record of the originating node.
    #[error("node {node_id} not known to this handler")]
    UnknownNode { node_id: NodeId },

    /// The handler understood the command but could not apply it.
    #[error("command rejected: {0}")]
    Rejected(String),
}

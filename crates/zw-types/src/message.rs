//! # Decoded Message Envelope
//!
//! The typed result of frame decoding, as handed from the decoder to the
//! command router.
//!
//! ## Contract
//!
//! - The decoder constructs one [`ZwEnvelope`] per received frame.
//! - Consumers receive envelopes by shared reference and never mutate them.
//! - Only [`Decoded::Cmd`] messages concern the command router; the other
//!   kinds are consumed by the node-management and transport collaborators.

use crate::entities::{HomeId, NodeId, ZwCommand};
use serde::{Deserialize, Serialize};

/// The result of decoding a raw mesh frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decoded {
    /// An application command issued by a node.
    ///
    /// `None` when the frame was command-tagged but the decoder could not
    /// extract a payload (truncated frame or unsupported encapsulation).
    Cmd(Option<ZwCommand>),

    /// Link-layer acknowledgement for a previously sent frame.
    Ack,

    /// A node advertised its device classes.
    NodeInfo {
        /// Generic device class byte.
        generic_class: u8,
        /// Specific device class byte.
        specific_class: u8,
        /// Command classes the node reports supporting.
        command_classes: Vec<u8>,
    },

    /// The decoder could not classify the frame. Raw bytes retained for
    /// diagnostics.
    Unknown {
        /// The undecodable frame.
        frame: Vec<u8>,
    },
}

impl Decoded {
    /// Get the kind discriminant for this decoded message (for routing).
    #[must_use]
    pub fn kind(&self) -> DecodedKind {
        match self {
            Self::Cmd(_) => DecodedKind::Cmd,
            Self::Ack => DecodedKind::Ack,
            Self::NodeInfo { .. } => DecodedKind::NodeInfo,
            Self::Unknown { .. } => DecodedKind::Unknown,
        }
    }

    /// The command payload, if this is a command message that carries one.
    #[must_use]
    pub fn command(&self) -> Option<&ZwCommand> {
        match self {
            Self::Cmd(cmd) => cmd.as_ref(),
            _ => None,
        }
    }
}

/// Kind discriminants for [`Decoded`] messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecodedKind {
    /// Application command traffic.
    Cmd,
    /// Link-layer acknowledgements.
    Ack,
    /// Node capability advertisements.
    NodeInfo,
    /// Unclassifiable frames.
    Unknown,
}

/// One decoded message together with its mesh origin.
///
/// Immutable once constructed; the decoder is the only producer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZwEnvelope {
    /// Network the frame was received on.
    pub home_id: HomeId,
    /// Originating device on the mesh.
    pub node_id: NodeId,
    /// The decoded message.
    pub decoded: Decoded,
}

impl ZwEnvelope {
    /// Wrap a decoded message with its origin.
    pub fn new(home_id: HomeId, node_id: NodeId, decoded: Decoded) -> Self {
        Self {
            home_id,
            node_id,
            decoded,
        }
    }

    /// Convenience constructor for a command envelope.
    pub fn command(home_id: HomeId, node_id: NodeId, cmd: ZwCommand) -> Self {
        Self::new(home_id, node_id, Decoded::Cmd(Some(cmd)))
    }
}

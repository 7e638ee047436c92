//! # Core Domain Entities
//!
//! Identifiers and the decoded application command carried by Z-Wave traffic.
//!
//! ## Clusters
//!
//! - **Addressing**: [`NodeId`], [`HomeId`]
//! - **Application Layer**: [`ZwCommand`], [`command_class`]

use serde::{Deserialize, Serialize};
use std::fmt;

/// Address of a device on the Z-Wave mesh.
///
/// The protocol uses 8-bit node identifiers; 1–232 address real devices,
/// 255 is the broadcast address.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct NodeId(pub u8);

impl NodeId {
    /// Highest node identifier assignable to a paired device.
    pub const MAX_ASSIGNABLE: NodeId = NodeId(232);

    /// The broadcast address.
    pub const BROADCAST: NodeId = NodeId(0xFF);
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for NodeId {
    fn from(raw: u8) -> Self {
        NodeId(raw)
    }
}

/// Identifier of a Z-Wave network.
///
/// All nodes paired to one controller share its 32-bit home identifier.
/// Displayed as 8-digit hex, matching controller tooling conventions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct HomeId(pub u32);

impl fmt::Display for HomeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}

impl From<u32> for HomeId {
    fn from(raw: u32) -> Self {
        HomeId(raw)
    }
}

/// Command class identifiers referenced by the subsystem's logs and tests.
///
/// Handlers interpret the full class space; only the classes the workspace
/// itself names are listed here.
pub mod command_class {
    /// Basic set/get/report.
    pub const BASIC: u8 = 0x20;
    /// Binary switch control.
    pub const SWITCH_BINARY: u8 = 0x25;
    /// Binary sensor reports.
    pub const SENSOR_BINARY: u8 = 0x30;
    /// Accumulated consumption metering.
    pub const METER: u8 = 0x32;
    /// Battery level reports.
    pub const BATTERY: u8 = 0x80;
    /// Wake-up notifications from sleeping devices.
    pub const WAKE_UP: u8 = 0x84;
}

/// A decoded application-level command.
///
/// This is the payload the router fans out to handlers. The router treats it
/// as opaque; the `command_class`/`command` pair selects the handler-side
/// interpretation of `payload`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZwCommand {
    /// Command class byte (functional area, e.g. switching or metering).
    pub command_class: u8,
    /// Command byte within the class (e.g. SET, GET, REPORT).
    pub command: u8,
    /// Remaining command bytes, uninterpreted at this layer.
    pub payload: Vec<u8>,
}

impl ZwCommand {
    /// Create a command with a payload.
    pub fn new(command_class: u8, command: u8, payload: Vec<u8>) -> Self {
        Self {
            command_class,
            command,
            payload,
        }
    }

    /// Create a command without payload bytes (e.g. a GET).
    pub fn bare(command_class: u8, command: u8) -> Self {
        Self::new(command_class, command, Vec::new())
    }

    /// The `(command_class, command)` pair identifying this command.
    #[must_use]
    pub fn key(&self) -> (u8, u8) {
        (self.command_class, self.command)
    }
}

impl fmt::Display for ZwCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{:02x}/0x{:02x} ({} payload bytes)",
            self.command_class,
            self.command,
            self.payload.len()
        )
    }
}

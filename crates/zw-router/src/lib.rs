//! # ZW Router - Command Fanout for the Z-Wave Subsystem
//!
//! Routes decoded Z-Wave commands to registered handler modules.
//!
//! ## Position in the Subsystem
//!
//! ```text
//! ┌──────────────┐                       ┌──────────────┐
//! │   Decoder    │                       │  Handler A   │
//! │  (external)  │   ZwEnvelope          │  (external)  │
//! │              │ ──────┐               └──────────────┘
//! └──────────────┘       │                      ↑
//!                        ▼                      │ process_cmd()
//!                  ┌──────────────┐             │
//!                  │CommandRouter │ ────────────┤
//!                  │              │             │
//!                  └──────────────┘             ▼
//!                        ↑               ┌──────────────┐
//!          register_handler()            │  Handler B   │
//!                                        │  (external)  │
//!                                        └──────────────┘
//! ```
//!
//! ## Dispatch Contract
//!
//! - Only envelopes decoded as commands are dispatched; every other decoded
//!   kind is skipped here and consumed by other collaborators.
//! - Every handler registered for the whole duration of a `route` call is
//!   invoked exactly once for that command; fanout order is unspecified.
//! - A handler failure is logged and never blocks delivery to the rest.
//!
//! The router is constructed explicitly at subsystem startup and shared via
//! `Arc`; there is no process-wide instance.

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod handler;
pub mod inbound;
pub mod router;

// Re-export main types
pub use handler::{CmdHandler, DynCmdHandler};
pub use inbound::{ConfigError, DispatchLoop, EnvelopeSource, InboundConfig};
pub use router::CommandRouter;

/// Default capacity of the bounded inbound envelope queue.
pub const DEFAULT_QUEUE_CAPACITY: usize = 256;

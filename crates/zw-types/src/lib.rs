//! # ZW Types Crate
//!
//! This crate contains the decoded Z-Wave message model shared by the frame
//! decoder, the command router, and the handler modules.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All types crossing the decoder → router →
//!   handler boundaries are defined here.
//! - **Immutable Envelopes**: A [`ZwEnvelope`] is constructed once by the
//!   decoder and only ever handed out by shared reference.
//! - **Opaque Payloads**: The router inspects a [`Decoded`] only deep enough
//!   to classify it; command payload bytes are interpreted by handlers alone.

pub mod entities;
pub mod errors;
pub mod message;

pub use entities::*;
pub use errors::*;
pub use message::{Decoded, DecodedKind, ZwEnvelope};

//! # Integration Tests
//!
//! Cross-crate tests exercising the router through its public surface.

pub mod concurrency;

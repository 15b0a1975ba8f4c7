//! Utility modules shared across the application.
//!
//! - [`base62`] - Deterministic short code codec and reserved-code policy

pub mod base62;

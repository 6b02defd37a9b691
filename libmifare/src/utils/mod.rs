//! Utilities for libmifare: small, reusable helpers used across the crate.
//!
//! Hex formatting for logs and display, timeout defaults for the discovery
//! wait, and the cancellation token handed to blocking operations.

pub mod cancel;
pub mod hex;
pub mod timeout;

pub use cancel::CancellationToken;
pub use hex::*;
pub use timeout::*;

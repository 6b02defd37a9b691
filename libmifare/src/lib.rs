// libmifare/src/lib.rs

//! libmifare
//!
//! MIFARE Classic and Ultralight data access through an NXP PN532
//! contactless reader. The reader bus itself is abstracted behind
//! [`transport::Transport`].
#![warn(missing_docs)]

pub mod card;
pub mod constants;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod reader;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;

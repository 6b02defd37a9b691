// libmifare/src/card/operations/mod.rs

pub mod auth;
pub mod classic;
pub mod ultralight;

pub use auth::authenticate;

use crate::constants::MAX_BLOCKS;
use crate::{Error, Result};

/// Reject addresses past the last block/page before touching the transport.
pub(crate) fn check_address(address: u8) -> Result<()> {
    if address >= MAX_BLOCKS {
        return Err(Error::InvalidBlockAddress { address });
    }
    Ok(())
}

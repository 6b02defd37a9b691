// libmifare/src/card/operations/auth.rs

use log::warn;

use crate::constants::AUTH_RESPONSE_LEN;
use crate::protocol::{Command, responses};
use crate::reader::{Configured, Reader};
use crate::{Error, Result};

/// Authenticate one Classic block with the session's active key against
/// the current target's UID.
pub fn authenticate(reader: &mut Reader<Configured>, block: u8) -> Result<()> {
    let uid = *reader.target().ok_or(Error::NoTarget { found: 0 })?.uid();
    let slot = reader.keys().active;
    let cmd = Command::Authenticate {
        slot,
        block,
        key: *reader.keys().active_key(),
        uid,
    };

    let frame = reader.exchange(&cmd, AUTH_RESPONSE_LEN)?;
    responses::decode_authenticate(&frame, block).inspect_err(|e| {
        if matches!(e, Error::AuthenticationFailed { .. }) {
            warn!("authentication failed for block {} with key {}", block, slot);
        }
    })
}

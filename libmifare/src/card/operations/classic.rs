// libmifare/src/card/operations/classic.rs

use log::trace;

use crate::card::operations::{auth, check_address};
use crate::constants::{CLASSIC_READ_RESPONSE_LEN, WRITE_RESPONSE_LEN};
use crate::protocol::{Command, responses};
use crate::reader::{Configured, Reader};
use crate::types::BlockData;
use crate::Result;

/// Authenticate and read one 16-byte Classic block.
pub fn read_block(reader: &mut Reader<Configured>, address: u8) -> Result<BlockData> {
    check_address(address)?;
    auth::authenticate(reader, address)?;

    let frame = reader.exchange(&Command::Read { address }, CLASSIC_READ_RESPONSE_LEN)?;
    let block = responses::decode_classic_read(&frame)?;
    trace!("read block {:02}: {}", address, block.to_hex());
    Ok(block)
}

/// Authenticate and write one 16-byte Classic block.
///
/// Trailer addresses are not refused here; callers writing raw trailers
/// are responsible for valid access bits.
pub fn write_block(reader: &mut Reader<Configured>, address: u8, data: &BlockData) -> Result<()> {
    check_address(address)?;
    auth::authenticate(reader, address)?;

    let cmd = Command::WriteBlock {
        address,
        data: *data,
    };
    let frame = reader.exchange(&cmd, WRITE_RESPONSE_LEN)?;
    responses::decode_status(&frame)?;
    trace!("wrote block {:02}: {}", address, data.to_hex());
    Ok(())
}

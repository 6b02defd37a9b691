// libmifare/src/protocol/responses/exchange.rs

use crate::constants::{CLASSIC_BLOCK_LEN, IN_DATA_EXCHANGE_OK, RESP_DATA_OFFSET, ULTRALIGHT_PAGE_LEN};
use crate::protocol::parser;
use crate::types::{BlockData, PageData};
use crate::{Error, ResponseError, Result};

/// Decode a bare InDataExchange status reply (write commands)
/// Layout: header(6) + code 0x41 + status 0x00
pub fn decode_status(frame: &[u8]) -> Result<()> {
    parser::expect_status(frame, IN_DATA_EXCHANGE_OK)
}

/// Decode the reply to a key authentication. A well-formed frame with the
/// wrong status means the card rejected the key.
pub fn decode_authenticate(frame: &[u8], block: u8) -> Result<()> {
    match decode_status(frame) {
        Err(Error::UnexpectedResponse(ResponseError::Status { .. })) => {
            Err(Error::AuthenticationFailed { block })
        }
        other => other,
    }
}

/// Decode a Classic READ reply: status pair then one 16-byte block at 8..24
pub fn decode_classic_read(frame: &[u8]) -> Result<BlockData> {
    decode_status(frame)?;
    parser::ensure_len(frame, RESP_DATA_OFFSET + CLASSIC_BLOCK_LEN)?;
    let block = parser::array_at::<CLASSIC_BLOCK_LEN>(frame, RESP_DATA_OFFSET)?;
    Ok(BlockData::from_bytes(block))
}

/// Decode an Ultralight READ reply. The reader returns four pages
/// (16 bytes); only the addressed page at 8..12 is kept.
pub fn decode_ultralight_read(frame: &[u8]) -> Result<PageData> {
    decode_status(frame)?;
    let page = parser::array_at::<ULTRALIGHT_PAGE_LEN>(frame, RESP_DATA_OFFSET)?;
    Ok(PageData::from_bytes(page))
}

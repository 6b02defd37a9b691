// libmifare/src/protocol/parser.rs

use crate::constants::{RESP_CODE_OFFSET, RESP_STATUS_OFFSET};
use crate::{Error, ResponseError, Result};

/// Ensure the slice has at least `min` bytes.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::too_short(min, data.len()));
    }
    Ok(())
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Copy a fixed-size array out of the frame at `idx`.
pub fn array_at<const N: usize>(data: &[u8], idx: usize) -> Result<[u8; N]> {
    let s = slice_at(data, idx, N)?;
    let mut out = [0u8; N];
    out.copy_from_slice(s);
    Ok(out)
}

/// Ensure the response code byte equals `expected`.
pub fn expect_response_code(frame: &[u8], expected: u8) -> Result<()> {
    let actual = byte_at(frame, RESP_CODE_OFFSET)?;
    if actual != expected {
        return Err(ResponseError::ResponseCode { expected, actual }.into());
    }
    Ok(())
}

/// Read the (response code, status) pair shared by InDataExchange replies.
pub fn status_pair(frame: &[u8]) -> Result<(u8, u8)> {
    Ok((
        byte_at(frame, RESP_CODE_OFFSET)?,
        byte_at(frame, RESP_STATUS_OFFSET)?,
    ))
}

/// Ensure the status pair equals `expected`.
pub fn expect_status(frame: &[u8], expected: (u8, u8)) -> Result<()> {
    let actual = status_pair(frame)?;
    if actual != expected {
        return Err(ResponseError::Status { expected, actual }.into());
    }
    Ok(())
}

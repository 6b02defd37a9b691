// libmifare/src/error.rs

use thiserror::Error;

use crate::types::CardType;

/// Common error type
#[derive(Error, Debug)]
pub enum Error {
    /// The reader did not acknowledge a command frame.
    #[error("transport unavailable: command not acknowledged")]
    TransportUnavailable,

    #[error("transport i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("operation timed out")]
    Timeout,

    #[error("operation cancelled")]
    Cancelled,

    #[error("unexpected response: {0}")]
    UnexpectedResponse(#[from] ResponseError),

    #[error("no target: reader reported {found} tag(s)")]
    NoTarget { found: u8 },

    #[error("authentication failed for block {block}")]
    AuthenticationFailed { block: u8 },

    #[error("invalid block address {address}")]
    InvalidBlockAddress { address: u8 },

    #[error("unsupported card type: {0}")]
    UnsupportedCardType(CardType),

    #[error("payload too large: {len} bytes, card holds {capacity}")]
    PayloadTooLarge { len: usize, capacity: usize },

    /// A frame body does not fit the one-byte LEN field.
    #[error("frame body too long: {len} bytes, at most {max}")]
    FrameTooLong { len: usize, max: usize },
}

/// Reasons a response frame was rejected by a decoder.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResponseError {
    #[error("frame too short: expected {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },

    #[error("response code: expected {expected:#04x}, got {actual:#04x}")]
    ResponseCode { expected: u8, actual: u8 },

    #[error("status: expected {expected:02x?}, got {actual:02x?}")]
    Status { expected: (u8, u8), actual: (u8, u8) },

    #[error("uid length {0} out of range")]
    UidLength(u8),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Shorthand used by the decoders for short frames.
    pub(crate) fn too_short(expected: usize, actual: usize) -> Self {
        Error::UnexpectedResponse(ResponseError::TooShort { expected, actual })
    }
}

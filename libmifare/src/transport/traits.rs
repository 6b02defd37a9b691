// libmifare/src/transport/traits.rs

use crate::Result;

/// Ready/busy line reported by the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderStatus {
    Busy,
    Ready,
}

/// Transport trait abstracts the reader bus (SPI, I2C, UART, USB) away
/// from protocol logic. Implementations own framing, checksums and any
/// bus-level retries; this crate only sees command payloads and raw
/// response frames.
pub trait Transport {
    /// Send a command payload (command code + params) and wait for the
    /// reader's ACK frame. Returns `Ok(false)` when no ACK arrived.
    fn send_command(&mut self, command: &[u8]) -> Result<bool>;

    /// Report whether a response frame is ready to be read.
    fn poll_status(&mut self) -> Result<ReaderStatus>;

    /// Read a raw response frame of (up to) `expected_len` bytes,
    /// including the frame header.
    fn read_response(&mut self, expected_len: usize) -> Result<Vec<u8>>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send_command(&mut self, command: &[u8]) -> Result<bool> {
        (**self).send_command(command)
    }

    fn poll_status(&mut self) -> Result<ReaderStatus> {
        (**self).poll_status()
    }

    fn read_response(&mut self, expected_len: usize) -> Result<Vec<u8>> {
        (**self).read_response(expected_len)
    }
}

// libmifare/src/transport/mock.rs

use crate::transport::traits::{ReaderStatus, Transport};
use crate::{Error, Result};

/// Mock transport for unit tests. It records sent payloads and returns queued responses.
#[derive(Debug)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub responses: Vec<Vec<u8>>,
    /// Queued results for `send_command`; an empty queue acknowledges.
    pub acks: Vec<bool>,
    /// Queued results for `poll_status`; once drained `idle_status` is returned.
    pub statuses: Vec<ReaderStatus>,
    pub idle_status: ReaderStatus,
    /// Number of `poll_status` calls seen
    pub polls: usize,
    /// Record of `expected_len` for each `read_response` call
    pub reads: Vec<usize>,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            sent: Vec::new(),
            responses: Vec::new(),
            acks: Vec::new(),
            statuses: Vec::new(),
            idle_status: ReaderStatus::Ready,
            polls: 0,
            reads: Vec::new(),
        }
    }

    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(resp);
    }

    pub fn push_ack(&mut self, ack: bool) {
        self.acks.push(ack);
    }

    pub fn push_status(&mut self, status: ReaderStatus) {
        self.statuses.push(status);
    }

    /// Make the reader look permanently busy once queued statuses drain.
    pub fn set_idle_status(&mut self, status: ReaderStatus) {
        self.idle_status = status;
    }
}

impl Transport for MockTransport {
    fn send_command(&mut self, command: &[u8]) -> Result<bool> {
        self.sent.push(command.to_vec());
        if self.acks.is_empty() {
            Ok(true)
        } else {
            Ok(self.acks.remove(0))
        }
    }

    fn poll_status(&mut self) -> Result<ReaderStatus> {
        self.polls += 1;
        if self.statuses.is_empty() {
            Ok(self.idle_status)
        } else {
            Ok(self.statuses.remove(0))
        }
    }

    fn read_response(&mut self, expected_len: usize) -> Result<Vec<u8>> {
        self.reads.push(expected_len);
        if self.responses.is_empty() {
            Err(Error::Timeout)
        } else {
            Ok(self.responses.remove(0))
        }
    }
}

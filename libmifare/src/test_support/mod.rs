//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize response-frame fixtures and reader setup so
//! tests across the crate and tests/ directory build sessions the same way.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::protocol::Frame;
use crate::reader::{Configured, Reader};
use crate::transport::mock::MockTransport;
use crate::transport::{ReaderStatus, Transport};
use crate::Result;

mod simulated;
pub use simulated::SimulatedCard;

/// Response frame from the reader. Fixture bodies are far below the frame
/// limit, so an encoding failure yields an empty frame that decoders reject.
#[doc(hidden)]
pub fn response_frame(code: u8, data: &[u8]) -> Vec<u8> {
    Frame::response(code, data).unwrap_or_default()
}

/// SAMConfiguration success (0x15)
#[doc(hidden)]
pub fn sam_ok_frame() -> Vec<u8> {
    response_frame(0x15, &[])
}

/// InListPassiveTarget reply with one target
#[doc(hidden)]
pub fn target_frame(sens_res: [u8; 2], sel_res: u8, uid: &[u8]) -> Vec<u8> {
    let mut data = vec![0x01, 0x01];
    data.extend_from_slice(&sens_res);
    data.push(sel_res);
    data.push(uid.len() as u8);
    data.extend_from_slice(uid);
    response_frame(0x4B, &data)
}

#[doc(hidden)]
pub fn classic_target_frame(uid: &[u8]) -> Vec<u8> {
    target_frame([0x00, 0x04], 0x08, uid)
}

#[doc(hidden)]
pub fn ultralight_target_frame(uid: &[u8]) -> Vec<u8> {
    target_frame([0x00, 0x44], 0x00, uid)
}

/// InDataExchange success without data (auth, write)
#[doc(hidden)]
pub fn status_ok_frame() -> Vec<u8> {
    response_frame(0x41, &[0x00])
}

/// InDataExchange success carrying block/page data
#[doc(hidden)]
pub fn block_read_frame(data: &[u8]) -> Vec<u8> {
    let mut body = vec![0x00];
    body.extend_from_slice(data);
    response_frame(0x41, &body)
}

/// Transport handle sharing its inner transport with the test, so the
/// test can inspect sent commands after the reader took ownership.
pub struct SharedTransport<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> SharedTransport<T> {
    pub fn new(inner: Rc<RefCell<T>>) -> Self {
        Self { inner }
    }
}

impl<T: Transport> Transport for SharedTransport<T> {
    fn send_command(&mut self, command: &[u8]) -> Result<bool> {
        self.inner.borrow_mut().send_command(command)
    }

    fn poll_status(&mut self) -> Result<ReaderStatus> {
        self.inner.borrow_mut().poll_status()
    }

    fn read_response(&mut self, expected_len: usize) -> Result<Vec<u8>> {
        self.inner.borrow_mut().read_response(expected_len)
    }
}

/// Build a MockTransport pre-seeded with the given framed responses and
/// return it boxed as a Transport trait object.
#[doc(hidden)]
pub fn boxed_mock_with_responses(responses: Vec<Vec<u8>>) -> Box<dyn Transport> {
    let mut mock = MockTransport::new();
    for resp in responses {
        mock.push_response(resp);
    }
    Box::new(mock)
}

/// Convenience: create and configure a Reader backed by a MockTransport.
/// The SAM reply is queued first; `responses` follow in order.
#[doc(hidden)]
pub fn configured_mock_reader(responses: Vec<Vec<u8>>) -> Result<Reader<Configured>> {
    let mut frames = vec![sam_ok_frame()];
    frames.extend(responses);
    Reader::new_with_transport(boxed_mock_with_responses(frames)).configure()
}

/// Like `configured_mock_reader`, but keeps a handle on the mock.
#[doc(hidden)]
pub fn configured_shared_reader(
    responses: Vec<Vec<u8>>,
) -> Result<(Reader<Configured>, Rc<RefCell<MockTransport>>)> {
    let mock = Rc::new(RefCell::new(MockTransport::new()));
    {
        let mut m = mock.borrow_mut();
        m.push_response(sam_ok_frame());
        for resp in responses {
            m.push_response(resp);
        }
    }
    let reader = Reader::new_with_transport(Box::new(SharedTransport::new(mock.clone())));
    Ok((reader.configure()?, mock))
}

/// Configured reader in front of a simulated card.
#[doc(hidden)]
pub fn simulated_reader(
    card: SimulatedCard,
) -> Result<(Reader<Configured>, Rc<RefCell<SimulatedCard>>)> {
    let card = Rc::new(RefCell::new(card));
    let reader = Reader::new_with_transport(Box::new(SharedTransport::new(card.clone())));
    Ok((reader.configure()?, card))
}

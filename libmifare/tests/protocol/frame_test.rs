use libmifare::constants::{PN532_TFI_DEVICE, RESP_CODE_OFFSET};
use libmifare::Error;
use libmifare::protocol::{Frame, dcs, lcs};

use crate::common::fixtures;

#[test]
fn sam_reply_matches_known_bytes() {
    let frame = Frame::response(0x15, &[]).unwrap();
    assert_eq!(frame, fixtures::hex_bytes("00 00 ff 02 fe d5 15 16 00"));
}

#[test]
fn checksums_close_the_frame() {
    let frame = Frame::response(0x41, &[0x00, 0x01, 0x02]).unwrap();
    let len = frame[3];
    assert_eq!(len.wrapping_add(frame[4]), 0);
    assert_eq!(lcs(len), frame[4]);
    assert_eq!(frame[5], PN532_TFI_DEVICE);
    assert_eq!(frame[RESP_CODE_OFFSET], 0x41);

    let body_end = 5 + len as usize;
    assert_eq!(dcs(&frame[5..body_end]), frame[body_end]);
}

#[test]
fn long_response_body_is_a_frame_error() {
    // code byte plus 254 data bytes exceeds the LEN field
    let err = Frame::response(0x41, &[0u8; 254]).unwrap_err();
    assert!(matches!(err, Error::FrameTooLong { len: 255, max: 254 }));
    assert!(!matches!(err, Error::PayloadTooLarge { .. }));
}

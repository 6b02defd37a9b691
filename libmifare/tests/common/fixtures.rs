// fixtures.rs — commonly used UIDs, keys and reader frames

use libmifare::protocol::Frame;
use libmifare::types::Key;

pub const CLASSIC_UID: [u8; 4] = [0xDE, 0xAD, 0xBE, 0xEF];
pub const ULTRALIGHT_UID: [u8; 7] = [0x04, 0x51, 0x7C, 0xA2, 0x3B, 0x6E, 0x80];

/// Key A a Classic sector carries after the payload footer is written
pub fn nfc_public_key() -> Key {
    Key::from_bytes([0xD3, 0xF7, 0xD3, 0xF7, 0xD3, 0xF7])
}

/// Decode a hex fixture such as "d5 4b 01".
pub fn hex_bytes(s: &str) -> Vec<u8> {
    let compact: String = s.split_whitespace().collect();
    hex::decode(compact).unwrap()
}

/// Full InListPassiveTarget reply for the Classic sample card
pub fn classic_discovery_frame() -> Vec<u8> {
    Frame::response(0x4B, &hex_bytes("01 01 00 04 08 04 de ad be ef")).unwrap()
}

pub fn ultralight_discovery_frame() -> Vec<u8> {
    let mut data = hex_bytes("01 01 00 44 00 07");
    data.extend_from_slice(&ULTRALIGHT_UID);
    Frame::response(0x4B, &data).unwrap()
}

pub fn status_frame(status: u8) -> Vec<u8> {
    Frame::response(0x41, &[status]).unwrap()
}

pub fn sample_payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 7 + 3) as u8).collect()
}

// libmifare/src/protocol/commands/exchange.rs
//
// InDataExchange payloads. Byte 1 is the logical target number, always 1
// since only one target is ever listed.

use crate::constants::{
    MIFARE_CMD_READ, MIFARE_CMD_WRITE, MIFARE_ULTRALIGHT_CMD_WRITE, PN532_CMD_IN_DATA_EXCHANGE,
};
use crate::types::{BlockData, Key, KeySlot, PageData, Uid};

const TARGET_NUMBER: u8 = 0x01;

/// Layout: cmd + tg + auth(A/B) + block + key(6) + uid(n)
pub fn encode_authenticate(slot: KeySlot, block: u8, key: &Key, uid: &Uid) -> Vec<u8> {
    let mut buf = Vec::with_capacity(10 + uid.len());
    buf.push(PN532_CMD_IN_DATA_EXCHANGE);
    buf.push(TARGET_NUMBER);
    buf.push(slot.auth_opcode());
    buf.push(block);
    buf.extend_from_slice(key.as_bytes());
    buf.extend_from_slice(uid.as_bytes());
    buf
}

/// Layout: cmd + tg + READ + address (Classic block or Ultralight page)
pub fn encode_read(address: u8) -> Vec<u8> {
    vec![
        PN532_CMD_IN_DATA_EXCHANGE,
        TARGET_NUMBER,
        MIFARE_CMD_READ,
        address,
    ]
}

/// Layout: cmd + tg + WRITE + address + block(16)
pub fn encode_write_block(address: u8, data: &BlockData) -> Vec<u8> {
    let mut buf = Vec::with_capacity(4 + 16);
    buf.extend_from_slice(&[
        PN532_CMD_IN_DATA_EXCHANGE,
        TARGET_NUMBER,
        MIFARE_CMD_WRITE,
        address,
    ]);
    buf.extend_from_slice(data.as_bytes());
    buf
}

/// Layout: cmd + tg + ULTRALIGHT_WRITE + address + page(4)
pub fn encode_write_page(address: u8, data: &PageData) -> Vec<u8> {
    let mut buf = Vec::with_capacity(4 + 4);
    buf.extend_from_slice(&[
        PN532_CMD_IN_DATA_EXCHANGE,
        TARGET_NUMBER,
        MIFARE_ULTRALIGHT_CMD_WRITE,
        address,
    ]);
    buf.extend_from_slice(data.as_bytes());
    buf
}

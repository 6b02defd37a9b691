// libmifare/src/constants.rs
//! Common protocol constants used across the crate

/// PN532 host->device (D4) and device->host (D5) frame identifiers
pub const PN532_TFI_HOST: u8 = 0xD4;
pub const PN532_TFI_DEVICE: u8 = 0xD5;

/// PN532 wire frame preamble / start code: 0x00 0x00 0xFF
pub const PN532_PREAMBLE: [u8; 3] = [0x00, 0x00, 0xFF];
pub const PN532_POSTAMBLE: u8 = 0x00;
/// LEN is one byte and counts the TFI, leaving 254 bytes of body.
pub const PN532_MAX_FRAME_BODY: usize = 254;

/// PN532 command codes used by this crate
pub const PN532_CMD_SAM_CONFIGURATION: u8 = 0x14;
pub const PN532_CMD_IN_LIST_PASSIVE_TARGET: u8 = 0x4A;
pub const PN532_CMD_IN_DATA_EXCHANGE: u8 = 0x40;

/// SAMConfiguration parameters: normal mode, 20 x 50ms timeout, use IRQ pin
pub const SAM_MODE_NORMAL: u8 = 0x01;
pub const SAM_TIMEOUT_1S: u8 = 0x14;
pub const SAM_USE_IRQ: u8 = 0x01;

/// InListPassiveTarget baud rate for 106 kbps ISO14443 type A
pub const BAUD_ISO14443A: u8 = 0x00;

/// MIFARE opcodes carried inside InDataExchange
pub const MIFARE_CMD_AUTH_A: u8 = 0x60;
pub const MIFARE_CMD_AUTH_B: u8 = 0x61;
pub const MIFARE_CMD_READ: u8 = 0x30;
pub const MIFARE_CMD_WRITE: u8 = 0xA0;
pub const MIFARE_ULTRALIGHT_CMD_WRITE: u8 = 0xA2;

/// Response frame offsets. Every response starts with
/// preamble(3) + LEN + LCS + TFI, so the response code sits at 6.
pub const RESP_CODE_OFFSET: usize = 6;
pub const RESP_STATUS_OFFSET: usize = 7;
pub const RESP_TAG_COUNT_OFFSET: usize = 7;
pub const RESP_SENS_RES_OFFSET: usize = 9;
pub const RESP_SEL_RES_OFFSET: usize = 11;
pub const RESP_UID_LEN_OFFSET: usize = 12;
pub const RESP_UID_OFFSET: usize = 13;
pub const RESP_DATA_OFFSET: usize = 8;

/// Expected response-code/status pair for a successful InDataExchange
pub const IN_DATA_EXCHANGE_OK: (u8, u8) = (PN532_CMD_IN_DATA_EXCHANGE + 1, 0x00);

/// Response frame sizes requested from the transport
pub const SAM_RESPONSE_LEN: usize = 8;
pub const DISCOVERY_RESPONSE_LEN: usize = 20;
pub const AUTH_RESPONSE_LEN: usize = 12;
pub const CLASSIC_READ_RESPONSE_LEN: usize = 24;
pub const ULTRALIGHT_READ_RESPONSE_LEN: usize = 26;
pub const WRITE_RESPONSE_LEN: usize = 8;

/// Card geometry
pub const MAX_BLOCKS: u8 = 64;
pub const PAYLOAD_START_BLOCK: u8 = 4;
pub const BLOCKS_PER_SECTOR: u8 = 4;
pub const CLASSIC_BLOCK_LEN: usize = 16;
pub const ULTRALIGHT_PAGE_LEN: usize = 4;
pub const MAX_UID_LEN: usize = 7;
pub const MIN_UID_LEN: usize = 4;

/// Sector trailer written after payload data on Classic cards:
/// key A (NFC public key), access bits 7F 07 88, GPB 0x40, key B.
pub const CLASSIC_TRAILER_FOOTER: [u8; 16] = [
    0xD3, 0xF7, 0xD3, 0xF7, 0xD3, 0xF7, 0x7F, 0x07, 0x88, 0x40, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
];

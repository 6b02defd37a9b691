// libmifare/src/types.rs

use std::convert::TryFrom;

use derive_more::Display;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::{
    BLOCKS_PER_SECTOR, CLASSIC_BLOCK_LEN, MAX_UID_LEN, MIN_UID_LEN, ULTRALIGHT_PAGE_LEN,
};
use crate::{Error, ResponseError};

/// UID - Newtype Pattern (4..=7 バイト、固定容量 7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uid {
    bytes: [u8; MAX_UID_LEN],
    len: u8,
}

impl Uid {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if !(MIN_UID_LEN..=MAX_UID_LEN).contains(&bytes.len()) {
            return Err(ResponseError::UidLength(bytes.len() as u8).into());
        }
        let mut arr = [0u8; MAX_UID_LEN];
        arr[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            bytes: arr,
            len: bytes.len() as u8,
        })
    }
}

/// SENS_RES (ATQA), kept in the byte order reported by the reader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SensRes([u8; 2]);

impl SensRes {
    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    pub fn as_u16(&self) -> u16 {
        u16::from_be_bytes(self.0)
    }
}

/// SEL_RES (SAK)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SelRes(u8);

impl SelRes {
    pub const fn new(sak: u8) -> Self {
        Self(sak)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

/// Card family derived from SENS_RES / SEL_RES at discovery.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CardType {
    #[display(fmt = "mifare classic")]
    Classic,
    #[display(fmt = "mifare ultralight")]
    Ultralight,
    #[display(fmt = "unknown")]
    Unknown,
}

impl CardType {
    /// SENS_RES reported by Ultralight (and NTAG) targets.
    pub const ULTRALIGHT_SENS_RES: u16 = 0x0044;

    /// Classify a target from its discovery bytes.
    ///
    /// SAK coding per NXP AN10833: bit 8 is ignored, 0x08 is Classic 1K
    /// and 0x18 is Classic 4K. A SAK of 0x00 together with SENS_RES
    /// 0x0044 is an Ultralight.
    pub fn classify(sens_res: SensRes, sel_res: SelRes) -> Self {
        match sel_res.as_u8() & 0x7F {
            0x08 | 0x18 => CardType::Classic,
            0x00 if sens_res.as_u16() == Self::ULTRALIGHT_SENS_RES => CardType::Ultralight,
            _ => CardType::Unknown,
        }
    }
}

/// Key slot used for Classic authentication
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KeySlot {
    #[default]
    #[display(fmt = "A")]
    A,
    #[display(fmt = "B")]
    B,
}

impl KeySlot {
    /// MIFARE authentication opcode for this slot
    pub fn auth_opcode(&self) -> u8 {
        match self {
            KeySlot::A => crate::constants::MIFARE_CMD_AUTH_A,
            KeySlot::B => crate::constants::MIFARE_CMD_AUTH_B,
        }
    }
}

/// Classic sector key (6 バイト)
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Key([u8; 6]);

impl Key {
    /// Factory transport key
    pub const DEFAULT: Self = Self([0xFF; 6]);

    pub const fn from_bytes(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

impl Default for Key {
    fn default() -> Self {
        Self::DEFAULT
    }
}

// Keys are secrets; keep them out of logs.
impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Key(******)")
    }
}

/// BlockData (16 バイト, Classic)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockData([u8; CLASSIC_BLOCK_LEN]);

impl BlockData {
    pub const ZERO: Self = Self([0u8; CLASSIC_BLOCK_LEN]);
    pub const TRAILER_FOOTER: Self = Self(crate::constants::CLASSIC_TRAILER_FOOTER);

    pub fn from_bytes(bytes: [u8; CLASSIC_BLOCK_LEN]) -> Self {
        Self(bytes)
    }

    /// Copy up to 16 bytes from `chunk`, zero-padding the remainder.
    pub fn from_chunk(chunk: &[u8]) -> Self {
        let mut block = [0u8; CLASSIC_BLOCK_LEN];
        let n = chunk.len().min(CLASSIC_BLOCK_LEN);
        block[..n].copy_from_slice(&chunk[..n]);
        Self(block)
    }

    pub fn as_bytes(&self) -> &[u8; CLASSIC_BLOCK_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }
}

/// PageData (4 バイト, Ultralight)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageData([u8; ULTRALIGHT_PAGE_LEN]);

impl PageData {
    pub fn from_bytes(bytes: [u8; ULTRALIGHT_PAGE_LEN]) -> Self {
        Self(bytes)
    }

    /// Copy up to 4 bytes from `chunk`, zero-padding the remainder.
    pub fn from_chunk(chunk: &[u8]) -> Self {
        let mut page = [0u8; ULTRALIGHT_PAGE_LEN];
        let n = chunk.len().min(ULTRALIGHT_PAGE_LEN);
        page[..n].copy_from_slice(&chunk[..n]);
        Self(page)
    }

    pub fn as_bytes(&self) -> &[u8; ULTRALIGHT_PAGE_LEN] {
        &self.0
    }
}

/// Whether a Classic block address is a sector trailer.
pub fn is_sector_trailer(address: u8) -> bool {
    address % BLOCKS_PER_SECTOR == BLOCKS_PER_SECTOR - 1
}

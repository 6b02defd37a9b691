// libmifare/src/protocol/commands/mod.rs

pub mod discovery;
pub mod exchange;
pub mod sam;

pub use discovery::encode_in_list_passive_target;
pub use exchange::{encode_authenticate, encode_read, encode_write_block, encode_write_page};
pub use sam::encode_sam_configuration;

use crate::types::{BlockData, Key, KeySlot, PageData, Uid};

/// High-level Command enum. New commands should be added here and
/// their per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone)]
pub enum Command {
    SamConfiguration,
    InListPassiveTarget {
        max_targets: u8,
        baud_rate: u8,
    },
    /// MIFARE Classic key authentication for one block
    Authenticate {
        slot: KeySlot,
        block: u8,
        key: Key,
        uid: Uid,
    },
    /// MIFARE READ; Classic returns one block, Ultralight four pages
    Read {
        address: u8,
    },
    WriteBlock {
        address: u8,
        data: BlockData,
    },
    WritePage {
        address: u8,
        data: PageData,
    },
}

impl Command {
    /// Return the PN532 command code carried at offset 0.
    pub fn command_code(&self) -> u8 {
        use crate::constants::*;
        match self {
            Self::SamConfiguration => PN532_CMD_SAM_CONFIGURATION,
            Self::InListPassiveTarget { .. } => PN532_CMD_IN_LIST_PASSIVE_TARGET,
            Self::Authenticate { .. }
            | Self::Read { .. }
            | Self::WriteBlock { .. }
            | Self::WritePage { .. } => PN532_CMD_IN_DATA_EXCHANGE,
        }
    }

    /// Encode the command into the raw payload (command code + params).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::SamConfiguration => encode_sam_configuration(),
            Self::InListPassiveTarget {
                max_targets,
                baud_rate,
            } => encode_in_list_passive_target(*max_targets, *baud_rate),
            Self::Authenticate {
                slot,
                block,
                key,
                uid,
            } => encode_authenticate(*slot, *block, key, uid),
            Self::Read { address } => encode_read(*address),
            Self::WriteBlock { address, data } => encode_write_block(*address, data),
            Self::WritePage { address, data } => encode_write_page(*address, data),
        }
    }
}

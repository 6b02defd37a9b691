// libmifare/src/protocol/commands/discovery.rs

use crate::constants::PN532_CMD_IN_LIST_PASSIVE_TARGET;

/// Encode InListPassiveTarget. The crate always asks for one target at
/// 106 kbps type A; the parameters are kept for the Command enum.
pub fn encode_in_list_passive_target(max_targets: u8, baud_rate: u8) -> Vec<u8> {
    vec![PN532_CMD_IN_LIST_PASSIVE_TARGET, max_targets, baud_rate]
}

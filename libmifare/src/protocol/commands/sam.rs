// libmifare/src/protocol/commands/sam.rs

use crate::constants::{PN532_CMD_SAM_CONFIGURATION, SAM_MODE_NORMAL, SAM_TIMEOUT_1S, SAM_USE_IRQ};

/// Encode SAMConfiguration: normal mode, 1 second timeout, IRQ signaling
pub fn encode_sam_configuration() -> Vec<u8> {
    vec![
        PN532_CMD_SAM_CONFIGURATION,
        SAM_MODE_NORMAL,
        SAM_TIMEOUT_1S,
        SAM_USE_IRQ,
    ]
}

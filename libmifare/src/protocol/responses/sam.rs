// libmifare/src/protocol/responses/sam.rs

use crate::Result;
use crate::constants::PN532_CMD_SAM_CONFIGURATION;
use crate::protocol::parser;

/// Decode a SAMConfiguration response (response code = 0x15)
pub fn decode_sam_configuration(frame: &[u8]) -> Result<()> {
    parser::expect_response_code(frame, PN532_CMD_SAM_CONFIGURATION + 1)
}

// libmifare/src/protocol/responses/discovery.rs

use crate::constants::{
    MAX_UID_LEN, MIN_UID_LEN, PN532_CMD_IN_LIST_PASSIVE_TARGET, RESP_SEL_RES_OFFSET,
    RESP_SENS_RES_OFFSET, RESP_TAG_COUNT_OFFSET, RESP_UID_LEN_OFFSET, RESP_UID_OFFSET,
};
use crate::protocol::parser;
use crate::types::{SelRes, SensRes, Uid};
use crate::{Error, ResponseError, Result};

/// Raw fields of a single ISO14443A target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscoveredTarget {
    pub uid: Uid,
    pub sens_res: SensRes,
    pub sel_res: SelRes,
}

/// Decode an InListPassiveTarget response (response code = 0x4B)
/// Layout after the frame header:
/// code(6) + NbTg(7) + Tg(8) + SENS_RES(9..=10) + SEL_RES(11) + NFCIDLength(12) + NFCID(13..)
pub fn decode_in_list_passive_target(frame: &[u8]) -> Result<DiscoveredTarget> {
    parser::expect_response_code(frame, PN532_CMD_IN_LIST_PASSIVE_TARGET + 1)?;

    let found = parser::byte_at(frame, RESP_TAG_COUNT_OFFSET)?;
    if found != 1 {
        return Err(Error::NoTarget { found });
    }

    let sens_res = SensRes::from_bytes(parser::array_at::<2>(frame, RESP_SENS_RES_OFFSET)?);
    let sel_res = SelRes::new(parser::byte_at(frame, RESP_SEL_RES_OFFSET)?);

    let uid_len = parser::byte_at(frame, RESP_UID_LEN_OFFSET)?;
    if !(MIN_UID_LEN..=MAX_UID_LEN).contains(&(uid_len as usize)) {
        return Err(ResponseError::UidLength(uid_len).into());
    }
    let uid = Uid::try_from(parser::slice_at(frame, RESP_UID_OFFSET, uid_len as usize)?)?;

    Ok(DiscoveredTarget {
        uid,
        sens_res,
        sel_res,
    })
}

// libmifare/src/card/payload.rs
//
// Payload layout starting at block/page 4. Classic sector trailers never
// carry payload bytes; each sector touched by a write ends with the NFC
// trailer footer.

use log::{debug, warn};

use crate::card::operations::{classic, ultralight};
use crate::constants::{
    BLOCKS_PER_SECTOR, CLASSIC_BLOCK_LEN, MAX_BLOCKS, PAYLOAD_START_BLOCK, ULTRALIGHT_PAGE_LEN,
};
use crate::reader::{Configured, Reader};
use crate::types::{BlockData, CardType, PageData, is_sector_trailer};
use crate::{Error, Result};

/// One block or page write produced by a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedWrite<D> {
    pub address: u8,
    pub data: D,
}

/// Data blocks available to a payload on a Classic 1K card (blocks 4..64
/// minus the 15 trailers).
pub const fn classic_capacity() -> usize {
    let sectors = ((MAX_BLOCKS - PAYLOAD_START_BLOCK) / BLOCKS_PER_SECTOR) as usize;
    sectors * (BLOCKS_PER_SECTOR as usize - 1) * CLASSIC_BLOCK_LEN
}

/// Pages 4..64 on an Ultralight.
pub const fn ultralight_capacity() -> usize {
    (MAX_BLOCKS - PAYLOAD_START_BLOCK) as usize * ULTRALIGHT_PAGE_LEN
}

fn ensure_fits(len: usize, capacity: usize) -> Result<()> {
    if len > capacity {
        return Err(Error::PayloadTooLarge { len, capacity });
    }
    Ok(())
}

/// Lay a payload out over Classic blocks.
///
/// Data fills 16-byte blocks in order, skipping trailers. The last partial
/// block is zero-padded and the remaining data blocks of that sector are
/// zeroed, so every sector touched ends with its trailer footer. An empty
/// payload still rewrites sector 1.
pub fn plan_classic(payload: &[u8]) -> Result<Vec<PlannedWrite<BlockData>>> {
    ensure_fits(payload.len(), classic_capacity())?;

    let mut plan = Vec::new();
    let mut chunks = payload.chunks(CLASSIC_BLOCK_LEN);
    let mut address = PAYLOAD_START_BLOCK;
    let mut exhausted = false;

    while address < MAX_BLOCKS {
        if is_sector_trailer(address) {
            plan.push(PlannedWrite {
                address,
                data: BlockData::TRAILER_FOOTER,
            });
            if exhausted {
                break;
            }
        } else {
            let data = match chunks.next() {
                Some(chunk) => BlockData::from_chunk(chunk),
                None => BlockData::ZERO,
            };
            plan.push(PlannedWrite { address, data });
        }
        address += 1;

        // Once the data runs out, finish the current sector and stop.
        if chunks.len() == 0 {
            exhausted = true;
        }
    }

    Ok(plan)
}

/// Lay a payload out over Ultralight pages from page 4. The final short
/// page is zero-padded; an empty payload plans nothing.
pub fn plan_ultralight(payload: &[u8]) -> Result<Vec<PlannedWrite<PageData>>> {
    ensure_fits(payload.len(), ultralight_capacity())?;

    Ok(payload
        .chunks(ULTRALIGHT_PAGE_LEN)
        .zip(PAYLOAD_START_BLOCK..)
        .map(|(chunk, address)| PlannedWrite {
            address,
            data: PageData::from_chunk(chunk),
        })
        .collect())
}

/// Classic block addresses holding the first `len` payload bytes.
fn classic_data_addresses(len: usize) -> impl Iterator<Item = u8> {
    (PAYLOAD_START_BLOCK..MAX_BLOCKS)
        .filter(|&a| !is_sector_trailer(a))
        .take(len.div_ceil(CLASSIC_BLOCK_LEN))
}

fn unsupported(card_type: CardType) -> Error {
    warn!("refusing payload access on {} card", card_type);
    Error::UnsupportedCardType(card_type)
}

/// Re-detect the target and write `payload` according to its card type.
/// Nothing is written when the card type is unknown or the payload does
/// not fit.
pub fn write_payload(reader: &mut Reader<Configured>, payload: &[u8]) -> Result<()> {
    let card_type = reader.detect_target()?.card_type();
    match card_type {
        CardType::Classic => {
            let plan = plan_classic(payload)?;
            debug!("writing {} bytes over {} blocks", payload.len(), plan.len());
            for w in &plan {
                classic::write_block(reader, w.address, &w.data)?;
            }
        }
        CardType::Ultralight => {
            let plan = plan_ultralight(payload)?;
            debug!("writing {} bytes over {} pages", payload.len(), plan.len());
            for w in &plan {
                ultralight::write_page(reader, w.address, &w.data)?;
            }
        }
        other => return Err(unsupported(other)),
    }
    Ok(())
}

/// Re-detect the target and read back `len` payload bytes from block or
/// page 4, skipping Classic trailers.
pub fn read_payload(reader: &mut Reader<Configured>, len: usize) -> Result<Vec<u8>> {
    let card_type = reader.detect_target()?.card_type();
    let mut out = Vec::with_capacity(len);
    match card_type {
        CardType::Classic => {
            ensure_fits(len, classic_capacity())?;
            for address in classic_data_addresses(len) {
                out.extend_from_slice(classic::read_block(reader, address)?.as_bytes());
            }
        }
        CardType::Ultralight => {
            ensure_fits(len, ultralight_capacity())?;
            let pages = len.div_ceil(ULTRALIGHT_PAGE_LEN) as u8;
            for address in PAYLOAD_START_BLOCK..PAYLOAD_START_BLOCK + pages {
                out.extend_from_slice(ultralight::read_page(reader, address)?.as_bytes());
            }
        }
        other => return Err(unsupported(other)),
    }
    out.truncate(len);
    debug!("read {} payload bytes", out.len());
    Ok(out)
}

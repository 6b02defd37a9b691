// libmifare/src/card/operations/ultralight.rs

use log::trace;

use crate::card::operations::check_address;
use crate::constants::{ULTRALIGHT_READ_RESPONSE_LEN, WRITE_RESPONSE_LEN};
use crate::protocol::{Command, responses};
use crate::reader::{Configured, Reader};
use crate::types::PageData;
use crate::utils::HexView;
use crate::Result;

/// Read one 4-byte Ultralight page. No authentication.
pub fn read_page(reader: &mut Reader<Configured>, address: u8) -> Result<PageData> {
    check_address(address)?;

    let frame = reader.exchange(&Command::Read { address }, ULTRALIGHT_READ_RESPONSE_LEN)?;
    let page = responses::decode_ultralight_read(&frame)?;
    trace!("read page {:02}: {}", address, HexView::spaced(page.as_bytes()));
    Ok(page)
}

pub fn write_page(reader: &mut Reader<Configured>, address: u8, data: &PageData) -> Result<()> {
    check_address(address)?;

    let cmd = Command::WritePage {
        address,
        data: *data,
    };
    let frame = reader.exchange(&cmd, WRITE_RESPONSE_LEN)?;
    responses::decode_status(&frame)?;
    trace!("wrote page {:02}", address);
    Ok(())
}

// libmifare/src/protocol/frame.rs

use crate::constants::{
    PN532_MAX_FRAME_BODY, PN532_POSTAMBLE, PN532_PREAMBLE, PN532_TFI_DEVICE, PN532_TFI_HOST,
};
use crate::protocol::checksum::{dcs, lcs};
use crate::{Error, Result};

/// PN532 normal information frame.
/// Format: [Preamble+Start(3)] [LEN(1)] [LCS(1)] [TFI(1)] [PD(n)] [DCS(1)] [Postamble(1)]
/// LEN counts TFI + PD; DCS covers TFI + PD.
///
/// The transport owns framing on the wire. This helper exists so
/// transports and test doubles can produce byte-exact frames that the
/// response decoders consume at their fixed offsets.
pub struct Frame;

impl Frame {
    /// Encode `body` behind the given frame identifier.
    pub fn encode(tfi: u8, body: &[u8]) -> Result<Vec<u8>> {
        if body.len() > PN532_MAX_FRAME_BODY {
            return Err(Error::FrameTooLong {
                len: body.len(),
                max: PN532_MAX_FRAME_BODY,
            });
        }

        let len = (body.len() + 1) as u8;
        let mut out = Vec::with_capacity(3 + 2 + 1 + body.len() + 2);
        out.extend_from_slice(&PN532_PREAMBLE);
        out.push(len);
        out.push(lcs(len));
        out.push(tfi);
        out.extend_from_slice(body);

        let checksum = dcs(body).wrapping_sub(tfi);
        out.push(checksum);
        out.push(PN532_POSTAMBLE);
        Ok(out)
    }

    /// Host -> reader frame for a command payload (command code + params).
    pub fn command(payload: &[u8]) -> Result<Vec<u8>> {
        Self::encode(PN532_TFI_HOST, payload)
    }

    /// Reader -> host frame: response code followed by `data`.
    pub fn response(code: u8, data: &[u8]) -> Result<Vec<u8>> {
        let mut body = Vec::with_capacity(1 + data.len());
        body.push(code);
        body.extend_from_slice(data);
        Self::encode(PN532_TFI_DEVICE, &body)
    }
}

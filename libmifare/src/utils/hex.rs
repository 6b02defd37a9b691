//! Hex rendering for UIDs, block dumps and frame traces.

use std::fmt;

/// Lazily formatted hex view of a byte slice; `spaced` puts one space
/// between bytes. Usable directly in `log` macros without allocating.
#[derive(Debug, Clone, Copy)]
pub struct HexView<'a> {
    bytes: &'a [u8],
    spaced: bool,
}

impl<'a> HexView<'a> {
    pub fn compact(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            spaced: false,
        }
    }

    pub fn spaced(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            spaced: true,
        }
    }
}

impl fmt::Display for HexView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.bytes.iter().enumerate() {
            if self.spaced && i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

/// `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    HexView::compact(bytes).to_string()
}

/// `&[0xde, 0xad]` -> `"de ad"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    HexView::spaced(bytes).to_string()
}

//! Display helpers for opaque byte strings.

use core::fmt;

/// Formats bytes as colon-separated lowercase hex, e.g. `c4:7d:4f`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hex<'a>(pub &'a [u8]);

impl fmt::Display for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// Formats bytes as a quoted string when every byte is printable ASCII, as [`Hex`] otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexOrAscii<'a>(pub &'a [u8]);

impl HexOrAscii<'_> {
    fn is_printable(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|b| (0x20..0x7F).contains(b))
    }
}

impl fmt::Display for HexOrAscii<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_printable() {
            f.write_str("\"")?;
            for &byte in self.0 {
                write!(f, "{}", byte as char)?;
            }
            f.write_str("\"")
        } else {
            write!(f, "{}", Hex(self.0))
        }
    }
}

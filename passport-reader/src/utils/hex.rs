//! Hex rendering for log lines and UID strings.

use std::fmt;

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    HexDump(bytes).compact()
}

/// Lazily formats a byte slice as space separated hex (`"d4 02 2a"`), so
/// frame dumps cost nothing when the log level filters them out.
#[derive(Clone, Copy)]
pub struct HexDump<'a>(pub &'a [u8]);

impl HexDump<'_> {
    fn compact(&self) -> String {
        use std::fmt::Write;
        let mut s = String::with_capacity(self.0.len() * 2);
        for b in self.0 {
            let _ = write!(&mut s, "{:02x}", b);
        }
        s
    }
}

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Debug for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self)
    }
}

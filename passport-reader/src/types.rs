// passport-reader-rs/passport-reader/src/types.rs

use crate::Error;
use crate::constants::UID_MAX_LEN;
use derive_more::Display;
use std::convert::TryFrom;

/// 7-bit bus address of the reader module
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display(fmt = "{:#04x}", _0)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BusAddress(u8);

impl BusAddress {
    /// Wrap a raw 7-bit address.
    pub const fn new(addr: u8) -> Self {
        Self(addr)
    }

    /// Raw address byte.
    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

/// Chip UID (NFCID1), 4, 7 or 10 bytes, stored inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid {
    bytes: [u8; UID_MAX_LEN],
    len: u8,
}

impl Uid {
    /// UID bytes, without padding.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Number of UID bytes.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// True for a zero-length UID.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Lowercase hex, no separators.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() > UID_MAX_LEN {
            return Err(Error::InvalidLength {
                expected: UID_MAX_LEN,
                actual: bytes.len(),
            });
        }
        let mut uid = Uid::default();
        uid.bytes[..bytes.len()].copy_from_slice(bytes);
        uid.len = bytes.len() as u8;
        Ok(uid)
    }
}

/// Answer to GetFirmwareVersion.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display(fmt = "PN5{:02x} v{}.{} (support {:#04x})", ic, version, revision, support)]
pub struct FirmwareVersion {
    /// IC code, 0x32 for the PN532
    pub ic: u8,
    /// Firmware version
    pub version: u8,
    /// Firmware revision
    pub revision: u8,
    /// Bit field: ISO14443A / ISO14443B / ISO18092
    pub support: u8,
}

// passport-reader-rs/passport-reader/src/protocol/apdu.rs

//! ISO 7816-4 command APDUs and status words.

use std::fmt;

use crate::constants::{APDU_MAX_LEN, SELECT_EMRTD_APPLICATION, SW_SUCCESS};
use crate::{Error, Result};

/// Command APDU held in a fixed-capacity buffer.
#[derive(Clone, Copy)]
pub struct Apdu {
    data: [u8; APDU_MAX_LEN],
    len: usize,
}

impl Apdu {
    /// Empty APDU.
    pub fn new() -> Self {
        Self {
            data: [0u8; APDU_MAX_LEN],
            len: 0,
        }
    }

    /// Copy `bytes`; fails past the maximum APDU length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let mut apdu = Self::new();
        apdu.extend_from_slice(bytes)?;
        Ok(apdu)
    }

    /// SELECT of the eMRTD application by AID.
    pub fn select_emrtd() -> Self {
        let mut apdu = Self::new();
        apdu.data[..SELECT_EMRTD_APPLICATION.len()].copy_from_slice(&SELECT_EMRTD_APPLICATION);
        apdu.len = SELECT_EMRTD_APPLICATION.len();
        apdu
    }

    /// Append bytes, failing without modification when capacity would be
    /// exceeded.
    pub fn extend_from_slice(&mut self, bytes: &[u8]) -> Result<()> {
        let new_len = self.len + bytes.len();
        if new_len > APDU_MAX_LEN {
            return Err(Error::FrameTooLarge {
                max: APDU_MAX_LEN,
                actual: new_len,
            });
        }
        self.data[self.len..new_len].copy_from_slice(bytes);
        self.len = new_len;
        Ok(())
    }

    /// Encoded APDU.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Encoded length.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when nothing has been appended.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for Apdu {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Apdu {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for Apdu {}

impl fmt::Debug for Apdu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Apdu({})", crate::utils::HexDump(self.as_bytes()))
    }
}

/// Trailing SW1 SW2 of a response APDU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusWord {
    /// First status byte
    pub sw1: u8,
    /// Second status byte
    pub sw2: u8,
}

impl StatusWord {
    /// Take the status word from the last two bytes of a response APDU.
    pub fn from_response(data: &[u8]) -> Option<Self> {
        match data {
            [.., sw1, sw2] => Some(Self {
                sw1: *sw1,
                sw2: *sw2,
            }),
            _ => None,
        }
    }

    /// `90 00`
    pub fn is_success(&self) -> bool {
        [self.sw1, self.sw2] == SW_SUCCESS
    }
}

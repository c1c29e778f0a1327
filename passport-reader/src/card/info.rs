use crate::types::Uid;

/// SEL_RES bit for ISO/IEC 14443-4 compliance
const SEL_RES_ISO14443_4: u8 = 0x20;

/// A chip activated by InListPassiveTarget. Valid only until the session
/// is reset or the chip leaves the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Logical target number the module assigned (used by InDataExchange)
    pub number: u8,
    /// ATQA
    pub sens_res: u16,
    /// SAK
    pub sel_res: u8,
    /// NFCID1
    pub uid: Uid,
    /// Answer-to-select, present for ISO 14443-4 chips
    pub ats: Vec<u8>,
}

impl Target {
    /// Chip UID.
    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    /// Whether the chip speaks ISO 14443-4 (required for APDUs).
    pub fn supports_iso14443_4(&self) -> bool {
        self.sel_res & SEL_RES_ISO14443_4 != 0
    }
}

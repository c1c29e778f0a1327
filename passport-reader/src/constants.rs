// passport-reader-rs/passport-reader/src/constants.rs
//! Protocol constants shared across the crate

/// PN532 wire frame preamble + start code: 0x00 0x00 0xFF
pub const PN532_PREAMBLE: [u8; 3] = [0x00, 0x00, 0xFF];

/// PN532 wire frame postamble: 0x00
pub const PN532_POSTAMBLE: u8 = 0x00;

/// Frame identifier (TFI) for host -> PN532 frames
pub const PN532_HOST_TO_DEVICE: u8 = 0xD4;

/// Frame identifier (TFI) for PN532 -> host frames
pub const PN532_DEVICE_TO_HOST: u8 = 0xD5;

/// Status byte the PN532 prepends to I2C reads once a frame is ready
pub const I2C_READY: u8 = 0x01;

/// Leading bytes returned by the PN532 while it is still busy
pub const I2C_NOT_READY: [u8; 2] = [0x00, 0x80];

/// Wake-up sequence clocked onto the bus before discovery
pub const WAKE_SEQUENCE: [u8; 5] = [0x55, 0x55, 0x00, 0x00, 0x00];

/// ACK frame sent by the PN532 after accepting a command
pub const ACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// Preamble(3) + LEN + LCS + TFI + DCS + postamble
pub const FRAME_OVERHEAD: usize = 8;

/// LEN covers TFI + payload and must fit a single byte
pub const MAX_FRAME_PAYLOAD_LEN: usize = 254;

/// Upper bound of a short APDU (header, Lc, 255 data bytes, Le)
pub const APDU_MAX_LEN: usize = 261;

/// Longest UID a 14443-A target may report
pub const UID_MAX_LEN: usize = 10;

/// PN532 command opcodes
pub const CMD_GET_FIRMWARE_VERSION: u8 = 0x02;
/// SAMConfiguration
pub const CMD_SAM_CONFIGURATION: u8 = 0x14;
/// InDataExchange
pub const CMD_IN_DATA_EXCHANGE: u8 = 0x40;
/// InListPassiveTarget
pub const CMD_IN_LIST_PASSIVE_TARGET: u8 = 0x4A;

/// InListPassiveTarget baud-rate/type selector for 106 kbps ISO14443-A
pub const BRTY_ISO14443A_106K: u8 = 0x00;

/// SAMConfiguration arguments: normal mode, 1 s timeout (50 ms * 20), use IRQ
pub const SAM_NORMAL_MODE: u8 = 0x01;
/// Virtual card timeout in 50 ms units
pub const SAM_TIMEOUT: u8 = 0x14;
/// Drive the IRQ line
pub const SAM_USE_IRQ: u8 = 0x01;

/// Candidate I2C addresses probed, in order, during discovery
pub const CANDIDATE_ADDRESSES: [u8; 2] = [0x24, 0x48];

/// Firmware-version attempts per candidate address
pub const DISCOVERY_ATTEMPTS: usize = 3;

/// SELECT by AID of the ICAO eMRTD application (A0 00 00 02 47 10 01)
pub const SELECT_EMRTD_APPLICATION: [u8; 12] = [
    0x00, 0xA4, 0x04, 0x0C, 0x07, 0xA0, 0x00, 0x00, 0x02, 0x47, 0x10, 0x01,
];

/// ISO 7816 "normal processing" status word
pub const SW_SUCCESS: [u8; 2] = [0x90, 0x00];

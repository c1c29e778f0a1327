// passport-reader-rs/passport-reader/src/protocol/responses/firmware.rs

use crate::Result;
use crate::constants::CMD_GET_FIRMWARE_VERSION;
use crate::protocol::parser;
use crate::types::FirmwareVersion;

/// Decode a GetFirmwareVersion answer.
/// Layout: response_code(1) + IC(1) + Ver(1) + Rev(1) + Support(1)
pub fn decode_firmware_version(data: &[u8]) -> Result<FirmwareVersion> {
    parser::ensure_len(data, 5)?;
    parser::expect_response_code(data, CMD_GET_FIRMWARE_VERSION + 1)?;

    Ok(FirmwareVersion {
        ic: data[1],
        version: data[2],
        revision: data[3],
        support: data[4],
    })
}

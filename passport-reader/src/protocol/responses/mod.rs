// passport-reader-rs/passport-reader/src/protocol/responses/mod.rs

pub mod firmware;
pub mod target;

pub use firmware::decode_firmware_version;
pub use target::{decode_in_data_exchange, decode_in_list_passive_target};

use crate::card::Target;
use crate::constants::*;
use crate::protocol::parser;
use crate::types::FirmwareVersion;

/// Decoded answer to a [`Command`](crate::protocol::Command).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Answer to GetFirmwareVersion.
    FirmwareVersion(FirmwareVersion),
    /// SAMConfiguration acknowledged.
    SamConfiguration,
    /// Targets found by InListPassiveTarget.
    InListPassiveTarget {
        /// Activated targets, possibly none
        targets: Vec<Target>,
    },
    /// Status byte and response APDU from InDataExchange.
    InDataExchange {
        /// Module status, zero on success
        status: u8,
        /// Response APDU
        data: Vec<u8>,
    },
}

impl Response {
    /// Decode a response payload (starting at the echoed response code)
    /// for the given command opcode.
    pub fn decode(opcode: u8, data: &[u8]) -> crate::Result<Self> {
        parser::expect_response_code(data, opcode.wrapping_add(1))?;

        match opcode {
            CMD_GET_FIRMWARE_VERSION => Ok(Self::FirmwareVersion(decode_firmware_version(data)?)),
            CMD_SAM_CONFIGURATION => Ok(Self::SamConfiguration),
            CMD_IN_LIST_PASSIVE_TARGET => Ok(Self::InListPassiveTarget {
                targets: decode_in_list_passive_target(data)?,
            }),
            CMD_IN_DATA_EXCHANGE => {
                let (status, data) = decode_in_data_exchange(data)?;
                Ok(Self::InDataExchange { status, data })
            }
            _ => Err(crate::Error::UnexpectedResponse {
                expected: opcode.wrapping_add(1),
                actual: data[0],
            }),
        }
    }
}

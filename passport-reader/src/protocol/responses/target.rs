// passport-reader-rs/passport-reader/src/protocol/responses/target.rs

use crate::card::Target;
use crate::constants::{CMD_IN_DATA_EXCHANGE, CMD_IN_LIST_PASSIVE_TARGET};
use crate::protocol::parser;
use crate::Result;

/// SEL_RES bit announcing ISO/IEC 14443-4 support; an ATS follows the UID.
const SEL_RES_ISO14443_4: u8 = 0x20;

/// Decode an InListPassiveTarget answer for 106 kbps type A targets.
///
/// Layout: `4B NbTg { Tg SENS_RES(2) SEL_RES NFCIDLen NFCID... [ATS] }*`
pub fn decode_in_list_passive_target(data: &[u8]) -> Result<Vec<Target>> {
    parser::expect_response_code(data, CMD_IN_LIST_PASSIVE_TARGET + 1)?;
    let count = parser::byte_at(data, 1)?;

    let mut targets = Vec::with_capacity(count as usize);
    let mut pos = 2usize;
    for _ in 0..count {
        let number = parser::byte_at(data, pos)?;
        let sens_res = parser::be_u16_at(data, pos + 1)?;
        let sel_res = parser::byte_at(data, pos + 3)?;
        let uid = parser::uid_at(data, pos + 4)?;
        pos += 5 + uid.len();

        // ATS length byte counts itself
        let mut ats = Vec::new();
        if sel_res & SEL_RES_ISO14443_4 != 0 && pos < data.len() {
            let ats_len = parser::byte_at(data, pos)? as usize;
            ats = parser::slice_at(data, pos, ats_len.max(1))?.to_vec();
            pos += ats_len.max(1);
        }

        targets.push(Target {
            number,
            sens_res,
            sel_res,
            uid,
            ats,
        });
    }

    Ok(targets)
}

/// Decode an InDataExchange answer into (status, response APDU).
pub fn decode_in_data_exchange(data: &[u8]) -> Result<(u8, Vec<u8>)> {
    parser::expect_response_code(data, CMD_IN_DATA_EXCHANGE + 1)?;
    let status = parser::byte_at(data, 1)?;
    Ok((status, data[2..].to_vec()))
}

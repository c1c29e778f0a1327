// passport-reader-rs/passport-reader/src/protocol/checksum.rs

/// Length checksum: LEN + LCS == 0 (mod 256)
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Data checksum over the frame identifier and payload:
/// TFI + sum(payload) + DCS == 0 (mod 256)
pub fn dcs(identifier: u8, payload: &[u8]) -> u8 {
    let sum = payload
        .iter()
        .fold(identifier, |acc, &b| acc.wrapping_add(b));
    0u8.wrapping_sub(sum)
}

// fixtures.rs — commonly used bus reads and payloads

use passport_reader::test_support;

pub const PRIMARY: u8 = 0x24;
pub const SECONDARY: u8 = 0x48;

pub fn sample_uid() -> [u8; 4] {
    [0xDE, 0xAD, 0xBE, 0xEF]
}

/// InListPassiveTarget answer captured from a passport booklet (7-byte UID,
/// ISO 14443-4, ATS present).
pub fn passport_target_payload() -> Vec<u8> {
    hex::decode("4b01010044200704a1b2c3d4e5f60578807002").unwrap()
}

pub fn firmware_read() -> Vec<u8> {
    test_support::response_read(&test_support::firmware_payload())
}

pub fn target_read(uid: &[u8]) -> Vec<u8> {
    test_support::response_read(&test_support::target_payload(uid))
}

pub fn no_target_read() -> Vec<u8> {
    test_support::response_read(&test_support::no_target_payload())
}

pub fn select_ok_read() -> Vec<u8> {
    test_support::response_read(&test_support::data_exchange_payload(&[0x90, 0x00]))
}

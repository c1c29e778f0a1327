#[path = "../common/mod.rs"]
mod common;

use passport_reader::constants::{PN532_DEVICE_TO_HOST, PN532_HOST_TO_DEVICE};
use passport_reader::protocol::Frame;
use passport_reader::Error;

#[test]
fn sam_configuration_frame_bytes() -> anyhow::Result<()> {
    let frame = Frame::encode(PN532_HOST_TO_DEVICE, &[0x14, 0x01, 0x14, 0x01])?;
    assert_eq!(frame, hex::decode("0000ff05fbd4140114010200")?);
    Ok(())
}

#[test]
fn captured_firmware_response_decodes() -> anyhow::Result<()> {
    // ready byte + frame + padding, as clocked out over I2C
    let mut raw = hex::decode("010000ff06fad50332010607e800")?;
    raw.resize(64, 0x00);
    let frame = Frame::decode(&raw)?;
    assert_eq!(frame.identifier, PN532_DEVICE_TO_HOST);
    assert_eq!(frame.payload, vec![0x03, 0x32, 0x01, 0x06, 0x07]);
    Ok(())
}

#[test]
fn lenient_length_checksum_is_not_accepted() {
    // correct DCS, broken LCS
    let raw = hex::decode("0000ff06fbd50332010607e800").unwrap();
    match Frame::decode(&raw) {
        Err(Error::ChecksumMismatch {
            expected: 0xfa,
            actual: 0xfb,
        }) => {}
        other => panic!("expected LCS mismatch, got {:?}", other),
    }
}

#[test]
fn empty_read_is_invalid_length() {
    assert!(matches!(
        Frame::decode(&[]),
        Err(Error::InvalidLength { .. })
    ));
}

#[path = "../common/mod.rs"]
mod common;

use common::fixtures::PRIMARY;
use passport_reader::device::DeviceBuilder;
use passport_reader::protocol::{Command, Response};
use passport_reader::test_support::{self, RecordingDelay};
use passport_reader::transport::MockTransport;
use passport_reader::{BusAddress, Error};

fn mock_with(reads: &[Vec<u8>]) -> MockTransport {
    let addr = BusAddress::new(PRIMARY);
    let mut mock = MockTransport::new();
    for r in reads {
        mock.push_read(addr, r.clone());
    }
    mock
}

#[test]
fn initialize_then_execute() -> anyhow::Result<()> {
    let mock = mock_with(&[
        test_support::ack_read(),
        common::fixtures::firmware_read(),
        test_support::ack_read(),
        test_support::response_read(&[0x15]),
        test_support::ack_read(),
        common::fixtures::no_target_read(),
    ]);
    let mut device = DeviceBuilder::new()
        .with_transport(mock)
        .with_delay(RecordingDelay::default())
        .build()?;

    let fw = device.initialize()?;
    assert_eq!(device.firmware_version(), Some(fw));

    match device.execute(&Command::list_single_iso14443a())? {
        Response::InListPassiveTarget { targets } => assert!(targets.is_empty()),
        other => panic!("unexpected {:?}", other),
    }
    Ok(())
}

#[test]
fn configure_failure_is_init_error() {
    // firmware answers, SAMConfiguration never does
    let mock = mock_with(&[test_support::ack_read(), common::fixtures::firmware_read()]);
    let mut device = DeviceBuilder::new()
        .with_transport(mock)
        .with_delay(RecordingDelay::default())
        .build()
        .unwrap();

    match device.initialize() {
        Err(Error::Init(inner)) => assert!(matches!(*inner, Error::RetryLater)),
        other => panic!("expected Init error, got {:?}", other),
    }
    assert!(!device.is_initialized());
    // the discovered address is kept
    assert_eq!(device.address(), Some(BusAddress::new(PRIMARY)));
}

#[test]
fn corrupted_response_is_protocol_error() {
    let mut bad = common::fixtures::firmware_read();
    let dcs_idx = 1 + 5 + 6; // ready + header + TFI/payload
    bad[dcs_idx] ^= 0xFF;
    let mock = mock_with(&[
        test_support::ack_read(),
        common::fixtures::firmware_read(),
        test_support::ack_read(),
        bad,
    ]);
    let mut device = DeviceBuilder::new()
        .with_transport(mock)
        .with_delay(RecordingDelay::default())
        .build()
        .unwrap();
    device.discover_and_get_firmware_version().unwrap();

    let err = device.execute(&Command::GetFirmwareVersion).unwrap_err();
    assert!(err.is_protocol_error(), "got {:?}", err);
}

#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{PRIMARY, SECONDARY};
use passport_reader::test_support::SimulatedPn532;
use passport_reader::transport::MockTransport;
use passport_reader::{BusAddress, Error};

#[test]
fn discovery_selects_second_candidate() -> anyhow::Result<()> {
    common::helpers::init_logging();
    let mut device = common::helpers::sim_device(SimulatedPn532::at(SECONDARY));

    let fw = device.discover_and_get_firmware_version()?;
    assert_eq!(fw.ic, 0x32);
    assert_eq!(device.address(), Some(BusAddress::new(SECONDARY)));

    // three failed writes at the first candidate, one wake at the second
    assert_eq!(device.delay().count(100), 3);
    assert_eq!(device.transport().wakes, 1);
    assert_eq!(device.transport().count(0x02), 1);
    Ok(())
}

#[test]
fn discovery_reports_device_not_found() {
    let mut device = common::helpers::sim_device(SimulatedPn532::absent());
    match device.discover_and_get_firmware_version() {
        Err(Error::DeviceNotFound) => {}
        other => panic!("expected DeviceNotFound, got {:?}", other),
    }
    assert_eq!(device.address(), None);
    assert!(!device.is_initialized());
}

#[test]
fn silent_module_uses_read_retry_budget() {
    // Both addresses ACK writes but never produce a frame.
    let mut device = passport_reader::device::Device::new(
        MockTransport::new(),
        passport_reader::test_support::RecordingDelay::default(),
    );
    assert!(matches!(
        device.discover_and_get_firmware_version(),
        Err(Error::DeviceNotFound)
    ));
    // 2 addresses x 3 attempts, each followed by the read retry pause
    assert_eq!(device.delay().count(200), 6);
    let writes = &device.transport().writes;
    assert_eq!(
        writes
            .iter()
            .filter(|(a, _)| *a == BusAddress::new(PRIMARY))
            .count(),
        4 // wake + 3 attempts
    );
}

#[test]
fn primary_answers_first() -> anyhow::Result<()> {
    let mut device = common::helpers::sim_device(SimulatedPn532::at(PRIMARY));
    device.initialize()?;
    assert!(device.is_initialized());
    assert_eq!(device.address(), Some(BusAddress::new(PRIMARY)));
    assert_eq!(device.transport().commands, vec![0x02, 0x14]);
    Ok(())
}

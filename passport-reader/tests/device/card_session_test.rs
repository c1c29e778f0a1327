#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{PRIMARY, sample_uid};
use passport_reader::card::{self, PlaceholderDocumentSource};
use passport_reader::test_support::SimulatedPn532;
use passport_reader::Error;

#[test]
fn detect_select_read() -> anyhow::Result<()> {
    let bus = SimulatedPn532::at(PRIMARY).with_card(&sample_uid());
    let mut device = common::helpers::sim_device(bus);
    device.initialize()?;

    let target = card::detect_target(&mut device)?;
    assert_eq!(target.uid.as_bytes(), &sample_uid());

    card::select_application(&mut device, &target)?;
    let record = card::read_data_group(&mut device, &target, &mut PlaceholderDocumentSource)?;
    assert_eq!(record.uid, target.uid);
    assert_eq!(record.document_number, "A12345678");
    Ok(())
}

#[test]
fn no_card_then_card() -> anyhow::Result<()> {
    let mut bus = SimulatedPn532::at(PRIMARY);
    bus.push_detect(passport_reader::test_support::no_target_payload());
    bus.push_detect(passport_reader::test_support::target_payload(&sample_uid()));
    let mut device = common::helpers::sim_device(bus);
    device.initialize()?;

    assert!(matches!(
        card::detect_target(&mut device),
        Err(Error::NoCardPresent)
    ));
    assert!(card::detect_target(&mut device).is_ok());
    Ok(())
}

#[test]
fn select_rejected_by_chip() -> anyhow::Result<()> {
    let bus = SimulatedPn532::at(PRIMARY)
        .with_card(&sample_uid())
        .with_select_response(&[0x6A, 0x82]);
    let mut device = common::helpers::sim_device(bus);
    device.initialize()?;
    let target = card::detect_target(&mut device)?;

    match card::select_application(&mut device, &target) {
        Err(Error::ApplicationSelect { sw1: 0x6A, sw2: 0x82, .. }) => {}
        other => panic!("expected ApplicationSelect, got {:?}", other),
    }
    Ok(())
}

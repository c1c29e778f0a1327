#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{PRIMARY, sample_uid};
use passport_reader::reader::{ReaderCommand, ReaderState, StatusCode};
use passport_reader::test_support::SimulatedPn532;
use passport_reader::Error;

#[test]
fn stop_scan_while_waiting_is_idempotent() -> anyhow::Result<()> {
    let mut reader = common::helpers::ready_reader(SimulatedPn532::at(PRIMARY));
    let sender = reader.command_sender();

    sender.submit(ReaderCommand::StopScan)?;
    reader.tick();
    sender.submit(ReaderCommand::StopScan)?;
    reader.tick();

    assert_eq!(reader.state(), ReaderState::WaitCommand);
    assert_eq!(
        reader.notifier().statuses(),
        vec![StatusCode::Idle, StatusCode::Idle, StatusCode::Idle]
    );
    Ok(())
}

#[test]
fn reset_from_selecting_app() -> anyhow::Result<()> {
    let bus = SimulatedPn532::at(PRIMARY).with_card(&sample_uid());
    let mut reader = common::helpers::ready_reader(bus);
    let sender = reader.command_sender();
    sender.submit(ReaderCommand::StartScan)?;

    common::helpers::tick_until(&mut reader, 10, |r| {
        r.state() == ReaderState::SelectingApp
    });
    assert_eq!(reader.state(), ReaderState::SelectingApp);
    assert!(reader.target().is_some());

    sender.submit(ReaderCommand::Reset)?;
    reader.tick();

    assert_eq!(reader.state(), ReaderState::WaitCommand);
    assert!(reader.target().is_none());
    assert!(reader.record().is_none());
    assert!(!reader.is_scan_requested());
    assert_eq!(reader.notifier().statuses().last(), Some(&StatusCode::Idle));
    // SELECT was never sent
    assert_eq!(reader.device().transport().count(0x40), 0);
    Ok(())
}

#[test]
fn get_data_resends_last_record() -> anyhow::Result<()> {
    let bus = SimulatedPn532::at(PRIMARY).with_card(&sample_uid());
    let mut reader = common::helpers::ready_reader(bus);
    let sender = reader.command_sender();
    sender.submit(ReaderCommand::StartScan)?;
    for _ in 0..6 {
        reader.tick();
    }
    assert_eq!(reader.notifier().records().len(), 1);

    sender.submit(ReaderCommand::GetData)?;
    reader.tick();
    let records = reader.notifier().records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], records[1]);

    // Reset drops the record; GetData then has nothing to send
    sender.submit(ReaderCommand::Reset)?;
    sender.submit(ReaderCommand::GetData)?;
    reader.tick();
    assert_eq!(reader.notifier().records().len(), 2);
    Ok(())
}

#[test]
fn raw_commands_from_another_thread() -> anyhow::Result<()> {
    let mut reader = common::helpers::ready_reader(SimulatedPn532::at(PRIMARY));
    let sender = reader.command_sender();

    std::thread::spawn(move || sender.submit_raw(&[0x01]))
        .join()
        .map_err(|_| anyhow::anyhow!("producer panicked"))??;

    reader.tick();
    assert_eq!(reader.state(), ReaderState::Detecting);
    Ok(())
}

#[test]
fn malformed_raw_commands_are_rejected() {
    let reader = common::helpers::ready_reader(SimulatedPn532::at(PRIMARY));
    let sender = reader.command_sender();
    assert!(matches!(
        sender.submit_raw(&[0x09]),
        Err(Error::UnknownCommand(0x09))
    ));
    assert!(matches!(
        sender.submit_raw(&[0x01, 0x01]),
        Err(Error::InvalidLength { .. })
    ));
}

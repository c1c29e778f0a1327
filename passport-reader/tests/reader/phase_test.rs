#[path = "../common/mod.rs"]
mod common;

use common::fixtures::{PRIMARY, sample_uid};
use common::helpers::{SimReader, ready_reader, tick_until};
use passport_reader::reader::{ReaderCommand, ReaderState, StatusCode};
use passport_reader::test_support::{SimulatedPn532, target_payload};

/// Reader parked in `phase`, nothing queued.
fn reader_in(phase: ReaderState) -> SimReader {
    let bus = match phase {
        ReaderState::Detecting => SimulatedPn532::at(PRIMARY),
        _ => SimulatedPn532::at(PRIMARY).with_card(&sample_uid()),
    };
    let mut reader = ready_reader(bus);
    let sender = reader.command_sender();

    if phase == ReaderState::Error {
        // a completed scan first, so the failed one has a stale record around
        sender.submit(ReaderCommand::StartScan).unwrap();
        tick_until(&mut reader, 10, |r| r.state() == ReaderState::Success);
        reader.tick();
        assert!(reader.record().is_some());

        let bus = reader.device_mut().transport_mut();
        bus.push_detect(target_payload(&sample_uid()));
        bus.set_select_response(&[0x6A, 0x82]);
    }

    sender.submit(ReaderCommand::StartScan).unwrap();
    tick_until(&mut reader, 10, |r| r.state() == phase);
    assert_eq!(reader.state(), phase, "could not reach {}", phase);
    reader
}

#[derive(Debug)]
struct Expected {
    state: ReaderState,
    scan_requested: bool,
    card_present: bool,
    target: bool,
    record: bool,
    statuses: &'static [StatusCode],
    records_sent: usize,
}

const RESTING: Expected = Expected {
    state: ReaderState::WaitCommand,
    scan_requested: false,
    card_present: false,
    target: false,
    record: false,
    statuses: &[StatusCode::Idle],
    records_sent: 0,
};

fn check(phase: ReaderState, cmd: ReaderCommand, expected: Expected) {
    let mut reader = reader_in(phase);
    let statuses_before = reader.notifier().statuses().len();
    let records_before = reader.notifier().records().len();

    reader.command_sender().submit(cmd).unwrap();
    reader.tick();

    let case = format!("{} in {}", cmd, phase);
    assert_eq!(reader.state(), expected.state, "{}: state", case);
    assert_eq!(
        reader.is_scan_requested(),
        expected.scan_requested,
        "{}: scan requested",
        case
    );
    assert_eq!(
        reader.is_card_present(),
        expected.card_present,
        "{}: card present",
        case
    );
    assert_eq!(reader.target().is_some(), expected.target, "{}: target", case);
    assert_eq!(reader.record().is_some(), expected.record, "{}: record", case);
    assert_eq!(
        reader.notifier().statuses()[statuses_before..],
        *expected.statuses,
        "{}: statuses",
        case
    );
    assert_eq!(
        reader.notifier().records().len() - records_before,
        expected.records_sent,
        "{}: records sent",
        case
    );
}

#[test]
fn start_scan_in_every_phase() {
    let cases = [
        (
            ReaderState::Detecting,
            Expected {
                state: ReaderState::Detecting,
                scan_requested: true,
                statuses: &[StatusCode::Scanning],
                ..RESTING
            },
        ),
        (
            ReaderState::CardDetected,
            Expected {
                state: ReaderState::SelectingApp,
                scan_requested: true,
                card_present: true,
                target: true,
                statuses: &[StatusCode::Reading],
                ..RESTING
            },
        ),
        (
            ReaderState::SelectingApp,
            Expected {
                state: ReaderState::ReadingData,
                scan_requested: true,
                card_present: true,
                target: true,
                statuses: &[],
                ..RESTING
            },
        ),
        (
            ReaderState::ReadingData,
            Expected {
                state: ReaderState::Success,
                scan_requested: true,
                card_present: true,
                target: true,
                record: true,
                statuses: &[],
                ..RESTING
            },
        ),
        (
            ReaderState::Success,
            Expected {
                scan_requested: true,
                target: true,
                record: true,
                statuses: &[StatusCode::Success],
                records_sent: 1,
                ..RESTING
            },
        ),
        (
            ReaderState::Error,
            Expected {
                scan_requested: true,
                statuses: &[StatusCode::Error],
                ..RESTING
            },
        ),
    ];
    for (phase, expected) in cases {
        check(phase, ReaderCommand::StartScan, expected);
    }
}

#[test]
fn stop_scan_in_every_phase() {
    let phases = [
        ReaderState::Detecting,
        ReaderState::CardDetected,
        ReaderState::SelectingApp,
        ReaderState::ReadingData,
        ReaderState::Error,
    ];
    for phase in phases {
        check(phase, ReaderCommand::StopScan, RESTING);
    }

    // a finished read stays available to GetData
    check(
        ReaderState::Success,
        ReaderCommand::StopScan,
        Expected {
            record: true,
            ..RESTING
        },
    );
}

#[test]
fn reset_in_every_phase() {
    let phases = [
        ReaderState::Detecting,
        ReaderState::CardDetected,
        ReaderState::SelectingApp,
        ReaderState::ReadingData,
        ReaderState::Success,
        ReaderState::Error,
    ];
    for phase in phases {
        check(phase, ReaderCommand::Reset, RESTING);
    }
}

#[test]
fn stop_scan_in_error_drops_stale_record() {
    let mut reader = reader_in(ReaderState::Error);
    let sender = reader.command_sender();
    sender.submit(ReaderCommand::StopScan).unwrap();
    reader.tick();

    let records_before = reader.notifier().records().len();
    sender.submit(ReaderCommand::GetData).unwrap();
    reader.tick();
    assert_eq!(reader.notifier().records().len(), records_before);
    assert_eq!(reader.state(), ReaderState::WaitCommand);
}

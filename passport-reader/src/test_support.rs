//! Test support helpers intended for use by unit and integration tests.
//!
//! A simulated PN532, a delay that records instead of sleeping, a notifier
//! that records instead of publishing, and builders for the raw bus reads a
//! module produces.
#![allow(dead_code)]

use std::collections::VecDeque;

use embedded_hal::delay::DelayNs;

use crate::card::DocumentRecord;
use crate::constants::{ACK_FRAME, I2C_READY, PN532_DEVICE_TO_HOST, SW_SUCCESS, WAKE_SEQUENCE};
use crate::protocol::Frame;
use crate::reader::{Notification, Notifier, StatusCode};
use crate::transport::Transport;
use crate::transport::mock::not_ready;
use crate::types::BusAddress;
use crate::{Error, Result};

/// [`DelayNs`] that records each requested wait (in ms) and returns
/// immediately.
#[doc(hidden)]
#[derive(Debug, Default, Clone)]
pub struct RecordingDelay {
    pub calls_ms: Vec<u32>,
}

impl RecordingDelay {
    pub fn total_ms(&self) -> u64 {
        self.calls_ms.iter().map(|&ms| u64::from(ms)).sum()
    }

    /// How many waits of exactly `ms` were requested.
    pub fn count(&self, ms: u32) -> usize {
        self.calls_ms.iter().filter(|&&c| c == ms).count()
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.calls_ms.push(ns / 1_000_000);
    }

    fn delay_us(&mut self, us: u32) {
        self.calls_ms.push(us / 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.calls_ms.push(ms);
    }
}

/// Notifier that keeps everything it is given.
#[doc(hidden)]
#[derive(Debug, Default, Clone)]
pub struct RecordingNotifier {
    pub events: Vec<Notification>,
}

impl RecordingNotifier {
    pub fn statuses(&self) -> Vec<StatusCode> {
        self.events
            .iter()
            .filter_map(|n| match n {
                Notification::Status(code) => Some(*code),
                Notification::Record(_) => None,
            })
            .collect()
    }

    pub fn records(&self) -> Vec<&DocumentRecord> {
        self.events
            .iter()
            .filter_map(|n| match n {
                Notification::Record(r) => Some(r),
                Notification::Status(_) => None,
            })
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn send_status(&mut self, code: StatusCode) {
        self.events.push(Notification::Status(code));
    }

    fn send_record(&mut self, record: &DocumentRecord) {
        self.events.push(Notification::Record(record.clone()));
    }
}

/// ACK as read over I2C: ready byte followed by the ACK frame.
#[doc(hidden)]
pub fn ack_read() -> Vec<u8> {
    let mut out = vec![I2C_READY];
    out.extend_from_slice(&ACK_FRAME);
    out
}

/// Response frame as read over I2C: ready byte + device-to-host frame.
#[doc(hidden)]
pub fn response_read(payload: &[u8]) -> Vec<u8> {
    let mut out = vec![I2C_READY];
    // test payloads are always small enough to frame
    out.extend(Frame::encode(PN532_DEVICE_TO_HOST, payload).unwrap_or_default());
    out
}

/// GetFirmwareVersion answer of a PN532 v1.6.
#[doc(hidden)]
pub fn firmware_payload() -> Vec<u8> {
    vec![0x03, 0x32, 0x01, 0x06, 0x07]
}

/// InListPassiveTarget answer with one ISO 14443-4 target carrying `uid`.
#[doc(hidden)]
pub fn target_payload(uid: &[u8]) -> Vec<u8> {
    let mut out = vec![0x4B, 0x01, 0x01, 0x00, 0x04, 0x20, uid.len() as u8];
    out.extend_from_slice(uid);
    // minimal ATS: TL only
    out.push(0x01);
    out
}

#[doc(hidden)]
pub fn no_target_payload() -> Vec<u8> {
    vec![0x4B, 0x00]
}

/// InDataExchange answer with module status 0 and the given response APDU.
#[doc(hidden)]
pub fn data_exchange_payload(apdu_response: &[u8]) -> Vec<u8> {
    let mut out = vec![0x41, 0x00];
    out.extend_from_slice(apdu_response);
    out
}

/// PN532 model answering by opcode at one bus address.
///
/// Every accepted command queues an ACK read followed by the response read;
/// reading with nothing queued yields the not-ready pattern. Card detection
/// answers come from a script and default to "no target".
#[doc(hidden)]
#[derive(Debug, Default)]
pub struct SimulatedPn532 {
    address: Option<BusAddress>,
    detect_script: VecDeque<Vec<u8>>,
    select_response: Vec<u8>,
    pending: VecDeque<Vec<u8>>,
    /// Opcodes received, in order
    pub commands: Vec<u8>,
    pub wakes: usize,
}

impl SimulatedPn532 {
    /// Module answering at `address`; SELECT succeeds.
    pub fn at(address: u8) -> Self {
        Self {
            address: Some(BusAddress::new(address)),
            select_response: SW_SUCCESS.to_vec(),
            ..Self::default()
        }
    }

    /// Nothing on the bus: every transfer is NACKed.
    pub fn absent() -> Self {
        Self::default()
    }

    /// Queue one InListPassiveTarget answer.
    pub fn push_detect(&mut self, payload: Vec<u8>) {
        self.detect_script.push_back(payload);
    }

    pub fn with_card(mut self, uid: &[u8]) -> Self {
        self.push_detect(target_payload(uid));
        self
    }

    /// Response APDU returned to every InDataExchange.
    pub fn with_select_response(mut self, apdu_response: &[u8]) -> Self {
        self.select_response = apdu_response.to_vec();
        self
    }

    /// Change the SELECT answer mid-run.
    pub fn set_select_response(&mut self, apdu_response: &[u8]) {
        self.select_response = apdu_response.to_vec();
    }

    pub fn count(&self, opcode: u8) -> usize {
        self.commands.iter().filter(|&&c| c == opcode).count()
    }

    fn check_address(&self, address: BusAddress) -> Result<()> {
        if self.address == Some(address) {
            Ok(())
        } else {
            Err(Error::Io(format!("nack at {}", address)))
        }
    }

    fn answer(&mut self, opcode: u8) -> Option<Vec<u8>> {
        match opcode {
            0x02 => Some(firmware_payload()),
            0x14 => Some(vec![0x15]),
            0x4A => Some(
                self.detect_script
                    .pop_front()
                    .unwrap_or_else(no_target_payload),
            ),
            0x40 => Some(data_exchange_payload(&self.select_response)),
            _ => None,
        }
    }
}

impl Transport for SimulatedPn532 {
    fn write(&mut self, address: BusAddress, data: &[u8]) -> Result<()> {
        self.check_address(address)?;
        if data == WAKE_SEQUENCE {
            self.wakes += 1;
            return Ok(());
        }

        let frame = Frame::decode(data)?;
        let Some(&opcode) = frame.payload.first() else {
            return Ok(());
        };
        self.commands.push(opcode);
        if let Some(payload) = self.answer(opcode) {
            self.pending.push_back(ack_read());
            self.pending.push_back(response_read(&payload));
        }
        Ok(())
    }

    fn read(&mut self, address: BusAddress, len: usize) -> Result<Vec<u8>> {
        self.check_address(address)?;
        Ok(match self.pending.pop_front() {
            Some(mut bytes) => {
                bytes.truncate(len);
                bytes
            }
            None => not_ready(len),
        })
    }
}

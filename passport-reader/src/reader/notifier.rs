// passport-reader-rs/passport-reader/src/reader/notifier.rs

use crossbeam_channel::{Receiver, Sender, TrySendError, bounded};
use derive_more::Display;
use log::{info, warn};

use crate::card::DocumentRecord;

/// Status byte reported to the companion app.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum StatusCode {
    /// Waiting for commands
    #[display(fmt = "idle")]
    Idle = 0x00,
    /// Polling for a card
    #[display(fmt = "scanning")]
    Scanning = 0x01,
    /// Card found, reading it
    #[display(fmt = "reading")]
    Reading = 0x02,
    /// Record read
    #[display(fmt = "success")]
    Success = 0x03,
    /// Attempt failed
    #[display(fmt = "error")]
    Error = 0x04,
    /// No card answered
    #[display(fmt = "no-card")]
    NoCard = 0x05,
}

impl StatusCode {
    /// Wire byte.
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Parse a wire byte.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x00 => Some(Self::Idle),
            0x01 => Some(Self::Scanning),
            0x02 => Some(Self::Reading),
            0x03 => Some(Self::Success),
            0x04 => Some(Self::Error),
            0x05 => Some(Self::NoCard),
            _ => None,
        }
    }
}

/// Everything the reader publishes, in emission order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Notification {
    /// Status change.
    Status(StatusCode),
    /// Document record.
    Record(DocumentRecord),
}

/// Outbound side of the wireless link. Delivery is best-effort: an
/// implementation logs a failed send and moves on.
pub trait Notifier {
    fn send_status(&mut self, code: StatusCode);
    fn send_record(&mut self, record: &DocumentRecord);
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn send_status(&mut self, code: StatusCode) {
        (**self).send_status(code)
    }

    fn send_record(&mut self, record: &DocumentRecord) {
        (**self).send_record(record)
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn send_status(&mut self, code: StatusCode) {
        (**self).send_status(code)
    }

    fn send_record(&mut self, record: &DocumentRecord) {
        (**self).send_record(record)
    }
}

/// Writes notifications to the log only. Handy when no peer is wired up.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn send_status(&mut self, code: StatusCode) {
        info!("status {} ({:#04x})", code, code.as_byte());
    }

    fn send_record(&mut self, record: &DocumentRecord) {
        info!("record {}", record.to_wire_string());
    }
}

/// Forwards notifications over a bounded channel to the wireless layer.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: Sender<Notification>,
}

/// Create a [`ChannelNotifier`] and the receiver the wireless layer reads.
pub fn notification_channel(capacity: usize) -> (ChannelNotifier, Receiver<Notification>) {
    let (tx, rx) = bounded(capacity);
    (ChannelNotifier { tx }, rx)
}

impl ChannelNotifier {
    fn publish(&self, notification: Notification) {
        match self.tx.try_send(notification) {
            Ok(()) => {}
            Err(TrySendError::Full(n)) => warn!("notification queue full, dropped {:?}", n),
            Err(TrySendError::Disconnected(_)) => warn!("no peer attached, notification dropped"),
        }
    }
}

impl Notifier for ChannelNotifier {
    fn send_status(&mut self, code: StatusCode) {
        self.publish(Notification::Status(code));
    }

    fn send_record(&mut self, record: &DocumentRecord) {
        self.publish(Notification::Record(record.clone()));
    }
}

// passport-reader-rs/passport-reader/src/reader/command.rs

//! Operator commands and the bounded queue that carries them into the
//! acquisition loop.

use crossbeam_channel::{Receiver, Sender, TrySendError, bounded};
use derive_more::Display;
use log::debug;

use crate::{Error, Result};

/// Operator command, as written by the companion app (one byte).
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ReaderCommand {
    /// Start polling for a card
    #[display(fmt = "start-scan")]
    StartScan = 0x01,
    /// Stop polling and return to waiting
    #[display(fmt = "stop-scan")]
    StopScan = 0x02,
    /// Send the last record again
    #[display(fmt = "get-data")]
    GetData = 0x03,
    /// Drop session state
    #[display(fmt = "reset")]
    Reset = 0x04,
}

impl ReaderCommand {
    /// Wire byte.
    pub fn as_byte(self) -> u8 {
        self as u8
    }

    /// Parse a wire byte.
    pub fn from_byte(byte: u8) -> Result<Self> {
        match byte {
            0x01 => Ok(Self::StartScan),
            0x02 => Ok(Self::StopScan),
            0x03 => Ok(Self::GetData),
            0x04 => Ok(Self::Reset),
            other => Err(Error::UnknownCommand(other)),
        }
    }
}

impl TryFrom<u8> for ReaderCommand {
    type Error = Error;

    fn try_from(byte: u8) -> Result<Self> {
        Self::from_byte(byte)
    }
}

/// Create the command queue. `capacity` bounds how many commands may wait
/// for the next tick.
pub fn command_channel(capacity: usize) -> (CommandSender, CommandInbox) {
    let (tx, rx) = bounded(capacity);
    (CommandSender { tx }, CommandInbox { rx, capacity })
}

/// Producer side, handed to the wireless layer. Cheap to clone and `Send`.
#[derive(Debug, Clone)]
pub struct CommandSender {
    tx: Sender<ReaderCommand>,
}

impl CommandSender {
    /// Queue a command without blocking.
    pub fn submit(&self, cmd: ReaderCommand) -> Result<()> {
        self.tx.try_send(cmd).map_err(|e| match e {
            TrySendError::Full(_) => Error::InboxFull,
            TrySendError::Disconnected(_) => Error::InboxClosed,
        })?;
        debug!("queued command {}", cmd);
        Ok(())
    }

    /// Queue a command from a raw control write. The write must be exactly
    /// one byte.
    pub fn submit_raw(&self, bytes: &[u8]) -> Result<()> {
        match bytes {
            [byte] => self.submit(ReaderCommand::from_byte(*byte)?),
            _ => Err(Error::InvalidLength {
                expected: 1,
                actual: bytes.len(),
            }),
        }
    }

    /// Commands currently waiting.
    pub fn pending(&self) -> usize {
        self.tx.len()
    }
}

/// Consumer side, owned by the reader and drained once per tick.
#[derive(Debug)]
pub struct CommandInbox {
    rx: Receiver<ReaderCommand>,
    capacity: usize,
}

impl CommandInbox {
    /// Take everything queued right now, oldest first. At most one queue's
    /// worth is taken so a busy producer cannot stall the tick.
    pub fn drain(&self) -> Vec<ReaderCommand> {
        self.rx.try_iter().take(self.capacity).collect()
    }
}

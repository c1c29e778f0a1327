// passport-reader-rs/passport-reader/src/reader/mod.rs

//! Acquisition state machine.
//!
//! One [`Reader`] owns the driver and all session state. Operator commands
//! arrive through a [`CommandSender`] and are applied at the start of the
//! next [`Reader::tick`]; nothing outside the tick mutates the reader.

pub mod command;
pub mod notifier;

pub use command::{CommandInbox, CommandSender, ReaderCommand, command_channel};
pub use notifier::{
    ChannelNotifier, LogNotifier, Notification, Notifier, StatusCode, notification_channel,
};

use std::sync::atomic::{AtomicBool, Ordering};

use derive_more::Display;
use embedded_hal::delay::DelayNs;
use log::{debug, error, info, trace};

use crate::card::{self, DocumentRecord, DocumentSource, PlaceholderDocumentSource, Target};
use crate::config::{ReaderConfig, Timings};
use crate::device::Device;
use crate::transport::Transport;
use crate::{Error, Result};

/// Acquisition phase.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReaderState {
    /// Before initialization
    #[display(fmt = "idle")]
    Idle,
    /// Discovering and configuring the module
    #[display(fmt = "init")]
    Init,
    /// Initialized, waiting for StartScan
    #[display(fmt = "wait-command")]
    WaitCommand,
    /// Polling for a target
    #[display(fmt = "detecting")]
    Detecting,
    /// Target found
    #[display(fmt = "card-detected")]
    CardDetected,
    /// Selecting the document application
    #[display(fmt = "selecting-app")]
    SelectingApp,
    /// Reading the document record
    #[display(fmt = "reading-data")]
    ReadingData,
    /// Record read, about to notify
    #[display(fmt = "success")]
    Success,
    /// Attempt failed, cooling down
    #[display(fmt = "error")]
    Error,
}

/// Acquisition loop over one driver.
pub struct Reader<T, D, N, S = PlaceholderDocumentSource> {
    device: Device<T, D>,
    notifier: N,
    source: S,
    sender: CommandSender,
    inbox: CommandInbox,
    timings: Timings,
    state: ReaderState,
    scan_requested: bool,
    card_present: bool,
    target: Option<Target>,
    record: Option<DocumentRecord>,
}

impl<T, D, N> Reader<T, D, N, PlaceholderDocumentSource>
where
    T: Transport,
    D: DelayNs,
    N: Notifier,
{
    /// Reader in [`ReaderState::Idle`] with the placeholder document source.
    pub fn new(device: Device<T, D>, notifier: N, config: ReaderConfig) -> Self {
        let (sender, inbox) = command_channel(config.inbox_capacity);
        Self {
            device,
            notifier,
            source: PlaceholderDocumentSource,
            sender,
            inbox,
            timings: config.timings,
            state: ReaderState::Idle,
            scan_requested: false,
            card_present: false,
            target: None,
            record: None,
        }
    }
}

impl<T, D, N, S> Reader<T, D, N, S>
where
    T: Transport,
    D: DelayNs,
    N: Notifier,
    S: DocumentSource,
{
    /// Swap the data-acquisition backend.
    pub fn with_source<S2: DocumentSource>(self, source: S2) -> Reader<T, D, N, S2> {
        Reader {
            device: self.device,
            notifier: self.notifier,
            source,
            sender: self.sender,
            inbox: self.inbox,
            timings: self.timings,
            state: self.state,
            scan_requested: self.scan_requested,
            card_present: self.card_present,
            target: self.target,
            record: self.record,
        }
    }

    /// Handle for submitting operator commands from another thread.
    pub fn command_sender(&self) -> CommandSender {
        self.sender.clone()
    }

    /// Current phase.
    pub fn state(&self) -> ReaderState {
        self.state
    }

    /// Target of the current session.
    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    /// Last record read.
    pub fn record(&self) -> Option<&DocumentRecord> {
        self.record.as_ref()
    }

    /// Whether a StartScan is pending.
    pub fn is_scan_requested(&self) -> bool {
        self.scan_requested
    }

    /// Whether a card was found in this session.
    pub fn is_card_present(&self) -> bool {
        self.card_present
    }

    /// Underlying driver.
    pub fn device(&self) -> &Device<T, D> {
        &self.device
    }

    /// Underlying driver, mutably.
    pub fn device_mut(&mut self) -> &mut Device<T, D> {
        &mut self.device
    }

    /// Status sink.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Status sink, mutably.
    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Apply queued commands, then advance one phase.
    pub fn tick(&mut self) {
        let start_requested = self.apply_commands();
        self.step();
        // A StartScan from this tick survives the step that closes the
        // previous attempt.
        if start_requested {
            self.scan_requested = true;
        }
    }

    /// Tick on the configured interval until `running` is cleared.
    pub fn run(&mut self, running: &AtomicBool) {
        info!("reader loop started");
        while running.load(Ordering::Acquire) {
            self.tick();
            self.device.pause_ms(self.timings.tick_interval_ms);
        }
        info!("reader loop stopped in {}", self.state);
    }

    /// Drain the inbox; true when the last scan command seen was StartScan.
    fn apply_commands(&mut self) -> bool {
        let mut start_requested = false;
        for cmd in self.inbox.drain() {
            match cmd {
                ReaderCommand::StartScan => start_requested = true,
                ReaderCommand::StopScan | ReaderCommand::Reset => start_requested = false,
                ReaderCommand::GetData => {}
            }
            self.handle_command(cmd);
        }
        start_requested
    }

    fn handle_command(&mut self, cmd: ReaderCommand) {
        debug!("command {} in {}", cmd, self.state);
        match cmd {
            ReaderCommand::StartScan => self.scan_requested = true,
            ReaderCommand::StopScan => {
                if self.state == ReaderState::Error {
                    self.clear_session();
                } else {
                    self.scan_requested = false;
                    self.card_present = false;
                    self.target = None;
                }
                self.state = self.resting_state();
                self.notify_status(StatusCode::Idle);
            }
            ReaderCommand::GetData => match &self.record {
                Some(record) => self.notifier.send_record(record),
                None => debug!("get-data without a record"),
            },
            ReaderCommand::Reset => {
                self.clear_session();
                self.state = self.resting_state();
                self.notify_status(StatusCode::Idle);
            }
        }
    }

    fn step(&mut self) {
        match self.state {
            ReaderState::Idle => self.state = ReaderState::Init,
            ReaderState::Init => match self.device.initialize() {
                Ok(firmware) => {
                    info!("reader ready ({})", firmware);
                    self.state = ReaderState::WaitCommand;
                    self.notify_status(StatusCode::Idle);
                }
                Err(e) => self.fail(e),
            },
            ReaderState::WaitCommand => {
                if self.scan_requested {
                    self.state = ReaderState::Detecting;
                }
            }
            ReaderState::Detecting => self.detect(),
            ReaderState::CardDetected => {
                self.notify_status(StatusCode::Reading);
                self.state = ReaderState::SelectingApp;
            }
            ReaderState::SelectingApp => {
                let selected = match &self.target {
                    Some(target) => card::select_application(&mut self.device, target),
                    None => Err(Error::NoCardPresent),
                };
                match selected {
                    Ok(()) => self.state = ReaderState::ReadingData,
                    Err(e) => self.fail(e),
                }
            }
            ReaderState::ReadingData => match self.read_record() {
                Ok(record) => {
                    self.record = Some(record);
                    self.state = ReaderState::Success;
                }
                Err(e) => self.fail(e),
            },
            ReaderState::Success => {
                self.notify_status(StatusCode::Success);
                self.device.pause_ms(self.timings.record_gap_ms);
                if let Some(record) = &self.record {
                    self.notifier.send_record(record);
                }
                self.device.pause_ms(self.timings.success_settle_ms);
                self.card_present = false;
                self.scan_requested = false;
                self.state = ReaderState::WaitCommand;
            }
            ReaderState::Error => {
                self.notify_status(StatusCode::Error);
                self.device.pause_ms(self.timings.error_cooldown_ms);
                self.clear_session();
                self.state = self.resting_state();
                info!("recovered from error, now {}", self.state);
            }
        }
    }

    fn detect(&mut self) {
        if !self.scan_requested {
            self.state = ReaderState::WaitCommand;
            return;
        }

        self.notify_status(StatusCode::Scanning);
        match card::detect_target(&mut self.device) {
            Ok(target) => {
                info!("card detected, uid {}", target.uid.to_hex());
                self.card_present = true;
                self.target = Some(target);
                self.state = ReaderState::CardDetected;
            }
            Err(e @ (Error::NoCardPresent | Error::RetryLater)) => {
                trace!("detect: {}", e);
                self.device.pause_ms(self.timings.detect_backoff_ms);
            }
            Err(e) => self.fail(e),
        }
    }

    fn read_record(&mut self) -> Result<DocumentRecord> {
        let target = self.target.as_ref().ok_or(Error::NoCardPresent)?;
        card::read_data_group(&mut self.device, target, &mut self.source)
    }

    fn fail(&mut self, err: Error) {
        error!("{} failed: {}", self.state, err);
        self.state = ReaderState::Error;
        self.notify_status(StatusCode::Error);
    }

    fn clear_session(&mut self) {
        self.scan_requested = false;
        self.card_present = false;
        self.target = None;
        self.record = None;
    }

    /// Where the machine waits once a scan attempt is over: for commands if
    /// the driver is up, otherwise back through initialization.
    fn resting_state(&self) -> ReaderState {
        if self.device.is_initialized() {
            ReaderState::WaitCommand
        } else {
            ReaderState::Idle
        }
    }

    fn notify_status(&mut self, code: StatusCode) {
        debug!("notify {}", code);
        self.notifier.send_status(code);
    }
}

// passport-reader-rs/passport-reader/src/device/handle.rs

use embedded_hal::delay::DelayNs;
use log::{debug, info, trace, warn};

use crate::config::DriverConfig;
use crate::constants::{PN532_DEVICE_TO_HOST, PN532_HOST_TO_DEVICE, WAKE_SEQUENCE};
use crate::device::discovery::{self, Probe};
use crate::protocol::responses::decode_firmware_version;
use crate::protocol::{Command, Frame, Response};
use crate::transport::Transport;
use crate::types::{BusAddress, FirmwareVersion};
use crate::utils::HexDump;
use crate::{Error, Result};

/// Command driver for a PN532 reader module.
///
/// The bus address is discovered once and then kept for the session. All
/// waits go through the injected [`DelayNs`], so tests run without sleeping.
pub struct Device<T, D> {
    transport: T,
    delay: D,
    config: DriverConfig,
    address: Option<BusAddress>,
    firmware: Option<FirmwareVersion>,
    configured: bool,
}

impl<T: Transport, D: DelayNs> Device<T, D> {
    /// Driver with default config.
    pub fn new(transport: T, delay: D) -> Self {
        Self::with_config(transport, delay, DriverConfig::default())
    }

    /// Driver with `config`.
    pub fn with_config(transport: T, delay: D, config: DriverConfig) -> Self {
        Self {
            transport,
            delay,
            config,
            address: None,
            firmware: None,
            configured: false,
        }
    }

    /// Session address, once discovery has succeeded.
    pub fn address(&self) -> Option<BusAddress> {
        self.address
    }

    /// Firmware reported during discovery.
    pub fn firmware_version(&self) -> Option<FirmwareVersion> {
        self.firmware
    }

    /// True after both discovery and session configuration succeeded.
    pub fn is_initialized(&self) -> bool {
        self.address.is_some() && self.configured
    }

    /// Active config.
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Underlying transport, mutably.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Delay provider.
    pub fn delay(&self) -> &D {
        &self.delay
    }

    /// Block for `ms` milliseconds on the driver's delay source.
    pub fn pause_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    /// Give back the transport and delay.
    pub fn into_parts(self) -> (T, D) {
        (self.transport, self.delay)
    }

    fn current_address(&self) -> Result<BusAddress> {
        self.address.ok_or(Error::NotInitialized)
    }

    /// Clock the wake sequence onto the bus and let the module settle.
    /// Best-effort: a failed write is logged only.
    pub fn wake(&mut self) {
        match self.address {
            Some(address) => {
                if let Err(e) = self.transport.write(address, &WAKE_SEQUENCE) {
                    debug!("wake at {} failed: {}", address, e);
                }
            }
            None => warn!("wake requested without a bus address"),
        }
        self.delay.delay_ms(self.config.timings.wake_settle_ms);
    }

    /// Frame `cmd` with the host identifier and write it.
    pub fn send(&mut self, cmd: &Command) -> Result<()> {
        let address = self.current_address()?;
        let frame = Frame::encode(PN532_HOST_TO_DEVICE, &cmd.encode())?;
        trace!("TX {} [{}]", address, HexDump(&frame));
        self.transport.write(address, &frame)
    }

    /// Collect the ACK (tolerated when missing) and then the response frame,
    /// returning its payload starting at the echoed response code.
    pub fn receive(&mut self) -> Result<Vec<u8>> {
        let address = self.current_address()?;
        let timings = self.config.timings;

        self.delay.delay_ms(timings.ack_wait_ms);
        match self.transport.read(address, self.config.ack_len) {
            Ok(raw) if Frame::is_ack(&raw) => trace!("ACK {}", address),
            Ok(raw) => debug!("no ACK from {}: [{}]", address, HexDump(&raw)),
            Err(e) => debug!("ACK read from {} failed: {}", address, e),
        }

        self.delay.delay_ms(timings.response_wait_ms);
        let raw = self.transport.read(address, self.config.response_len)?;
        trace!("RX {} [{}]", address, HexDump(&raw));

        let frame = Frame::decode(&raw)?;
        if frame.identifier != PN532_DEVICE_TO_HOST {
            return Err(Error::FrameFormat(format!(
                "unexpected frame identifier {:#04x}",
                frame.identifier
            )));
        }
        Ok(frame.payload)
    }

    /// Send `cmd`, retrying bus faults on the write, then receive and decode
    /// the answer.
    pub fn execute(&mut self, cmd: &Command) -> Result<Response> {
        let mut retries = 0;
        loop {
            match self.send(cmd) {
                Ok(()) => break,
                Err(Error::Io(msg)) if retries < self.config.io_retries => {
                    retries += 1;
                    warn!(
                        "write of {:#04x} failed ({}), retry {}/{}",
                        cmd.opcode(),
                        msg,
                        retries,
                        self.config.io_retries
                    );
                    self.delay.delay_ms(self.config.timings.write_retry_ms);
                }
                Err(e) => return Err(e),
            }
        }

        let payload = self.receive()?;
        Response::decode(cmd.opcode(), &payload)
    }

    /// Probe the candidate addresses for a module answering
    /// GetFirmwareVersion. The first one to answer becomes the session
    /// address.
    pub fn discover_and_get_firmware_version(&mut self) -> Result<FirmwareVersion> {
        self.configured = false;
        let config = self.config.discovery.clone();

        let found = discovery::discover(&mut FirmwareProbe { device: self }, &config);
        match found {
            Ok((address, firmware)) => {
                info!("PN532 at {}: {}", address, firmware);
                self.address = Some(address);
                self.firmware = Some(firmware);
                Ok(firmware)
            }
            Err(e) => {
                self.address = None;
                self.firmware = None;
                Err(e)
            }
        }
    }

    /// Put the SAM in normal mode. Any failure is reported as
    /// [`Error::Init`].
    pub fn configure_session(&mut self) -> Result<()> {
        match self.execute(&Command::sam_normal()) {
            Ok(Response::SamConfiguration) => {
                debug!("SAM configured");
                self.configured = true;
                Ok(())
            }
            Ok(other) => Err(Error::Init(Box::new(Error::FrameFormat(format!(
                "unexpected answer to SAMConfiguration: {:?}",
                other
            ))))),
            Err(e) => Err(Error::Init(Box::new(e))),
        }
    }

    /// Discovery followed by session configuration.
    pub fn initialize(&mut self) -> Result<FirmwareVersion> {
        let firmware = self.discover_and_get_firmware_version()?;
        self.configure_session()?;
        Ok(firmware)
    }
}

/// GetFirmwareVersion round trip used as the discovery probe.
struct FirmwareProbe<'a, T, D> {
    device: &'a mut Device<T, D>,
}

impl<T: Transport, D: DelayNs> Probe for FirmwareProbe<'_, T, D> {
    type Output = FirmwareVersion;

    fn prepare(&mut self, address: BusAddress) {
        self.device.address = Some(address);
        self.device.wake();
    }

    fn attempt(&mut self, _address: BusAddress, _attempt: usize) -> Result<FirmwareVersion> {
        let timings = self.device.config.timings;

        if let Err(e) = self.device.send(&Command::GetFirmwareVersion) {
            self.device.delay.delay_ms(timings.write_retry_ms);
            return Err(e);
        }

        let answer = self
            .device
            .receive()
            .and_then(|payload| decode_firmware_version(&payload));
        if answer.is_err() {
            self.device.delay.delay_ms(timings.read_retry_ms);
        }
        answer
    }
}

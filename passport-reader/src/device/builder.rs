// passport-reader-rs/passport-reader/src/device/builder.rs

use crate::config::{DiscoveryConfig, DriverConfig};
use crate::device::handle::Device;
use crate::transport::Transport;
use crate::types::BusAddress;
use crate::{Error, Result};
use embedded_hal::delay::DelayNs;

/// Helper to construct a [`Device`] with optional configuration.
pub struct DeviceBuilder<T, D> {
    transport: Option<T>,
    delay: Option<D>,
    config: DriverConfig,
}

impl<T: Transport, D: DelayNs + Default> DeviceBuilder<T, D> {
    /// Builder with default config and delay.
    pub fn new() -> Self {
        Self {
            transport: None,
            delay: None,
            config: DriverConfig::default(),
        }
    }

    /// Bus to talk over.
    pub fn with_transport(mut self, transport: T) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Delay source; `D::default()` is used when not given.
    pub fn with_delay(mut self, delay: D) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Replace the whole driver config.
    pub fn with_config(mut self, config: DriverConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the candidate address table, keeping the attempt budget.
    pub fn with_addresses(mut self, addresses: &[u8]) -> Self {
        self.config.discovery = DiscoveryConfig {
            addresses: addresses.iter().copied().map(BusAddress::new).collect(),
            ..self.config.discovery
        };
        self
    }

    /// Attempts per candidate address.
    pub fn with_attempts(mut self, attempts_per_address: usize) -> Self {
        self.config.discovery.attempts_per_address = attempts_per_address;
        self
    }

    /// Requires a transport; otherwise returns `DeviceNotFound`.
    pub fn build(self) -> Result<Device<T, D>> {
        let transport = self.transport.ok_or(Error::DeviceNotFound)?;
        let delay = self.delay.unwrap_or_default();
        Ok(Device::with_config(transport, delay, self.config))
    }
}

impl<T: Transport, D: DelayNs + Default> Default for DeviceBuilder<T, D> {
    fn default() -> Self {
        Self::new()
    }
}

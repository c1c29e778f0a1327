// passport-reader-rs/passport-reader/src/transport/i2c.rs

use embedded_hal::i2c::{Error as _, I2c};
use log::trace;

use crate::transport::traits::Transport;
use crate::types::BusAddress;
use crate::utils::HexDump;
use crate::{Error, Result};

/// [`Transport`] over any embedded-hal 1.0 I2C bus (7-bit addressing).
pub struct I2cTransport<I> {
    bus: I,
}

impl<I: I2c> I2cTransport<I> {
    /// Wrap an I2C bus.
    pub fn new(bus: I) -> Self {
        Self { bus }
    }

    /// Give the bus back to the caller.
    pub fn release(self) -> I {
        self.bus
    }
}

impl<I: I2c> Transport for I2cTransport<I> {
    fn write(&mut self, address: BusAddress, data: &[u8]) -> Result<()> {
        trace!("i2c write {} [{}]", address, HexDump(data));
        self.bus
            .write(address.as_u8(), data)
            .map_err(|e| Error::Io(format!("write to {}: {:?}", address, e.kind())))
    }

    fn read(&mut self, address: BusAddress, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        self.bus
            .read(address.as_u8(), &mut buf)
            .map_err(|e| Error::Io(format!("read from {}: {:?}", address, e.kind())))?;
        trace!("i2c read {} [{}]", address, HexDump(&buf));
        Ok(buf)
    }
}

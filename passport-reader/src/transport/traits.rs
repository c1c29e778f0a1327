// passport-reader-rs/passport-reader/src/transport/traits.rs

use crate::Result;
use crate::types::BusAddress;

/// Raw byte access to an addressed peripheral. Implementations own their
/// bus timeouts; a fault is reported as [`Error::Io`](crate::Error::Io).
pub trait Transport {
    /// Write `data` to the peripheral at `address`.
    fn write(&mut self, address: BusAddress, data: &[u8]) -> Result<()>;

    /// Read exactly `len` bytes from the peripheral at `address`.
    fn read(&mut self, address: BusAddress, len: usize) -> Result<Vec<u8>>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn write(&mut self, address: BusAddress, data: &[u8]) -> Result<()> {
        (**self).write(address, data)
    }

    fn read(&mut self, address: BusAddress, len: usize) -> Result<Vec<u8>> {
        (**self).read(address, len)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write(&mut self, address: BusAddress, data: &[u8]) -> Result<()> {
        (**self).write(address, data)
    }

    fn read(&mut self, address: BusAddress, len: usize) -> Result<Vec<u8>> {
        (**self).read(address, len)
    }
}

// passport-reader-rs/passport-reader/src/transport/mock.rs

use std::collections::{HashMap, HashSet, VecDeque};

use crate::constants::I2C_NOT_READY;
use crate::transport::traits::Transport;
use crate::types::BusAddress;
use crate::{Error, Result};

/// Scripted transport for unit tests. Records every write and serves queued
/// reads per address. A read with nothing queued returns the module's
/// not-ready pattern, like a busy PN532 would.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Every write, in order
    pub writes: Vec<(BusAddress, Vec<u8>)>,
    /// Every read request, in order
    pub reads: Vec<(BusAddress, usize)>,
    responses: HashMap<BusAddress, VecDeque<Vec<u8>>>,
    /// Addresses that NACK every transfer
    absent: HashSet<BusAddress>,
    /// Testing hook: number of upcoming writes that should fail
    pub write_failures: usize,
    /// Testing hook: number of upcoming reads that should fail
    pub read_failures: usize,
}

impl MockTransport {
    /// Empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a read result for `address`.
    pub fn push_read(&mut self, address: BusAddress, bytes: Vec<u8>) {
        self.responses.entry(address).or_default().push_back(bytes);
    }

    /// Make every transfer to `address` fail as if nothing answered.
    pub fn set_absent(&mut self, address: BusAddress) {
        self.absent.insert(address);
    }

    /// Fail the next `n` writes.
    pub fn set_write_failures(&mut self, n: usize) {
        self.write_failures = n;
    }

    /// Fail the next `n` reads.
    pub fn set_read_failures(&mut self, n: usize) {
        self.read_failures = n;
    }

    /// Payloads written to `address`, in order.
    pub fn writes_to(&self, address: BusAddress) -> Vec<&[u8]> {
        self.writes
            .iter()
            .filter(|(a, _)| *a == address)
            .map(|(_, d)| d.as_slice())
            .collect()
    }

    /// Reads still queued for `address`.
    pub fn pending_reads(&self, address: BusAddress) -> usize {
        self.responses.get(&address).map_or(0, VecDeque::len)
    }
}

/// Bytes a busy module clocks out: the not-ready pattern padded to `len`.
pub fn not_ready(len: usize) -> Vec<u8> {
    let mut out = vec![I2C_NOT_READY[1]; len];
    if let Some(first) = out.first_mut() {
        *first = I2C_NOT_READY[0];
    }
    out
}

impl Transport for MockTransport {
    fn write(&mut self, address: BusAddress, data: &[u8]) -> Result<()> {
        if self.absent.contains(&address) {
            return Err(Error::Io(format!("nack at {}", address)));
        }
        if self.write_failures > 0 {
            self.write_failures -= 1;
            return Err(Error::Io("injected write failure".into()));
        }
        self.writes.push((address, data.to_vec()));
        Ok(())
    }

    fn read(&mut self, address: BusAddress, len: usize) -> Result<Vec<u8>> {
        if self.absent.contains(&address) {
            return Err(Error::Io(format!("nack at {}", address)));
        }
        if self.read_failures > 0 {
            self.read_failures -= 1;
            return Err(Error::Io("injected read failure".into()));
        }
        self.reads.push((address, len));

        // Short scripted reads are returned as-is; long ones are truncated
        // to the requested length like a real bus transfer.
        match self.responses.get_mut(&address).and_then(VecDeque::pop_front) {
            Some(mut bytes) => {
                bytes.truncate(len);
                Ok(bytes)
            }
            None => Ok(not_ready(len)),
        }
    }
}

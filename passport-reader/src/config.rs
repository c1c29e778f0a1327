// passport-reader-rs/passport-reader/src/config.rs

//! Tunables for the driver and the acquisition loop.
//!
//! Defaults carry the timings the reader module was characterised with;
//! callers normally only override them in tests.

use crate::constants::{CANDIDATE_ADDRESSES, DISCOVERY_ATTEMPTS};
use crate::types::BusAddress;

/// Fixed delays, all in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timings {
    /// Settle time after the wake sequence
    pub wake_settle_ms: u32,
    /// Wait before reading the ACK frame
    pub ack_wait_ms: u32,
    /// Wait between ACK and response read
    pub response_wait_ms: u32,
    /// Pause after a failed write during discovery or I/O retry
    pub write_retry_ms: u32,
    /// Pause after a failed or empty read during discovery
    pub read_retry_ms: u32,
    /// Backoff between card detection attempts
    pub detect_backoff_ms: u32,
    /// Gap between the Success status and the record notification
    pub record_gap_ms: u32,
    /// Pause after the record notification before waiting again
    pub success_settle_ms: u32,
    /// Pause in the Error phase before recovery
    pub error_cooldown_ms: u32,
    /// Poll interval of [`Reader::run`](crate::reader::Reader::run)
    pub tick_interval_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            wake_settle_ms: 20,
            ack_wait_ms: 50,
            response_wait_ms: 20,
            write_retry_ms: 100,
            read_retry_ms: 200,
            detect_backoff_ms: 500,
            record_gap_ms: 100,
            success_settle_ms: 2000,
            error_cooldown_ms: 2000,
            tick_interval_ms: 100,
        }
    }
}

/// Ordered candidate addresses and the attempt budget per address.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscoveryConfig {
    /// Addresses probed, in order
    pub addresses: Vec<BusAddress>,
    /// Attempts at each address before moving on
    pub attempts_per_address: usize,
}

impl DiscoveryConfig {
    /// Upper bound on probe attempts across all candidates.
    pub fn max_attempts(&self) -> usize {
        self.addresses.len() * self.attempts_per_address
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            addresses: CANDIDATE_ADDRESSES
                .iter()
                .copied()
                .map(BusAddress::new)
                .collect(),
            attempts_per_address: DISCOVERY_ATTEMPTS,
        }
    }
}

/// Driver settings: discovery plan, timings and read sizes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DriverConfig {
    /// Where to look for the module
    pub discovery: DiscoveryConfig,
    /// Bus delays
    pub timings: Timings,
    /// Bytes read for a response frame (ready byte included)
    pub response_len: usize,
    /// Bytes read for the ACK frame (ready byte included)
    pub ack_len: usize,
    /// Extra write attempts after a bus fault
    pub io_retries: usize,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            discovery: DiscoveryConfig::default(),
            timings: Timings::default(),
            response_len: 64,
            ack_len: 7,
            io_retries: 2,
        }
    }
}

/// Acquisition loop settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReaderConfig {
    /// Phase delays and tick interval
    pub timings: Timings,
    /// Capacity of the operator command queue
    pub inbox_capacity: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            timings: Timings::default(),
            inbox_capacity: 8,
        }
    }
}

// passport-reader-rs/passport-reader/src/device/discovery.rs

//! Bounded discovery over an ordered candidate table.
//!
//! The address list and attempt budget are data ([`DiscoveryConfig`]); what
//! an attempt actually does is supplied by a [`Probe`].

use log::{debug, info, warn};

use crate::config::DiscoveryConfig;
use crate::types::BusAddress;
use crate::{Error, Result};

/// One kind of "is anything answering at this address" check.
pub trait Probe {
    type Output;

    /// Called once per candidate before its first attempt.
    fn prepare(&mut self, address: BusAddress);

    /// Attempt number `attempt` (1-based) at `address`.
    fn attempt(&mut self, address: BusAddress, attempt: usize) -> Result<Self::Output>;
}

/// Try every candidate in order, each up to `attempts_per_address` times.
/// The first success wins; exhausting the table yields
/// [`Error::DeviceNotFound`].
pub fn discover<P: Probe>(
    probe: &mut P,
    config: &DiscoveryConfig,
) -> Result<(BusAddress, P::Output)> {
    for &address in &config.addresses {
        probe.prepare(address);

        for attempt in 1..=config.attempts_per_address {
            match probe.attempt(address, attempt) {
                Ok(output) => {
                    info!("device answered at {} (attempt {})", address, attempt);
                    return Ok((address, output));
                }
                Err(e) => debug!(
                    "probe {} attempt {}/{} failed: {}",
                    address, attempt, config.attempts_per_address, e
                ),
            }
        }

        warn!("no answer at {}", address);
    }

    Err(Error::DeviceNotFound)
}

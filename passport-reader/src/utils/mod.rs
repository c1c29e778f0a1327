//! Small helpers shared across the crate: hex rendering for logs and a
//! host delay implementation.

pub mod delay;
pub mod hex;

pub use delay::StdDelay;
pub use hex::*;

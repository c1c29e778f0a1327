// passport-reader-rs/passport-reader/src/lib.rs

//! passport-reader
//!
//! Driver and acquisition loop for reading identity documents through a
//! PN532 contactless reader module on an I2C bus.
#![warn(missing_docs)]

pub mod card;
pub mod config;
pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod reader;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;

// passport-reader-rs/passport-reader/src/protocol/mod.rs

pub mod apdu;
pub mod checksum;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use apdu::{Apdu, StatusWord};
pub use checksum::{dcs, lcs};
pub use commands::Command;
pub use frame::Frame;
pub use responses::Response;

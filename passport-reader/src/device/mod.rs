// passport-reader-rs/passport-reader/src/device/mod.rs

pub mod builder;
pub mod discovery;
pub mod handle;

pub use builder::DeviceBuilder;
pub use discovery::{Probe, discover};
pub use handle::Device;

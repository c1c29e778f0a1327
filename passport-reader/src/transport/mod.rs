// passport-reader-rs/passport-reader/src/transport/mod.rs

pub mod i2c;
pub mod mock;
pub mod traits;

pub use i2c::I2cTransport;
pub use mock::MockTransport;
pub use traits::Transport;

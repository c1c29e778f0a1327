// passport-reader-rs/passport-reader/src/prelude.rs

pub use crate::card::{DocumentRecord, DocumentSource, PlaceholderDocumentSource, Target};
pub use crate::config::{DiscoveryConfig, DriverConfig, ReaderConfig, Timings};
pub use crate::device::{Device, DeviceBuilder};
pub use crate::protocol::{Apdu, Command, Frame, Response, StatusWord};
pub use crate::reader::{
    ChannelNotifier, CommandSender, LogNotifier, Notification, Notifier, Reader, ReaderCommand,
    ReaderState, StatusCode,
};
pub use crate::transport::{I2cTransport, MockTransport, Transport};
pub use crate::{BusAddress, Error, FirmwareVersion, Result, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{HexDump, StdDelay, bytes_to_hex};

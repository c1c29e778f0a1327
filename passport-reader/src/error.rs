// passport-reader-rs/passport-reader/src/error.rs

use thiserror::Error;

/// Crate-wide error type
#[derive(Error, Debug)]
pub enum Error {
    /// Bus fault reported by the transport (NACK, arbitration loss, ...)
    #[error("bus i/o error: {0}")]
    Io(String),

    /// A buffer had the wrong size.
    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Size required
        expected: usize,
        /// Size received
        actual: usize,
    },

    /// LCS or DCS did not match.
    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch {
        /// Checksum computed over the frame
        expected: u8,
        /// Checksum carried by the frame
        actual: u8,
    },

    /// Preamble, start code, TFI or postamble was wrong.
    #[error("frame format error: {0}")]
    FrameFormat(String),

    /// The response code was not the opcode plus one.
    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse {
        /// Code the command should produce
        expected: u8,
        /// Code received
        actual: u8,
    },

    /// Payload does not fit a single normal frame.
    #[error("frame too large: at most {max} payload bytes, got {actual}")]
    FrameTooLarge {
        /// Largest payload a normal frame carries
        max: usize,
        /// Payload size requested
        actual: usize,
    },

    /// The module has not produced an answer yet; ask again later.
    #[error("device busy, retry later")]
    RetryLater,

    /// No module answered at any candidate address.
    #[error("device not found")]
    DeviceNotFound,

    /// Card operation attempted before discovery succeeded.
    #[error("driver used before discovery")]
    NotInitialized,

    /// No target answered InListPassiveTarget.
    #[error("no card present")]
    NoCardPresent,

    /// SELECT returned a non-success status word.
    #[error("application select failed: status={status:#04x}, sw={sw1:02x}{sw2:02x}")]
    ApplicationSelect {
        /// InDataExchange status byte
        status: u8,
        /// First status word byte
        sw1: u8,
        /// Second status word byte
        sw2: u8,
    },

    /// Discovery or SAM configuration failed.
    #[error("initialization failed: {0}")]
    Init(#[source] Box<Error>),

    /// Command byte outside 0x01..=0x04.
    #[error("unknown operator command {0:#04x}")]
    UnknownCommand(u8),

    /// Too many operator commands queued.
    #[error("command inbox full")]
    InboxFull,

    /// The reader side of the command inbox is gone.
    #[error("command inbox closed")]
    InboxClosed,
}

impl Error {
    /// Malformed or unexpected frames. These are never retried by the
    /// driver itself.
    pub fn is_protocol_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidLength { .. }
                | Error::ChecksumMismatch { .. }
                | Error::FrameFormat(_)
                | Error::UnexpectedResponse { .. }
        )
    }

    /// True when the module asked to be polled again.
    pub fn is_retry_later(&self) -> bool {
        matches!(self, Error::RetryLater)
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

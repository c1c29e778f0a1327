// passport-reader-rs/passport-reader/src/protocol/frame.rs

use crate::constants::{
    ACK_FRAME, I2C_NOT_READY, I2C_READY, MAX_FRAME_PAYLOAD_LEN, PN532_POSTAMBLE, PN532_PREAMBLE,
};
use crate::protocol::checksum::{dcs, lcs};
use crate::{Error, Result};

/// PN532 information frame.
///
/// Wire format:
/// `[0x01 ready]? 00 00 FF LEN LCS TFI payload... DCS 00`
///
/// `LEN` counts the identifier (TFI) plus payload, `LCS` makes `LEN + LCS`
/// wrap to zero and `DCS` makes `TFI + sum(payload) + DCS` wrap to zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Frame identifier, 0xD4 host to module, 0xD5 back
    pub identifier: u8,
    /// Command code followed by its arguments
    pub payload: Vec<u8>,
}

impl Frame {
    /// Encode `payload` behind the given frame identifier.
    pub fn encode(identifier: u8, payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() > MAX_FRAME_PAYLOAD_LEN {
            return Err(Error::FrameTooLarge {
                max: MAX_FRAME_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }

        let len = (payload.len() + 1) as u8;
        let mut out = Vec::with_capacity(crate::constants::FRAME_OVERHEAD + payload.len());
        out.extend_from_slice(&PN532_PREAMBLE);
        out.push(len);
        out.push(lcs(len));
        out.push(identifier);
        out.extend_from_slice(payload);
        out.push(dcs(identifier, payload));
        out.push(PN532_POSTAMBLE);
        Ok(out)
    }

    /// Decode a raw bus read into a frame.
    ///
    /// A leading ready byte is skipped. The not-ready pattern yields
    /// [`Error::RetryLater`]; anything else that is not a well-formed frame
    /// is a protocol error. Trailing bytes after the postamble are ignored,
    /// since bus reads are fixed-length.
    pub fn decode(raw: &[u8]) -> Result<Frame> {
        if raw.starts_with(&I2C_NOT_READY) {
            return Err(Error::RetryLater);
        }

        let offset = usize::from(raw.first() == Some(&I2C_READY));
        let body = &raw[offset..];

        // preamble(3) + LEN + LCS
        if body.len() < 5 {
            return Err(Error::InvalidLength {
                expected: offset + 5,
                actual: raw.len(),
            });
        }

        if body[..3] != PN532_PREAMBLE {
            return Err(Error::FrameFormat(format!(
                "invalid preamble {:02x} {:02x} {:02x}",
                body[0], body[1], body[2]
            )));
        }

        let len = body[3];
        let lcs_actual = body[4];
        let lcs_expected = lcs(len);
        if lcs_actual != lcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: lcs_expected,
                actual: lcs_actual,
            });
        }

        if len == 0 {
            return Err(Error::FrameFormat("ack frame where data expected".into()));
        }

        // header(5) + TFI/payload(len) + DCS(1)
        let required = 5 + len as usize + 1;
        if body.len() < required {
            return Err(Error::InvalidLength {
                expected: offset + required,
                actual: raw.len(),
            });
        }

        let identifier = body[5];
        let payload_end = 5 + len as usize;
        let payload = &body[6..payload_end];

        let dcs_actual = body[payload_end];
        let dcs_expected = dcs(identifier, payload);
        if dcs_actual != dcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: dcs_expected,
                actual: dcs_actual,
            });
        }

        if let Some(&post) = body.get(payload_end + 1) {
            if post != PN532_POSTAMBLE {
                return Err(Error::FrameFormat(format!("invalid postamble {:02x}", post)));
            }
        }

        Ok(Frame {
            identifier,
            payload: payload.to_vec(),
        })
    }

    /// Decode and return only the payload bytes.
    pub fn decode_payload(raw: &[u8]) -> Result<Vec<u8>> {
        Frame::decode(raw).map(|f| f.payload)
    }

    /// True when `raw` (optionally behind a ready byte) is an ACK frame.
    pub fn is_ack(raw: &[u8]) -> bool {
        let body = match raw.first() {
            Some(&I2C_READY) => &raw[1..],
            _ => raw,
        };
        body.starts_with(&ACK_FRAME)
    }
}

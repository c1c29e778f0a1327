// passport-reader-rs/passport-reader/src/card/document.rs

//! Acquired document data and the seam that produces it.

use embedded_hal::delay::DelayNs;
use log::warn;

use crate::card::builder::DocumentRecordBuilder;
use crate::card::Target;
use crate::device::Device;
use crate::transport::Transport;
use crate::types::Uid;
use crate::Result;

/// Field capacities, in characters.
pub const DOCUMENT_NUMBER_LEN: usize = 9;
/// Surname and given-name capacity
pub const NAME_LEN: usize = 39;
/// ISO 3166 alpha-3 code
pub const NATIONALITY_LEN: usize = 3;
/// YYYYMMDD
pub const DATE_LEN: usize = 8;
/// M, F or <
pub const SEX_LEN: usize = 1;

/// One document read. Dates are `YYYYMMDD`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentRecord {
    /// Document number from the MRZ
    pub document_number: String,
    /// Primary identifier
    pub surname: String,
    /// Secondary identifier
    pub given_names: String,
    /// Issuing nationality
    pub nationality: String,
    /// Date of birth, YYYYMMDD
    pub date_of_birth: String,
    /// Sex marker
    pub sex: String,
    /// Expiry date, YYYYMMDD
    pub expiry_date: String,
    /// UID of the chip the record came from
    pub uid: Uid,
    /// Whether the face image group was present
    pub photo_available: bool,
}

impl DocumentRecord {
    /// Start a record with empty fields.
    pub fn builder() -> DocumentRecordBuilder {
        DocumentRecordBuilder::new()
    }

    /// Pipe-delimited form consumed by the companion app:
    /// `doc|surname|given|nationality|dob|sex|expiry|uid-hex|photo`
    pub fn to_wire_string(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}|{}|{}|{}",
            self.document_number,
            self.surname,
            self.given_names,
            self.nationality,
            self.date_of_birth,
            self.sex,
            self.expiry_date,
            self.uid.to_hex(),
            self.photo_available
        )
    }
}

/// Produces a [`DocumentRecord`] for a selected target.
///
/// Implementations may talk to the chip through `device` (read binary,
/// secure messaging, data-group parsing).
pub trait DocumentSource {
    fn read_document<T: Transport, D: DelayNs>(
        &mut self,
        device: &mut Device<T, D>,
        target: &Target,
    ) -> Result<DocumentRecord>;
}

/// Returns a fixed sample record stamped with the detected UID. It does not
/// read anything from the chip and must not be mistaken for real document
/// data.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderDocumentSource;

impl DocumentSource for PlaceholderDocumentSource {
    fn read_document<T: Transport, D: DelayNs>(
        &mut self,
        _device: &mut Device<T, D>,
        target: &Target,
    ) -> Result<DocumentRecord> {
        warn!("returning placeholder document data; chip contents are not parsed");
        Ok(DocumentRecord::builder()
            .document_number("A12345678")
            .surname("DOE")
            .given_names("JOHN")
            .nationality("USA")
            .date_of_birth("19900101")
            .sex("M")
            .expiry_date("20301231")
            .uid(target.uid)
            .photo_available(false)
            .build())
    }
}

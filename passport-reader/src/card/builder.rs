use crate::card::document::{
    DATE_LEN, DOCUMENT_NUMBER_LEN, DocumentRecord, NAME_LEN, NATIONALITY_LEN, SEX_LEN,
};
use crate::types::Uid;

/// Builder for [`DocumentRecord`]. Text longer than a field's capacity is
/// cut at the capacity.
#[derive(Debug, Default)]
pub struct DocumentRecordBuilder {
    record: DocumentRecord,
}

fn capped(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}

impl DocumentRecordBuilder {
    /// Empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the document number, truncated to its capacity.
    pub fn document_number(mut self, v: &str) -> Self {
        self.record.document_number = capped(v, DOCUMENT_NUMBER_LEN);
        self
    }

    /// Set the surname, truncated to its capacity.
    pub fn surname(mut self, v: &str) -> Self {
        self.record.surname = capped(v, NAME_LEN);
        self
    }

    /// Set the given names, truncated to their capacity.
    pub fn given_names(mut self, v: &str) -> Self {
        self.record.given_names = capped(v, NAME_LEN);
        self
    }

    /// Set the nationality code.
    pub fn nationality(mut self, v: &str) -> Self {
        self.record.nationality = capped(v, NATIONALITY_LEN);
        self
    }

    /// Set the date of birth.
    pub fn date_of_birth(mut self, v: &str) -> Self {
        self.record.date_of_birth = capped(v, DATE_LEN);
        self
    }

    /// Set the sex marker.
    pub fn sex(mut self, v: &str) -> Self {
        self.record.sex = capped(v, SEX_LEN);
        self
    }

    /// Set the expiry date.
    pub fn expiry_date(mut self, v: &str) -> Self {
        self.record.expiry_date = capped(v, DATE_LEN);
        self
    }

    /// Set the chip UID.
    pub fn uid(mut self, uid: Uid) -> Self {
        self.record.uid = uid;
        self
    }

    /// Mark whether a face image is available.
    pub fn photo_available(mut self, available: bool) -> Self {
        self.record.photo_available = available;
        self
    }

    /// Finish the record.
    pub fn build(self) -> DocumentRecord {
        self.record
    }
}

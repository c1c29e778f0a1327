// passport-reader-rs/passport-reader/src/card/mod.rs

//! Card session: find a chip, select its document application and acquire
//! the document record.

mod info;
pub use info::Target;

pub mod builder;
pub mod document;
pub mod operations;

pub use builder::DocumentRecordBuilder;
pub use document::{DocumentRecord, DocumentSource, PlaceholderDocumentSource};
pub use operations::{detect_target, exchange_apdu, read_data_group, select_application};

pub mod detect;
pub mod read;
pub mod select;

// Re-export the operations at the module root so callers can use
// `crate::card::operations::detect_target(...)`.
pub use detect::detect_target;
pub use read::read_data_group;
pub use select::{exchange_apdu, select_application};

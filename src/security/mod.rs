//! Security utilities.
//!
//! Archives pulled from ticket folders come from customers and support
//! tooling alike, so entry names are checked before anything is written.

pub mod path_validator;

pub use path_validator::validate_archive_entry;

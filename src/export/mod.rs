//! Plain-text exports
//!
//! Workbook export lives in [`crate::workbook`]; this module covers the
//! CSV rendition of the guest list, in the same columns the guest CSV
//! import accepts.

pub mod csv;

pub use self::csv::{export_guests_csv, export_guests_csv_file};

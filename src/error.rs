//! Custom error types for the wedding planner
//!
//! Every library operation returns [`PlannerResult`]. The CLI surfaces the
//! message to the user; nothing here is fatal to a session.

use thiserror::Error;

/// The main error type for planner operations
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Saved session could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Empty required field, duplicate unique key, broken invariant
    #[error("Validation error: {0}")]
    Validation(String),

    /// A required column is absent from an imported file
    #[error("Missing column '{column}' in {source_kind}")]
    MissingColumn {
        column: String,
        source_kind: &'static str,
    },

    /// An index that no longer addresses a row of the table
    #[error("Index {index} out of range for {table} ({len} rows)")]
    IndexOutOfRange {
        table: &'static str,
        index: usize,
        len: usize,
    },

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Malformed import file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl PlannerError {
    /// Create a "not found" error for guests
    pub fn guest_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Guest",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for budget categories
    pub fn category_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget category",
            identifier: identifier.into(),
        }
    }

    /// Create a missing-column error for a CSV upload
    pub fn missing_csv_column(column: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
            source_kind: "CSV file",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

impl From<std::io::Error> for PlannerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PlannerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for PlannerError {
    fn from(err: csv::Error) -> Self {
        Self::Parse(format!("CSV: {}", err))
    }
}

impl From<calamine::XlsxError> for PlannerError {
    fn from(err: calamine::XlsxError) -> Self {
        Self::Parse(format!("workbook: {}", err))
    }
}

impl From<rust_xlsxwriter::XlsxError> for PlannerError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;

//! Guest CSV import
//!
//! Bulk-adds guests from a CSV upload. The file needs a "Navn" column;
//! the other guest columns are optional and left empty when absent, and
//! columns outside the guest schema are dropped. Rows are appended to the
//! guest table, all of them or none.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::{info, instrument};

use crate::error::{PlannerError, PlannerResult};
use crate::models::Guest;
use crate::storage::Session;
use crate::workbook::columns::{HeaderIndex, SheetRecord, GUEST_COLUMNS};

/// Column every guest upload must have
pub const REQUIRED_COLUMN: &str = "Navn";

/// Guests parsed from an upload, before they are added
#[derive(Debug, Clone)]
pub struct GuestCsv {
    /// Parsed guests in file order
    pub guests: Vec<Guest>,
    /// Headers in the file that are not guest columns
    pub ignored_columns: Vec<String>,
}

/// Result of a completed import
#[derive(Debug, Clone)]
pub struct ImportResult {
    /// Number of guests appended
    pub imported: usize,
    /// Headers that were dropped
    pub ignored_columns: Vec<String>,
}

/// Service for CSV import
pub struct ImportService<'a> {
    session: &'a mut Session,
}

impl<'a> ImportService<'a> {
    /// Create a new import service
    pub fn new(session: &'a mut Session) -> Self {
        Self { session }
    }

    /// Parse a guest CSV without touching any session
    pub fn parse_guest_csv<R: Read>(reader: R) -> PlannerResult<GuestCsv> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();
        let index = HeaderIndex::new(&headers, &GUEST_COLUMNS);
        if !index.contains(REQUIRED_COLUMN) {
            return Err(PlannerError::missing_csv_column(REQUIRED_COLUMN));
        }

        let mut guests = Vec::new();
        for (idx, result) in reader.records().enumerate() {
            let record = result?;
            let cells: Vec<String> = record.iter().map(String::from).collect();
            let fields = index.row(&cells);
            if fields.is_blank() {
                continue;
            }

            // Line number in the file, header being line 1
            let line = idx + 2;
            let guest = Guest::from_fields(&fields)
                .map_err(|e| PlannerError::Parse(format!("row {}: {}", line, e)))?;
            guest
                .validate()
                .map_err(|e| PlannerError::Validation(format!("row {}: {}", line, e)))?;
            guests.push(guest);
        }

        Ok(GuestCsv {
            guests,
            ignored_columns: index.ignored().to_vec(),
        })
    }

    /// Parse a guest CSV file and keep at most `limit` rows for display
    pub fn preview_guest_csv(path: &Path, limit: usize) -> PlannerResult<GuestCsv> {
        let mut parsed = Self::parse_guest_csv(File::open(path)?)?;
        parsed.guests.truncate(limit);
        Ok(parsed)
    }

    /// Append the guests of a CSV upload to the session
    pub fn import_guests<R: Read>(&mut self, reader: R) -> PlannerResult<ImportResult> {
        let parsed = Self::parse_guest_csv(reader)?;
        let imported = parsed.guests.len();

        for guest in parsed.guests {
            self.session.guests.add(guest)?;
        }

        info!(
            imported,
            ignored = ?parsed.ignored_columns,
            "guests imported from CSV"
        );

        Ok(ImportResult {
            imported,
            ignored_columns: parsed.ignored_columns,
        })
    }

    /// Append the guests of a CSV file to the session
    #[instrument(level = "info", skip_all, fields(path = %path.display()))]
    pub fn import_guests_file(&mut self, path: &Path) -> PlannerResult<ImportResult> {
        let file = File::open(path)?;
        self.import_guests(file)
    }
}

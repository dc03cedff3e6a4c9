//! CSV export of the guest list

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::PlannerResult;
use crate::models::Guest;
use crate::workbook::columns::{SheetRecord, GUEST_COLUMNS};

/// Write every guest as CSV, header first
pub fn export_guests_csv<'a, W, I>(guests: I, writer: W) -> PlannerResult<usize>
where
    W: Write,
    I: IntoIterator<Item = &'a Guest>,
{
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(GUEST_COLUMNS)?;

    let mut written = 0;
    for guest in guests {
        let cells: Vec<String> = guest.to_cells().iter().map(|c| c.as_text()).collect();
        csv_writer.write_record(&cells)?;
        written += 1;
    }

    csv_writer.flush()?;
    Ok(written)
}

/// Write every guest as CSV to `path`
pub fn export_guests_csv_file<'a, I>(guests: I, path: &Path) -> PlannerResult<usize>
where
    I: IntoIterator<Item = &'a Guest>,
{
    let file = File::create(path)?;
    let written = export_guests_csv(guests, file)?;
    info!(path = %path.display(), guests = written, "guest list exported to CSV");
    Ok(written)
}

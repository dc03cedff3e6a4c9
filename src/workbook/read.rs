//! Workbook import
//!
//! Reads the four sheets into a [`SessionTables`] value. Nothing in a session
//! is touched here; the caller swaps the tables in only after the whole
//! workbook parsed.

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{open_workbook, DataType, Range, Reader, Xlsx};
use chrono::{Duration, NaiveDate};

use super::columns::{HeaderIndex, SheetRecord};
use crate::error::{PlannerError, PlannerResult};
use crate::models::{BudgetLine, Guest, Record, ScheduleEntry, Task};
use crate::storage::SessionTables;

/// Read all four tables from the workbook at `path`
pub fn read_workbook(path: &Path) -> PlannerResult<SessionTables> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    read_tables(&mut workbook)
}

/// Read all four tables from in-memory xlsx bytes
pub fn read_workbook_bytes(bytes: &[u8]) -> PlannerResult<SessionTables> {
    let mut workbook = Xlsx::new(Cursor::new(bytes))?;
    read_tables(&mut workbook)
}

fn read_tables<R: Read + Seek>(workbook: &mut Xlsx<R>) -> PlannerResult<SessionTables> {
    Ok(SessionTables {
        guests: read_sheet::<Guest, _>(workbook)?,
        budget: read_sheet::<BudgetLine, _>(workbook)?,
        tasks: read_sheet::<Task, _>(workbook)?,
        schedule: read_sheet::<ScheduleEntry, _>(workbook)?,
    })
}

fn read_sheet<T, R>(workbook: &mut Xlsx<R>) -> PlannerResult<Vec<T>>
where
    T: SheetRecord + Record,
    R: Read + Seek,
{
    let range = workbook
        .worksheet_range(T::SHEET)
        .ok_or_else(|| PlannerError::Parse(format!("missing sheet '{}'", T::SHEET)))??;

    let mut rows = sheet_text(&range).into_iter();
    let headers = rows.next().unwrap_or_default();
    let index = HeaderIndex::new(&headers, T::COLUMNS);

    if !index.contains(T::key_column()) {
        return Err(PlannerError::Parse(format!(
            "sheet '{}' is missing column '{}'",
            T::SHEET,
            T::key_column()
        )));
    }

    let mut records = Vec::new();
    for (offset, cells) in rows.enumerate() {
        let fields = index.row(&cells);
        if fields.is_blank() {
            continue;
        }

        // 1-based sheet row, counting the header
        let row_number = offset + 2;
        let record = T::from_fields(&fields).map_err(|e| {
            PlannerError::Parse(format!("sheet '{}' row {}: {}", T::SHEET, row_number, e))
        })?;
        record.validate().map_err(|e| {
            PlannerError::Parse(format!("sheet '{}' row {}: {}", T::SHEET, row_number, e))
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Every cell of the used range as text
///
/// The range starts at the first used cell, so leading empty rows and
/// columns never shift headers out of place.
fn sheet_text(range: &Range<DataType>) -> Vec<Vec<String>> {
    range
        .rows()
        .map(|row| row.iter().map(cell_to_string).collect())
        .collect()
}

fn cell_to_string(cell: &DataType) -> String {
    match cell {
        DataType::String(value) => value.clone(),
        DataType::Float(value) => value.to_string(),
        DataType::Int(value) => value.to_string(),
        DataType::Bool(value) => value.to_string(),
        DataType::DateTime(serial) => serial_to_string(*serial),
        DataType::Empty => String::new(),
        other => other.to_string(),
    }
}

/// Render an Excel date/time serial as `YYYY-MM-DD`, `HH:MM` or both
fn serial_to_string(serial: f64) -> String {
    let days = serial.trunc() as i64;
    let seconds = ((serial - serial.trunc()) * 86_400.0).round() as i64;
    let time = format!("{:02}:{:02}", seconds / 3600, (seconds % 3600) / 60);

    if days == 0 {
        return time;
    }

    let date = NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|epoch| epoch.checked_add_signed(Duration::days(days)));
    match date {
        Some(date) if seconds == 0 => date.format("%Y-%m-%d").to_string(),
        Some(date) => format!("{} {}", date.format("%Y-%m-%d"), time),
        None => serial.to_string(),
    }
}

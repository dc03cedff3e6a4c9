//! Workbook export
//!
//! One sheet per table, a bold header row, typed cells. Summary rows are a
//! display concern and are never written.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use super::columns::{Cell, SheetKind, SheetRecord};
use crate::error::PlannerResult;
use crate::storage::SessionTables;

const COLUMN_WIDTH: f64 = 18.0;

/// Write all four tables to `path`
pub fn write_workbook(path: &Path, tables: &SessionTables) -> PlannerResult<()> {
    let mut workbook = build_workbook(tables, SheetKind::all())?;
    workbook.save(path)?;
    Ok(())
}

/// Serialize all four tables into xlsx bytes
pub fn workbook_bytes(tables: &SessionTables) -> PlannerResult<Vec<u8>> {
    let mut workbook = build_workbook(tables, SheetKind::all())?;
    Ok(workbook.save_to_buffer()?)
}

/// Write a workbook holding just one of the tables
pub fn write_single_sheet(path: &Path, tables: &SessionTables, sheet: SheetKind) -> PlannerResult<()> {
    let mut workbook = build_workbook(tables, &[sheet])?;
    workbook.save(path)?;
    Ok(())
}

fn build_workbook(tables: &SessionTables, sheets: &[SheetKind]) -> PlannerResult<Workbook> {
    let mut workbook = Workbook::new();

    for sheet in sheets {
        match sheet {
            SheetKind::Guests => add_sheet(&mut workbook, &tables.guests)?,
            SheetKind::Budget => add_sheet(&mut workbook, &tables.budget)?,
            SheetKind::Tasks => add_sheet(&mut workbook, &tables.tasks)?,
            SheetKind::Schedule => add_sheet(&mut workbook, &tables.schedule)?,
        }
    }

    Ok(workbook)
}

fn add_sheet<T: SheetRecord>(workbook: &mut Workbook, rows: &[T]) -> PlannerResult<()> {
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(T::SHEET)?;

    for (col_idx, header) in T::COLUMNS.iter().enumerate() {
        let col = col_idx as u16;
        worksheet.write_string_with_format(0, col, *header, &header_format)?;
        worksheet.set_column_width(col, COLUMN_WIDTH)?;
    }

    for (row_idx, record) in rows.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        for (col_idx, cell) in record.to_cells().into_iter().enumerate() {
            let col = col_idx as u16;
            match cell {
                Cell::Text(value) => {
                    worksheet.write_string(row, col, &value)?;
                }
                Cell::Number(value) => {
                    worksheet.write_number(row, col, value)?;
                }
                Cell::Bool(value) => {
                    worksheet.write_boolean(row, col, value)?;
                }
                Cell::Blank => {}
            }
        }
    }

    Ok(())
}

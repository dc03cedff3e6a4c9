//! Workbook CLI commands
//!
//! Export the session to an xlsx workbook, or replace it with one.

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::PlannerResult;
use crate::storage::Session;
use crate::workbook::{self, SheetKind, WORKBOOK_MIME};

/// Handle `export`
///
/// Without `output` the workbook is written to the configured file name in
/// the current directory.
pub fn handle_export_command(
    session: &Session,
    settings: &Settings,
    output: Option<PathBuf>,
    sheet: Option<SheetKind>,
) -> PlannerResult<()> {
    let path = output.unwrap_or_else(|| PathBuf::from(&settings.export_file_name));

    match sheet {
        Some(sheet) => {
            workbook::export_sheet(session, &path, sheet)?;
            println!("Arket {} eksportert til {}", sheet, path.display());
        }
        None => {
            workbook::export_session(session, &path)?;
            println!("Data eksportert til {}", path.display());
        }
    }
    println!("  Format: {}", WORKBOOK_MIME);

    Ok(())
}

/// Handle `import`
pub fn handle_import_command(session: &mut Session, path: &Path) -> PlannerResult<()> {
    let summary = workbook::import_session(session, path)?;
    println!("Data lastet fra {}!", path.display());
    println!(
        "  {} gjester, {} budsjettlinjer, {} oppgaver, {} punkter i tidsplanen",
        summary.guests, summary.budget, summary.tasks, summary.schedule
    );
    Ok(())
}

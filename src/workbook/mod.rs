//! Spreadsheet adapter
//!
//! Moves a whole session in and out of an xlsx workbook with the sheets
//! "Gjester", "Budsjett", "Oppgaver" and "Tidsplan". Import is
//! all-or-nothing: a workbook that fails to parse leaves the session as it
//! was.

pub mod columns;
pub mod read;
pub mod write;

pub use columns::{SheetKind, SheetRecord};

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::error::{PlannerError, PlannerResult};
use crate::storage::{Session, SessionTables};

/// MIME type of exported workbooks
pub const WORKBOOK_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// File name used for exports unless configured otherwise
pub const DEFAULT_FILE_NAME: &str = "bryllupsdata.xlsx";

/// Row counts of an imported workbook
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkbookSummary {
    pub guests: usize,
    pub budget: usize,
    pub tasks: usize,
    pub schedule: usize,
}

impl WorkbookSummary {
    fn of(tables: &SessionTables) -> Self {
        Self {
            guests: tables.guests.len(),
            budget: tables.budget.len(),
            tasks: tables.tasks.len(),
            schedule: tables.schedule.len(),
        }
    }
}

/// Export every table of the session to `path`
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn export_session(session: &Session, path: &Path) -> PlannerResult<()> {
    let tables = session.tables();
    write::write_workbook(path, &tables)?;
    info!(summary = ?WorkbookSummary::of(&tables), "workbook exported");
    Ok(())
}

/// Export every table of the session as xlsx bytes
pub fn export_session_bytes(session: &Session) -> PlannerResult<Vec<u8>> {
    write::workbook_bytes(&session.tables())
}

/// Export a single table of the session to `path`
#[instrument(level = "info", skip_all, fields(path = %path.display(), sheet = %sheet))]
pub fn export_sheet(session: &Session, path: &Path, sheet: SheetKind) -> PlannerResult<()> {
    write::write_single_sheet(path, &session.tables(), sheet)
}

/// Replace the session's tables with the contents of the workbook at `path`
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub fn import_session(session: &mut Session, path: &Path) -> PlannerResult<WorkbookSummary> {
    let tables = read::read_workbook(path).inspect_err(|e| warn!(error = %e, "workbook rejected"))?;
    apply(session, tables)
}

/// Replace the session's tables with the contents of in-memory xlsx bytes
pub fn import_session_bytes(session: &mut Session, bytes: &[u8]) -> PlannerResult<WorkbookSummary> {
    let tables = read::read_workbook_bytes(bytes)?;
    apply(session, tables)
}

fn apply(session: &mut Session, tables: SessionTables) -> PlannerResult<WorkbookSummary> {
    let summary = WorkbookSummary::of(&tables);
    session.replace_tables(tables).map_err(|e| match e {
        PlannerError::Validation(msg) => PlannerError::Parse(msg),
        other => other,
    })?;
    info!(?summary, "workbook imported");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Guest, Relation};

    #[test]
    fn test_bytes_round_trip() {
        let mut session = Session::new();
        session
            .guests
            .add(Guest::new("Kari", Relation::FriendBride).with_party_size(2))
            .unwrap();
        let bytes = export_session_bytes(&session).unwrap();

        let mut restored = Session::new();
        let summary = import_session_bytes(&mut restored, &bytes).unwrap();
        assert_eq!(summary.guests, 1);
        assert_eq!(summary.budget, 12);
        assert_eq!(restored.guests.list()[0].name, "Kari");
        assert_eq!(restored.guests.list()[0].party_size, Some(2));
    }

    #[test]
    fn test_failed_import_keeps_session() {
        let mut session = Session::new();
        session.guests.add(Guest::new("Ola", Relation::Colleague)).unwrap();
        let before = session.tables();

        assert!(import_session_bytes(&mut session, b"not a workbook").is_err());
        assert_eq!(session.tables(), before);
    }
}

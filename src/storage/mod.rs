//! Session storage for the wedding planner
//!
//! A [`Session`] owns the four planning tables and the total budget for one
//! user. Nothing is persisted automatically. The command line saves a
//! [`SessionSnapshot`] between runs so row ids stay stable; workbook export
//! is the exchange format.

pub mod file_io;
pub mod table;

pub use table::EntityTable;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{PlannerError, PlannerResult};
use crate::models::{BudgetLine, Guest, ScheduleEntry, Task, DEFAULT_TOTAL_BUDGET};

/// The four tables of a session, without the total budget
///
/// Workbook import builds one of these completely before anything in the
/// session is touched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionTables {
    pub guests: Vec<Guest>,
    pub budget: Vec<BudgetLine>,
    pub tasks: Vec<Task>,
    pub schedule: Vec<ScheduleEntry>,
}

/// All planning state of one user session
#[derive(Debug, Clone)]
pub struct Session {
    pub guests: EntityTable<Guest>,
    pub budget: EntityTable<BudgetLine>,
    pub tasks: EntityTable<Task>,
    pub schedule: EntityTable<ScheduleEntry>,
    total_budget: i64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create a fresh session with the default categories and total budget
    pub fn new() -> Self {
        Self::with_total_budget(DEFAULT_TOTAL_BUDGET)
    }

    /// Create a fresh session with a given total budget (negative clamps to 0)
    pub fn with_total_budget(total_budget: i64) -> Self {
        let mut budget = EntityTable::new();
        budget.replace_all(BudgetLine::defaults());

        Self {
            guests: EntityTable::new(),
            budget,
            tasks: EntityTable::new(),
            schedule: EntityTable::new(),
            total_budget: total_budget.max(0),
        }
    }

    /// Overall budget for the wedding
    pub fn total_budget(&self) -> i64 {
        self.total_budget
    }

    /// Set the overall budget
    pub fn set_total_budget(&mut self, total_budget: i64) -> PlannerResult<()> {
        if total_budget < 0 {
            return Err(PlannerError::Validation(
                "Total budget cannot be negative".into(),
            ));
        }
        self.total_budget = total_budget;
        Ok(())
    }

    /// Copy out the four tables
    pub fn tables(&self) -> SessionTables {
        SessionTables {
            guests: self.guests.list().to_vec(),
            budget: self.budget.list().to_vec(),
            tasks: self.tasks.list().to_vec(),
            schedule: self.schedule.list().to_vec(),
        }
    }

    /// Replace all four tables wholesale
    ///
    /// Every row is validated before the first table is swapped, so a bad
    /// row leaves the session exactly as it was.
    pub fn replace_tables(&mut self, tables: SessionTables) -> PlannerResult<()> {
        let guests = EntityTable::from_rows(tables.guests)?;
        let budget = EntityTable::from_rows(tables.budget)?;
        let tasks = EntityTable::from_rows(tables.tasks)?;
        let schedule = EntityTable::from_rows(tables.schedule)?;

        info!(
            guests = guests.len(),
            budget = budget.len(),
            tasks = tasks.len(),
            schedule = schedule.len(),
            "session tables replaced"
        );

        self.guests = guests;
        self.budget = budget;
        self.tasks = tasks;
        self.schedule = schedule;
        Ok(())
    }

    /// Everything needed to restore this session later
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            total_budget: self.total_budget,
            tables: self.tables(),
        }
    }

    /// Rebuild a session from a snapshot, validating every row
    pub fn from_snapshot(snapshot: SessionSnapshot) -> PlannerResult<Self> {
        let mut session = Self::with_total_budget(0);
        session.set_total_budget(snapshot.total_budget)?;
        session.replace_tables(snapshot.tables)?;
        Ok(session)
    }

    /// Load the session saved at `path`, if there is one
    pub fn load(path: &Path) -> PlannerResult<Option<Self>> {
        match file_io::read_json::<SessionSnapshot, _>(path)? {
            Some(snapshot) => {
                debug!(path = %path.display(), "session loaded");
                Self::from_snapshot(snapshot).map(Some)
            }
            None => Ok(None),
        }
    }

    /// Save the session to `path`
    pub fn save(&self, path: &Path) -> PlannerResult<()> {
        file_io::write_json_atomic(path, &self.snapshot())?;
        debug!(path = %path.display(), "session saved");
        Ok(())
    }
}

/// Serialized form of a [`Session`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub total_budget: i64,
    #[serde(flatten)]
    pub tables: SessionTables,
}

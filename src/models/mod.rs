//! Core data models for the wedding planner
//!
//! Four independent record types make up a planning session: guests, budget
//! lines, tasks and schedule entries. [`Record`] ties each of them to the
//! generic session table.

pub mod budget;
pub mod guest;
pub mod ids;
pub mod schedule;
pub mod task;

pub use budget::{
    BudgetLine, BudgetLinePatch, DEFAULT_CATEGORIES, DEFAULT_TOTAL_BUDGET, MAX_AMOUNT,
};
pub use guest::{Guest, GuestPatch, Relation, RsvpStatus};
pub use ids::{BudgetLineId, GuestId, ScheduleEntryId, TaskId};
pub use schedule::{ScheduleEntry, ScheduleEntryPatch};
pub use task::{Task, TaskPatch};

use std::fmt;

use crate::error::{PlannerError, PlannerResult};

/// A row type that can live in a session table
pub trait Record: Clone {
    type Id: Copy + Eq + fmt::Display;
    type Patch;

    /// Name of the table, matching its workbook sheet
    const TABLE: &'static str;

    fn id(&self) -> Self::Id;

    /// Check the record's invariants
    fn validate(&self) -> PlannerResult<()> {
        Ok(())
    }

    /// Value that must not repeat within the table, if the table has one
    fn unique_key(&self) -> Option<&str> {
        None
    }

    fn apply(&mut self, patch: Self::Patch);
}

impl Record for Guest {
    type Id = GuestId;
    type Patch = GuestPatch;
    const TABLE: &'static str = "Gjester";

    fn id(&self) -> GuestId {
        self.id
    }

    fn validate(&self) -> PlannerResult<()> {
        Guest::validate(self).map_err(|e| PlannerError::Validation(e.to_string()))
    }

    fn apply(&mut self, patch: GuestPatch) {
        patch.apply_to(self)
    }
}

impl Record for BudgetLine {
    type Id = BudgetLineId;
    type Patch = BudgetLinePatch;
    const TABLE: &'static str = "Budsjett";

    fn id(&self) -> BudgetLineId {
        self.id
    }

    fn validate(&self) -> PlannerResult<()> {
        BudgetLine::validate(self).map_err(|e| PlannerError::Validation(e.to_string()))
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn apply(&mut self, patch: BudgetLinePatch) {
        patch.apply_to(self)
    }
}

impl Record for Task {
    type Id = TaskId;
    type Patch = TaskPatch;
    const TABLE: &'static str = "Oppgaver";

    fn id(&self) -> TaskId {
        self.id
    }

    fn apply(&mut self, patch: TaskPatch) {
        patch.apply_to(self)
    }
}

impl Record for ScheduleEntry {
    type Id = ScheduleEntryId;
    type Patch = ScheduleEntryPatch;
    const TABLE: &'static str = "Tidsplan";

    fn id(&self) -> ScheduleEntryId {
        self.id
    }

    fn apply(&mut self, patch: ScheduleEntryPatch) {
        patch.apply_to(self)
    }
}

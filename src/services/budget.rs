//! Budget service
//!
//! Adds categories, edits budget lines and keeps the total budget.
//! Categories are never deleted.

use tracing::info;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{BudgetLine, BudgetLinePatch};
use crate::storage::Session;

/// Service for budget management
pub struct BudgetService<'a> {
    session: &'a mut Session,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(session: &'a mut Session) -> Self {
        Self { session }
    }

    /// Append a new zeroed category
    ///
    /// The name must be non-empty and not already used. The comparison is
    /// exact: case and surrounding whitespace both count.
    pub fn add_category(&mut self, name: &str) -> PlannerResult<BudgetLine> {
        if name.trim().is_empty() {
            return Err(PlannerError::Validation(
                "Category name cannot be empty".into(),
            ));
        }

        if self.find_line(name).is_some() {
            return Err(PlannerError::Validation(format!(
                "Budget category already exists: {}",
                name
            )));
        }

        let line = BudgetLine::new(name);
        self.session.budget.add(line.clone())?;
        info!(category = %line.category, "budget category added");
        Ok(line)
    }

    /// Find a line by its exact category name
    pub fn find_line(&self, category: &str) -> Option<&BudgetLine> {
        self.session.budget.iter().find(|l| l.category == category)
    }

    /// Edit the amounts or description of a category
    ///
    /// `paid` is clamped to the resulting actual amount.
    pub fn edit_line(&mut self, category: &str, patch: BudgetLinePatch) -> PlannerResult<BudgetLine> {
        let id = self
            .find_line(category)
            .map(|l| l.id)
            .ok_or_else(|| PlannerError::category_not_found(category))?;

        let line = self.session.budget.update_by_id(id, patch)?.clone();
        info!(
            category = %line.category,
            budgeted = line.budgeted,
            actual = line.actual,
            paid = line.paid,
            "budget line updated"
        );
        Ok(line)
    }

    /// Set the overall wedding budget
    pub fn set_total_budget(&mut self, total_budget: i64) -> PlannerResult<()> {
        self.session.set_total_budget(total_budget)?;
        info!(total_budget, "total budget set");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_category() {
        let mut session = Session::new();
        let mut service = BudgetService::new(&mut session);
        let line = service.add_category("Bryllupsreise").unwrap();
        assert_eq!(line.budgeted, 0);
        assert_eq!(session.budget.len(), 13);
        assert_eq!(session.budget.list()[12].category, "Bryllupsreise");
    }

    #[test]
    fn test_add_duplicate_category_leaves_table_unchanged() {
        let mut session = Session::new();
        let before = session.budget.clone();
        let mut service = BudgetService::new(&mut session);

        let err = service.add_category("Lokale").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(session.budget, before);
    }

    #[test]
    fn test_duplicate_check_is_case_sensitive() {
        let mut session = Session::new();
        let mut service = BudgetService::new(&mut session);
        assert!(service.add_category("lokale").is_ok());
    }

    #[test]
    fn test_duplicate_check_is_exact() {
        let mut session = Session::new();
        let mut service = BudgetService::new(&mut session);
        let line = service.add_category(" Lokale").unwrap();
        assert_eq!(line.category, " Lokale");
        assert!(service.add_category(" Lokale").unwrap_err().is_validation());
        assert_eq!(session.budget.len(), 13);
    }

    #[test]
    fn test_add_empty_category() {
        let mut session = Session::new();
        let mut service = BudgetService::new(&mut session);
        assert!(service.add_category("   ").unwrap_err().is_validation());
        assert_eq!(session.budget.len(), 12);
    }

    #[test]
    fn test_edit_line_rejects_oversized_amount() {
        let mut session = Session::new();
        let before = session.budget.clone();
        let mut service = BudgetService::new(&mut session);

        let huge = BudgetLinePatch {
            actual: Some(i64::MAX / 2 + 1),
            ..Default::default()
        };
        assert!(service.edit_line("Lokale", huge.clone()).unwrap_err().is_validation());
        assert!(service.edit_line("Catering", huge).unwrap_err().is_validation());

        let at_limit = BudgetLinePatch {
            actual: Some(crate::models::MAX_AMOUNT),
            ..Default::default()
        };
        assert!(service.edit_line("Kake", at_limit).is_ok());
        assert_eq!(session.budget.len(), before.len());
        assert_eq!(session.budget.list()[0], before.list()[0]);
    }

    #[test]
    fn test_edit_line_clamps_paid() {
        let mut session = Session::new();
        let mut service = BudgetService::new(&mut session);
        let line = service
            .edit_line(
                "Lokale",
                BudgetLinePatch {
                    budgeted: Some(50_000),
                    actual: Some(30_000),
                    paid: Some(40_000),
                    description: Some("Gården".into()),
                },
            )
            .unwrap();
        assert_eq!(line.paid, 30_000);
        assert_eq!(line.description, "Gården");
    }

    #[test]
    fn test_edit_negative_amount_fails() {
        let mut session = Session::new();
        let mut service = BudgetService::new(&mut session);
        let err = service
            .edit_line(
                "Kake",
                BudgetLinePatch {
                    actual: Some(-10),
                    ..Default::default()
                },
            )
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_edit_unknown_category() {
        let mut session = Session::new();
        let mut service = BudgetService::new(&mut session);
        assert!(service
            .edit_line("Ukjent", BudgetLinePatch::default())
            .unwrap_err()
            .is_not_found());
    }
}

//! Budget line model
//!
//! One line per spending category, amounts in whole kroner.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::BudgetLineId;

/// Categories every new session starts with, in display order
pub const DEFAULT_CATEGORIES: [&str; 12] = [
    "Lokale",
    "Catering",
    "Fotograf",
    "Blomster",
    "Kake",
    "Klær",
    "Ringer",
    "Dekorasjoner",
    "Transport",
    "Musikk",
    "Invitasjoner",
    "Annet",
];

/// Total budget a fresh session starts with
pub const DEFAULT_TOTAL_BUDGET: i64 = 160_000;

/// Largest amount a single budget field may hold (one trillion kroner)
///
/// Column sums stay far below `i64::MAX` for any realistic number of lines.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000;

/// A budget category with planned, actual and paid amounts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetLine {
    /// Session-local identifier
    pub id: BudgetLineId,

    /// Category name, unique within the table
    pub category: String,

    /// Planned amount
    pub budgeted: i64,

    /// Actual cost so far
    pub actual: i64,

    /// Amount already paid, never above `actual`
    pub paid: i64,

    #[serde(default)]
    pub description: String,
}

impl BudgetLine {
    /// Create a zeroed budget line
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            id: BudgetLineId::new(),
            category: category.into(),
            budgeted: 0,
            actual: 0,
            paid: 0,
            description: String::new(),
        }
    }

    /// The twelve zeroed lines a session is seeded with
    pub fn defaults() -> Vec<Self> {
        DEFAULT_CATEGORIES.iter().map(|c| Self::new(*c)).collect()
    }

    /// Remaining amount to pay on this line
    pub fn outstanding(&self) -> i64 {
        self.actual - self.paid
    }

    /// Clamp `paid` into `0..=actual`
    pub fn clamp_paid(&mut self) {
        self.paid = self.paid.clamp(0, self.actual.max(0));
    }

    /// Validate the line
    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.category.trim().is_empty() {
            return Err(BudgetValidationError::EmptyCategory);
        }

        if self.budgeted < 0 {
            return Err(BudgetValidationError::NegativeAmount("Budsjettert"));
        }

        if self.actual < 0 {
            return Err(BudgetValidationError::NegativeAmount("Faktisk"));
        }

        if self.paid < 0 {
            return Err(BudgetValidationError::NegativeAmount("Betalt"));
        }

        for (field, value) in [
            ("Budsjettert", self.budgeted),
            ("Faktisk", self.actual),
            ("Betalt", self.paid),
        ] {
            if value > MAX_AMOUNT {
                return Err(BudgetValidationError::AmountTooLarge(field));
            }
        }

        if self.paid > self.actual {
            return Err(BudgetValidationError::PaidExceedsActual {
                paid: self.paid,
                actual: self.actual,
            });
        }

        Ok(())
    }
}

impl fmt::Display for BudgetLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category)
    }
}

/// Partial update of a budget line
///
/// Applying the patch clamps `paid` to the (possibly new) actual amount, the
/// same way the edit form caps the paid field.
#[derive(Debug, Clone, Default)]
pub struct BudgetLinePatch {
    pub budgeted: Option<i64>,
    pub actual: Option<i64>,
    pub paid: Option<i64>,
    pub description: Option<String>,
}

impl BudgetLinePatch {
    pub fn is_empty(&self) -> bool {
        self.budgeted.is_none()
            && self.actual.is_none()
            && self.paid.is_none()
            && self.description.is_none()
    }

    pub fn apply_to(self, line: &mut BudgetLine) {
        if let Some(budgeted) = self.budgeted {
            line.budgeted = budgeted;
        }
        if let Some(actual) = self.actual {
            line.actual = actual;
        }
        if let Some(paid) = self.paid {
            line.paid = paid;
        }
        if let Some(description) = self.description {
            line.description = description;
        }
        line.clamp_paid();
    }
}

/// Validation errors for budget lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetValidationError {
    EmptyCategory,
    NegativeAmount(&'static str),
    AmountTooLarge(&'static str),
    PaidExceedsActual { paid: i64, actual: i64 },
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCategory => write!(f, "Category name cannot be empty"),
            Self::NegativeAmount(field) => write!(f, "{} cannot be negative", field),
            Self::AmountTooLarge(field) => {
                write!(f, "{} cannot exceed {}", field, MAX_AMOUNT)
            }
            Self::PaidExceedsActual { paid, actual } => {
                write!(f, "Paid ({}) cannot exceed actual ({})", paid, actual)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let lines = BudgetLine::defaults();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0].category, "Lokale");
        assert_eq!(lines[11].category, "Annet");
        assert!(lines
            .iter()
            .all(|l| l.budgeted == 0 && l.actual == 0 && l.paid == 0 && l.description.is_empty()));
    }

    #[test]
    fn test_patch_clamps_paid_to_actual() {
        let mut line = BudgetLine::new("Lokale");
        let patch = BudgetLinePatch {
            actual: Some(30_000),
            paid: Some(45_000),
            ..Default::default()
        };
        patch.apply_to(&mut line);
        assert_eq!(line.paid, 30_000);
        assert!(line.validate().is_ok());
    }

    #[test]
    fn test_lowering_actual_lowers_paid() {
        let mut line = BudgetLine::new("Catering");
        line.actual = 20_000;
        line.paid = 20_000;

        BudgetLinePatch {
            actual: Some(5_000),
            ..Default::default()
        }
        .apply_to(&mut line);

        assert_eq!(line.paid, 5_000);
        assert_eq!(line.outstanding(), 0);
    }

    #[test]
    fn test_validation() {
        let mut line = BudgetLine::new("Kake");
        assert!(line.validate().is_ok());

        line.budgeted = -1;
        assert_eq!(
            line.validate(),
            Err(BudgetValidationError::NegativeAmount("Budsjettert"))
        );

        line.budgeted = 0;
        line.paid = 10;
        assert!(matches!(
            line.validate(),
            Err(BudgetValidationError::PaidExceedsActual { .. })
        ));

        line.paid = 0;
        line.actual = MAX_AMOUNT;
        assert!(line.validate().is_ok());
        line.actual = MAX_AMOUNT + 1;
        assert_eq!(
            line.validate(),
            Err(BudgetValidationError::AmountTooLarge("Faktisk"))
        );
    }
}

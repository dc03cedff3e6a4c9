//! Budget figures
//!
//! Sums over the budget lines and the percentages shown against the total
//! budget.

use crate::models::BudgetLine;

/// Column sums of the budget table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BudgetTotals {
    pub budgeted: i64,
    pub actual: i64,
    pub paid: i64,
}

impl BudgetTotals {
    /// Budgeted minus actual; negative when over budget
    pub fn difference(&self) -> i64 {
        self.budgeted - self.actual
    }

    /// Actual minus paid
    pub fn outstanding(&self) -> i64 {
        self.actual - self.paid
    }
}

/// Sum every amount column, saturating at `i64::MAX`
pub fn budget_totals<'a, I>(lines: I) -> BudgetTotals
where
    I: IntoIterator<Item = &'a BudgetLine>,
{
    lines
        .into_iter()
        .fold(BudgetTotals::default(), |mut totals, line| {
            totals.budgeted = totals.budgeted.saturating_add(line.budgeted);
            totals.actual = totals.actual.saturating_add(line.actual);
            totals.paid = totals.paid.saturating_add(line.paid);
            totals
        })
}

/// Share of the total budget already spent, truncated to a whole percent
///
/// The quotient is taken in floating point before truncation, so 29 of 100
/// reads as 28.
pub fn budget_used_percent<'a, I>(lines: I, total_budget: i64) -> i64
where
    I: IntoIterator<Item = &'a BudgetLine>,
{
    if total_budget <= 0 {
        return 0;
    }
    let actual = budget_totals(lines).actual;
    (actual as f64 / total_budget as f64 * 100.0) as i64
}

/// Sum of budgeted minus sum of actual
pub fn budget_difference<'a, I>(lines: I) -> i64
where
    I: IntoIterator<Item = &'a BudgetLine>,
{
    budget_totals(lines).difference()
}

/// Sum of actual minus sum of paid
pub fn budget_outstanding<'a, I>(lines: I) -> i64
where
    I: IntoIterator<Item = &'a BudgetLine>,
{
    budget_totals(lines).outstanding()
}

/// Planned amounts as a percentage of the total budget
pub fn budgeted_share_percent<'a, I>(lines: I, total_budget: i64) -> f64
where
    I: IntoIterator<Item = &'a BudgetLine>,
{
    if total_budget <= 0 {
        return 0.0;
    }
    budget_totals(lines).budgeted as f64 / total_budget as f64 * 100.0
}

/// Lines shown in the distribution chart
pub fn budget_distribution<'a, I>(lines: I) -> Vec<&'a BudgetLine>
where
    I: IntoIterator<Item = &'a BudgetLine>,
{
    lines.into_iter().filter(|l| l.budgeted > 0).collect()
}

/// Lines shown in the budgeted/actual/paid comparison
pub fn budget_comparison<'a, I>(lines: I) -> Vec<&'a BudgetLine>
where
    I: IntoIterator<Item = &'a BudgetLine>,
{
    lines
        .into_iter()
        .filter(|l| l.budgeted > 0 || l.actual > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(category: &str, budgeted: i64, actual: i64, paid: i64) -> BudgetLine {
        let mut line = BudgetLine::new(category);
        line.budgeted = budgeted;
        line.actual = actual;
        line.paid = paid;
        line
    }

    #[test]
    fn test_totals_saturate_instead_of_overflowing() {
        let lines = vec![
            line("Lokale", 0, i64::MAX / 2 + 1, 0),
            line("Catering", 0, i64::MAX / 2 + 1, 0),
        ];
        let totals = budget_totals(&lines);
        assert_eq!(totals.actual, i64::MAX);
        assert_eq!(budget_outstanding(&lines), i64::MAX);
        assert!(budget_used_percent(&lines, 100) > 0);
    }

    #[test]
    fn test_venue_scenario() {
        let lines = vec![line("Lokale", 50_000, 30_000, 30_000)];
        assert_eq!(budget_used_percent(&lines, 160_000), 18);
        assert_eq!(budget_difference(&lines), 20_000);
        assert_eq!(budget_outstanding(&lines), 0);
    }

    #[test]
    fn test_zero_total_budget() {
        let lines = vec![line("Lokale", 50_000, 30_000, 0)];
        assert_eq!(budget_used_percent(&lines, 0), 0);
        assert_eq!(budgeted_share_percent(&lines, 0), 0.0);
    }

    #[test]
    fn test_percent_truncates_float_quotient() {
        let lines = vec![line("Kake", 0, 29, 0)];
        assert_eq!(budget_used_percent(&lines, 100), 28);

        let lines = vec![line("Kake", 0, 999, 0)];
        assert_eq!(budget_used_percent(&lines, 1_000), 99);
    }

    #[test]
    fn test_totals() {
        let lines = vec![
            line("Lokale", 50_000, 30_000, 20_000),
            line("Catering", 40_000, 45_000, 10_000),
            line("Annet", 0, 0, 0),
        ];
        let totals = budget_totals(&lines);
        assert_eq!(
            totals,
            BudgetTotals {
                budgeted: 90_000,
                actual: 75_000,
                paid: 30_000
            }
        );
        assert_eq!(totals.difference(), 15_000);
        assert_eq!(totals.outstanding(), 45_000);
        assert!((budgeted_share_percent(&lines, 160_000) - 56.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_chart_series() {
        let lines = vec![
            line("Lokale", 50_000, 0, 0),
            line("Kake", 0, 3_000, 0),
            line("Annet", 0, 0, 0),
        ];
        let distribution: Vec<_> = budget_distribution(&lines)
            .into_iter()
            .map(|l| l.category.as_str())
            .collect();
        assert_eq!(distribution, vec!["Lokale"]);

        let comparison: Vec<_> = budget_comparison(&lines)
            .into_iter()
            .map(|l| l.category.as_str())
            .collect();
        assert_eq!(comparison, vec!["Lokale", "Kake"]);
    }
}

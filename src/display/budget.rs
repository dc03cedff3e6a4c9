//! Budget display formatting
//!
//! The budget table carries a "Sum" row at the bottom. It is computed here
//! for display and never stored or exported.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::{format_amount, format_bar, format_percentage, left_align};
use crate::models::BudgetLine;
use crate::reports::{budget_comparison, budget_distribution, budget_totals, BudgetTotals};

/// Label of the display-only totals row
pub const SUM_LABEL: &str = "Sum";

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Kategori")]
    category: String,
    #[tabled(rename = "Budsjettert")]
    budgeted: String,
    #[tabled(rename = "Faktisk")]
    actual: String,
    #[tabled(rename = "Betalt")]
    paid: String,
    #[tabled(rename = "Gjenstår")]
    outstanding: String,
    #[tabled(rename = "Beskrivelse")]
    description: String,
}

impl BudgetRow {
    fn line(line: &BudgetLine, suffix: &str) -> Self {
        Self {
            category: line.category.clone(),
            budgeted: format_amount(line.budgeted, suffix),
            actual: format_amount(line.actual, suffix),
            paid: format_amount(line.paid, suffix),
            outstanding: format_amount(line.outstanding(), suffix),
            description: line.description.clone(),
        }
    }

    fn sum(totals: &BudgetTotals, suffix: &str) -> Self {
        Self {
            category: SUM_LABEL.to_string(),
            budgeted: format_amount(totals.budgeted, suffix),
            actual: format_amount(totals.actual, suffix),
            paid: format_amount(totals.paid, suffix),
            outstanding: format_amount(totals.outstanding(), suffix),
            description: String::new(),
        }
    }
}

/// Format the budget lines as a table followed by a "Sum" row
pub fn format_budget_table(lines: &[BudgetLine], suffix: &str) -> String {
    let totals = budget_totals(lines);
    let mut rows: Vec<BudgetRow> = lines.iter().map(|l| BudgetRow::line(l, suffix)).collect();
    rows.push(BudgetRow::sum(&totals, suffix));

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Key budget figures against the total budget
pub fn format_budget_summary(lines: &[BudgetLine], total_budget: i64, suffix: &str) -> String {
    let totals = budget_totals(lines);
    let share = crate::reports::budgeted_share_percent(lines, total_budget);

    let mut output = String::new();
    output.push_str(&format!(
        "Totalt budsjett:            {}\n",
        format_amount(total_budget, suffix)
    ));
    output.push_str(&format!(
        "Budsjettert:                {}\n",
        format_amount(totals.budgeted, suffix)
    ));
    output.push_str(&format!("Prosent av totalbudsjett:   {:.1}%\n", share));
    output.push_str(&format!(
        "Faktiske utgifter:          {}\n",
        format_amount(totals.actual, suffix)
    ));
    output.push_str(&format!(
        "Differanse:                 {}\n",
        format_amount(totals.difference(), suffix)
    ));
    output.push_str(&format!(
        "Betalt:                     {}\n",
        format_amount(totals.paid, suffix)
    ));
    output.push_str(&format!(
        "Gjenstår å betale:          {}\n",
        format_amount(totals.outstanding(), suffix)
    ));

    output
}

/// Text bars for the budget distribution (share of all budgeted amounts)
pub fn format_budget_distribution(lines: &[BudgetLine], width: usize) -> String {
    let shown = budget_distribution(lines);
    if shown.is_empty() {
        return "Fyll inn budsjettet for å se fordelingen.\n".to_string();
    }

    let total: i64 = shown.iter().map(|l| l.budgeted).sum();
    let label_width = shown.iter().map(|l| l.category.chars().count()).max().unwrap_or(0);

    let mut output = String::new();
    for line in shown {
        let share = line.budgeted as f64 / total as f64 * 100.0;
        output.push_str(&format!(
            "{}  {} {}\n",
            left_align(&line.category, label_width),
            format_bar(line.budgeted as f64, total as f64, width),
            format_percentage(share)
        ));
    }
    output
}

/// Text bars comparing budgeted, actual and paid per category
pub fn format_budget_comparison(lines: &[BudgetLine], width: usize, suffix: &str) -> String {
    let shown = budget_comparison(lines);
    if shown.is_empty() {
        return String::new();
    }

    let max = shown
        .iter()
        .map(|l| l.budgeted.max(l.actual))
        .max()
        .unwrap_or(0) as f64;

    let mut output = String::new();
    for line in shown {
        output.push_str(&format!("{}\n", line.category));
        for (label, value) in [
            ("Budsjettert", line.budgeted),
            ("Faktisk", line.actual),
            ("Betalt", line.paid),
        ] {
            output.push_str(&format!(
                "  {} {} {}\n",
                left_align(label, 11),
                format_bar(value as f64, max, width),
                format_amount(value, suffix)
            ));
        }
    }
    output
}

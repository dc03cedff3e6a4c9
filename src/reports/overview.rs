//! Dashboard overview
//!
//! Countdown, budget used, key guest figures and the two charts, computed
//! from the current session each time it is generated.

use chrono::NaiveDate;

use super::budget::{budget_totals, budget_used_percent};
use super::countdown::EventDate;
use super::guests::{rsvp_chart, rsvp_counts, total_invited, ChartSlice, RsvpCounts};
use crate::display::report::{format_amount, format_bar, format_header, left_align, separator};
use crate::storage::Session;

const WIDTH: usize = 60;
const BAR_WIDTH: usize = 30;

/// Everything the dashboard shows
#[derive(Debug, Clone)]
pub struct OverviewReport {
    pub event: EventDate,
    pub days_left: i64,
    pub total_budget: i64,
    pub spent: i64,
    pub used_percent: i64,
    pub invited: u64,
    pub rsvp: RsvpCounts,
    pub rsvp_chart: Vec<ChartSlice>,
    /// Category, budgeted and actual for lines with a budgeted amount
    pub budget_chart: Vec<(String, i64, i64)>,
}

impl OverviewReport {
    /// Generate the overview as seen on `today`
    pub fn generate(session: &Session, today: NaiveDate, event: EventDate) -> Self {
        let guests = session.guests.list();
        let lines = session.budget.list();

        Self {
            event,
            days_left: event.days_until(today),
            total_budget: session.total_budget(),
            spent: budget_totals(lines).actual,
            used_percent: budget_used_percent(lines, session.total_budget()),
            invited: total_invited(guests),
            rsvp: rsvp_counts(guests),
            rsvp_chart: rsvp_chart(guests),
            budget_chart: lines
                .iter()
                .filter(|l| l.budgeted > 0)
                .map(|l| (l.category.clone(), l.budgeted, l.actual))
                .collect(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, suffix: &str) -> String {
        let mut output = String::new();

        output.push_str(&format_header("Nedtelling", WIDTH));
        output.push_str(&format!("Bryllupsdato: {}\n", self.event));
        output.push_str(&format!("{} dager igjen!\n\n", self.days_left));

        output.push_str(&format_header("Budsjettoversikt", WIDTH));
        output.push_str(&format!(
            "{} brukt av {} ({}%)\n\n",
            format_amount(self.spent, suffix),
            format_amount(self.total_budget, suffix),
            self.used_percent
        ));

        output.push_str(&format_header("Nøkkeltall", WIDTH));
        for (label, value) in [
            ("Inviterte gjester", self.invited),
            ("Bekreftet kommer", self.rsvp.coming),
            ("Bekreftet kommer ikke", self.rsvp.not_coming),
            ("Venter på svar", self.rsvp.pending),
        ] {
            output.push_str(&format!("{} {}\n", left_align(label, 22), value));
        }
        output.push('\n');

        output.push_str(&format_header("RSVP-status", WIDTH));
        if self.rsvp_chart.is_empty() {
            output.push_str("Ingen RSVP-data tilgjengelig.\n");
        } else {
            let total: u64 = self.rsvp_chart.iter().map(|s| s.value).sum();
            for slice in &self.rsvp_chart {
                output.push_str(&format!(
                    "{} {} {}\n",
                    left_align(slice.label, 15),
                    format_bar(slice.value as f64, total as f64, BAR_WIDTH),
                    slice.value
                ));
            }
        }
        output.push('\n');

        output.push_str(&format_header("Budsjett vs. Faktiske utgifter", WIDTH));
        if self.budget_chart.is_empty() {
            output.push_str("Fyll inn budsjettet for å se fordelingen.\n");
        } else {
            let max = self
                .budget_chart
                .iter()
                .map(|(_, budgeted, actual)| (*budgeted).max(*actual))
                .max()
                .unwrap_or(0) as f64;
            for (category, budgeted, actual) in &self.budget_chart {
                output.push_str(&format!("{}\n", category));
                output.push_str(&format!(
                    "  {} {} {}\n",
                    left_align("Budsjettert", 11),
                    format_bar(*budgeted as f64, max, BAR_WIDTH),
                    format_amount(*budgeted, suffix)
                ));
                output.push_str(&format!(
                    "  {} {} {}\n",
                    left_align("Faktisk", 11),
                    format_bar(*actual as f64, max, BAR_WIDTH),
                    format_amount(*actual, suffix)
                ));
            }
        }
        output.push_str(&separator(WIDTH));
        output.push('\n');

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetLinePatch, Guest, Relation, RsvpStatus};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, 1).unwrap()
    }

    #[test]
    fn test_fresh_session() {
        let session = Session::new();
        let report = OverviewReport::generate(&session, today(), EventDate::default());

        assert_eq!(report.days_left, 30);
        assert_eq!(report.total_budget, 160_000);
        assert_eq!(report.used_percent, 0);
        assert_eq!(report.invited, 0);
        assert!(report.rsvp_chart.is_empty());
        assert!(report.budget_chart.is_empty());

        let output = report.format_terminal("kr");
        assert!(output.contains("30 dager igjen!"));
        assert!(output.contains("0 kr brukt av 160,000 kr (0%)"));
        assert!(output.contains("Ingen RSVP-data tilgjengelig."));
    }

    #[test]
    fn test_populated_session() {
        let mut session = Session::new();
        session
            .guests
            .add(
                Guest::new("Kari", Relation::FriendBride)
                    .with_status(RsvpStatus::Coming)
                    .with_party_size(2),
            )
            .unwrap();
        let venue = session.budget.find_index(|l| l.category == "Lokale").unwrap();
        session
            .budget
            .update(
                venue,
                BudgetLinePatch {
                    budgeted: Some(50_000),
                    actual: Some(30_000),
                    paid: Some(30_000),
                    ..Default::default()
                },
            )
            .unwrap();

        let report = OverviewReport::generate(&session, today(), EventDate::default());
        assert_eq!(report.used_percent, 18);
        assert_eq!(report.spent, 30_000);
        assert_eq!(report.invited, 2);
        assert_eq!(report.rsvp.coming, 2);
        assert_eq!(report.budget_chart, vec![("Lokale".to_string(), 50_000, 30_000)]);

        let output = report.format_terminal("kr");
        assert!(output.contains("30,000 kr brukt av 160,000 kr (18%)"));
        assert!(output.contains("Lokale"));
    }
}

//! Task and schedule display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{ScheduleEntry, Task};

#[derive(Tabled)]
struct TaskRow {
    #[tabled(rename = "Oppgave")]
    task: String,
    #[tabled(rename = "Beskrivelse")]
    description: String,
    #[tabled(rename = "Frist")]
    due_date: String,
    #[tabled(rename = "Ansvarlig")]
    owner: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Prioritet")]
    priority: String,
    #[tabled(rename = "Notater")]
    notes: String,
}

#[derive(Tabled)]
struct ScheduleRow {
    #[tabled(rename = "Tid")]
    time: String,
    #[tabled(rename = "Aktivitet")]
    activity: String,
    #[tabled(rename = "Sted")]
    location: String,
    #[tabled(rename = "Ansvarlig")]
    owner: String,
    #[tabled(rename = "Notater")]
    notes: String,
}

/// Format the task list as a table
pub fn format_task_list(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return "Ingen oppgaver.".to_string();
    }

    let rows = tasks.iter().map(|t| TaskRow {
        task: t.task.clone(),
        description: t.description.clone(),
        due_date: t
            .due_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        owner: t.owner.clone(),
        status: t.status.clone(),
        priority: t.priority.clone(),
        notes: t.notes.clone(),
    });
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Format the wedding-day schedule as a table
pub fn format_schedule(entries: &[ScheduleEntry]) -> String {
    if entries.is_empty() {
        return "Tidsplanen er tom.".to_string();
    }

    let rows = entries.iter().map(|e| ScheduleRow {
        time: e.time.clone(),
        activity: e.activity.clone(),
        location: e.location.clone(),
        owner: e.owner.clone(),
        notes: e.notes.clone(),
    });
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_empty_tables() {
        assert_eq!(format_task_list(&[]), "Ingen oppgaver.");
        assert_eq!(format_schedule(&[]), "Tidsplanen er tom.");
    }

    #[test]
    fn test_task_table() {
        let task = Task::new("Booke lokale")
            .with_due_date(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap())
            .with_owner("Kari");
        let output = format_task_list(&[task]);
        assert!(output.contains("Frist"));
        assert!(output.contains("2026-01-15"));
        assert!(output.contains("Kari"));
    }

    #[test]
    fn test_schedule_table() {
        let entry = ScheduleEntry::new("14:00", "Vielse").at_location("Kirken");
        let output = format_schedule(&[entry]);
        assert!(output.contains("Aktivitet"));
        assert!(output.contains("Vielse"));
        assert!(output.contains("Kirken"));
    }
}

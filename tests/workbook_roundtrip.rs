use chrono::NaiveDate;
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

use wedding_planner::models::{
    BudgetLinePatch, Guest, Relation, RsvpStatus, ScheduleEntry, Task,
};
use wedding_planner::storage::Session;
use wedding_planner::workbook::{self, SheetKind, SheetRecord};

fn planned_session() -> Session {
    let mut session = Session::new();

    session
        .guests
        .add(
            Guest::new("Kari Nordmann", Relation::FriendBride)
                .with_status(RsvpStatus::Coming)
                .with_party_size(2)
                .with_special_needs("Glutenfri"),
        )
        .unwrap();
    session
        .guests
        .add(Guest::new("Ola Hansen", Relation::Colleague).with_invited(false))
        .unwrap();
    session.guests.add(Guest::named("Per")).unwrap();

    let venue = session
        .budget
        .find_index(|l| l.category == "Lokale")
        .unwrap();
    session
        .budget
        .update(
            venue,
            BudgetLinePatch {
                budgeted: Some(50_000),
                actual: Some(30_000),
                paid: Some(30_000),
                description: Some("Grendehuset".into()),
            },
        )
        .unwrap();

    session
        .tasks
        .add(
            Task::new("Booke fotograf")
                .with_due_date(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap())
                .with_owner("Kari"),
        )
        .unwrap();
    session.tasks.add(Task::new("Sende invitasjoner")).unwrap();

    session
        .schedule
        .add(ScheduleEntry::new("14:00", "Vielse").at_location("Kirken"))
        .unwrap();
    session
        .schedule
        .add(ScheduleEntry::new("18:00", "Middag"))
        .unwrap();

    session
}

fn cells<T: SheetRecord>(rows: &[T]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| r.to_cells().iter().map(|c| c.as_text()).collect())
        .collect()
}

#[test]
fn export_then_import_preserves_every_table() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bryllupsdata.xlsx");
    let session = planned_session();

    workbook::export_session(&session, &path).unwrap();

    let mut restored = Session::new();
    let summary = workbook::import_session(&mut restored, &path).unwrap();
    assert_eq!(summary.guests, 3);
    assert_eq!(summary.budget, 12);
    assert_eq!(summary.tasks, 2);
    assert_eq!(summary.schedule, 2);

    assert_eq!(cells(restored.guests.list()), cells(session.guests.list()));
    assert_eq!(cells(restored.budget.list()), cells(session.budget.list()));
    assert_eq!(cells(restored.tasks.list()), cells(session.tasks.list()));
    assert_eq!(
        cells(restored.schedule.list()),
        cells(session.schedule.list())
    );

    let per = &restored.guests.list()[2];
    assert_eq!(per.name, "Per");
    assert!(per.relation.is_none());
    assert!(per.party_size.is_none());
}

#[test]
fn failed_import_leaves_session_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.xlsx");
    std::fs::write(&path, b"this is not a workbook").unwrap();

    let mut session = planned_session();
    let before = session.tables();

    let err = workbook::import_session(&mut session, &path).unwrap_err();
    assert!(err.is_parse());
    assert_eq!(session.tables(), before);
}

#[test]
fn workbook_missing_a_sheet_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("partial.xlsx");

    let mut book = Workbook::new();
    for (name, key) in [("Gjester", "Navn"), ("Budsjett", "Kategori"), ("Oppgaver", "Oppgave")] {
        let sheet = book.add_worksheet();
        sheet.set_name(name).unwrap();
        sheet.write_string(0, 0, key).unwrap();
    }
    book.save(&path).unwrap();

    let mut session = planned_session();
    let before = session.tables();

    let err = workbook::import_session(&mut session, &path).unwrap_err();
    assert!(err.is_parse());
    assert!(err.to_string().contains("Tidsplan"));
    assert_eq!(session.tables(), before);
}

#[test]
fn bad_cell_names_sheet_and_row() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.xlsx");

    let mut book = Workbook::new();
    let guests = book.add_worksheet();
    guests.set_name("Gjester").unwrap();
    guests.write_string(0, 0, "Navn").unwrap();
    guests.write_string(0, 1, "Antall gjester").unwrap();
    guests.write_string(1, 0, "Kari").unwrap();
    guests.write_string(1, 1, "mange").unwrap();
    for (name, key) in [("Budsjett", "Kategori"), ("Oppgaver", "Oppgave"), ("Tidsplan", "Tid")] {
        let sheet = book.add_worksheet();
        sheet.set_name(name).unwrap();
        sheet.write_string(0, 0, key).unwrap();
    }
    book.save(&path).unwrap();

    let mut session = Session::new();
    let err = workbook::import_session(&mut session, &path).unwrap_err();
    assert!(err.is_parse());
    let message = err.to_string();
    assert!(message.contains("Gjester"));
    assert!(message.contains("row 2"));
    assert!(session.guests.is_empty());
}

#[test]
fn single_sheet_export_holds_only_that_table() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("gjester.xlsx");
    let session = planned_session();

    workbook::export_sheet(&session, &path, SheetKind::Guests).unwrap();

    // A lone guest sheet is not a full workbook
    let mut restored = Session::new();
    let err = workbook::import_session(&mut restored, &path).unwrap_err();
    assert!(err.to_string().contains("Budsjett"));
}

#[test]
fn free_text_whitespace_survives_round_trip() {
    let mut session = Session::new();
    session
        .guests
        .add(Guest::new("Kari", Relation::FriendBride).with_special_needs("Vegetar\n"))
        .unwrap();

    let mut task = Task::new("Bestille kake");
    task.notes = "  ring bakeren ".into();
    session.tasks.add(task).unwrap();
    session
        .schedule
        .add(ScheduleEntry::new("16:00", "Kaffe og kake").at_location(" Hagen"))
        .unwrap();

    let bytes = workbook::export_session_bytes(&session).unwrap();
    let mut restored = Session::new();
    workbook::import_session_bytes(&mut restored, &bytes).unwrap();

    assert_eq!(restored.guests.list()[0].special_needs, "Vegetar\n");
    assert_eq!(restored.tasks.list()[0].notes, "  ring bakeren ");
    assert_eq!(restored.schedule.list()[0].location, " Hagen");
    assert_eq!(cells(restored.guests.list()), cells(session.guests.list()));
}

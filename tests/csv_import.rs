use std::fs;

use tempfile::TempDir;

use wedding_planner::export::export_guests_csv_file;
use wedding_planner::models::{Guest, Relation, RsvpStatus};
use wedding_planner::reports::{rsvp_counts, special_needs_count, total_invited};
use wedding_planner::services::ImportService;
use wedding_planner::storage::Session;
use wedding_planner::PlannerError;

#[test]
fn name_only_file_imports_one_empty_guest() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("gjester.csv");
    fs::write(&path, "Navn\nKari\n").unwrap();

    let mut session = Session::new();
    let result = ImportService::new(&mut session)
        .import_guests_file(&path)
        .unwrap();

    assert_eq!(result.imported, 1);
    let kari = &session.guests.list()[0];
    assert_eq!(kari.name, "Kari");
    assert!(kari.relation.is_none());
    assert!(kari.invited.is_none());
    assert!(kari.rsvp_status.is_none());
    assert!(kari.party_size.is_none());
    assert!(kari.special_needs.is_empty());

    // Empty fields contribute nothing to the figures
    assert_eq!(total_invited(session.guests.list()), 0);
    assert_eq!(rsvp_counts(session.guests.list()).total(), 0);
}

#[test]
fn file_without_name_column_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("gjester.csv");
    fs::write(&path, "Name,Relasjon\nKari,Kollega\n").unwrap();

    let mut session = Session::new();
    let err = ImportService::new(&mut session)
        .import_guests_file(&path)
        .unwrap_err();

    assert!(matches!(err, PlannerError::MissingColumn { .. }));
    assert!(session.guests.is_empty());
}

#[test]
fn import_appends_to_existing_guests() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("gjester.csv");
    fs::write(
        &path,
        "Navn,Relasjon,Invitert,RSVP Status,Antall gjester,Spesielle behov,Bord\n\
         Kari,Venn brud,ja,Kommer,2,Vegetar,1\n\
         Ola,Familie brudgom,nei,Venter på svar,1,,2\n",
    )
    .unwrap();

    let mut session = Session::new();
    session
        .guests
        .add(Guest::new("Per", Relation::Other).with_status(RsvpStatus::NotComing))
        .unwrap();

    let result = ImportService::new(&mut session)
        .import_guests_file(&path)
        .unwrap();
    assert_eq!(result.imported, 2);
    assert_eq!(result.ignored_columns, vec!["Bord".to_string()]);

    let guests = session.guests.list();
    assert_eq!(guests.len(), 3);
    assert_eq!(guests[0].name, "Per");
    assert_eq!(guests[2].invited, Some(false));

    let counts = rsvp_counts(guests);
    assert_eq!(counts.coming, 2);
    assert_eq!(counts.not_coming, 1);
    assert_eq!(counts.pending, 1);
    assert_eq!(counts.total(), total_invited(guests));
    assert_eq!(special_needs_count(guests), 1);
}

#[test]
fn preview_does_not_touch_the_session() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("gjester.csv");
    let mut rows = String::from("Navn,Notat\n");
    for i in 0..8 {
        rows.push_str(&format!("Gjest {},hei\n", i));
    }
    fs::write(&path, rows).unwrap();

    let preview = ImportService::preview_guest_csv(&path, 5).unwrap();
    assert_eq!(preview.guests.len(), 5);
    assert_eq!(preview.ignored_columns, vec!["Notat".to_string()]);
}

#[test]
fn exported_guest_csv_imports_back() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("eksport.csv");

    let mut source = Session::new();
    source
        .guests
        .add(
            Guest::new("Kari, Nordmann", Relation::FriendGroom)
                .with_status(RsvpStatus::Coming)
                .with_party_size(3)
                .with_special_needs("Nøtter"),
        )
        .unwrap();
    export_guests_csv_file(source.guests.list(), &path).unwrap();

    let mut target = Session::new();
    ImportService::new(&mut target)
        .import_guests_file(&path)
        .unwrap();

    let guest = &target.guests.list()[0];
    let source_guest = &source.guests.list()[0];
    assert_eq!(guest.name, source_guest.name);
    assert_eq!(guest.relation, source_guest.relation);
    assert_eq!(guest.invited, source_guest.invited);
    assert_eq!(guest.rsvp_status, source_guest.rsvp_status);
    assert_eq!(guest.party_size, source_guest.party_size);
    assert_eq!(guest.special_needs, source_guest.special_needs);
}

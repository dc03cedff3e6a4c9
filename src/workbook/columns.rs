//! Sheet layout and cell codec
//!
//! Each record type knows its sheet name, its column headers and how to turn
//! itself into cells and back. Cells are looked up by header name, so column
//! order in an uploaded file does not matter and unknown columns are ignored.
//! Values that get parsed are trimmed first; free text is kept as written.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::models::{BudgetLine, Guest, Relation, RsvpStatus, ScheduleEntry, Task};

pub const GUESTS_SHEET: &str = "Gjester";
pub const BUDGET_SHEET: &str = "Budsjett";
pub const TASKS_SHEET: &str = "Oppgaver";
pub const SCHEDULE_SHEET: &str = "Tidsplan";

pub const GUEST_COLUMNS: [&str; 6] = [
    "Navn",
    "Relasjon",
    "Invitert",
    "RSVP Status",
    "Antall gjester",
    "Spesielle behov",
];
pub const BUDGET_COLUMNS: [&str; 5] = ["Kategori", "Budsjettert", "Faktisk", "Betalt", "Beskrivelse"];
pub const TASK_COLUMNS: [&str; 7] = [
    "Oppgave",
    "Beskrivelse",
    "Frist",
    "Ansvarlig",
    "Status",
    "Prioritet",
    "Notater",
];
pub const SCHEDULE_COLUMNS: [&str; 5] = ["Tid", "Aktivitet", "Sted", "Ansvarlig", "Notater"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One of the four workbook sheets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetKind {
    Guests,
    Budget,
    Tasks,
    Schedule,
}

impl SheetKind {
    pub fn all() -> &'static [Self] {
        &[Self::Guests, Self::Budget, Self::Tasks, Self::Schedule]
    }

    /// Sheet name as written to the workbook
    pub fn name(&self) -> &'static str {
        match self {
            Self::Guests => GUESTS_SHEET,
            Self::Budget => BUDGET_SHEET,
            Self::Tasks => TASKS_SHEET,
            Self::Schedule => SCHEDULE_SHEET,
        }
    }
}

impl fmt::Display for SheetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SheetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gjester" | "guests" => Ok(Self::Guests),
            "budsjett" | "budget" => Ok(Self::Budget),
            "oppgaver" | "tasks" => Ok(Self::Tasks),
            "tidsplan" | "schedule" => Ok(Self::Schedule),
            other => Err(format!("Unknown sheet '{}'", other)),
        }
    }
}

/// A typed cell value to be written
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Bool(bool),
    Blank,
}

impl Cell {
    fn text(value: &str) -> Self {
        if value.is_empty() {
            Self::Blank
        } else {
            Self::Text(value.to_string())
        }
    }

    /// Plain-text rendering, as used for CSV output
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::Number(value) => value.to_string(),
            Self::Bool(value) => value.to_string(),
            Self::Blank => String::new(),
        }
    }
}

/// Header positions of an uploaded table
#[derive(Debug, Clone)]
pub struct HeaderIndex {
    positions: HashMap<String, usize>,
    ignored: Vec<String>,
}

impl HeaderIndex {
    /// Index `headers`, remembering which of them are not in `known`
    pub fn new<S: AsRef<str>>(headers: &[S], known: &[&str]) -> Self {
        let mut positions = HashMap::new();
        let mut ignored = Vec::new();

        for (idx, header) in headers.iter().enumerate() {
            let header = header.as_ref().trim_start_matches('\u{feff}').trim();
            if known.contains(&header) {
                positions.entry(header.to_string()).or_insert(idx);
            } else if !header.is_empty() {
                ignored.push(header.to_string());
            }
        }

        Self { positions, ignored }
    }

    pub fn contains(&self, column: &str) -> bool {
        self.positions.contains_key(column)
    }

    /// Headers that are not part of the schema and are dropped
    pub fn ignored(&self) -> &[String] {
        &self.ignored
    }

    /// Cell accessor for one data row
    pub fn row<'a>(&'a self, cells: &'a [String]) -> RowFields<'a> {
        RowFields {
            index: self,
            cells,
        }
    }
}

/// Read access to one data row by column name
#[derive(Debug, Clone, Copy)]
pub struct RowFields<'a> {
    index: &'a HeaderIndex,
    cells: &'a [String],
}

impl<'a> RowFields<'a> {
    /// Trimmed text of a column, empty when the column or cell is missing
    pub fn get(&self, column: &str) -> &'a str {
        self.text(column).trim()
    }

    /// Cell text exactly as stored, empty when the column or cell is missing
    pub fn text(&self, column: &str) -> &'a str {
        let index: &'a HeaderIndex = self.index;
        let cells: &'a [String] = self.cells;
        index
            .positions
            .get(column)
            .and_then(|&idx| cells.get(idx))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Whether every cell in the row is blank
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.trim().is_empty())
    }
}

/// A record that maps onto one workbook sheet
pub trait SheetRecord: Sized {
    const SHEET: &'static str;
    const COLUMNS: &'static [&'static str];

    /// Cells in `COLUMNS` order
    fn to_cells(&self) -> Vec<Cell>;

    /// Build a record from a row; the error names the offending column
    fn from_fields(fields: &RowFields<'_>) -> Result<Self, String>;

    /// Column that must be present for the sheet to be readable
    fn key_column() -> &'static str {
        Self::COLUMNS[0]
    }
}

impl SheetRecord for Guest {
    const SHEET: &'static str = GUESTS_SHEET;
    const COLUMNS: &'static [&'static str] = &GUEST_COLUMNS;

    fn to_cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.name),
            self.relation
                .map(|r| Cell::text(r.label()))
                .unwrap_or(Cell::Blank),
            self.invited.map(Cell::Bool).unwrap_or(Cell::Blank),
            self.rsvp_status
                .map(|s| Cell::text(s.label()))
                .unwrap_or(Cell::Blank),
            self.party_size
                .map(|n| Cell::Number(f64::from(n)))
                .unwrap_or(Cell::Blank),
            Cell::text(&self.special_needs),
        ]
    }

    fn from_fields(fields: &RowFields<'_>) -> Result<Self, String> {
        let mut guest = Guest::named(fields.text("Navn"));
        guest.relation = optional(fields.get("Relasjon"), Relation::from_str)?;
        guest.invited = optional(fields.get("Invitert"), parse_bool)?;
        guest.rsvp_status = optional(fields.get("RSVP Status"), RsvpStatus::from_str)?;
        guest.party_size = optional(fields.get("Antall gjester"), parse_party_size)?;
        guest.special_needs = fields.text("Spesielle behov").to_string();
        Ok(guest)
    }
}

impl SheetRecord for BudgetLine {
    const SHEET: &'static str = BUDGET_SHEET;
    const COLUMNS: &'static [&'static str] = &BUDGET_COLUMNS;

    fn to_cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.category),
            Cell::Number(self.budgeted as f64),
            Cell::Number(self.actual as f64),
            Cell::Number(self.paid as f64),
            Cell::text(&self.description),
        ]
    }

    fn from_fields(fields: &RowFields<'_>) -> Result<Self, String> {
        let mut line = BudgetLine::new(fields.text("Kategori"));
        line.budgeted = amount(fields, "Budsjettert")?;
        line.actual = amount(fields, "Faktisk")?;
        line.paid = amount(fields, "Betalt")?;
        line.description = fields.text("Beskrivelse").to_string();
        Ok(line)
    }
}

impl SheetRecord for Task {
    const SHEET: &'static str = TASKS_SHEET;
    const COLUMNS: &'static [&'static str] = &TASK_COLUMNS;

    fn to_cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.task),
            Cell::text(&self.description),
            self.due_date
                .map(|d| Cell::Text(d.format(DATE_FORMAT).to_string()))
                .unwrap_or(Cell::Blank),
            Cell::text(&self.owner),
            Cell::text(&self.status),
            Cell::text(&self.priority),
            Cell::text(&self.notes),
        ]
    }

    fn from_fields(fields: &RowFields<'_>) -> Result<Self, String> {
        let mut task = Task::new(fields.text("Oppgave"));
        task.description = fields.text("Beskrivelse").to_string();
        task.due_date = optional(fields.get("Frist"), parse_date)?;
        task.owner = fields.text("Ansvarlig").to_string();
        task.status = fields.text("Status").to_string();
        task.priority = fields.text("Prioritet").to_string();
        task.notes = fields.text("Notater").to_string();
        Ok(task)
    }
}

impl SheetRecord for ScheduleEntry {
    const SHEET: &'static str = SCHEDULE_SHEET;
    const COLUMNS: &'static [&'static str] = &SCHEDULE_COLUMNS;

    fn to_cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.time),
            Cell::text(&self.activity),
            Cell::text(&self.location),
            Cell::text(&self.owner),
            Cell::text(&self.notes),
        ]
    }

    fn from_fields(fields: &RowFields<'_>) -> Result<Self, String> {
        let mut entry = ScheduleEntry::new(fields.text("Tid"), fields.text("Aktivitet"));
        entry.location = fields.text("Sted").to_string();
        entry.owner = fields.text("Ansvarlig").to_string();
        entry.notes = fields.text("Notater").to_string();
        Ok(entry)
    }
}

fn optional<T, E, F>(value: &str, parse: F) -> Result<Option<T>, String>
where
    F: FnOnce(&str) -> Result<T, E>,
    E: fmt::Display,
{
    if value.is_empty() {
        Ok(None)
    } else {
        parse(value).map(Some).map_err(|e| e.to_string())
    }
}

fn amount(fields: &RowFields<'_>, column: &str) -> Result<i64, String> {
    let value = fields.get(column);
    if value.is_empty() {
        return Ok(0);
    }
    parse_whole_number(value).ok_or_else(|| format!("{}: '{}' is not a whole number", column, value))
}

/// Whole number, also accepting the `2.0` spelling spreadsheets produce
fn parse_whole_number(value: &str) -> Option<i64> {
    if let Ok(n) = value.parse::<i64>() {
        return Some(n);
    }
    let float = value.parse::<f64>().ok()?;
    if float.is_finite() && float.fract() == 0.0 {
        Some(float as i64)
    } else {
        None
    }
}

fn parse_party_size(value: &str) -> Result<u32, String> {
    parse_whole_number(value)
        .and_then(|n| u32::try_from(n).ok())
        .filter(|&n| n >= 1)
        .ok_or_else(|| format!("Antall gjester: '{}' is not a positive whole number", value))
}

/// Boolean in the spellings pandas, Excel and people produce
pub fn parse_bool(value: &str) -> Result<bool, String> {
    match value.trim().to_lowercase().as_str() {
        "true" | "ja" | "yes" | "1" | "sann" | "x" => Ok(true),
        "false" | "nei" | "no" | "0" | "usann" => Ok(false),
        _ => Err(format!("Invitert: '{}' is not a yes/no value", value)),
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    let date_part = value.split_whitespace().next().unwrap_or(value);
    NaiveDate::parse_from_str(date_part, DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(date_part, "%d.%m.%Y"))
        .map_err(|_| format!("Frist: '{}' is not a date (YYYY-MM-DD)", value))
}

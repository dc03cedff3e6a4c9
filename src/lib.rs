//! Wedding planner
//!
//! Keeps the guest list, the budget, planning tasks and the wedding-day
//! schedule for one session, derives the dashboard figures from them, and
//! moves everything in and out of xlsx workbooks and CSV files.
//!
//! # Architecture
//!
//! - `models`: guests, budget lines, tasks and schedule entries
//! - `storage`: the session and its four tables
//! - `services`: name resolution, category rules and CSV import
//! - `reports`: RSVP counts, budget figures, filters and the countdown
//! - `workbook`: xlsx import and export
//! - `export`: guest list as CSV
//! - `display`: terminal formatting
//! - `config`: paths and settings
//! - `cli`: command handlers for the `wedding` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use wedding_planner::models::{Guest, Relation};
//! use wedding_planner::reports::total_invited;
//! use wedding_planner::storage::Session;
//!
//! let mut session = Session::new();
//! session.guests.add(Guest::new("Kari", Relation::FriendBride))?;
//! assert_eq!(total_invited(session.guests.list()), 1);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod workbook;

pub use error::{PlannerError, PlannerResult};

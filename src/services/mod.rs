//! Service layer for the wedding planner
//!
//! Services sit on top of a [`Session`](crate::storage::Session) and handle
//! name resolution, trimming and cross-table checks before anything reaches
//! the tables.

pub mod budget;
pub mod guest;
pub mod import;

pub use budget::BudgetService;
pub use guest::GuestService;
pub use import::{GuestCsv, ImportResult, ImportService};

//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod guest;
pub mod plan;
pub mod workbook;

pub use budget::{handle_budget_command, BudgetCommands};
pub use guest::{handle_guest_command, GuestCommands};
pub use plan::{handle_schedule_command, handle_task_command, ScheduleCommands, TaskCommands};
pub use workbook::{handle_export_command, handle_import_command};

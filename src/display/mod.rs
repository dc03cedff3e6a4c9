//! Display formatting for terminal output
//!
//! Tables, text bars and detail views for the planning tables.

pub mod budget;
pub mod guest;
pub mod plan;
pub mod report;

pub use budget::{
    format_budget_comparison, format_budget_distribution, format_budget_summary,
    format_budget_table,
};
pub use guest::{format_guest_details, format_guest_list, format_selection_stats};
pub use plan::{format_schedule, format_task_list};
pub use report::{format_amount, format_kroner};

//! Reports module for the wedding planner
//!
//! Derived figures are plain functions over the current tables; nothing
//! here is cached, so every view reflects the latest mutation.

pub mod budget;
pub mod countdown;
pub mod guests;
pub mod overview;

pub use budget::{
    budget_comparison, budget_difference, budget_distribution, budget_outstanding, budget_totals,
    budget_used_percent, budgeted_share_percent, BudgetTotals,
};
pub use countdown::{days_until_event, EventDate};
pub use guests::{
    filter_guests, rsvp_chart, rsvp_counts, special_needs_count, total_invited, ChartSlice,
    GuestFilter, RsvpCounts, SelectionStats,
};
pub use overview::OverviewReport;

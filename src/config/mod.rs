//! Configuration module for the wedding planner
//!
//! Path resolution and the persisted user settings.

pub mod paths;
pub mod settings;

pub use paths::PlannerPaths;
pub use settings::Settings;

//! User settings for the wedding planner
//!
//! Starting total budget, the wedding date, the currency suffix and the
//! default export file name.

use serde::{Deserialize, Serialize};

use super::paths::PlannerPaths;
use crate::error::PlannerError;
use crate::models::DEFAULT_TOTAL_BUDGET;
use crate::reports::EventDate;
use crate::workbook::DEFAULT_FILE_NAME;

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Total budget a fresh session starts with
    #[serde(default = "default_total_budget")]
    pub total_budget: i64,

    /// Month of the wedding (1-12)
    #[serde(default = "default_wedding_month")]
    pub wedding_month: u32,

    /// Day of the wedding
    #[serde(default = "default_wedding_day")]
    pub wedding_day: u32,

    /// Suffix printed after amounts
    #[serde(default = "default_currency_suffix")]
    pub currency_suffix: String,

    /// File name used by `export` when no output is given
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_total_budget() -> i64 {
    DEFAULT_TOTAL_BUDGET
}

fn default_wedding_month() -> u32 {
    5
}

fn default_wedding_day() -> u32 {
    31
}

fn default_currency_suffix() -> String {
    "kr".to_string()
}

fn default_export_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            total_budget: default_total_budget(),
            wedding_month: default_wedding_month(),
            wedding_day: default_wedding_day(),
            currency_suffix: default_currency_suffix(),
            export_file_name: default_export_file_name(),
        }
    }
}

impl Settings {
    /// The configured wedding date
    pub fn event_date(&self) -> Result<EventDate, PlannerError> {
        EventDate::new(self.wedding_month, self.wedding_day)
    }

    /// Check the settings for values the planner cannot work with
    pub fn validate(&self) -> Result<(), PlannerError> {
        if self.total_budget < 0 {
            return Err(PlannerError::Config(
                "total_budget cannot be negative".into(),
            ));
        }

        if self.export_file_name.trim().is_empty() {
            return Err(PlannerError::Config(
                "export_file_name cannot be empty".into(),
            ));
        }

        self.event_date()?;
        Ok(())
    }

    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &PlannerPaths) -> Result<Self, PlannerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                PlannerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                PlannerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Not saved yet; the caller decides when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PlannerPaths) -> Result<(), PlannerError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            PlannerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            PlannerError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}

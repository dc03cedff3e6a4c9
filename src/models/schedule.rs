//! Wedding-day schedule model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ScheduleEntryId;

/// One slot in the programme for the day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: ScheduleEntryId,
    /// Free-form time of day, e.g. "14:30"
    pub time: String,
    #[serde(default)]
    pub activity: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub notes: String,
}

impl ScheduleEntry {
    pub fn new(time: impl Into<String>, activity: impl Into<String>) -> Self {
        Self {
            id: ScheduleEntryId::new(),
            time: time.into(),
            activity: activity.into(),
            location: String::new(),
            owner: String::new(),
            notes: String::new(),
        }
    }

    pub fn at_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.time, self.activity)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScheduleEntryPatch {
    pub time: Option<String>,
    pub activity: Option<String>,
    pub location: Option<String>,
    pub owner: Option<String>,
    pub notes: Option<String>,
}

impl ScheduleEntryPatch {
    pub fn apply_to(self, entry: &mut ScheduleEntry) {
        if let Some(value) = self.time {
            entry.time = value;
        }
        if let Some(value) = self.activity {
            entry.activity = value;
        }
        if let Some(value) = self.location {
            entry.location = value;
        }
        if let Some(value) = self.owner {
            entry.owner = value;
        }
        if let Some(value) = self.notes {
            entry.notes = value;
        }
    }
}

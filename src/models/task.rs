//! Planning task model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TaskId;

/// A to-do item on the wedding checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub task: String,
    #[serde(default)]
    pub description: String,
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub notes: String,
}

impl Task {
    pub fn new(task: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            task: task.into(),
            description: String::new(),
            due_date: None,
            owner: String::new(),
            status: String::new(),
            priority: String::new(),
            notes: String::new(),
        }
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.task)
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub task: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub owner: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub notes: Option<String>,
}

impl TaskPatch {
    pub fn apply_to(self, task: &mut Task) {
        if let Some(value) = self.task {
            task.task = value;
        }
        if let Some(value) = self.description {
            task.description = value;
        }
        if let Some(value) = self.due_date {
            task.due_date = Some(value);
        }
        if let Some(value) = self.owner {
            task.owner = value;
        }
        if let Some(value) = self.status {
            task.status = value;
        }
        if let Some(value) = self.priority {
            task.priority = value;
        }
        if let Some(value) = self.notes {
            task.notes = value;
        }
    }
}

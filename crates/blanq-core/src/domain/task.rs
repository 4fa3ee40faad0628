//! Task Entity
//!
//! Shared to-do items between the two business partners.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use super::entity::{impl_entity, RecordId};

/// Format used for task timestamps (`2024-09-04 14:30`)
pub const TASK_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Board column a task sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Columns in board order
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "inProgress",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    /// Position of the column on the board
    pub fn index(&self) -> usize {
        match self {
            TaskStatus::Todo => 0,
            TaskStatus::InProgress => 1,
            TaskStatus::Completed => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High Priority",
            Priority::Medium => "Medium Priority",
            Priority::Low => "Low Priority",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == s)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Comment {
    pub id: RecordId,
    pub author: String,
    pub text: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    pub assigned_to: String,
    pub priority: Priority,
    /// YYYY-MM-DD
    pub due_date: String,
    pub status: TaskStatus,
    pub created_at: String,
    pub updated_at: Option<String>,
    /// Set the first time the task lands in the completed column
    pub completed_at: Option<String>,
    pub comments: Vec<Comment>,
    /// Ids of tasks this one waits on
    pub dependencies: Vec<RecordId>,
    pub tags: Vec<String>,
    pub estimated_hours: Option<f32>,
    pub actual_hours: Option<f32>,
    /// Percent complete while in progress
    pub progress: Option<u8>,
}

impl_entity!(Task);

impl Task {
    pub fn new(title: impl Into<String>, assigned_to: impl Into<String>, due_date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            assigned_to: assigned_to.into(),
            due_date: due_date.into(),
            ..Default::default()
        }
    }

    pub fn due(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.due_date, "%Y-%m-%d").ok()
    }

    /// Not completed and due strictly before `today`
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status != TaskStatus::Completed && self.due().is_some_and(|due| due < today)
    }

    /// Stamp a completion time unless one already exists
    pub fn stamp_completed(&mut self, now: NaiveDateTime) {
        if self.completed_at.is_none() {
            self.completed_at = Some(now.format(TASK_TIMESTAMP_FORMAT).to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, TASK_TIMESTAMP_FORMAT).unwrap()
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(serde_json::to_string(&TaskStatus::InProgress).unwrap(), "\"inProgress\"");
        assert_eq!(TaskStatus::from_str("completed"), Some(TaskStatus::Completed));
        assert_eq!(TaskStatus::from_index(1), Some(TaskStatus::InProgress));
        assert_eq!(TaskStatus::from_index(3), None);
    }

    #[test]
    fn test_overdue() {
        let today = NaiveDate::from_ymd_opt(2024, 9, 10).unwrap();
        let mut task = Task::new("Report", "You", "2024-09-08");
        assert!(task.is_overdue(today));

        task.status = TaskStatus::Completed;
        assert!(!task.is_overdue(today));

        let on_time = Task::new("Report", "You", "2024-09-10");
        assert!(!on_time.is_overdue(today));
    }

    #[test]
    fn test_stamp_completed_once() {
        let mut task = Task::default();
        task.stamp_completed(at("2024-09-04 10:00"));
        task.stamp_completed(at("2024-09-05 11:00"));
        assert_eq!(task.completed_at.as_deref(), Some("2024-09-04 10:00"));
    }
}

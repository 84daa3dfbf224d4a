//! Assignments and school calendar events.

use crate::ids::{AssignmentId, ClassId, RecordKey, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentKind {
    Homework,
    Exam,
    Project,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: AssignmentId,
    pub class_id: ClassId,
    pub teacher_id: UserId,
    pub teacher_name: String,
    pub subject: String,
    pub title: String,
    pub description: String,
    pub deadline: chrono::DateTime<chrono::Utc>,
    #[serde(rename = "type")]
    pub kind: AssignmentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AssignmentStatus>,
    #[serde(default)]
    pub completed_by: Vec<UserId>,
}

impl Assignment {
    pub fn is_completed_by(&self, student: UserId) -> bool {
        self.completed_by.contains(&student)
    }

    /// Status as seen by one student: completion list first, then the stored status.
    pub fn status_for(&self, student: UserId) -> AssignmentStatus {
        if self.is_completed_by(student) {
            AssignmentStatus::Completed
        } else {
            self.status.unwrap_or_default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Academic,
    Social,
    Holiday,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: RecordKey,
    pub title: String,
    pub date: chrono::NaiveDate,
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

//! Student-facing records: progress summary, grades and personal goals.

use crate::ids::{RecordKey, UserId};
use serde::{Deserialize, Serialize};

/// Progress summary shown on the student dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentData {
    pub id: UserId,
    pub gpa: f32,
    pub score: u32,
    pub streak: u32,
    pub goals_completed: u32,
    pub goals_total: u32,
    #[serde(default)]
    pub progress_data: Vec<ProgressPoint>,
}

impl StudentData {
    /// Share of goals completed, in `0.0..=1.0`. Zero when no goals exist.
    pub fn goal_completion(&self) -> f32 {
        if self.goals_total == 0 {
            0.0
        } else {
            self.goals_completed.min(self.goals_total) as f32 / self.goals_total as f32
        }
    }
}

/// One month on the progress chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressPoint {
    pub month: String,
    pub overall: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub score: f32,
    pub date: chrono::NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// Grades of one student in one subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentGradeRecord {
    pub subject: String,
    pub grades: Vec<GradeEntry>,
    pub current_percentage: f32,
    pub trend: Trend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: RecordKey,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Percentage, `0..=100`.
    pub progress: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<chrono::NaiveDate>,
    pub completed: bool,
}

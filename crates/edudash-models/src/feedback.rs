//! Lesson feedback forms.
//!
//! A teacher opens a [`FeedbackFormConfig`] for a lesson and shares its public
//! link (`?view=feedback&id=<form id>`). Anyone holding the link can submit a
//! [`FeedbackResponse`] without signing in.

use crate::ids::{ClassId, FormId, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormStatus {
    Active,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackFormConfig {
    pub id: FormId,
    pub teacher_id: UserId,
    pub class_id: ClassId,
    pub lesson_topic: String,
    pub date: chrono::NaiveDate,
    pub url: String,
    pub status: FormStatus,
}

impl FeedbackFormConfig {
    pub fn is_open(&self) -> bool {
        self.status == FormStatus::Active
    }

    /// Public link for a form, relative to `base` (e.g. `https://school.example/`).
    pub fn public_link(base: &str, id: &FormId) -> String {
        format!("{}?view=feedback&id={}", base, id)
    }
}

/// Ratings on a 1 to 5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRatings {
    pub interest: u8,
    pub clarity: u8,
    pub productivity: u8,
    pub efficiency: u8,
}

impl FeedbackRatings {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn average(&self) -> f32 {
        let sum = self.interest as f32
            + self.clarity as f32
            + self.productivity as f32
            + self.efficiency as f32;
        sum / 4.0
    }

    /// Copy with every rating clamped into `MIN..=MAX`.
    pub fn clamped(self) -> Self {
        let clamp = |v: u8| v.clamp(Self::MIN, Self::MAX);
        Self {
            interest: clamp(self.interest),
            clarity: clamp(self.clarity),
            productivity: clamp(self.productivity),
            efficiency: clamp(self.efficiency),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackComments {
    pub improve: String,
    pub liked: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub id: String,
    pub form_id: FormId,
    pub ratings: FeedbackRatings,
    pub comments: FeedbackComments,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

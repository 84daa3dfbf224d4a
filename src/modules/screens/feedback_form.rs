//! Public lesson feedback form.
//!
//! Reached through `?view=feedback&id=<form id>` without a session.

use async_trait::async_trait;
use chrono::Utc;
use edudash_core::AppError;
use edudash_models::{FeedbackComments, FeedbackRatings, FeedbackResponse, FormId};
use edudash_store::{RecordStore, StoreError};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;

use super::{FeatureScreen, ScreenContext};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FeedbackSubmission {
    #[validate(range(min = 1, max = 5))]
    pub interest: u8,
    #[validate(range(min = 1, max = 5))]
    pub clarity: u8,
    #[validate(range(min = 1, max = 5))]
    pub productivity: u8,
    #[validate(range(min = 1, max = 5))]
    pub efficiency: u8,
    #[validate(length(max = 2000))]
    #[serde(default)]
    pub improve: String,
    #[validate(length(max = 2000))]
    #[serde(default)]
    pub liked: String,
}

#[derive(Debug, Clone)]
pub struct FeedbackFormScreen {
    form_id: FormId,
}

impl FeedbackFormScreen {
    pub fn new(form_id: FormId) -> Self {
        Self { form_id }
    }

    pub fn form_id(&self) -> &FormId {
        &self.form_id
    }

    /// Validates and stores an anonymous response for this form.
    #[instrument(skip(self, records, submission), fields(form_id = %self.form_id))]
    pub async fn submit(
        &self,
        records: &dyn RecordStore,
        submission: FeedbackSubmission,
    ) -> Result<FeedbackResponse, AppError> {
        submission.validate().map_err(AppError::bad_request)?;

        let response = FeedbackResponse {
            id: Uuid::new_v4().to_string(),
            form_id: self.form_id.clone(),
            ratings: FeedbackRatings {
                interest: submission.interest,
                clarity: submission.clarity,
                productivity: submission.productivity,
                efficiency: submission.efficiency,
            },
            comments: FeedbackComments {
                improve: submission.improve.trim().to_string(),
                liked: submission.liked.trim().to_string(),
            },
            timestamp: Utc::now(),
        };

        records
            .submit_feedback(response.clone())
            .await
            .map_err(|e| match e {
                StoreError::FormNotFound(_) => AppError::not_found(e),
                StoreError::FormClosed(_) => AppError::bad_request(e),
                other => AppError::internal(other),
            })?;

        info!(response_id = %response.id, "Feedback submitted");
        Ok(response)
    }
}

#[async_trait]
impl FeatureScreen for FeedbackFormScreen {
    fn title(&self) -> &'static str {
        "Lesson Feedback"
    }

    async fn render(&self, ctx: &ScreenContext) -> Result<Vec<String>, AppError> {
        let form = ctx
            .records
            .feedback_form(&self.form_id)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Feedback form '{}' not found", self.form_id)))?;

        let mut lines = vec![format!("{} ({})", form.lesson_topic, form.date)];
        if form.is_open() {
            lines.push(format!(
                "Rate interest, clarity, productivity and efficiency from {} to {}.",
                FeedbackRatings::MIN,
                FeedbackRatings::MAX
            ));
        } else {
            lines.push("This form is closed.".to_string());
        }
        Ok(lines)
    }
}

//! Feature screens.
//!
//! The routing core only picks a [`ScreenSelector`]; each screen then pulls its
//! own data from the [`RecordStore`] carried by the [`ScreenContext`]. Screens
//! render to plain text lines so any presenter can draw them.

pub mod feedback_form;
pub mod model;
pub mod registry;
pub mod student;
pub mod teacher;

use std::sync::Arc;

use async_trait::async_trait;
use edudash_core::AppError;
use edudash_models::User;
use edudash_store::RecordStore;

pub use feedback_form::FeedbackFormScreen;
pub use model::{ScreenSelector, StudentScreen, TeacherScreen};
pub use registry::ScreenRegistry;

/// Ambient data a screen may read.
#[derive(Clone)]
pub struct ScreenContext {
    pub user: Option<User>,
    pub records: Arc<dyn RecordStore>,
}

impl ScreenContext {
    pub fn new(user: Option<User>, records: Arc<dyn RecordStore>) -> Self {
        Self { user, records }
    }

    pub fn signed_in_user(&self) -> Result<&User, AppError> {
        self.user
            .as_ref()
            .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("This screen requires a signed-in user")))
    }
}

#[async_trait]
pub trait FeatureScreen: Send + Sync {
    fn title(&self) -> &'static str;

    async fn render(&self, ctx: &ScreenContext) -> Result<Vec<String>, AppError>;
}

use async_trait::async_trait;
use edudash_core::AppError;

use super::model::ScreenSelector;
use super::student::StudentView;
use super::teacher::TeacherView;
use super::{FeatureScreen, ScreenContext};

/// Sign-in prompt shown to anonymous sessions.
#[derive(Debug, Clone, Copy)]
pub struct SignInScreen;

#[async_trait]
impl FeatureScreen for SignInScreen {
    fn title(&self) -> &'static str {
        "Sign in"
    }

    async fn render(&self, _ctx: &ScreenContext) -> Result<Vec<String>, AppError> {
        Ok(vec!["Sign in with your school email and password.".to_string()])
    }
}

pub struct ScreenRegistry;

impl ScreenRegistry {
    pub fn construct(selector: &ScreenSelector) -> Box<dyn FeatureScreen> {
        match *selector {
            ScreenSelector::Auth => Box::new(SignInScreen),
            ScreenSelector::Student(screen) => Box::new(StudentView(screen)),
            ScreenSelector::Teacher(screen) => Box::new(TeacherView(screen)),
        }
    }
}

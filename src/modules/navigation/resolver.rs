//! Role-aware screen resolution.
//!
//! Maps the current [`ViewState`] and [`Session`] to the screen the content
//! area should show. Resolution is pure and total: every combination of view
//! and session yields exactly one [`ScreenSelector`].
//!
//! | Session   | View in role subset | View outside subset        |
//! |-----------|---------------------|----------------------------|
//! | anonymous | `Auth`              | `Auth`                     |
//! | student   | matching screen     | `Student(Dashboard)`       |
//! | teacher   | matching screen     | `Teacher(Profile)`         |

use edudash_models::{Role, ViewId};

use crate::modules::screens::{ScreenSelector, StudentScreen, TeacherScreen};
use crate::modules::session::Session;

use super::model::ViewState;

/// A role's routing table: a lookup over its view subset and the screen to
/// show for anything outside it.
#[derive(Debug, Clone, Copy)]
pub struct RoleRoutes<S> {
    pub role: Role,
    pub fallback: S,
    pub lookup: fn(ViewId) -> Option<S>,
}

impl<S: Copy> RoleRoutes<S> {
    pub fn resolve(&self, view: ViewId) -> S {
        (self.lookup)(view).unwrap_or(self.fallback)
    }
}

pub const STUDENT_ROUTES: RoleRoutes<StudentScreen> = RoleRoutes {
    role: Role::Student,
    fallback: StudentScreen::Dashboard,
    lookup: StudentScreen::for_view,
};

pub const TEACHER_ROUTES: RoleRoutes<TeacherScreen> = RoleRoutes {
    role: Role::Teacher,
    fallback: TeacherScreen::Profile,
    lookup: TeacherScreen::for_view,
};

/// Resolves a single view for `session`.
pub fn resolve_view(view: ViewId, session: &Session) -> ScreenSelector {
    match session.role() {
        None => ScreenSelector::Auth,
        Some(Role::Student) => ScreenSelector::Student(STUDENT_ROUTES.resolve(view)),
        Some(Role::Teacher) => ScreenSelector::Teacher(TEACHER_ROUTES.resolve(view)),
    }
}

pub fn resolve_screen(state: &ViewState, session: &Session) -> ScreenSelector {
    resolve_view(state.current_view(), session)
}

use edudash_config::ShellConfig;
use edudash_models::ViewId;
use tracing::{debug, instrument, warn};

use crate::modules::session::Session;

use super::model::{NavigationError, ViewState};

/// Owns the [`ViewState`] and applies navigation requests to it.
#[derive(Debug, Clone, Default)]
pub struct ViewRouter {
    state: ViewState,
}

impl ViewRouter {
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            state: ViewState::new(config),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn current_view(&self) -> ViewId {
        self.state.current_view()
    }

    /// Lands an authenticated session on its role's default view.
    ///
    /// Runs after every initialization and login. Anonymous sessions leave the
    /// state untouched.
    pub fn select_initial_view(&mut self, session: &Session) -> ViewId {
        if let Some(role) = session.role() {
            let view = ViewId::role_default(role);
            debug!(%role, %view, "Selecting initial view");
            self.state.set_current_view(view);
        }
        self.state.current_view()
    }

    /// Switches the current view.
    ///
    /// Targets outside the session's role are accepted; the resolver maps them
    /// to the role's fallback screen.
    #[instrument(skip(self, session))]
    pub fn navigate(&mut self, target: ViewId, session: &Session) -> Result<ViewId, NavigationError> {
        let Some(role) = session.role() else {
            return Err(NavigationError::NotAuthenticated(target));
        };

        let in_role = target.belongs_to(role);
        if !in_role {
            warn!(%role, %target, "Navigating outside the role's views");
        }
        edudash_observability::track_navigation(target.as_str(), in_role);

        self.state.set_current_view(target);
        Ok(target)
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        let open = self.state.flip_sidebar();
        debug!(open, "Sidebar toggled");
        open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use edudash_models::{Email, User};

    fn student_session() -> Session {
        Session::Authenticated(User::student(
            "Ada Lovelace",
            Email::new("ada@school.example").unwrap(),
            None,
        ))
    }

    fn teacher_session() -> Session {
        Session::Authenticated(User::teacher(
            "Grace Hopper",
            Email::new("grace@school.example").unwrap(),
            vec!["Mathematics".into()],
            vec![],
        ))
    }

    #[test]
    fn test_initial_state() {
        let router = ViewRouter::default();
        assert_eq!(router.current_view(), ViewId::Dashboard);
        assert!(router.state().sidebar_open());
    }

    #[test]
    fn test_sidebar_follows_config() {
        let config = ShellConfig {
            sidebar_open: false,
            ..ShellConfig::default()
        };
        assert!(!ViewRouter::new(&config).state().sidebar_open());
    }

    #[test]
    fn test_select_initial_view_per_role() {
        let mut router = ViewRouter::default();
        assert_eq!(router.select_initial_view(&teacher_session()), ViewId::TeacherProfile);
        assert_eq!(router.select_initial_view(&student_session()), ViewId::Dashboard);
    }

    #[test]
    fn test_select_initial_view_ignores_previous_view() {
        let mut router = ViewRouter::default();
        let session = student_session();
        router.navigate(ViewId::Goals, &session).unwrap();
        assert_eq!(router.select_initial_view(&session), ViewId::Dashboard);
    }

    #[test]
    fn test_select_initial_view_anonymous_is_noop() {
        let mut router = ViewRouter::default();
        router.navigate(ViewId::Grades, &student_session()).unwrap();
        assert_eq!(router.select_initial_view(&Session::Anonymous), ViewId::Grades);
    }

    #[test]
    fn test_navigate_requires_session() {
        let mut router = ViewRouter::default();
        let err = router.navigate(ViewId::Grades, &Session::Anonymous).unwrap_err();
        assert_eq!(err, NavigationError::NotAuthenticated(ViewId::Grades));
        assert_eq!(router.current_view(), ViewId::Dashboard);
    }

    #[test]
    fn test_navigate_accepts_out_of_role_target() {
        let mut router = ViewRouter::default();
        let result = router.navigate(ViewId::TeacherGrades, &student_session());
        assert_eq!(result, Ok(ViewId::TeacherGrades));
        assert_eq!(router.current_view(), ViewId::TeacherGrades);
    }

    #[test]
    fn test_toggle_sidebar_leaves_view_alone() {
        let mut router = ViewRouter::default();
        router.navigate(ViewId::Calendar, &student_session()).unwrap();
        assert!(!router.toggle_sidebar());
        assert!(router.toggle_sidebar());
        assert_eq!(router.current_view(), ViewId::Calendar);
    }
}

//! Top-level orchestration.
//!
//! [`App`] wires the session store, the view router, the public-route bypass
//! and the shell together and produces one [`Frame`] per state. Startup runs
//! in this order:
//!
//! 1. The launch context is checked for a public route. If one is present the
//!    feedback form is shown at once and nothing else runs.
//! 2. Otherwise the persisted identity is restored (`Frame::Loading` until it
//!    resolves).
//! 3. An authenticated session lands on its role's default view inside the
//!    shell; an anonymous one gets the sign-in screen.

use std::time::Duration;

use edudash_core::AppError;
use edudash_models::{FormId, User, ViewId};
use tracing::{info, instrument};

use crate::modules::auth::{AuthService, LoginRequest};
use crate::modules::navigation::{NavigationError, ViewRouter, ViewState, resolve_screen};
use crate::modules::public_route::{NavigationContext, PublicRoute};
use crate::modules::screens::{FeedbackFormScreen, ScreenContext, ScreenSelector};
use crate::modules::session::{Session, SessionStore};
use crate::modules::shell::{ShellEvent, ShellFrame, ShellLayout};
use crate::state::AppState;

/// What the presenter should draw.
#[derive(Debug, Clone, PartialEq)]
pub enum Frame {
    /// The persisted identity is still being restored.
    Loading,
    PublicFeedback { form_id: FormId },
    Auth,
    Shell(ShellFrame),
}

pub struct App {
    state: AppState,
    context: NavigationContext,
    public_route: Option<PublicRoute>,
    sessions: SessionStore,
    router: ViewRouter,
    shell: Option<ShellLayout>,
    loading: bool,
}

impl App {
    /// Evaluates the launch context once. Nothing is restored until [`boot`](Self::boot).
    pub fn new(state: AppState, context: NavigationContext) -> Self {
        let public_route = PublicRoute::detect(&context);
        if let Some(PublicRoute::FeedbackForm { form_id }) = &public_route {
            info!(%form_id, "Opening public feedback form");
            edudash_observability::track_public_form_opened();
        }

        Self {
            sessions: SessionStore::new(state.identity.clone()),
            router: ViewRouter::new(&state.config.shell),
            loading: public_route.is_none(),
            shell: None,
            public_route,
            context,
            state,
        }
    }

    pub async fn boot(&mut self) -> Frame {
        if self.public_route.is_some() {
            return self.frame();
        }
        self.restore_session().await
    }

    async fn restore_session(&mut self) -> Frame {
        self.loading = true;
        let session = self.sessions.initialize().await;
        self.router.select_initial_view(&session);
        self.rebuild_shell();
        self.loading = false;
        self.frame()
    }

    fn rebuild_shell(&mut self) {
        self.shell = self
            .sessions
            .session()
            .user()
            .map(|user| ShellLayout::new(user, self.router.current_view(), &self.state.config.shell));
    }

    pub fn login(&mut self, user: User) -> Frame {
        let session = self.sessions.login(user);
        self.router.select_initial_view(&session);
        self.rebuild_shell();
        self.frame()
    }

    /// Authenticates against the user directory, then logs the user in.
    #[instrument(skip(self, request))]
    pub async fn sign_in(&mut self, request: LoginRequest) -> Result<Frame, AppError> {
        let user = AuthService::login_user(self.state.identity.as_ref(), request).await?;
        Ok(self.login(user))
    }

    pub async fn logout(&mut self) -> Frame {
        self.sessions.logout().await;
        self.shell = None;
        self.frame()
    }

    pub fn navigate(&mut self, view: ViewId) -> Result<Frame, NavigationError> {
        let view = self.router.navigate(view, self.sessions.session())?;
        if let Some(shell) = self.shell.as_mut() {
            shell.show(view);
        }
        Ok(self.frame())
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.router.toggle_sidebar()
    }

    /// Advances the view transition clock.
    pub fn tick(&mut self, elapsed: Duration) -> Vec<ShellEvent> {
        self.shell
            .as_mut()
            .map(|shell| shell.tick(elapsed))
            .unwrap_or_default()
    }

    pub fn complete_transition_phase(&mut self) -> Option<ShellEvent> {
        self.shell.as_mut().and_then(ShellLayout::complete_phase)
    }

    /// Leaves the public form and enters the normal flow.
    pub async fn close_public_form(&mut self) -> Frame {
        if self.public_route.take().is_some() {
            self.context.clear();
            info!("Public feedback form closed");
        }
        self.restore_session().await
    }

    pub fn frame(&self) -> Frame {
        if let Some(PublicRoute::FeedbackForm { form_id }) = &self.public_route {
            return Frame::PublicFeedback {
                form_id: form_id.clone(),
            };
        }
        if self.loading {
            return Frame::Loading;
        }
        self.shell
            .as_ref()
            .and_then(|shell| shell.frame(self.router.state(), self.sessions.session()))
            .map_or(Frame::Auth, Frame::Shell)
    }

    pub fn session(&self) -> &Session {
        self.sessions.session()
    }

    pub fn view_state(&self) -> &ViewState {
        self.router.state()
    }

    pub fn context(&self) -> &NavigationContext {
        &self.context
    }

    pub fn public_route(&self) -> Option<&PublicRoute> {
        self.public_route.as_ref()
    }

    /// The screen for the current view, ignoring any running transition.
    pub fn current_screen(&self) -> ScreenSelector {
        resolve_screen(self.router.state(), self.sessions.session())
    }

    pub fn screen_context(&self) -> ScreenContext {
        ScreenContext::new(self.sessions.session().user().cloned(), self.state.records.clone())
    }

    pub fn public_form(&self) -> Option<FeedbackFormScreen> {
        match &self.public_route {
            Some(PublicRoute::FeedbackForm { form_id }) => Some(FeedbackFormScreen::new(form_id.clone())),
            None => None,
        }
    }
}

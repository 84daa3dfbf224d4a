use std::time::Duration;

use edudash_config::ShellConfig;
use edudash_models::{User, ViewId};

use crate::modules::navigation::{ViewState, resolve_view};
use crate::modules::screens::ScreenSelector;
use crate::modules::session::Session;

use super::sidebar::{SidebarItem, SidebarVariant};
use super::transition::{ShellEvent, TransitionPhase, TransitionSequencer};

/// Chrome around the content of an authenticated session.
#[derive(Debug, Clone)]
pub struct ShellLayout {
    sidebar: SidebarVariant,
    sequencer: TransitionSequencer,
}

/// Everything a presenter needs to draw one shell frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellFrame {
    pub user: User,
    /// `None` while the sidebar is collapsed.
    pub sidebar: Option<Vec<SidebarItem>>,
    pub sidebar_open: bool,
    pub mounted_view: ViewId,
    pub content: ScreenSelector,
    pub phase: TransitionPhase,
}

impl ShellLayout {
    /// Builds the shell for `user`, with `view` entering as the first screen.
    pub fn new(user: &User, view: ViewId, config: &ShellConfig) -> Self {
        Self {
            sidebar: SidebarVariant::for_role(user.role),
            sequencer: TransitionSequencer::entering(view, config),
        }
    }

    pub fn sidebar(&self) -> SidebarVariant {
        self.sidebar
    }

    pub fn show(&mut self, view: ViewId) -> Option<ShellEvent> {
        self.sequencer.request(view)
    }

    pub fn tick(&mut self, elapsed: Duration) -> Vec<ShellEvent> {
        self.sequencer.advance(elapsed)
    }

    pub fn complete_phase(&mut self) -> Option<ShellEvent> {
        self.sequencer.complete_phase()
    }

    /// Returns `None` for anonymous sessions, which get no shell.
    pub fn frame(&self, state: &ViewState, session: &Session) -> Option<ShellFrame> {
        let user = session.user()?;
        let mounted_view = self.sequencer.mounted();
        Some(ShellFrame {
            user: user.clone(),
            sidebar: state
                .sidebar_open()
                .then(|| self.sidebar.menu(state.current_view())),
            sidebar_open: state.sidebar_open(),
            mounted_view,
            content: resolve_view(mounted_view, session),
            phase: self.sequencer.phase(),
        })
    }
}

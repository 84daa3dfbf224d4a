use edudash_config::ShellConfig;
use edudash_models::ViewId;
use thiserror::Error;

/// Which view is selected and whether the sidebar is showing.
///
/// Only [`ViewRouter`](super::ViewRouter) mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    current_view: ViewId,
    sidebar_open: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            current_view: ViewId::default(),
            sidebar_open: true,
        }
    }
}

impl ViewState {
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            current_view: ViewId::default(),
            sidebar_open: config.sidebar_open,
        }
    }

    pub fn current_view(&self) -> ViewId {
        self.current_view
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub(crate) fn set_current_view(&mut self, view: ViewId) {
        self.current_view = view;
    }

    pub(crate) fn flip_sidebar(&mut self) -> bool {
        self.sidebar_open = !self.sidebar_open;
        self.sidebar_open
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("Cannot navigate to '{0}' without an authenticated session")]
    NotAuthenticated(ViewId),
}

pub mod model;
pub mod resolver;
pub mod service;

pub use model::{NavigationError, ViewState};
pub use resolver::{RoleRoutes, STUDENT_ROUTES, TEACHER_ROUTES, resolve_screen, resolve_view};
pub use service::ViewRouter;

pub mod auth;
pub mod navigation;
pub mod public_route;
pub mod screens;
pub mod session;
pub mod shell;

pub use self::auth::model::LoginRequest;
pub use self::session::model::Session;

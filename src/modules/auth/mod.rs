pub mod model;
pub mod service;

pub use model::LoginRequest;
pub use service::AuthService;

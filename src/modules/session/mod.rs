pub mod model;
pub mod service;

pub use model::Session;
pub use service::SessionStore;

//! Public-route bypass.
//!
//! A launch URL of the form `?view=feedback&id=<form id>` opens the lesson
//! feedback form directly, without restoring or requiring a session.

pub mod model;

pub use model::{NavigationContext, PublicRoute, PublicRouteRequest};

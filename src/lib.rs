//! # edudash
//!
//! The core of a role-aware school dashboard: who is signed in, which screen
//! they see, and how the screen changes.
//!
//! ## Overview
//!
//! - **Session**: restores a persisted identity at startup and tracks
//!   login/logout. A session is either anonymous or holds exactly one user.
//! - **Navigation**: a single current view plus sidebar visibility. Views are
//!   resolved per role; anything outside the role's subset falls back to the
//!   role's landing screen.
//! - **Public route**: `?view=feedback&id=<form id>` opens the lesson feedback
//!   form with no session at all.
//! - **Shell**: sidebar and content area for signed-in users, with exit-then-enter
//!   view transitions.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── app.rs            # App orchestrator, Frame
//! ├── state.rs          # AppConfig, AppState (stores + config)
//! ├── terminal.rs       # dialoguer presenter used by the binary
//! └── modules/
//!     ├── auth/         # Credential check against the user directory
//!     ├── navigation/   # ViewState, ViewRouter, role resolver
//!     ├── public_route/ # Launch context and public-route detection
//!     ├── screens/      # Screen selectors and feature screens
//!     ├── session/      # Session and SessionStore
//!     └── shell/        # Sidebar, layout, transition sequencer
//! ```
//!
//! Shared crates live under `crates/`: `edudash-models` (domain types),
//! `edudash-store` (persistence), `edudash-auth` (session tokens),
//! `edudash-config`, `edudash-core` (errors, password hashing) and
//! `edudash-observability` (tracing and metrics).
//!
//! ## Roles and landing views
//!
//! | Role | Views | Landing view |
//! |------|-------|--------------|
//! | Student | 9 (`dashboard` .. `psychologist`) | `dashboard` |
//! | Teacher | 7 (`teacher-profile` .. `teacher-homework`) | `teacher-profile` |
//!
//! ## Quick Start
//!
//! ```bash
//! EDUDASH_DATA_DIR=storage/data cargo run --bin edudash
//! cargo run --bin edudash -- --url '?view=feedback&id=abc123'
//! ```

pub mod app;
pub mod modules;
pub mod state;
pub mod terminal;

pub use app::{App, Frame};
pub use state::{AppConfig, AppState};

// Re-export workspace crates for convenience
pub use edudash_config;
pub use edudash_core;
pub use edudash_models;
pub use edudash_store;

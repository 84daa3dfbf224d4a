//! # edudash CLI
//!
//! Administration and demo-data utilities for edudash.
//!
//! This library crate provides the seeding functionality used by the CLI binary.
//!
//! ## Usage
//!
//! ```ignore
//! use edudash_cli::seeder::{seed_all, SeedConfig};
//!
//! let config = SeedConfig::new(6).with_students(25);
//! seed_all(&store, config).await?;
//! ```

pub mod seeder;

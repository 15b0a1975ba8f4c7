//! # snip
//!
//! A small URL-shortening service built with Axum and SQLite.
//!
//! Given a long URL, `snip` issues a short alias and redirects visitors
//! back to the original. Short codes are not random: each one is the
//! base-62 encoding of the auto-incremented row identifier the store
//! assigns on first submission, so the same URL always gets the same
//! code.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The mapping entity and the
//!   repository trait
//! - **Application Layer** ([`application`]) - Shortening and
//!   resolution services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite-backed
//!   repository
//! - **API Layer** ([`api`]) - Axum handlers, DTOs, and extractors
//!
//! ## Quick Start
//!
//! ```bash
//! # Everything has a default; override as needed
//! export DATABASE_URL="sqlite://urls.db"
//! export LISTEN="0.0.0.0:8080"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library
/// users and integration tests.
pub mod prelude {
    pub use crate::application::services::{ResolveService, ShortenService};
    pub use crate::domain::entities::UrlMapping;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}

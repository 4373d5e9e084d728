//! # Links Úteis
//!
//! A small REST service exposing a greeting endpoint and CRUD over an in-memory
//! registry of useful links, built with Axum.
//!
//! ## Architecture
//!
//! The crate is split into layers:
//!
//! - **Domain Layer** ([`domain`]) - Link entities and the repository trait
//! - **Application Layer** ([`application`]) - Greeting and link services
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory registry
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="127.0.0.1:8080"   # Optional
//! cargo run
//! curl http://127.0.0.1:8080/api/links
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`]
//! and may be overridden with the flags in [`cli::Cli`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod cli;
pub mod config;
pub mod server;
pub mod telemetry;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{GreetingService, LinkService};
    pub use crate::domain::entities::{FieldUpdate, Link, LinkPatch, NewLink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}

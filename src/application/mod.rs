//! Application layer services.
//!
//! Services consume repository traits and provide a small API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::greeting_service::GreetingService`] - Fixed greeting
//! - [`services::link_service::LinkService`] - Useful-links CRUD

pub mod services;

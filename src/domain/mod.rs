//! Domain layer containing the link registry model.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the infrastructure or presentation
//! layers. Business operations live in [`crate::application::services`].

pub mod entities;
pub mod repositories;

//! Infrastructure layer.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Repository implementations

pub mod persistence;

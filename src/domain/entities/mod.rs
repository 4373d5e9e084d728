//! Core domain entities representing the link registry data model.
//!
//! Entities are plain data structures; they carry no HTTP or storage concerns.
//!
//! # Entity Types
//!
//! - [`Link`] - A stored useful link
//! - [`NewLink`] - Input for creating or replacing a link
//! - [`LinkPatch`] - Partial update built from [`FieldUpdate`] values

pub mod link;

pub use link::{FieldUpdate, Link, LinkPatch, NewLink};

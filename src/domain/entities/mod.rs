//! Core domain entities.
//!
//! Entities are plain data structures. Following the "New Type" pattern, a
//! separate [`NewLink`] describes a record before the store assigns its id.

pub mod link;

pub use link::{Link, MAX_SLUG_LENGTH, NewLink};

//! Value model for docdiff.
//!
//! Documents are trees of [`Value`]s: JSON data plus a distinguished date
//! leaf. Every other docdiff crate depends on `docdiff-types`.
//!
//! # Key Types
//!
//! - [`Value`] -- A node of a document tree
//! - [`ValueKind`] -- Borrowed classification of a possibly absent value
//! - [`FieldMap`] -- Insertion-ordered object fields

pub mod error;
pub mod kind;
pub mod value;

pub use error::TypeError;
pub use kind::ValueKind;
pub use value::{FieldMap, Value};

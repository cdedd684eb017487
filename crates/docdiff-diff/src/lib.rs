//! Structural diff engine for docdiff.
//!
//! Compares two JSON-like documents and reports what was added, deleted and
//! updated, as nested maps that mirror the documents' shape. Primitive values
//! that disagree only on type (`30` vs `"30"`, `true` vs `"true"`, a date vs
//! its ISO string) can be treated as equal, arrays of primitives can be
//! compared regardless of order, and key paths can be excluded by pattern.
//!
//! # Key Types
//!
//! - [`diff`] / [`Differ`] -- Entry points
//! - [`DiffOptions`] -- Ignore patterns, coercion, array order, depth limit
//! - [`ValueDiff`] / [`Change`] / [`Update`] -- The three result maps
//! - [`coerce`] / [`Coercion`] -- Cross-type equality rules
//! - [`IgnoreSet`] -- Compiled ignore patterns
//!
//! # Example
//!
//! ```
//! use docdiff_diff::{diff, DiffOptions};
//! use docdiff_types::Value;
//! use serde_json::json;
//!
//! let old = Value::from(json!({"name": "John", "age": 30}));
//! let new = Value::from(json!({"name": "John", "age": "30", "email": "j@x.io"}));
//!
//! let result = diff(&old, &new, &DiffOptions::default());
//! assert!(result.has_additions());
//! assert!(!result.has_updates());
//! ```

pub mod coercion;
pub mod compare;
pub mod context;
pub mod engine;
pub mod error;
pub mod ignore;
pub mod options;
pub mod result;

pub use coercion::{coerce, Coercion, CoercionRule};
pub use compare::{arrays_equal, is_plain_object, values_equal};
pub use context::{PathSegment, TraversalContext};
pub use engine::{diff, diff_with, Differ};
pub use error::{DiffError, DiffResult};
pub use ignore::{should_ignore, IgnorePattern, IgnoreSet};
pub use options::{DiffOptions, ResolvedOptions};
pub use result::{Change, ChangeKind, DiffLeaf, DiffStats, Update, ValueDiff};

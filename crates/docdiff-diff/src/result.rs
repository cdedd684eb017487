//! The shape of a diff.
//!
//! Differences are nested maps mirroring the inputs, not flattened paths:
//! a change to `user.name` appears as `updates.user.name`. A single key can
//! show up in more than one of the three maps when the object beneath it has
//! several kinds of differences, but never as a leaf in more than one.

use docdiff_types::{FieldMap, Value};
use serde::Serialize;

/// An entry of the additions or deletions map.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Change {
    /// A whole subtree that exists on one side only.
    Value(Value),
    /// Changes further down an object present on both sides.
    Nested(FieldMap<Change>),
}

impl Change {
    pub fn empty() -> Self {
        Change::Nested(FieldMap::new())
    }

    /// Returns `true` for an empty nested map.
    pub fn is_empty(&self) -> bool {
        matches!(self, Change::Nested(map) if map.is_empty())
    }

    /// The nested map, if this is not a whole-value change.
    pub fn as_map(&self) -> Option<&FieldMap<Change>> {
        match self {
            Change::Nested(map) => Some(map),
            Change::Value(_) => None,
        }
    }

    /// Look up a nested entry.
    pub fn get(&self, key: &str) -> Option<&Change> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Number of whole-value leaves.
    pub fn leaf_count(&self) -> usize {
        match self {
            Change::Value(_) => 1,
            Change::Nested(map) => map.values().map(Change::leaf_count).sum(),
        }
    }
}

impl Default for Change {
    fn default() -> Self {
        Change::empty()
    }
}

/// An entry of the updates map.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Update {
    /// The value at this position differs.
    Changed { from: Value, to: Value },
    /// Updates further down an object present on both sides.
    Nested(FieldMap<Update>),
}

impl Update {
    pub fn empty() -> Self {
        Update::Nested(FieldMap::new())
    }

    pub fn changed(from: &Value, to: &Value) -> Self {
        Update::Changed {
            from: from.clone(),
            to: to.clone(),
        }
    }

    /// Returns `true` for an empty nested map.
    pub fn is_empty(&self) -> bool {
        matches!(self, Update::Nested(map) if map.is_empty())
    }

    /// The nested map, if this is not a leaf update.
    pub fn as_map(&self) -> Option<&FieldMap<Update>> {
        match self {
            Update::Nested(map) => Some(map),
            Update::Changed { .. } => None,
        }
    }

    /// Look up a nested entry.
    pub fn get(&self, key: &str) -> Option<&Update> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Number of `{from, to}` leaves.
    pub fn leaf_count(&self) -> usize {
        match self {
            Update::Changed { .. } => 1,
            Update::Nested(map) => map.values().map(Update::leaf_count).sum(),
        }
    }
}

impl Default for Update {
    fn default() -> Self {
        Update::empty()
    }
}

/// The result of comparing two values.
///
/// This is the three-map diff result (`additions`, `deletions`, `updates`).
/// [`DiffResult`](crate::DiffResult) is unrelated: it is the `Result` alias
/// for fallible option loading.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ValueDiff {
    /// Present only in the second value.
    pub additions: Change,
    /// Present only in the first value.
    pub deletions: Change,
    /// Present in both but unequal.
    pub updates: Update,
}

impl ValueDiff {
    /// Create an empty diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if there are no differences at all.
    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.deletions.is_empty() && self.updates.is_empty()
    }

    pub fn has_additions(&self) -> bool {
        !self.additions.is_empty()
    }

    pub fn has_deletions(&self) -> bool {
        !self.deletions.is_empty()
    }

    pub fn has_updates(&self) -> bool {
        !self.updates.is_empty()
    }

    /// Leaf counts per kind.
    pub fn stats(&self) -> DiffStats {
        DiffStats {
            additions: self.additions.leaf_count(),
            deletions: self.deletions.leaf_count(),
            updates: self.updates.leaf_count(),
        }
    }

    /// Every leaf difference with its dotted path, for display.
    ///
    /// Deletions come first, then additions, then updates, each in traversal
    /// order. A whole-value difference at the root has an empty path.
    pub fn leaves(&self) -> Vec<DiffLeaf<'_>> {
        let mut out = Vec::new();
        collect_changes(&self.deletions, String::new(), ChangeKind::Deleted, &mut out);
        collect_changes(&self.additions, String::new(), ChangeKind::Added, &mut out);
        collect_updates(&self.updates, String::new(), &mut out);
        out
    }
}

/// Leaf counts of a [`ValueDiff`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    pub additions: usize,
    pub deletions: usize,
    pub updates: usize,
}

impl DiffStats {
    pub fn total(&self) -> usize {
        self.additions + self.deletions + self.updates
    }
}

/// The kind of a leaf difference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Deleted,
    Updated,
}

/// One leaf difference, flattened for display.
#[derive(Clone, Debug, PartialEq)]
pub struct DiffLeaf<'a> {
    pub path: String,
    pub kind: ChangeKind,
    /// The value in the first document, if any.
    pub old: Option<&'a Value>,
    /// The value in the second document, if any.
    pub new: Option<&'a Value>,
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn collect_changes<'a>(
    change: &'a Change,
    path: String,
    kind: ChangeKind,
    out: &mut Vec<DiffLeaf<'a>>,
) {
    match change {
        Change::Value(value) => {
            let (old, new) = match kind {
                ChangeKind::Deleted => (Some(value), None),
                _ => (None, Some(value)),
            };
            out.push(DiffLeaf { path, kind, old, new });
        }
        Change::Nested(map) => {
            for (key, child) in map {
                collect_changes(child, join(&path, key), kind, out);
            }
        }
    }
}

fn collect_updates<'a>(update: &'a Update, path: String, out: &mut Vec<DiffLeaf<'a>>) {
    match update {
        Update::Changed { from, to } => out.push(DiffLeaf {
            path,
            kind: ChangeKind::Updated,
            old: Some(from),
            new: Some(to),
        }),
        Update::Nested(map) => {
            for (key, child) in map {
                collect_updates(child, join(&path, key), out);
            }
        }
    }
}

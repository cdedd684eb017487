//! Recursive diff of two values.
//!
//! Both inputs are walked in parallel. Keys present on one side only become
//! whole-subtree additions or deletions; keys present on both sides are
//! compared by kind: nested objects recurse while depth budget remains,
//! arrays go through [`arrays_equal`], everything else through
//! [`values_equal`].

use docdiff_types::{FieldMap, Value, ValueKind};
use tracing::{debug, trace};

use crate::compare::{arrays_equal, values_equal};
use crate::context::TraversalContext;
use crate::options::{DiffOptions, ResolvedOptions};
use crate::result::{Change, Update, ValueDiff};

/// Compute the diff between two values.
pub fn diff(a: &Value, b: &Value, options: &DiffOptions) -> ValueDiff {
    Differ::new(options).diff(a, b)
}

/// Compute the diff between two values, either of which may be absent.
pub fn diff_with(a: Option<&Value>, b: Option<&Value>, options: &DiffOptions) -> ValueDiff {
    Differ::new(options).diff_with(a, b)
}

/// A diff engine bound to one set of options.
///
/// Resolves the options once (compiling ignore patterns) so repeated diffs
/// with the same configuration skip that work. Holds no mutable state and can
/// be shared freely between threads.
#[derive(Clone, Debug, Default)]
pub struct Differ {
    options: ResolvedOptions,
}

impl Differ {
    pub fn new(options: &DiffOptions) -> Self {
        Self {
            options: options.resolve(),
        }
    }

    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    /// Compare two present values.
    pub fn diff(&self, a: &Value, b: &Value) -> ValueDiff {
        self.diff_with(Some(a), Some(b))
    }

    /// Compare two values, either of which may be absent.
    pub fn diff_with(&self, a: Option<&Value>, b: Option<&Value>) -> ValueDiff {
        let ctx = TraversalContext::root(&self.options);
        let result = compare(a, b, &ctx);
        let stats = result.stats();
        debug!(
            additions = stats.additions,
            deletions = stats.deletions,
            updates = stats.updates,
            "diff complete"
        );
        result
    }
}

/// Differences between two objects, one map per kind.
#[derive(Debug, Default)]
pub(crate) struct ObjectDiff {
    pub additions: FieldMap<Change>,
    pub deletions: FieldMap<Change>,
    pub updates: FieldMap<Update>,
}

impl ObjectDiff {
    pub fn is_empty(&self) -> bool {
        self.additions.is_empty() && self.deletions.is_empty() && self.updates.is_empty()
    }
}

impl From<ObjectDiff> for ValueDiff {
    fn from(diff: ObjectDiff) -> Self {
        ValueDiff {
            additions: Change::Nested(diff.additions),
            deletions: Change::Nested(diff.deletions),
            updates: Update::Nested(diff.updates),
        }
    }
}

/// Top-level comparison.
///
/// Null and absent are interchangeable here. Values of different `typeof`
/// buckets are a whole-value update without trying coercion; coercion only
/// applies to object fields and array elements, and to leaves of the same
/// bucket.
fn compare(a: Option<&Value>, b: Option<&Value>, ctx: &TraversalContext<'_>) -> ValueDiff {
    match (a, b) {
        (Some(a), Some(b)) if !a.is_null() && !b.is_null() => compare_present(a, b, ctx),
        (None | Some(Value::Null), None | Some(Value::Null)) => ValueDiff::new(),
        (None | Some(Value::Null), Some(b)) => ValueDiff {
            additions: Change::Value(without_ignored(b, ctx)),
            ..ValueDiff::default()
        },
        (Some(a), _) => ValueDiff {
            deletions: Change::Value(without_ignored(a, ctx)),
            ..ValueDiff::default()
        },
    }
}

fn compare_present(a: &Value, b: &Value, ctx: &TraversalContext<'_>) -> ValueDiff {
    let whole_update = || ValueDiff {
        updates: changed(a, b, ctx),
        ..ValueDiff::default()
    };

    let (left, right) = (ValueKind::of(Some(a)), ValueKind::of(Some(b)));
    if left.type_name() != right.type_name() {
        return whole_update();
    }

    let equal = match (left, right) {
        (ValueKind::Array(x), ValueKind::Array(y)) => arrays_equal(x, y, ctx),
        (ValueKind::Object(x), ValueKind::Object(y)) => return compare_objects(x, y, ctx).into(),
        _ => values_equal(a, b, ctx.options.coercion),
    };

    if equal {
        ValueDiff::new()
    } else {
        whole_update()
    }
}

/// Field-wise comparison of two objects at the context's position.
pub(crate) fn compare_objects(
    a: &FieldMap<Value>,
    b: &FieldMap<Value>,
    ctx: &TraversalContext<'_>,
) -> ObjectDiff {
    let mut out = ObjectDiff::default();

    for (key, old) in a {
        if ctx.is_ignored(key) {
            continue;
        }
        if !b.contains_key(key) {
            let subtree = without_ignored(old, &ctx.child(key.as_str()));
            out.deletions.insert(key.clone(), Change::Value(subtree));
        }
    }

    for (key, new) in b {
        if ctx.is_ignored(key) {
            continue;
        }
        match a.get(key) {
            None => {
                let subtree = without_ignored(new, &ctx.child(key.as_str()));
                out.additions.insert(key.clone(), Change::Value(subtree));
            }
            Some(old) => compare_field(key, old, new, ctx, &mut out),
        }
    }

    out
}

fn compare_field(
    key: &str,
    old: &Value,
    new: &Value,
    ctx: &TraversalContext<'_>,
    out: &mut ObjectDiff,
) {
    let equal = match (ValueKind::of(Some(old)), ValueKind::of(Some(new))) {
        (ValueKind::Object(x), ValueKind::Object(y)) if ctx.has_depth_budget() => {
            let nested = compare_objects(x, y, &ctx.child(key));
            if !nested.additions.is_empty() {
                out.additions
                    .insert(key.to_string(), Change::Nested(nested.additions));
            }
            if !nested.deletions.is_empty() {
                out.deletions
                    .insert(key.to_string(), Change::Nested(nested.deletions));
            }
            if !nested.updates.is_empty() {
                out.updates
                    .insert(key.to_string(), Update::Nested(nested.updates));
            }
            return;
        }
        (ValueKind::Array(x), ValueKind::Array(y)) => arrays_equal(x, y, &ctx.child(key)),
        (ValueKind::Object(_), ValueKind::Object(_)) => {
            trace!(path = %ctx.dotted_path(key), depth = ctx.depth, "depth budget exhausted");
            values_equal(old, new, ctx.options.coercion)
        }
        _ => values_equal(old, new, ctx.options.coercion),
    };

    if !equal {
        out.updates
            .insert(key.to_string(), changed(old, new, &ctx.child(key)));
    }
}

fn changed(from: &Value, to: &Value, ctx: &TraversalContext<'_>) -> Update {
    Update::Changed {
        from: without_ignored(from, ctx),
        to: without_ignored(to, ctx),
    }
}

/// Copy of a subtree with ignored descendants removed, so ignored paths
/// never surface inside whole-value entries.
fn without_ignored(value: &Value, ctx: &TraversalContext<'_>) -> Value {
    if ctx.options.ignore.is_empty() {
        return value.clone();
    }
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(key, _)| !ctx.is_ignored(key))
                .map(|(key, child)| (key.clone(), without_ignored(child, &ctx.child(key.as_str()))))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .enumerate()
                .filter(|(index, _)| !ctx.is_ignored(&index.to_string()))
                .map(|(index, item)| without_ignored(item, &ctx.child(index)))
                .collect(),
        ),
        other => other.clone(),
    }
}

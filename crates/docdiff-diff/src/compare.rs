//! Equality predicates used by the diff engine.
//!
//! These only answer "equal or not". Turning a "not equal" into an update
//! entry is the engine's job.

use docdiff_types::{Value, ValueKind};

use crate::coercion::coerce;
use crate::context::TraversalContext;
use crate::engine::compare_objects;

/// Returns `true` for objects that are traversed field by field.
pub fn is_plain_object(value: &Value) -> bool {
    value.is_plain_object()
}

/// Equality for leaves: strict identity, then coercion when enabled.
///
/// Containers are opaque here: two arrays or objects are equal only if they
/// are the same node.
pub fn values_equal(a: &Value, b: &Value, coercion_enabled: bool) -> bool {
    if a.is_identical(b) {
        return true;
    }
    coercion_enabled && coerce(Some(a), Some(b)).equal
}

/// Equality for arrays.
///
/// Arrays of leaves are compared as multisets when the options say order does
/// not matter. Arrays holding objects or arrays are always compared by
/// position. Object elements are diffed recursively while depth budget
/// remains; nested arrays are compared as opaque values. Elements at ignored
/// indices are skipped in both modes.
pub fn arrays_equal(a: &[Value], b: &[Value], ctx: &TraversalContext<'_>) -> bool {
    if a.len() != b.len() {
        return false;
    }
    if a.is_empty() || std::ptr::eq(a, b) {
        return true;
    }

    let coercion = ctx.options.coercion;

    if !ctx.options.order_matters && all_scalars(a) && all_scalars(b) {
        let mut left = kept_elements(a, ctx);
        let mut right = kept_elements(b, ctx);
        left.sort_by_cached_key(|v| sort_key(v));
        right.sort_by_cached_key(|v| sort_key(v));
        return left
            .iter()
            .zip(&right)
            .all(|(x, y)| values_equal(x, y, coercion));
    }

    for (index, (x, y)) in a.iter().zip(b).enumerate() {
        if ctx.is_ignored(&index.to_string()) {
            continue;
        }
        let equal = match (ValueKind::of(Some(x)), ValueKind::of(Some(y))) {
            (ValueKind::Object(_), ValueKind::Object(_)) if x.is_identical(y) => true,
            (ValueKind::Object(left), ValueKind::Object(right)) if ctx.has_depth_budget() => {
                compare_objects(left, right, &ctx.child(index)).is_empty()
            }
            (l, r) if !matches!(l, ValueKind::Object(_)) && !matches!(r, ValueKind::Object(_)) => {
                values_equal(x, y, coercion)
            }
            _ => false,
        };
        if !equal {
            return false;
        }
    }
    true
}

fn kept_elements<'a>(items: &'a [Value], ctx: &TraversalContext<'_>) -> Vec<&'a Value> {
    items
        .iter()
        .enumerate()
        .filter(|(index, _)| !ctx.is_ignored(&index.to_string()))
        .map(|(_, item)| item)
        .collect()
}

fn all_scalars(items: &[Value]) -> bool {
    items.iter().all(|v| ValueKind::of(Some(v)).is_scalar())
}

/// Ordering key for order-insensitive comparison of leaf arrays.
///
/// Leaves sort by their rendered text, the way a JavaScript array sorts by
/// default, then by type so that sorting is deterministic across types.
pub fn sort_key(value: &Value) -> (String, u8) {
    match ValueKind::of(Some(value)) {
        ValueKind::Absent | ValueKind::Null => ("null".to_string(), 0),
        ValueKind::Bool(b) => (b.to_string(), 1),
        ValueKind::Number(n) => (n.to_string(), 2),
        ValueKind::String(s) => (s.to_string(), 3),
        ValueKind::Date(d) => (Value::format_date(d), 4),
        ValueKind::Array(_) | ValueKind::Object(_) => (value.to_string(), 5),
    }
}

use chrono::{DateTime, Utc};

use crate::value::{FieldMap, Value};

/// Borrowed classification of a value that may be absent.
///
/// Produced once by [`ValueKind::of`] and matched exhaustively, so callers
/// never re-inspect a [`Value`] ad hoc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValueKind<'a> {
    /// The key is not present at all.
    Absent,
    Null,
    Bool(bool),
    Number(f64),
    String(&'a str),
    Date(&'a DateTime<Utc>),
    Array(&'a [Value]),
    Object(&'a FieldMap<Value>),
}

impl<'a> ValueKind<'a> {
    /// Classify a possibly absent value.
    pub fn of(value: Option<&'a Value>) -> Self {
        match value {
            None => ValueKind::Absent,
            Some(Value::Null) => ValueKind::Null,
            Some(Value::Bool(b)) => ValueKind::Bool(*b),
            Some(Value::Number(n)) => ValueKind::Number(n.as_f64().unwrap_or(f64::NAN)),
            Some(Value::String(s)) => ValueKind::String(s),
            Some(Value::Date(d)) => ValueKind::Date(d),
            Some(Value::Array(items)) => ValueKind::Array(items),
            Some(Value::Object(map)) => ValueKind::Object(map),
        }
    }

    /// Returns `true` for `Absent` and `Null`, which diffing treats alike.
    pub fn is_missing(&self) -> bool {
        matches!(self, ValueKind::Absent | ValueKind::Null)
    }

    /// Returns `true` for leaves that are not containers: everything except
    /// arrays and objects. Dates count as leaves.
    pub fn is_scalar(&self) -> bool {
        !matches!(self, ValueKind::Array(_) | ValueKind::Object(_))
    }

    /// The JavaScript `typeof` bucket of this value.
    ///
    /// Arrays, objects, dates and null all report `"object"`; only absent
    /// values report `"undefined"`.
    pub fn type_name(&self) -> &'static str {
        match self {
            ValueKind::Absent => "undefined",
            ValueKind::Null | ValueKind::Date(_) | ValueKind::Array(_) | ValueKind::Object(_) => {
                "object"
            }
            ValueKind::Bool(_) => "boolean",
            ValueKind::Number(_) => "number",
            ValueKind::String(_) => "string",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn classify_every_variant() {
        let doc = Value::from(json!({
            "n": null, "b": true, "x": 1.5, "s": "hi", "a": [1], "o": {}
        }));
        assert_eq!(ValueKind::of(doc.get("missing")), ValueKind::Absent);
        assert_eq!(ValueKind::of(doc.get("n")), ValueKind::Null);
        assert_eq!(ValueKind::of(doc.get("b")), ValueKind::Bool(true));
        assert_eq!(ValueKind::of(doc.get("x")), ValueKind::Number(1.5));
        assert_eq!(ValueKind::of(doc.get("s")), ValueKind::String("hi"));
        assert!(matches!(ValueKind::of(doc.get("a")), ValueKind::Array(items) if items.len() == 1));
        assert!(matches!(ValueKind::of(doc.get("o")), ValueKind::Object(map) if map.is_empty()));
    }

    #[test]
    fn missing_covers_null_and_absent() {
        assert!(ValueKind::Absent.is_missing());
        assert!(ValueKind::Null.is_missing());
        assert!(!ValueKind::Bool(false).is_missing());
        assert!(!ValueKind::String("").is_missing());
    }

    #[test]
    fn type_names_follow_typeof() {
        let date = chrono::Utc::now();
        assert_eq!(ValueKind::Absent.type_name(), "undefined");
        assert_eq!(ValueKind::Null.type_name(), "object");
        assert_eq!(ValueKind::Date(&date).type_name(), "object");
        assert_eq!(ValueKind::Array(&[]).type_name(), "object");
        assert_eq!(ValueKind::Number(0.0).type_name(), "number");
        assert_eq!(ValueKind::String("").type_name(), "string");
        assert_eq!(ValueKind::Bool(true).type_name(), "boolean");
    }

    #[test]
    fn dates_are_scalars() {
        let date = chrono::Utc::now();
        assert!(ValueKind::Date(&date).is_scalar());
        assert!(ValueKind::Null.is_scalar());
        assert!(!ValueKind::Array(&[]).is_scalar());
    }
}

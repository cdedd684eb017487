//! Cross-type equality for primitive values.
//!
//! Documents coming from different sources often disagree on primitive
//! types: `30` vs `"30"`, `true` vs `"TRUE"`, a date vs its ISO string.
//! [`coerce`] decides whether such a pair is the same value. It never fails:
//! anything that cannot be parsed is simply not equal.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use docdiff_types::{Value, ValueKind};
use tracing::trace;

/// Naive date-time layouts tried after RFC 3339. Read as UTC.
const NAIVE_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// The rule that produced a coercion verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoercionRule {
    /// Both sides absent or null.
    BothMissing,
    /// Exactly one side absent or null.
    OneMissing,
    /// Same primitive type, compared exactly.
    SameType,
    NumberString,
    BooleanString,
    DateString,
    NumberBoolean,
    /// No rule bridges the pair (structural types, date vs number, ...).
    Incompatible,
}

/// The verdict of [`coerce`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Coercion {
    pub equal: bool,
    pub rule: CoercionRule,
}

impl Coercion {
    fn new(equal: bool, rule: CoercionRule) -> Self {
        Self { equal, rule }
    }
}

/// Decide whether two possibly absent values are equal once their types are
/// reconciled.
pub fn coerce(a: Option<&Value>, b: Option<&Value>) -> Coercion {
    let verdict = coerce_kinds(a, b);
    trace!(rule = ?verdict.rule, equal = verdict.equal, "coercion");
    verdict
}

fn coerce_kinds(a: Option<&Value>, b: Option<&Value>) -> Coercion {
    use ValueKind as K;

    let (left, right) = (ValueKind::of(a), ValueKind::of(b));
    match (left, right) {
        (l, r) if l.is_missing() && r.is_missing() => Coercion::new(true, CoercionRule::BothMissing),
        (l, r) if l.is_missing() || r.is_missing() => Coercion::new(false, CoercionRule::OneMissing),

        (K::Number(x), K::Number(y)) => Coercion::new(x == y, CoercionRule::SameType),
        (K::String(x), K::String(y)) => Coercion::new(x == y, CoercionRule::SameType),
        (K::Bool(x), K::Bool(y)) => Coercion::new(x == y, CoercionRule::SameType),
        (K::Date(x), K::Date(y)) => Coercion::new(x == y, CoercionRule::SameType),
        (K::Array(_), K::Array(_)) | (K::Object(_), K::Object(_)) => {
            // Containers only ever match themselves.
            let identical = matches!((a, b), (Some(x), Some(y)) if x.is_identical(y));
            Coercion::new(identical, CoercionRule::SameType)
        }

        (K::Number(n), K::String(s)) | (K::String(s), K::Number(n)) => Coercion::new(
            parse_number(s).is_some_and(|parsed| parsed == n),
            CoercionRule::NumberString,
        ),
        (K::Bool(flag), K::String(s)) | (K::String(s), K::Bool(flag)) => Coercion::new(
            parse_bool(s) == Some(flag),
            CoercionRule::BooleanString,
        ),
        (K::Date(date), K::String(s)) | (K::String(s), K::Date(date)) => Coercion::new(
            parse_date(s).is_some_and(|parsed| parsed == *date),
            CoercionRule::DateString,
        ),
        (K::Number(n), K::Bool(flag)) | (K::Bool(flag), K::Number(n)) => Coercion::new(
            n == if flag { 1.0 } else { 0.0 },
            CoercionRule::NumberBoolean,
        ),

        _ => Coercion::new(false, CoercionRule::Incompatible),
    }
}

/// Parse a numeric string. Blank strings are not numbers.
pub fn parse_number(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// Parse `"true"` / `"false"`, ignoring ASCII case.
pub fn parse_bool(s: &str) -> Option<bool> {
    if s.eq_ignore_ascii_case("true") {
        Some(true)
    } else if s.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Parse a date or timestamp string into a UTC instant.
///
/// Accepts RFC 3339, naive ISO date-times (read as UTC) and bare
/// `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let trimmed = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;
    use serde_json::json;

    fn v(value: serde_json::Value) -> Value {
        Value::from(value)
    }

    fn equal(a: &Value, b: &Value) -> bool {
        coerce(Some(a), Some(b)).equal
    }

    fn date(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> Value {
        Value::Date(Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap())
    }

    #[test]
    fn missing_values() {
        assert_eq!(coerce(None, None), Coercion::new(true, CoercionRule::BothMissing));
        assert_eq!(
            coerce(Some(&Value::Null), None),
            Coercion::new(true, CoercionRule::BothMissing)
        );
        assert_eq!(
            coerce(Some(&v(json!(0))), None),
            Coercion::new(false, CoercionRule::OneMissing)
        );
        assert!(!equal(&Value::Null, &v(json!(""))));
        assert!(!equal(&Value::Null, &v(json!(false))));
    }

    #[test]
    fn same_type_is_exact() {
        assert!(equal(&v(json!(30)), &v(json!(30.0))));
        assert!(!equal(&v(json!("a")), &v(json!("A"))));
        assert!(equal(&v(json!(true)), &v(json!(true))));
        assert_eq!(coerce(Some(&v(json!(1))), Some(&v(json!(2)))).rule, CoercionRule::SameType);
    }

    #[test]
    fn number_and_string() {
        assert!(equal(&v(json!(30)), &v(json!("30"))));
        assert!(equal(&v(json!(1.5)), &v(json!("1.50"))));
        assert!(equal(&v(json!(42)), &v(json!(" 42 "))));
        assert!(equal(&v(json!(1000)), &v(json!("1e3"))));
        assert!(!equal(&v(json!(30)), &v(json!("31"))));
        assert!(!equal(&v(json!(30)), &v(json!("thirty"))));
        assert!(!equal(&v(json!(0)), &v(json!(""))));
        assert!(!equal(&v(json!(0)), &v(json!("NaN"))));
    }

    #[test]
    fn boolean_and_string() {
        assert!(equal(&v(json!(true)), &v(json!("true"))));
        assert!(equal(&v(json!(true)), &v(json!("TRUE"))));
        assert!(equal(&v(json!(false)), &v(json!("False"))));
        assert!(!equal(&v(json!(true)), &v(json!("false"))));
        assert!(!equal(&v(json!(true)), &v(json!("yes"))));
        assert!(!equal(&v(json!(true)), &v(json!("1"))));
    }

    #[test]
    fn date_and_string() {
        let d = date(2024, 1, 15, 10, 30, 0);
        assert!(equal(&d, &v(json!("2024-01-15T10:30:00Z"))));
        assert!(equal(&d, &v(json!("2024-01-15T12:30:00+02:00"))));
        assert!(equal(&d, &v(json!("2024-01-15T10:30:00.000"))));
        assert!(equal(&d, &v(json!("2024-01-15 10:30:00"))));
        assert!(!equal(&d, &v(json!("2024-01-15T10:30:01Z"))));
        assert!(!equal(&d, &v(json!("not a date"))));

        let midnight = date(2024, 1, 15, 0, 0, 0);
        assert!(equal(&midnight, &v(json!("2024-01-15"))));
    }

    #[test]
    fn dates_compare_instants() {
        assert!(equal(&date(2024, 3, 1, 0, 0, 0), &date(2024, 3, 1, 0, 0, 0)));
        assert!(!equal(&date(2024, 3, 1, 0, 0, 0), &date(2024, 3, 2, 0, 0, 0)));
    }

    #[test]
    fn number_and_boolean() {
        assert!(equal(&v(json!(1)), &v(json!(true))));
        assert!(equal(&v(json!(0)), &v(json!(false))));
        assert!(!equal(&v(json!(2)), &v(json!(true))));
        assert!(!equal(&v(json!(1)), &v(json!(false))));
    }

    #[test]
    fn structural_types_never_bridge() {
        let verdict = coerce(Some(&v(json!({"a": 1}))), Some(&v(json!("[object Object]"))));
        assert_eq!(verdict, Coercion::new(false, CoercionRule::Incompatible));
        assert!(!equal(&v(json!([1])), &v(json!(1))));
        assert!(!equal(&v(json!([])), &v(json!({}))));
        assert!(!equal(&date(2024, 1, 1, 0, 0, 0), &v(json!(1704067200000i64))));
    }

    #[test]
    fn containers_match_only_themselves() {
        let obj = v(json!({"a": 1}));
        assert!(equal(&obj, &obj));
        assert!(!equal(&obj, &obj.clone()));
    }

    #[test]
    fn parse_helpers() {
        assert_eq!(parse_number("  -2.5 "), Some(-2.5));
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_bool("tRuE"), Some(true));
        assert_eq!(parse_bool(" true"), None);
        assert!(parse_date("2024-02-30").is_none());
    }

    fn primitive() -> impl Strategy<Value = Value> {
        prop_oneof![
            any::<i32>().prop_map(|n| Value::from(n as i64)),
            any::<i32>().prop_map(|n| Value::from(n.to_string())),
            any::<bool>().prop_map(Value::from),
            any::<bool>().prop_map(|b| Value::from(if b { "TRUE" } else { "false" })),
            (0i64..4_000_000_000).prop_map(|secs| {
                Value::Date(Utc.timestamp_opt(secs, 0).unwrap())
            }),
            (0i64..4_000_000_000).prop_map(|secs| {
                Value::from(Utc.timestamp_opt(secs, 0).unwrap().to_rfc3339())
            }),
            Just(Value::Null),
            "[a-z0-9]{0,6}".prop_map(Value::from),
        ]
    }

    proptest! {
        #[test]
        fn coercion_is_symmetric(a in primitive(), b in primitive()) {
            prop_assert_eq!(equal(&a, &b), equal(&b, &a));
        }

        #[test]
        fn coercion_is_reflexive(a in primitive()) {
            prop_assert!(equal(&a, &a));
        }
    }
}

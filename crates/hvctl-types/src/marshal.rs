//! Generic converters from the dynamic wire value to typed values.
//!
//! Every converter takes `Option<&Value>` and returns
//! `Result<Option<T>, DecodeError>`: absence (a missing key or an
//! explicit null) decodes to `None`, never to a default. A present value
//! of the wrong shape is a [`DecodeError`], never a silent coercion.

use crate::refs::OpaqueRef;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// A wire value could not be converted to its declared target type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The value's dynamic shape does not match the declared type.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// Shape the declared type requires.
        expected: &'static str,
        /// Shape actually found on the wire.
        found: &'static str,
    },

    /// A timestamp string matched neither the primary wire format nor
    /// the numeric-seconds fallback.
    #[error("unparseable timestamp: {0:?}")]
    BadTimestamp(String),

    /// An integer field carried a string that is not a number.
    #[error("unparseable integer: {0:?}")]
    BadInteger(String),

    /// An event snapshot was tagged with an object kind this binding has
    /// no record decoder for.
    #[error("no snapshot decoder registered for object kind {0:?}")]
    UnsupportedKind(String),
}

/// Dynamic shape name of a wire value, for diagnostics.
#[must_use]
pub fn shape_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn mismatch(expected: &'static str, found: &Value) -> DecodeError {
    DecodeError::TypeMismatch {
        expected,
        found: shape_of(found),
    }
}

/// Collapses `None` and an explicit wire null into absence.
fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// View a wire value as an opaque map, or fail.
pub fn as_object(value: &Value) -> Result<&serde_json::Map<String, Value>, DecodeError> {
    value.as_object().ok_or_else(|| mismatch("object", value))
}

// ---------------------------------------------------------------------------
// Scalars
// ---------------------------------------------------------------------------

/// Decode a wire string.
pub fn to_string(value: Option<&Value>) -> Result<Option<String>, DecodeError> {
    match present(value) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(mismatch("string", other)),
    }
}

/// Decode a 64-bit integer.
///
/// The wire layer transmits 64-bit integers as decimal strings; plain
/// numbers are accepted as well.
pub fn to_long(value: Option<&Value>) -> Result<Option<i64>, DecodeError> {
    match present(value) {
        None => Ok(None),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| DecodeError::BadInteger(n.to_string())),
        Some(Value::String(s)) => s
            .parse::<i64>()
            .map(Some)
            .map_err(|_| DecodeError::BadInteger(s.clone())),
        Some(other) => Err(mismatch("integer", other)),
    }
}

/// Decode a double-precision float.
pub fn to_double(value: Option<&Value>) -> Result<Option<f64>, DecodeError> {
    match present(value) {
        None => Ok(None),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(Some)
            .ok_or_else(|| DecodeError::BadInteger(n.to_string())),
        Some(other) => Err(mismatch("double", other)),
    }
}

/// Decode a boolean.
pub fn to_bool(value: Option<&Value>) -> Result<Option<bool>, DecodeError> {
    match present(value) {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(mismatch("boolean", other)),
    }
}

/// Primary wire timestamp formats, tried in order.
///
/// The canonical form is the compact XML-RPC `dateTime.iso8601`
/// (`19700101T00:00:00`); hyphenated and zone-suffixed variants appear
/// from some server versions.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y%m%dT%H:%M:%S",
    "%Y%m%dT%H:%M:%SZ",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%SZ",
];

/// Decode a timestamp.
///
/// Tries the primary wire formats first. Only on a format mismatch, the
/// value is re-interpreted as a numeric string of Unix seconds — some
/// servers transmit dates that way. A value matching neither is a
/// [`DecodeError::BadTimestamp`].
pub fn to_datetime(value: Option<&Value>) -> Result<Option<DateTime<Utc>>, DecodeError> {
    let Some(raw) = present(value) else {
        return Ok(None);
    };
    match raw {
        Value::String(s) => {
            for format in TIMESTAMP_FORMATS {
                if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
                    return Ok(Some(naive.and_utc()));
                }
            }
            // Numeric-seconds fallback, applied only after the primary
            // formats failed.
            if let Ok(secs) = s.parse::<i64>() {
                return DateTime::from_timestamp(secs, 0)
                    .map(Some)
                    .ok_or_else(|| DecodeError::BadTimestamp(s.clone()));
            }
            Err(DecodeError::BadTimestamp(s.clone()))
        }
        Value::Number(n) => {
            let secs = n
                .as_i64()
                .ok_or_else(|| DecodeError::BadTimestamp(n.to_string()))?;
            DateTime::from_timestamp(secs, 0)
                .map(Some)
                .ok_or_else(|| DecodeError::BadTimestamp(n.to_string()))
        }
        other => Err(mismatch("timestamp", other)),
    }
}

// ---------------------------------------------------------------------------
// References and enums
// ---------------------------------------------------------------------------

/// Decode an opaque reference string into the nominal reference type `R`.
pub fn to_ref<R: OpaqueRef>(value: Option<&Value>) -> Result<Option<R>, DecodeError> {
    Ok(to_string(value)?.map(R::from_wire))
}

/// Decode a wire token into the closed enumeration `E`.
///
/// Total for present values: unknown tokens decode to the
/// `Unrecognized` sentinel, never to an error.
pub fn to_enum<E: crate::enums::WireEnum>(
    value: Option<&Value>,
) -> Result<Option<E>, DecodeError> {
    match present(value) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(E::decode(s))),
        Some(other) => Err(mismatch("string", other)),
    }
}

// ---------------------------------------------------------------------------
// Containers
// ---------------------------------------------------------------------------

/// Decode an ordered wire array into a set.
///
/// Elements are decoded independently by `elem`; insertion order of the
/// first occurrence is preserved and later duplicates (by decoded
/// equality) are dropped. Null elements are skipped.
pub fn to_set<T, F>(value: Option<&Value>, elem: F) -> Result<Option<Vec<T>>, DecodeError>
where
    T: PartialEq,
    F: Fn(Option<&Value>) -> Result<Option<T>, DecodeError>,
{
    let Some(raw) = present(value) else {
        return Ok(None);
    };
    let items = raw.as_array().ok_or_else(|| mismatch("array", raw))?;
    let mut out: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if let Some(decoded) = elem(Some(item))? {
            if !out.contains(&decoded) {
                out.push(decoded);
            }
        }
    }
    Ok(Some(out))
}

/// Decode an opaque wire map.
///
/// Keys and values are decoded independently; entries whose value
/// decodes to absence are skipped.
pub fn to_map<K, V, FK, FV>(
    value: Option<&Value>,
    key: FK,
    val: FV,
) -> Result<Option<BTreeMap<K, V>>, DecodeError>
where
    K: Ord,
    FK: Fn(&str) -> K,
    FV: Fn(Option<&Value>) -> Result<Option<V>, DecodeError>,
{
    let Some(raw) = present(value) else {
        return Ok(None);
    };
    let entries = raw.as_object().ok_or_else(|| mismatch("object", raw))?;
    let mut out = BTreeMap::new();
    for (k, v) in entries {
        if let Some(decoded) = val(Some(v))? {
            out.insert(key(k), decoded);
        }
    }
    Ok(Some(out))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::VmPowerState;
    use crate::refs::VmRef;
    use serde_json::json;

    // -- Null propagation -------------------------------------------------

    #[test]
    fn null_in_none_out_for_every_scalar() {
        assert_eq!(to_string(None).unwrap(), None);
        assert_eq!(to_long(None).unwrap(), None);
        assert_eq!(to_double(None).unwrap(), None);
        assert_eq!(to_bool(None).unwrap(), None);
        assert_eq!(to_datetime(None).unwrap(), None);
        assert_eq!(to_ref::<VmRef>(None).unwrap(), None);
        assert_eq!(to_enum::<VmPowerState>(None).unwrap(), None);
    }

    #[test]
    fn explicit_wire_null_is_absence() {
        let null = json!(null);
        assert_eq!(to_string(Some(&null)).unwrap(), None);
        assert_eq!(to_set(Some(&null), to_string).unwrap(), None);
        assert_eq!(
            to_map(Some(&null), str::to_owned, to_string).unwrap(),
            None
        );
    }

    // -- Scalars ------------------------------------------------------------

    #[test]
    fn string_happy_path_and_mismatch() {
        let v = json!("hello");
        assert_eq!(to_string(Some(&v)).unwrap(), Some("hello".into()));
        let err = to_string(Some(&json!(42))).unwrap_err();
        assert_eq!(
            err,
            DecodeError::TypeMismatch {
                expected: "string",
                found: "number"
            }
        );
    }

    #[test]
    fn long_accepts_numbers_and_numeric_strings() {
        assert_eq!(to_long(Some(&json!(42))).unwrap(), Some(42));
        assert_eq!(to_long(Some(&json!("9007199254740993"))).unwrap(), Some(9007199254740993));
        assert!(to_long(Some(&json!("not a number"))).is_err());
        assert!(to_long(Some(&json!([]))).is_err());
    }

    #[test]
    fn double_and_bool() {
        assert_eq!(to_double(Some(&json!(1.5))).unwrap(), Some(1.5));
        assert_eq!(to_bool(Some(&json!(true))).unwrap(), Some(true));
        assert!(to_bool(Some(&json!("true"))).is_err());
    }

    // -- Timestamps ----------------------------------------------------------

    #[test]
    fn timestamp_primary_format() {
        let v = json!("20231114T22:13:20");
        let dt = to_datetime(Some(&v)).unwrap().unwrap();
        assert_eq!(dt.timestamp(), 1_700_000_000);
    }

    #[test]
    fn timestamp_numeric_seconds_fallback() {
        let v = json!("1700000000");
        let dt = to_datetime(Some(&v)).unwrap().unwrap();
        assert_eq!(dt.timestamp(), 1_700_000_000);
    }

    #[test]
    fn timestamp_primary_wins_over_fallback() {
        // A value in the primary format must not be routed through the
        // numeric fallback even though it contains digits.
        let v = json!("19700101T00:00:10");
        let dt = to_datetime(Some(&v)).unwrap().unwrap();
        assert_eq!(dt.timestamp(), 10);
    }

    #[test]
    fn timestamp_garbage_fails_both_interpretations() {
        let err = to_datetime(Some(&json!("yesterday-ish"))).unwrap_err();
        assert!(matches!(err, DecodeError::BadTimestamp(_)));
    }

    // -- Containers -----------------------------------------------------------

    #[test]
    fn set_preserves_first_occurrence_order() {
        let v = json!(["b", "a", "b", "c", "a"]);
        let set = to_set(Some(&v), to_string).unwrap().unwrap();
        assert_eq!(set, vec!["b".to_string(), "a".into(), "c".into()]);
    }

    #[test]
    fn set_of_refs() {
        let v = json!(["OpaqueRef:1", "OpaqueRef:2"]);
        let set = to_set(Some(&v), to_ref::<VmRef>).unwrap().unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set[0].id(), "OpaqueRef:1");
    }

    #[test]
    fn set_shape_mismatch() {
        assert!(to_set(Some(&json!({"not": "an array"})), to_string).is_err());
    }

    #[test]
    fn map_decodes_keys_and_values_independently() {
        let v = json!({"start": "queued", "clean_shutdown": "running"});
        let map = to_map(
            Some(&v),
            crate::enums::VmOperations::decode,
            to_string,
        )
        .unwrap()
        .unwrap();
        assert_eq!(
            map.get(&crate::enums::VmOperations::Start),
            Some(&"queued".to_string())
        );
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn map_element_type_mismatch_fails_fast() {
        let v = json!({"k": ["wrong"]});
        assert!(to_map(Some(&v), str::to_owned, to_string).is_err());
    }
}

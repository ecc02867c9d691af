//! Response envelope classification for the hypervisor control API.
//!
//! Every call result arrives wrapped in a status envelope:
//!
//! ```json
//! {"Status": "Success", "Value": ...}
//! {"Status": "Failure", "ErrorDescription": ["CODE", "param", ...]}
//! ```
//!
//! [`check_response`] is the single choke point that strips the
//! envelope: success payloads pass through verbatim, failure
//! descriptions become catalog-backed [`Failure`] values, and anything
//! that is not a well-formed envelope is rejected as
//! [`WireError::Malformed`] rather than guessed at.

#![deny(unsafe_code)]
#![warn(missing_docs)]

use hvctl_error::Failure;
use serde_json::Value;
use thiserror::Error;

/// A call did not produce a usable success payload.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WireError {
    /// The server reported a failure; the catalog-backed value carries
    /// the code and its positional parameters.
    #[error(transparent)]
    Api(#[from] Failure),

    /// The response is not a well-formed status envelope. Distinct from
    /// every catalog failure: a malformed envelope means the transport
    /// or peer is broken, not that the call was rejected.
    #[error("malformed response envelope: {0}")]
    Malformed(&'static str),
}

/// Classify a response envelope, returning the success payload.
///
/// - `Status: "Success"` yields the `Value` payload verbatim; a missing
///   payload key yields `Value::Null`. The failure catalog is never
///   consulted on this path.
/// - `Status: "Failure"` reads `ErrorDescription` as an array of
///   strings and returns it as [`WireError::Api`]. An empty array is a
///   failure with an empty code; a non-string element is a malformed
///   envelope, not a failure.
/// - Everything else is [`WireError::Malformed`].
///
/// Status literals and field names match exactly and case-sensitively.
pub fn check_response(response: &Value) -> Result<Value, WireError> {
    let envelope = response
        .as_object()
        .ok_or(WireError::Malformed("response is not an object"))?;
    let status = envelope
        .get("Status")
        .ok_or(WireError::Malformed("missing Status field"))?
        .as_str()
        .ok_or(WireError::Malformed("Status is not a string"))?;
    match status {
        "Success" => Ok(envelope.get("Value").cloned().unwrap_or(Value::Null)),
        "Failure" => {
            let description = envelope
                .get("ErrorDescription")
                .and_then(Value::as_array)
                .ok_or(WireError::Malformed(
                    "failure without an ErrorDescription array",
                ))?;
            let mut parts = Vec::with_capacity(description.len());
            for element in description {
                let s = element.as_str().ok_or(WireError::Malformed(
                    "non-string element in ErrorDescription",
                ))?;
                parts.push(s.to_owned());
            }
            let failure = Failure::from_description(parts);
            if !failure.is_recognized() {
                tracing::trace!(code = failure.code(), "failure code not in catalog");
            }
            Err(WireError::Api(failure))
        }
        other => {
            tracing::trace!(status = other, "unknown envelope status literal");
            Err(WireError::Malformed("unknown Status literal"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_payload_passes_through_verbatim() {
        let resp = json!({"Status": "Success", "Value": {"uuid": "x", "n": [1, 2]}});
        let payload = check_response(&resp).unwrap();
        assert_eq!(payload, json!({"uuid": "x", "n": [1, 2]}));
    }

    #[test]
    fn success_without_payload_is_null() {
        let resp = json!({"Status": "Success"});
        assert_eq!(check_response(&resp).unwrap(), Value::Null);
    }

    #[test]
    fn failure_builds_a_catalog_backed_value() {
        let resp = json!({
            "Status": "Failure",
            "ErrorDescription": ["VM_BAD_POWER_STATE", "OpaqueRef:v", "halted", "running"]
        });
        let Err(WireError::Api(failure)) = check_response(&resp) else {
            panic!("expected an api failure");
        };
        assert_eq!(failure.code(), "VM_BAD_POWER_STATE");
        assert!(failure.is_recognized());
        assert_eq!(failure.param("expected"), Some("halted"));
        assert_eq!(failure.param("actual"), Some("running"));
    }

    #[test]
    fn unknown_failure_code_still_carries_its_description() {
        let resp = json!({
            "Status": "Failure",
            "ErrorDescription": ["FLUX_CAPACITOR_UNDERVOLT", "1.21"]
        });
        let Err(WireError::Api(failure)) = check_response(&resp) else {
            panic!("expected an api failure");
        };
        assert_eq!(failure.code(), "FLUX_CAPACITOR_UNDERVOLT");
        assert!(!failure.is_recognized());
        assert_eq!(failure.description(), ["FLUX_CAPACITOR_UNDERVOLT", "1.21"]);
    }

    #[test]
    fn empty_description_is_a_failure_with_empty_code() {
        let resp = json!({"Status": "Failure", "ErrorDescription": []});
        let Err(WireError::Api(failure)) = check_response(&resp) else {
            panic!("expected an api failure");
        };
        assert_eq!(failure.code(), "");
    }

    #[test]
    fn non_string_description_element_is_malformed() {
        let resp = json!({"Status": "Failure", "ErrorDescription": ["HOST_OFFLINE", 42]});
        assert!(matches!(
            check_response(&resp),
            Err(WireError::Malformed(_))
        ));
    }

    #[test]
    fn status_matching_is_exact_and_case_sensitive() {
        for status in ["success", "SUCCESS", "Succes", "failure", "Pending"] {
            let resp = json!({"Status": status, "Value": 1});
            assert!(matches!(
                check_response(&resp),
                Err(WireError::Malformed(_))
            ));
        }
    }

    #[test]
    fn malformed_envelopes() {
        for resp in [
            json!(null),
            json!("Success"),
            json!([]),
            json!({}),
            json!({"Status": 200}),
            json!({"Status": "Failure"}),
            json!({"Status": "Failure", "ErrorDescription": "HOST_OFFLINE"}),
        ] {
            assert!(matches!(
                check_response(&resp),
                Err(WireError::Malformed(_))
            ));
        }
    }
}

//! Failure catalog and typed domain errors for the hypervisor control API.
//!
//! The remote side reports failures as an ordered string array
//! `[code, param1, param2, ...]`. This crate holds the fixed registry of
//! known failure shapes — stable `SCREAMING_SNAKE_CASE` code, static
//! message template, ordered parameter names — and the [`Failure`] value
//! built from a raw description array. Codes the registry does not know
//! are still carried verbatim so callers can forward-match against newer
//! servers.

#![deny(unsafe_code)]
#![warn(missing_docs)]

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

pub mod catalog;

pub use catalog::CATALOG;

// ---------------------------------------------------------------------------
// FailureShape
// ---------------------------------------------------------------------------

/// One registered failure shape.
///
/// The message is a fixed human-readable description; it is never
/// interpolated with the parameters, which are exposed separately for
/// programmatic inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailureShape {
    /// Stable wire code, e.g. `"VM_BAD_POWER_STATE"`.
    pub code: &'static str,
    /// Fixed human-readable message template.
    pub message: &'static str,
    /// Ordered parameter names filled positionally from the description
    /// array tail. Empty for failures with no documented payload.
    pub params: &'static [&'static str],
}

impl FailureShape {
    /// Number of declared parameters.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.params.len()
    }
}

/// Code → shape index over [`CATALOG`]. First registration wins, so a
/// (hypothetical) duplicate code resolves to the earlier entry.
static INDEX: LazyLock<HashMap<&'static str, &'static FailureShape>> = LazyLock::new(|| {
    let mut index = HashMap::with_capacity(CATALOG.len());
    for shape in CATALOG {
        index.entry(shape.code).or_insert(shape);
    }
    index
});

/// Look up the registered shape for a wire code, if any.
#[must_use]
pub fn lookup(code: &str) -> Option<&'static FailureShape> {
    INDEX.get(code).copied()
}

// ---------------------------------------------------------------------------
// Failure
// ---------------------------------------------------------------------------

/// Message used for codes the catalog does not know.
const UNKNOWN_MESSAGE: &str = "The server returned an error code this client does not recognize.";

/// A failure reported by the remote API.
///
/// Built from the raw `ErrorDescription` array of a failure envelope.
/// The full array is always retained, whether or not the code hit the
/// catalog, so no payload is ever lost to an arity mismatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    code: String,
    description: Vec<String>,
    shape: Option<&'static FailureShape>,
}

impl Failure {
    /// Build a failure from a raw description array `[code, params...]`.
    ///
    /// An empty array yields an empty code (and therefore an
    /// unrecognized failure); the array is never indexed out of bounds.
    #[must_use]
    pub fn from_description(description: Vec<String>) -> Self {
        let code = description.first().cloned().unwrap_or_default();
        let shape = lookup(&code);
        Self {
            code,
            description,
            shape,
        }
    }

    /// The raw wire code (element 0 of the description array).
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The full raw description array, verbatim.
    #[must_use]
    pub fn description(&self) -> &[String] {
        &self.description
    }

    /// The catalog shape this failure matched, if any.
    #[must_use]
    pub fn shape(&self) -> Option<&'static FailureShape> {
        self.shape
    }

    /// Whether the code matched a registered shape.
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        self.shape.is_some()
    }

    /// The fixed message template for this failure, or a generic
    /// unknown-failure message when the code is not registered.
    #[must_use]
    pub fn message(&self) -> &'static str {
        self.shape.map_or(UNKNOWN_MESSAGE, |s| s.message)
    }

    /// Look up a declared parameter by name.
    ///
    /// Returns `None` when the failure is unrecognized or the name is not
    /// declared for its shape. A declared parameter the server did not
    /// supply (short description array) decodes as the empty string.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        let shape = self.shape?;
        let pos = shape.params.iter().position(|p| *p == name)?;
        Some(
            self.description
                .get(1 + pos)
                .map_or("", String::as_str),
        )
    }

    /// All declared parameters as `(name, value)` pairs, in declared
    /// order, with the empty string standing in for missing positions.
    #[must_use]
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        let Some(shape) = self.shape else {
            return Vec::new();
        };
        shape
            .params
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let value = self.description.get(1 + i).map_or("", String::as_str);
                (*name, value)
            })
            .collect()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message())?;
        if self.description.len() > 1 {
            write!(f, " ({})", self.description[1..].join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for Failure {}

// ---------------------------------------------------------------------------
// Serialization support
// ---------------------------------------------------------------------------

/// Serialisable snapshot of a [`Failure`]: just the raw description
/// array. The catalog shape is re-resolved on the way back in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureDto {
    /// Raw description array `[code, params...]`.
    pub description: Vec<String>,
}

impl From<&Failure> for FailureDto {
    fn from(failure: &Failure) -> Self {
        Self {
            description: failure.description.clone(),
        }
    }
}

impl From<FailureDto> for Failure {
    fn from(dto: FailureDto) -> Self {
        Self::from_description(dto.description)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn failure(parts: &[&str]) -> Failure {
        Failure::from_description(parts.iter().map(ToString::to_string).collect())
    }

    // -- Catalog integrity ------------------------------------------------

    #[test]
    fn catalog_codes_are_unique() {
        let mut seen = HashSet::new();
        for shape in CATALOG {
            assert!(seen.insert(shape.code), "duplicate code: {}", shape.code);
        }
    }

    #[test]
    fn catalog_is_sorted_by_registration_order() {
        // Upstream registers codes in lexicographic order; keep that
        // invariant so diffs against new API versions stay mechanical.
        for pair in CATALOG.windows(2) {
            assert!(
                pair[0].code < pair[1].code,
                "out of order: {} then {}",
                pair[0].code,
                pair[1].code
            );
        }
    }

    #[test]
    fn catalog_arities_are_bounded() {
        for shape in CATALOG {
            assert!(shape.arity() <= 4, "{} declares too many params", shape.code);
        }
    }

    #[test]
    fn catalog_messages_are_nonempty() {
        for shape in CATALOG {
            assert!(!shape.message.is_empty(), "{} has no message", shape.code);
        }
    }

    #[test]
    fn lookup_hits_every_registered_code() {
        for shape in CATALOG {
            let found = lookup(shape.code).expect("registered code must resolve");
            assert_eq!(found.code, shape.code);
        }
    }

    #[test]
    fn lookup_misses_unregistered_code() {
        assert!(lookup("SOME_FUTURE_CODE").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("vm_bad_power_state").is_none(), "lookup is case-sensitive");
    }

    // -- Failure construction ----------------------------------------------

    #[test]
    fn recognized_failure_with_params() {
        let f = failure(&["VM_BAD_POWER_STATE", "vmref1", "running", "halted"]);
        assert!(f.is_recognized());
        assert_eq!(f.code(), "VM_BAD_POWER_STATE");
        assert_eq!(f.param("vm"), Some("vmref1"));
        assert_eq!(f.param("expected"), Some("running"));
        assert_eq!(f.param("actual"), Some("halted"));
        assert_eq!(f.param("bogus"), None);
    }

    #[test]
    fn short_description_array_substitutes_empty_strings() {
        let f = failure(&["HOST_NOT_ENOUGH_PCPUS"]);
        assert!(f.is_recognized());
        let shape = f.shape().unwrap();
        assert_eq!(shape.arity(), 2);
        assert_eq!(f.param("vcpus"), Some(""));
        assert_eq!(f.param("pcpus"), Some(""));
    }

    #[test]
    fn unknown_code_keeps_description_verbatim() {
        let f = failure(&["SOME_FUTURE_CODE", "x"]);
        assert!(!f.is_recognized());
        assert_eq!(f.code(), "SOME_FUTURE_CODE");
        assert_eq!(f.description(), &["SOME_FUTURE_CODE".to_string(), "x".to_string()]);
        assert_eq!(f.param("anything"), None);
        assert_eq!(f.message(), UNKNOWN_MESSAGE);
    }

    #[test]
    fn empty_description_yields_empty_code() {
        let f = Failure::from_description(Vec::new());
        assert_eq!(f.code(), "");
        assert!(!f.is_recognized());
        assert!(f.description().is_empty());
    }

    #[test]
    fn excess_wire_params_are_retained_in_description() {
        let f = failure(&["HANDLE_INVALID", "VM", "OpaqueRef:x", "surplus"]);
        assert_eq!(f.param("class"), Some("VM"));
        assert_eq!(f.param("handle"), Some("OpaqueRef:x"));
        assert_eq!(f.description().len(), 4);
    }

    #[test]
    fn params_in_declared_order() {
        let f = failure(&["SR_BACKEND_FAILURE", "1", "out", "err"]);
        assert_eq!(
            f.params(),
            vec![("status", "1"), ("stdout", "out"), ("stderr", "err")]
        );
    }

    // -- Display / Error ----------------------------------------------------

    #[test]
    fn display_carries_code_message_and_raw_params() {
        let f = failure(&["SR_FULL", "100", "50"]);
        let s = f.to_string();
        assert!(s.starts_with("[SR_FULL]"));
        assert!(s.contains("100, 50"));
    }

    #[test]
    fn display_without_params() {
        let f = failure(&["HOST_DISABLED_UNTIL_REBOOT"]);
        assert!(!f.to_string().contains('('));
    }

    #[test]
    fn failure_is_std_error() {
        let f = failure(&["SR_FULL", "100", "50"]);
        let err: &dyn std::error::Error = &f;
        assert!(err.source().is_none());
    }

    // -- DTO roundtrip -------------------------------------------------------

    #[test]
    fn dto_roundtrip_rebinds_shape() {
        let f = failure(&["VM_BAD_POWER_STATE", "vmref1", "running", "halted"]);
        let dto: FailureDto = (&f).into();
        let json = serde_json::to_string(&dto).unwrap();
        let back: FailureDto = serde_json::from_str(&json).unwrap();
        let rebuilt: Failure = back.into();
        assert_eq!(rebuilt, f);
        assert!(rebuilt.is_recognized());
    }
}

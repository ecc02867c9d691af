//! Typed bindings for the hypervisor control API's dynamic wire values.
//!
//! The remote API transmits everything as untyped JSON shapes: strings
//! for integers and references, string tokens for enumerations, maps for
//! records. This crate is the translation layer between those shapes and
//! honest Rust types:
//!
//! - [`marshal`] — generic converters from `serde_json::Value` to typed
//!   values, with absence propagated as `None` and shape mismatches as
//!   [`marshal::DecodeError`].
//! - [`enums`] — closed wire enumerations with lossy normalized decode,
//!   exact encode, and an `Unrecognized` forward-compatibility sentinel.
//! - [`refs`] — nominally distinct opaque reference wrappers.
//! - [`records`] — per-class record aggregates decoded field-by-field.
//! - [`event`] — event stream records and the class-tag-driven
//!   polymorphic snapshot dispatch.

#![deny(unsafe_code)]

pub mod enums;
pub mod event;
pub mod marshal;
pub mod records;
pub mod refs;

pub use enums::{EventOperation, ObjectKind, VmPowerState, WireEnum};
pub use event::{EventBatch, EventRecord, Snapshot};
pub use marshal::DecodeError;
pub use refs::{OpaqueRef, NULL_REF};

//! Event stream records and polymorphic snapshot dispatch.
//!
//! An event names the class of the object it concerns; when a snapshot
//! payload is attached, the class tag selects which record decoder
//! interprets it. The tag is decoded before the payload is touched, so
//! an unknown class never reaches a mismatched decoder.

use crate::enums::{EventOperation, ObjectKind};
use crate::marshal::{
    as_object, to_datetime, to_enum, to_long, to_map, to_set, to_string, DecodeError,
};
use crate::records::{
    HostRecord, PciRecord, PifRecord, PoolRecord, VdiRecord, VgpuRecord, VmRecord,
};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::BTreeMap;

/// A decoded object snapshot, keyed by the event's class tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot {
    /// Snapshot of a virtual machine.
    Vm(VmRecord),
    /// Snapshot of a physical host.
    Host(HostRecord),
    /// Snapshot of the resource pool.
    Pool(PoolRecord),
    /// Snapshot of a virtual disk image.
    Vdi(VdiRecord),
    /// Snapshot of a physical network interface.
    Pif(PifRecord),
    /// Snapshot of a PCI device.
    Pci(PciRecord),
    /// Snapshot of a virtual GPU.
    Vgpu(VgpuRecord),
}

impl Snapshot {
    /// Decode a snapshot payload under a known class tag.
    ///
    /// Kinds with no registered record decoder fail with
    /// [`DecodeError::UnsupportedKind`] carrying the offending tag.
    pub fn decode(kind: ObjectKind, payload: &Value) -> Result<Self, DecodeError> {
        match kind {
            ObjectKind::Vm => VmRecord::from_wire(payload).map(Self::Vm),
            ObjectKind::Host => HostRecord::from_wire(payload).map(Self::Host),
            ObjectKind::Pool => PoolRecord::from_wire(payload).map(Self::Pool),
            ObjectKind::Vdi => VdiRecord::from_wire(payload).map(Self::Vdi),
            ObjectKind::Pif => PifRecord::from_wire(payload).map(Self::Pif),
            ObjectKind::Pci => PciRecord::from_wire(payload).map(Self::Pci),
            ObjectKind::Vgpu => VgpuRecord::from_wire(payload).map(Self::Vgpu),
            other => Err(DecodeError::UnsupportedKind(format!("{other}"))),
        }
    }
}

/// A single change notification from the event stream.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventRecord {
    /// Monotonic event id within the stream.
    pub id: Option<i64>,
    /// Server-side time the event was generated.
    pub timestamp: Option<DateTime<Utc>>,
    /// Class of the object the event concerns, as sent on the wire.
    pub class: Option<String>,
    /// What happened to the object.
    pub operation: Option<EventOperation>,
    /// Opaque reference of the object concerned.
    pub object_ref: Option<String>,
    /// UUID of the object concerned.
    pub obj_uuid: Option<String>,
    /// Decoded snapshot of the object, when the server attached one.
    pub snapshot: Option<Snapshot>,
}

impl EventRecord {
    /// Decode an event from its wire map.
    ///
    /// The `class` tag is decoded first; only when a snapshot payload is
    /// present is it dispatched to that class's record decoder. An
    /// attached snapshot with an unknown or missing class tag is a
    /// [`DecodeError::UnsupportedKind`].
    pub fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        let map = as_object(value)?;
        let class = to_string(map.get("class"))?;
        let snapshot = match map.get("snapshot").filter(|v| !v.is_null()) {
            None => None,
            Some(payload) => {
                let tag = class.as_deref().unwrap_or("");
                let kind = ObjectKind::decode(tag);
                if kind == ObjectKind::Unrecognized {
                    return Err(DecodeError::UnsupportedKind(tag.to_owned()));
                }
                Some(Snapshot::decode(kind, payload)?)
            }
        };
        Ok(Self {
            id: to_long(map.get("id"))?,
            timestamp: to_datetime(map.get("timestamp"))?,
            class,
            operation: to_enum(map.get("operation"))?,
            object_ref: to_string(map.get("ref"))?,
            obj_uuid: to_string(map.get("obj_uuid"))?,
            snapshot,
        })
    }

    /// The class tag decoded into the closed object-kind enumeration.
    #[must_use]
    pub fn kind(&self) -> Option<ObjectKind> {
        self.class.as_deref().map(ObjectKind::decode)
    }
}

/// One page of the event stream, as returned by an `event.from` poll.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventBatch {
    /// Opaque resume token to pass to the next poll.
    pub token: Option<String>,
    /// Number of live objects per class, keyed by class tag.
    pub valid_ref_counts: Option<BTreeMap<String, i64>>,
    /// The events themselves, in server order.
    pub events: Option<Vec<EventRecord>>,
}

impl EventBatch {
    /// Decode an event batch from its wire map.
    pub fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        let map = as_object(value)?;
        Ok(Self {
            token: to_string(map.get("token"))?,
            valid_ref_counts: to_map(map.get("valid_ref_counts"), str::to_owned, to_long)?,
            events: to_set(map.get("events"), |v| {
                v.filter(|x| !x.is_null())
                    .map(EventRecord::from_wire)
                    .transpose()
            })?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::VmPowerState;
    use serde_json::json;

    fn vm_event(class: &str) -> Value {
        json!({
            "id": "341",
            "timestamp": "19700101T00:16:40",
            "class": class,
            "operation": "mod",
            "ref": "OpaqueRef:vm1",
            "obj_uuid": "8f0c42c0",
            "snapshot": {
                "uuid": "8f0c42c0",
                "power_state": "Running"
            }
        })
    }

    #[test]
    fn event_with_vm_snapshot() {
        let ev = EventRecord::from_wire(&vm_event("vm")).unwrap();
        assert_eq!(ev.id, Some(341));
        assert_eq!(ev.timestamp.unwrap().timestamp(), 1000);
        assert_eq!(ev.operation, Some(EventOperation::Mod));
        assert_eq!(ev.object_ref.as_deref(), Some("OpaqueRef:vm1"));
        assert_eq!(ev.kind(), Some(ObjectKind::Vm));
        let Some(Snapshot::Vm(vm)) = ev.snapshot else {
            panic!("expected a VM snapshot");
        };
        assert_eq!(vm.power_state, Some(VmPowerState::Running));
    }

    #[test]
    fn class_tag_is_folded_before_dispatch() {
        let ev = EventRecord::from_wire(&vm_event("VM")).unwrap();
        assert!(matches!(ev.snapshot, Some(Snapshot::Vm(_))));
    }

    #[test]
    fn unknown_class_with_snapshot_is_rejected() {
        let err = EventRecord::from_wire(&vm_event("quantum_vm")).unwrap_err();
        assert_eq!(err, DecodeError::UnsupportedKind("quantum_vm".into()));
    }

    #[test]
    fn known_class_without_decoder_is_rejected() {
        let wire = json!({
            "class": "sr",
            "snapshot": {"uuid": "s-1"}
        });
        assert!(matches!(
            EventRecord::from_wire(&wire),
            Err(DecodeError::UnsupportedKind(_))
        ));
    }

    #[test]
    fn unknown_class_without_snapshot_is_tolerated() {
        let wire = json!({
            "id": "7",
            "class": "quantum_vm",
            "operation": "del",
            "ref": "OpaqueRef:q1"
        });
        let ev = EventRecord::from_wire(&wire).unwrap();
        assert_eq!(ev.kind(), Some(ObjectKind::Unrecognized));
        assert_eq!(ev.snapshot, None);
        assert_eq!(ev.operation, Some(EventOperation::Del));
    }

    #[test]
    fn null_snapshot_is_absence() {
        let wire = json!({"class": "vm", "snapshot": null});
        let ev = EventRecord::from_wire(&wire).unwrap();
        assert_eq!(ev.snapshot, None);
    }

    #[test]
    fn batch_decodes_token_counts_and_events() {
        let wire = json!({
            "token": "0,341",
            "valid_ref_counts": {"vm": "12", "host": "2"},
            "events": [vm_event("vm"), vm_event("vm")]
        });
        let batch = EventBatch::from_wire(&wire).unwrap();
        assert_eq!(batch.token.as_deref(), Some("0,341"));
        let counts = batch.valid_ref_counts.unwrap();
        assert_eq!(counts["vm"], 12);
        assert_eq!(counts["host"], 2);
        // identical events collapse to one
        assert_eq!(batch.events.unwrap().len(), 1);
    }

    #[test]
    fn batch_requires_an_object() {
        assert!(EventBatch::from_wire(&json!([])).is_err());
    }
}

//! End-to-end decoding of realistic wire payloads.

use hvctl_types::enums::{
    DomainType, EventOperation, ObjectKind, OnCrashBehaviour, OnNormalExit, VmOperations,
    VmPowerState,
};
use hvctl_types::event::{EventBatch, Snapshot};
use hvctl_types::marshal::DecodeError;
use hvctl_types::records::{HostRecord, VmRecord};
use proptest::prelude::*;
use serde_json::json;

#[test]
fn full_vm_record_from_wire() {
    let wire = json!({
        "uuid": "7b0d6a3e-91c2-4f6e-a1db-000000000001",
        "allowed_operations": ["start", "clone", "export"],
        "current_operations": {"OpaqueRef:task7": "clean_shutdown"},
        "power_state": "Halted",
        "name_label": "db-primary",
        "name_description": "production database",
        "user_version": "1",
        "is_a_template": false,
        "suspend_VDI": "OpaqueRef:NULL",
        "resident_on": "OpaqueRef:host-2",
        "memory_static_max": "8589934592",
        "memory_dynamic_min": "4294967296",
        "VCPUs_params": {"weight": "256"},
        "VCPUs_max": "4",
        "VCPUs_at_startup": "4",
        "actions_after_shutdown": "destroy",
        "actions_after_reboot": "restart",
        "actions_after_crash": "coredump_and_restart",
        "VIFs": ["OpaqueRef:vif-0", "OpaqueRef:vif-1", "OpaqueRef:vif-0"],
        "platform": {"nx": "true", "acpi": "1"},
        "other_config": {"folder": "/prod"},
        "domid": "-1",
        "is_control_domain": false,
        "snapshot_time": "19700101T00:00:00",
        "tags": ["prod", "db"],
        "HVM_shadow_multiplier": 1.0,
        "domain_type": "hvm",
        "NVRAM": {"EFI-variables": "..."}
    });

    let vm = VmRecord::from_wire(&wire).expect("record decodes");
    assert_eq!(vm.power_state, Some(VmPowerState::Halted));
    assert_eq!(
        vm.allowed_operations,
        Some(vec![
            VmOperations::Start,
            VmOperations::Clone,
            VmOperations::Export
        ])
    );
    assert_eq!(
        vm.current_operations.as_ref().unwrap()["OpaqueRef:task7"],
        VmOperations::CleanShutdown
    );
    assert!(vm.suspend_vdi.unwrap().is_null());
    assert!(!vm.resident_on.unwrap().is_null());
    assert_eq!(vm.memory_static_max, Some(8_589_934_592));
    assert_eq!(vm.vcpus_max, Some(4));
    assert_eq!(vm.actions_after_shutdown, Some(OnNormalExit::Destroy));
    assert_eq!(
        vm.actions_after_crash,
        Some(OnCrashBehaviour::CoredumpAndRestart)
    );
    // duplicate VIF collapsed
    assert_eq!(vm.vifs.as_ref().unwrap().len(), 2);
    assert_eq!(vm.domid, Some(-1));
    assert_eq!(vm.snapshot_time.unwrap().timestamp(), 0);
    assert_eq!(vm.domain_type, Some(DomainType::Hvm));
    assert_eq!(vm.hvm_shadow_multiplier, Some(1.0));
    // absent fields stay absent
    assert_eq!(vm.pv_bootloader, None);
    assert_eq!(vm.ha_always_run, None);
}

#[test]
fn event_batch_with_mixed_snapshots() {
    let wire = json!({
        "token": "0,92",
        "valid_ref_counts": {"vm": "3", "host": "1"},
        "events": [
            {
                "id": "90",
                "class": "vm",
                "operation": "mod",
                "ref": "OpaqueRef:vm-a",
                "snapshot": {"uuid": "a", "power_state": "Running"}
            },
            {
                "id": "91",
                "class": "host",
                "operation": "add",
                "ref": "OpaqueRef:host-b",
                "snapshot": {"uuid": "b", "enabled": true}
            },
            {
                "id": "92",
                "class": "message",
                "operation": "del",
                "ref": "OpaqueRef:msg-c"
            }
        ]
    });

    let batch = EventBatch::from_wire(&wire).expect("batch decodes");
    let events = batch.events.unwrap();
    assert_eq!(events.len(), 3);

    assert!(matches!(&events[0].snapshot, Some(Snapshot::Vm(vm))
        if vm.power_state == Some(VmPowerState::Running)));
    assert!(matches!(&events[1].snapshot, Some(Snapshot::Host(h))
        if h.enabled == Some(true)));
    assert_eq!(events[1].operation, Some(EventOperation::Add));
    // deletion events carry no snapshot and need no decoder
    assert_eq!(events[2].kind(), Some(ObjectKind::Message));
    assert_eq!(events[2].snapshot, None);
}

#[test]
fn snapshot_for_unmodeled_class_fails_with_its_tag() {
    let wire = json!({
        "token": "0,1",
        "events": [{
            "id": "1",
            "class": "sr",
            "operation": "mod",
            "ref": "OpaqueRef:sr-a",
            "snapshot": {"uuid": "s"}
        }]
    });
    let err = EventBatch::from_wire(&wire).unwrap_err();
    assert!(matches!(err, DecodeError::UnsupportedKind(_)));
}

#[test]
fn host_record_decodes_independently_of_field_order() {
    let a = json!({"uuid": "h", "enabled": true, "hostname": "n1"});
    let b = json!({"hostname": "n1", "uuid": "h", "enabled": true});
    assert_eq!(
        HostRecord::from_wire(&a).unwrap(),
        HostRecord::from_wire(&b).unwrap()
    );
}

proptest! {
    #[test]
    fn enum_decode_is_total(raw in ".*") {
        // No input string may panic or error a closed-enum decode.
        let _ = VmPowerState::decode(&raw);
        let _ = VmOperations::decode(&raw);
        let _ = ObjectKind::decode(&raw);
    }

    #[test]
    fn canonical_tokens_roundtrip(idx in 0usize..1000) {
        let all = VmOperations::all();
        let variant = all[idx % all.len()];
        prop_assert_eq!(VmOperations::decode(variant.wire()), variant);
    }

    #[test]
    fn decode_folds_case_and_separators(idx in 0usize..1000, upper in any::<bool>()) {
        let all = ObjectKind::all();
        let variant = all[idx % all.len()];
        let mut raw = variant.wire().replace('_', "-");
        if upper {
            raw = raw.to_ascii_uppercase();
        }
        prop_assert_eq!(ObjectKind::decode(&raw), variant);
    }
}

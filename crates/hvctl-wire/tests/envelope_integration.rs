//! Envelope stripping composed with payload decoding, the way a caller
//! consumes a call result.

use hvctl_wire::{check_response, WireError};
use hvctl_types::enums::VmPowerState;
use hvctl_types::records::VmRecord;
use serde_json::json;

#[test]
fn success_envelope_feeds_the_record_decoder() {
    let resp = json!({
        "Status": "Success",
        "Value": {
            "uuid": "7b0d6a3e",
            "power_state": "Suspended",
            "name_label": "worker-3"
        }
    });
    let payload = check_response(&resp).expect("success envelope");
    let vm = VmRecord::from_wire(&payload).expect("payload decodes");
    assert_eq!(vm.power_state, Some(VmPowerState::Suspended));
    assert_eq!(vm.name_label.as_deref(), Some("worker-3"));
}

#[test]
fn failure_envelope_surfaces_named_parameters() {
    let resp = json!({
        "Status": "Failure",
        "ErrorDescription": ["SR_FULL", "10737418240", "5368709120"]
    });
    match check_response(&resp) {
        Err(WireError::Api(failure)) => {
            assert_eq!(failure.code(), "SR_FULL");
            assert_eq!(failure.param("requested"), Some("10737418240"));
            assert_eq!(failure.param("maximum"), Some("5368709120"));
            assert!(failure.to_string().starts_with("[SR_FULL]"));
        }
        other => panic!("expected an api failure, got {other:?}"),
    }
}

#[test]
fn failure_from_a_newer_server_is_not_malformed() {
    let resp = json!({
        "Status": "Failure",
        "ErrorDescription": ["VM_QUANTUM_ENTANGLED", "OpaqueRef:vm1"]
    });
    match check_response(&resp) {
        Err(WireError::Api(failure)) => {
            assert!(!failure.is_recognized());
            assert_eq!(failure.description().len(), 2);
        }
        other => panic!("expected an api failure, got {other:?}"),
    }
}

#[test]
fn transport_noise_is_malformed_not_a_failure() {
    let resp = json!({"error": "502 Bad Gateway"});
    assert!(matches!(
        check_response(&resp),
        Err(WireError::Malformed(_))
    ));
}

//! Nominal opaque reference types.
//!
//! Every remote object is referred to by an opaque identifier string.
//! The wrappers below are structurally identical but nominally distinct,
//! so a host reference cannot be passed where a VM reference is
//! expected. A reference carries no state beyond the identifier and is
//! only ever constructed from a decoded wire string.

use std::fmt;

/// The distinguished identifier denoting "no object".
pub const NULL_REF: &str = "OpaqueRef:NULL";

/// Common surface of every opaque reference type.
pub trait OpaqueRef: Sized {
    /// Remote class name this reference type points at.
    const CLASS: &'static str;

    /// Wrap a decoded wire identifier.
    fn from_wire(id: String) -> Self;

    /// The wrapped opaque identifier.
    fn id(&self) -> &str;

    /// Whether this is the distinguished null reference.
    fn is_null(&self) -> bool {
        self.id().is_empty() || self.id() == NULL_REF
    }
}

macro_rules! opaque_ref {
    ($(#[$meta:meta])* $name:ident => $class:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            /// Wrap an opaque identifier string.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// The wrapped opaque identifier.
            #[must_use]
            pub fn id(&self) -> &str {
                &self.0
            }

            /// Whether this is the distinguished null reference.
            #[must_use]
            pub fn is_null(&self) -> bool {
                <Self as OpaqueRef>::is_null(self)
            }
        }

        impl OpaqueRef for $name {
            const CLASS: &'static str = $class;

            fn from_wire(id: String) -> Self {
                Self(id)
            }

            fn id(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

opaque_ref!(
    /// Reference to a virtual machine.
    VmRef => "VM"
);
opaque_ref!(
    /// Reference to a physical host.
    HostRef => "host"
);
opaque_ref!(SrRef => "SR");
opaque_ref!(VdiRef => "VDI");
opaque_ref!(VbdRef => "VBD");
opaque_ref!(VifRef => "VIF");
opaque_ref!(NetworkRef => "network");
opaque_ref!(PifRef => "PIF");
opaque_ref!(PifMetricsRef => "PIF_metrics");
opaque_ref!(BondRef => "Bond");
opaque_ref!(VlanRef => "VLAN");
opaque_ref!(TunnelRef => "tunnel");
opaque_ref!(NetworkSriovRef => "network_sriov");
opaque_ref!(ConsoleRef => "console");
opaque_ref!(CrashdumpRef => "crashdump");
opaque_ref!(VtpmRef => "VTPM");
opaque_ref!(VmMetricsRef => "VM_metrics");
opaque_ref!(VmGuestMetricsRef => "VM_guest_metrics");
opaque_ref!(BlobRef => "blob");
opaque_ref!(VmppRef => "VMPP");
opaque_ref!(VmssRef => "VMSS");
opaque_ref!(VmApplianceRef => "VM_appliance");
opaque_ref!(VgpuRef => "VGPU");
opaque_ref!(VgpuTypeRef => "VGPU_type");
opaque_ref!(GpuGroupRef => "GPU_group");
opaque_ref!(PciRef => "PCI");
opaque_ref!(PgpuRef => "PGPU");
opaque_ref!(PusbRef => "PUSB");
opaque_ref!(UsbGroupRef => "USB_group");
opaque_ref!(VusbRef => "VUSB");
opaque_ref!(HostCrashdumpRef => "host_crashdump");
opaque_ref!(HostPatchRef => "host_patch");
opaque_ref!(HostMetricsRef => "host_metrics");
opaque_ref!(HostCpuRef => "host_cpu");
opaque_ref!(PoolRef => "pool");
opaque_ref!(PoolPatchRef => "pool_patch");
opaque_ref!(PoolUpdateRef => "pool_update");
opaque_ref!(PbdRef => "PBD");
opaque_ref!(FeatureRef => "Feature");
opaque_ref!(TaskRef => "task");
opaque_ref!(SmRef => "SM");
opaque_ref!(SecretRef => "secret");
opaque_ref!(MessageRef => "message");
opaque_ref!(DrTaskRef => "DR_task");
opaque_ref!(PvsSiteRef => "PVS_site");
opaque_ref!(PvsServerRef => "PVS_server");
opaque_ref!(PvsProxyRef => "PVS_proxy");
opaque_ref!(PvsCacheStorageRef => "PVS_cache_storage");
opaque_ref!(SdnControllerRef => "SDN_controller");
opaque_ref!(ClusterRef => "Cluster");
opaque_ref!(ClusterHostRef => "Cluster_host");
opaque_ref!(CertificateRef => "Certificate");
opaque_ref!(SessionRef => "session");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_wrapped_id() {
        assert_eq!(VmRef::new("OpaqueRef:a"), VmRef::new("OpaqueRef:a"));
        assert_ne!(VmRef::new("OpaqueRef:a"), VmRef::new("OpaqueRef:b"));
    }

    #[test]
    fn null_reference_detection() {
        assert!(VmRef::new(NULL_REF).is_null());
        assert!(VmRef::new("").is_null());
        assert!(!VmRef::new("OpaqueRef:a").is_null());
    }

    #[test]
    fn display_is_the_raw_identifier() {
        assert_eq!(HostRef::new("OpaqueRef:h1").to_string(), "OpaqueRef:h1");
    }

    #[test]
    fn class_names() {
        assert_eq!(VmRef::CLASS, "VM");
        assert_eq!(HostRef::CLASS, "host");
        assert_eq!(PifMetricsRef::CLASS, "PIF_metrics");
    }
}

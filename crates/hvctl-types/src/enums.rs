//! Closed wire enumerations and their codecs.
//!
//! Every enumeration is generated by [`wire_enum!`]: a fixed set of
//! variants, each with its exact canonical wire token, plus the
//! `Unrecognized` forward-compatibility sentinel.
//!
//! Decode is total and lossy (case-insensitive, `-` folded to `_`);
//! encode is exact and fixed. The two are deliberately asymmetric:
//! `wire(decode(x))` reproduces the canonical token, not necessarily
//! `x` itself.

use std::fmt;

/// Common codec surface of every wire enumeration.
pub trait WireEnum: Copy + Eq + 'static {
    /// Total decode: unknown tokens yield the `Unrecognized` sentinel.
    fn decode(raw: &str) -> Self;

    /// Exact canonical wire token.
    ///
    /// # Panics
    ///
    /// Panics on the `Unrecognized` sentinel — a sentinel has no wire
    /// form, and asking for one is a programming error.
    fn wire(self) -> &'static str;

    /// Every variant except the sentinel.
    fn all() -> &'static [Self];

    /// Whether this is the forward-compatibility sentinel.
    fn is_unrecognized(self) -> bool;
}

/// Normalized comparison of a raw wire token against a canonical one:
/// ASCII case-insensitive with `-` and `_` identified.
#[must_use]
pub(crate) fn token_eq(raw: &str, canonical: &str) -> bool {
    if raw.len() != canonical.len() {
        return false;
    }
    raw.bytes().zip(canonical.bytes()).all(|(a, b)| {
        let a = if a == b'-' { b'_' } else { a.to_ascii_uppercase() };
        let b = if b == b'-' { b'_' } else { b.to_ascii_uppercase() };
        a == b
    })
}

/// Declares one closed wire enumeration: variants, exact wire tokens,
/// the `Unrecognized` sentinel, and the [`WireEnum`] codec impl.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $token:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant,)+
            /// Sentinel for tokens newer than this client.
            Unrecognized,
        }

        impl $name {
            /// Total decode; unknown tokens yield [`Self::Unrecognized`].
            #[must_use]
            pub fn decode(raw: &str) -> Self {
                $(
                    if $crate::enums::token_eq(raw, $token) {
                        return Self::$variant;
                    }
                )+
                Self::Unrecognized
            }

            /// Exact canonical wire token.
            ///
            /// # Panics
            ///
            /// Panics on [`Self::Unrecognized`], which has no wire form.
            #[must_use]
            pub fn wire(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                    Self::Unrecognized => panic!(concat!(
                        "cannot encode ",
                        stringify!($name),
                        "::Unrecognized onto the wire"
                    )),
                }
            }

            /// Every variant except the sentinel.
            #[must_use]
            pub fn all() -> &'static [Self] {
                &[$(Self::$variant,)+]
            }
        }

        impl $crate::enums::WireEnum for $name {
            fn decode(raw: &str) -> Self {
                Self::decode(raw)
            }
            fn wire(self) -> &'static str {
                Self::wire(self)
            }
            fn all() -> &'static [Self] {
                Self::all()
            }
            fn is_unrecognized(self) -> bool {
                self == Self::Unrecognized
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                // Diagnostic form, not an encode path: the sentinel
                // prints as a literal instead of panicking.
                match self {
                    Self::Unrecognized => f.write_str("UNRECOGNIZED"),
                    other => f.write_str(other.wire()),
                }
            }
        }
    };
}

// ---------------------------------------------------------------------------
// VM
// ---------------------------------------------------------------------------

wire_enum! {
    /// Lifecycle state of a virtual machine.
    VmPowerState {
        Halted => "Halted",
        Paused => "Paused",
        Running => "Running",
        Suspended => "Suspended",
    }
}

wire_enum! {
    /// Operations that can be performed on a VM.
    VmOperations {
        Snapshot => "snapshot",
        Clone => "clone",
        Copy => "copy",
        CreateTemplate => "create_template",
        Revert => "revert",
        Checkpoint => "checkpoint",
        SnapshotWithQuiesce => "snapshot_with_quiesce",
        Provision => "provision",
        Start => "start",
        StartOn => "start_on",
        Pause => "pause",
        Unpause => "unpause",
        CleanShutdown => "clean_shutdown",
        CleanReboot => "clean_reboot",
        HardShutdown => "hard_shutdown",
        PowerStateReset => "power_state_reset",
        HardReboot => "hard_reboot",
        Suspend => "suspend",
        Csvm => "csvm",
        Resume => "resume",
        ResumeOn => "resume_on",
        PoolMigrate => "pool_migrate",
        MigrateSend => "migrate_send",
        GetBootRecord => "get_boot_record",
        SendSysrq => "send_sysrq",
        SendTrigger => "send_trigger",
        QueryServices => "query_services",
        Shutdown => "shutdown",
        CallPlugin => "call_plugin",
        ChangingMemoryLive => "changing_memory_live",
        AwaitingMemoryLive => "awaiting_memory_live",
        ChangingDynamicRange => "changing_dynamic_range",
        ChangingStaticRange => "changing_static_range",
        ChangingMemoryLimits => "changing_memory_limits",
        ChangingShadowMemory => "changing_shadow_memory",
        ChangingShadowMemoryLive => "changing_shadow_memory_live",
        ChangingVcpus => "changing_VCPUs",
        ChangingVcpusLive => "changing_VCPUs_live",
        ChangingNvram => "changing_NVRAM",
        AssertOperationValid => "assert_operation_valid",
        DataSourceOp => "data_source_op",
        UpdateAllowedOperations => "update_allowed_operations",
        MakeIntoTemplate => "make_into_template",
        Import => "import",
        Export => "export",
        MetadataExport => "metadata_export",
        Reverting => "reverting",
        Destroy => "destroy",
    }
}

wire_enum! {
    /// What to do after a guest shuts down cleanly.
    OnNormalExit {
        Destroy => "destroy",
        Restart => "restart",
    }
}

wire_enum! {
    /// What to do after a guest crashes.
    OnCrashBehaviour {
        Destroy => "destroy",
        CoredumpAndDestroy => "coredump_and_destroy",
        Restart => "restart",
        CoredumpAndRestart => "coredump_and_restart",
        Preserve => "preserve",
        RenameRestart => "rename_restart",
    }
}

wire_enum! {
    /// Virtualization mode of a VM.
    DomainType {
        Hvm => "hvm",
        Pv => "pv",
        PvInPvh => "pv_in_pvh",
        Unspecified => "unspecified",
    }
}

// ---------------------------------------------------------------------------
// Host / Pool / Task
// ---------------------------------------------------------------------------

wire_enum! {
    HostAllowedOperations {
        Provision => "provision",
        Evacuate => "evacuate",
        Shutdown => "shutdown",
        Reboot => "reboot",
        PowerOn => "power_on",
        VmStart => "vm_start",
        VmResume => "vm_resume",
        VmMigrate => "vm_migrate",
    }
}

wire_enum! {
    /// Whether the host console is backed by the integrated GPU.
    HostDisplay {
        Enabled => "enabled",
        DisableOnReboot => "disable_on_reboot",
        Disabled => "disabled",
        EnableOnReboot => "enable_on_reboot",
    }
}

wire_enum! {
    PoolAllowedOperations {
        HaEnable => "ha_enable",
        HaDisable => "ha_disable",
        ClusterCreate => "cluster_create",
        DesignateNewMaster => "designate_new_master",
    }
}

wire_enum! {
    TaskAllowedOperations {
        Cancel => "cancel",
        Destroy => "destroy",
    }
}

wire_enum! {
    TaskStatusType {
        Pending => "pending",
        Success => "success",
        Failure => "failure",
        Cancelling => "cancelling",
        Cancelled => "cancelled",
    }
}

wire_enum! {
    /// Action required after applying a patch. Note the mixed-case
    /// canonical tokens: decode folds case, encode does not.
    AfterApplyGuidance {
        RestartHvm => "restartHVM",
        RestartPv => "restartPV",
        RestartHost => "restartHost",
        RestartXapi => "restartXAPI",
    }
}

wire_enum! {
    /// Action required after applying an update.
    UpdateAfterApplyGuidance {
        RestartHvm => "restartHVM",
        RestartPv => "restartPV",
        RestartHost => "restartHost",
        RestartXapi => "restartXAPI",
    }
}

wire_enum! {
    LivepatchStatus {
        OkLivepatchComplete => "ok_livepatch_complete",
        OkLivepatchIncomplete => "ok_livepatch_incomplete",
        Ok => "ok",
    }
}

// ---------------------------------------------------------------------------
// Storage
// ---------------------------------------------------------------------------

wire_enum! {
    StorageOperations {
        Scan => "scan",
        Destroy => "destroy",
        Forget => "forget",
        Plug => "plug",
        Unplug => "unplug",
        Update => "update",
        VdiCreate => "vdi_create",
        VdiIntroduce => "vdi_introduce",
        VdiDestroy => "vdi_destroy",
        VdiResize => "vdi_resize",
        VdiClone => "vdi_clone",
        VdiSnapshot => "vdi_snapshot",
        VdiMirror => "vdi_mirror",
        VdiEnableCbt => "vdi_enable_cbt",
        VdiDisableCbt => "vdi_disable_cbt",
        VdiDataDestroy => "vdi_data_destroy",
        VdiListChangedBlocks => "vdi_list_changed_blocks",
        VdiSetOnBoot => "vdi_set_on_boot",
        PbdCreate => "pbd_create",
        PbdDestroy => "pbd_destroy",
    }
}

wire_enum! {
    VdiOperations {
        Clone => "clone",
        Copy => "copy",
        Resize => "resize",
        ResizeOnline => "resize_online",
        Snapshot => "snapshot",
        Mirror => "mirror",
        Destroy => "destroy",
        DataDestroy => "data_destroy",
        ListChangedBlocks => "list_changed_blocks",
        Forget => "forget",
        Update => "update",
        ForceUnlock => "force_unlock",
        GenerateConfig => "generate_config",
        EnableCbt => "enable_cbt",
        DisableCbt => "disable_cbt",
        Blocked => "blocked",
    }
}

wire_enum! {
    /// Role a VDI plays.
    VdiType {
        System => "system",
        User => "user",
        Ephemeral => "ephemeral",
        Suspend => "suspend",
        Crashdump => "crashdump",
        HaStatefile => "ha_statefile",
        Metadata => "metadata",
        RedoLog => "redo_log",
        Rrd => "rrd",
        PvsCache => "pvs_cache",
        CbtMetadata => "cbt_metadata",
    }
}

wire_enum! {
    /// Behaviour of a caching VDI when the host reboots.
    OnBoot {
        Reset => "reset",
        Persist => "persist",
    }
}

wire_enum! {
    VbdOperations {
        Attach => "attach",
        Eject => "eject",
        Insert => "insert",
        Plug => "plug",
        Unplug => "unplug",
        UnplugForce => "unplug_force",
        Pause => "pause",
        Unpause => "unpause",
    }
}

wire_enum! {
    VbdType {
        Cd => "CD",
        Disk => "Disk",
        Floppy => "Floppy",
    }
}

wire_enum! {
    VbdMode {
        Ro => "RO",
        Rw => "RW",
    }
}

// ---------------------------------------------------------------------------
// Networking
// ---------------------------------------------------------------------------

wire_enum! {
    IpConfigurationMode {
        None => "None",
        Dhcp => "DHCP",
        Static => "Static",
    }
}

wire_enum! {
    Ipv6ConfigurationMode {
        None => "None",
        Dhcp => "DHCP",
        Static => "Static",
        Autoconf => "Autoconf",
    }
}

wire_enum! {
    /// Which protocol family defines the interface's primary address.
    PrimaryAddressType {
        Ipv4 => "IPv4",
        Ipv6 => "IPv6",
    }
}

wire_enum! {
    PifIgmpStatus {
        Enabled => "enabled",
        Disabled => "disabled",
        Unknown => "unknown",
    }
}

wire_enum! {
    /// NIC bond balancing mode. Canonical tokens are hyphenated; decode
    /// accepts underscore spellings as well.
    BondMode {
        BalanceSlb => "balance-slb",
        ActiveBackup => "active-backup",
        Lacp => "lacp",
    }
}

wire_enum! {
    SriovConfigurationMode {
        Sysfs => "sysfs",
        Modprobe => "modprobe",
        Manual => "manual",
        Unknown => "unknown",
    }
}

wire_enum! {
    NetworkOperations {
        Attaching => "attaching",
    }
}

wire_enum! {
    NetworkDefaultLockingMode {
        Unlocked => "unlocked",
        Disabled => "disabled",
    }
}

wire_enum! {
    NetworkPurpose {
        Nbd => "nbd",
        InsecureNbd => "insecure_nbd",
    }
}

wire_enum! {
    VifOperations {
        Attach => "attach",
        Plug => "plug",
        Unplug => "unplug",
    }
}

wire_enum! {
    VifLockingMode {
        NetworkDefault => "network_default",
        Locked => "locked",
        Unlocked => "unlocked",
        Disabled => "disabled",
    }
}

wire_enum! {
    VifIpv4ConfigurationMode {
        None => "None",
        Static => "Static",
    }
}

wire_enum! {
    VifIpv6ConfigurationMode {
        None => "None",
        Static => "Static",
    }
}

wire_enum! {
    SdnControllerProtocol {
        Ssl => "ssl",
        Pssl => "pssl",
    }
}

// ---------------------------------------------------------------------------
// Events / consoles / snapshots schedules
// ---------------------------------------------------------------------------

wire_enum! {
    /// Kind of change an event reports.
    EventOperation {
        Add => "add",
        Del => "del",
        Mod => "mod",
    }
}

wire_enum! {
    ConsoleProtocol {
        Vt100 => "vt100",
        Rfb => "rfb",
        Rdp => "rdp",
    }
}

wire_enum! {
    VmssType {
        Snapshot => "snapshot",
        Checkpoint => "checkpoint",
        SnapshotWithQuiesce => "snapshot_with_quiesce",
    }
}

wire_enum! {
    VmssFrequency {
        Hourly => "hourly",
        Daily => "daily",
        Weekly => "weekly",
    }
}

wire_enum! {
    VmppBackupFrequency {
        Hourly => "hourly",
        Daily => "daily",
        Weekly => "weekly",
    }
}

// ---------------------------------------------------------------------------
// GPU / USB / cluster / PVS
// ---------------------------------------------------------------------------

wire_enum! {
    VgpuTypeImplementation {
        Passthrough => "passthrough",
        Nvidia => "nvidia",
        NvidiaSriov => "nvidia_sriov",
        GvtG => "gvt_g",
        Mxgpu => "mxgpu",
    }
}

wire_enum! {
    PgpuDom0Access {
        Enabled => "enabled",
        DisableOnReboot => "disable_on_reboot",
        Disabled => "disabled",
        EnableOnReboot => "enable_on_reboot",
    }
}

wire_enum! {
    AllocationAlgorithm {
        BreadthFirst => "breadth_first",
        DepthFirst => "depth_first",
    }
}

wire_enum! {
    VusbOperations {
        Attach => "attach",
        Plug => "plug",
        Unplug => "unplug",
    }
}

wire_enum! {
    ClusterOperation {
        Add => "add",
        Remove => "remove",
        Enable => "enable",
        Disable => "disable",
        Destroy => "destroy",
    }
}

wire_enum! {
    ClusterHostOperation {
        Enable => "enable",
        Disable => "disable",
        Destroy => "destroy",
    }
}

wire_enum! {
    PvsProxyStatus {
        Stopped => "stopped",
        Initialised => "initialised",
        Caching => "caching",
        IncompatibleWriteCacheMode => "incompatible_write_cache_mode",
        IncompatibleProtocolVersion => "incompatible_protocol_version",
    }
}

wire_enum! {
    TristateType {
        Yes => "yes",
        No => "no",
        Unspecified => "unspecified",
    }
}

// ---------------------------------------------------------------------------
// Event object kinds
// ---------------------------------------------------------------------------

wire_enum! {
    /// The class of object an event's snapshot describes. This is the
    /// type tag driving the polymorphic snapshot decode.
    ObjectKind {
        Pool => "pool",
        Patch => "patch",
        PoolPatch => "pool_patch",
        PoolUpdate => "pool_update",
        Vm => "vm",
        VmMetrics => "vm_metrics",
        VmGuestMetrics => "vm_guest_metrics",
        Vmpp => "vmpp",
        Vmss => "vmss",
        VmAppliance => "vm_appliance",
        DrTask => "dr_task",
        Host => "host",
        HostCrashdump => "host_crashdump",
        HostPatch => "host_patch",
        HostMetrics => "host_metrics",
        HostCpu => "host_cpu",
        Network => "network",
        Vif => "vif",
        VifMetrics => "vif_metrics",
        Pif => "pif",
        PifMetrics => "pif_metrics",
        Bond => "bond",
        Vlan => "vlan",
        Sm => "sm",
        Sr => "sr",
        Vdi => "vdi",
        Vbd => "vbd",
        VbdMetrics => "vbd_metrics",
        Pbd => "pbd",
        Crashdump => "crashdump",
        Vtpm => "vtpm",
        Console => "console",
        User => "user",
        Blob => "blob",
        Message => "message",
        Secret => "secret",
        Tunnel => "tunnel",
        NetworkSriov => "network_sriov",
        Pci => "pci",
        Pgpu => "pgpu",
        GpuGroup => "gpu_group",
        Vgpu => "vgpu",
        VgpuType => "vgpu_type",
        PvsSite => "pvs_site",
        PvsServer => "pvs_server",
        PvsProxy => "pvs_proxy",
        PvsCacheStorage => "pvs_cache_storage",
        Feature => "feature",
        SdnController => "sdn_controller",
        Pusb => "pusb",
        UsbGroup => "usb_group",
        Vusb => "vusb",
        Cluster => "cluster",
        ClusterHost => "cluster_host",
        Certificate => "certificate",
        Task => "task",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_exact_tokens() {
        assert_eq!(VmPowerState::decode("Running"), VmPowerState::Running);
        assert_eq!(EventOperation::decode("mod"), EventOperation::Mod);
        assert_eq!(VbdType::decode("CD"), VbdType::Cd);
    }

    #[test]
    fn decode_is_case_insensitive() {
        assert_eq!(VmPowerState::decode("running"), VmPowerState::Running);
        assert_eq!(VmPowerState::decode("RUNNING"), VmPowerState::Running);
        assert_eq!(
            AfterApplyGuidance::decode("restarthvm"),
            AfterApplyGuidance::RestartHvm
        );
        assert_eq!(
            AfterApplyGuidance::decode("RESTARTHVM"),
            AfterApplyGuidance::RestartHvm
        );
    }

    #[test]
    fn decode_folds_hyphens_and_underscores() {
        assert_eq!(BondMode::decode("balance-slb"), BondMode::BalanceSlb);
        assert_eq!(BondMode::decode("BALANCE-SLB"), BondMode::BalanceSlb);
        assert_eq!(BondMode::decode("balance_slb"), BondMode::BalanceSlb);
        assert_eq!(BondMode::decode("BALANCE_SLB"), BondMode::BalanceSlb);
    }

    #[test]
    fn decode_unknown_token_yields_sentinel() {
        assert_eq!(VmPowerState::decode("Hibernated"), VmPowerState::Unrecognized);
        assert_eq!(ObjectKind::decode("quantum_vm"), ObjectKind::Unrecognized);
        assert_eq!(BondMode::decode(""), BondMode::Unrecognized);
    }

    #[test]
    fn wire_is_exact_not_normalized() {
        assert_eq!(AfterApplyGuidance::RestartHvm.wire(), "restartHVM");
        assert_eq!(BondMode::BalanceSlb.wire(), "balance-slb");
        assert_eq!(PrimaryAddressType::Ipv4.wire(), "IPv4");
        assert_eq!(VmOperations::ChangingVcpus.wire(), "changing_VCPUs");
    }

    #[test]
    fn roundtrip_holds_for_every_constant() {
        fn check<E: WireEnum + std::fmt::Debug>() {
            for &v in E::all() {
                assert_eq!(E::decode(v.wire()), v, "roundtrip failed for {v:?}");
            }
        }
        check::<VmPowerState>();
        check::<VmOperations>();
        check::<OnNormalExit>();
        check::<OnCrashBehaviour>();
        check::<DomainType>();
        check::<HostAllowedOperations>();
        check::<HostDisplay>();
        check::<PoolAllowedOperations>();
        check::<TaskAllowedOperations>();
        check::<TaskStatusType>();
        check::<AfterApplyGuidance>();
        check::<UpdateAfterApplyGuidance>();
        check::<LivepatchStatus>();
        check::<StorageOperations>();
        check::<VdiOperations>();
        check::<VdiType>();
        check::<OnBoot>();
        check::<VbdOperations>();
        check::<VbdType>();
        check::<VbdMode>();
        check::<IpConfigurationMode>();
        check::<Ipv6ConfigurationMode>();
        check::<PrimaryAddressType>();
        check::<PifIgmpStatus>();
        check::<BondMode>();
        check::<SriovConfigurationMode>();
        check::<NetworkOperations>();
        check::<NetworkDefaultLockingMode>();
        check::<NetworkPurpose>();
        check::<VifOperations>();
        check::<VifLockingMode>();
        check::<VifIpv4ConfigurationMode>();
        check::<VifIpv6ConfigurationMode>();
        check::<SdnControllerProtocol>();
        check::<EventOperation>();
        check::<ConsoleProtocol>();
        check::<VmssType>();
        check::<VmssFrequency>();
        check::<VmppBackupFrequency>();
        check::<VgpuTypeImplementation>();
        check::<PgpuDom0Access>();
        check::<AllocationAlgorithm>();
        check::<VusbOperations>();
        check::<ClusterOperation>();
        check::<ClusterHostOperation>();
        check::<PvsProxyStatus>();
        check::<TristateType>();
        check::<ObjectKind>();
    }

    #[test]
    #[should_panic(expected = "cannot encode VmPowerState::Unrecognized")]
    fn wire_of_sentinel_panics() {
        let _ = VmPowerState::Unrecognized.wire();
    }

    #[test]
    fn display_is_wire_token_or_sentinel_literal() {
        assert_eq!(BondMode::BalanceSlb.to_string(), "balance-slb");
        assert_eq!(BondMode::Unrecognized.to_string(), "UNRECOGNIZED");
    }

    #[test]
    fn all_excludes_sentinel() {
        assert!(!VmPowerState::all().contains(&VmPowerState::Unrecognized));
        assert_eq!(VmPowerState::all().len(), 4);
        assert_eq!(ObjectKind::all().len(), 56);
    }
}

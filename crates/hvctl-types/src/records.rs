//! Typed record aggregates decoded field-by-field from wire maps.
//!
//! Field sets and wire key names are fixed by the remote schema version.
//! Decoding is total over the key set: every declared field is decoded
//! independently by key name, and a missing key yields `None` rather
//! than an error. No record retains a reference to its wire map.

use crate::enums::{
    DomainType, HostAllowedOperations, HostDisplay, IpConfigurationMode, Ipv6ConfigurationMode,
    OnBoot, OnCrashBehaviour, OnNormalExit, PifIgmpStatus, PoolAllowedOperations,
    PrimaryAddressType, VdiOperations, VdiType, VmOperations, VmPowerState,
};
use crate::marshal::{
    as_object, to_bool, to_datetime, to_double, to_enum, to_long, to_map, to_ref, to_set,
    to_string, DecodeError,
};
use crate::refs::{
    BlobRef, BondRef, ConsoleRef, CrashdumpRef, FeatureRef, GpuGroupRef, HostCpuRef,
    HostCrashdumpRef, HostMetricsRef, HostPatchRef, HostRef, NetworkRef, NetworkSriovRef, PbdRef,
    PciRef, PgpuRef, PifMetricsRef, PifRef, PoolRef, PoolUpdateRef, PusbRef, SrRef, TunnelRef,
    VbdRef, VdiRef, VgpuRef, VgpuTypeRef, VifRef, VlanRef, VmApplianceRef, VmGuestMetricsRef,
    VmMetricsRef, VmppRef, VmRef, VmssRef, VtpmRef, VusbRef,
};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::BTreeMap;

type Strings = BTreeMap<String, String>;

/// All the fields of a virtual machine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VmRecord {
    pub uuid: Option<String>,
    pub allowed_operations: Option<Vec<VmOperations>>,
    pub current_operations: Option<BTreeMap<String, VmOperations>>,
    pub power_state: Option<VmPowerState>,
    pub name_label: Option<String>,
    pub name_description: Option<String>,
    pub user_version: Option<i64>,
    pub is_a_template: Option<bool>,
    pub is_default_template: Option<bool>,
    pub suspend_vdi: Option<VdiRef>,
    pub resident_on: Option<HostRef>,
    pub affinity: Option<HostRef>,
    pub memory_overhead: Option<i64>,
    pub memory_target: Option<i64>,
    pub memory_static_max: Option<i64>,
    pub memory_dynamic_max: Option<i64>,
    pub memory_dynamic_min: Option<i64>,
    pub memory_static_min: Option<i64>,
    pub vcpus_params: Option<Strings>,
    pub vcpus_max: Option<i64>,
    pub vcpus_at_startup: Option<i64>,
    pub actions_after_shutdown: Option<OnNormalExit>,
    pub actions_after_reboot: Option<OnNormalExit>,
    pub actions_after_crash: Option<OnCrashBehaviour>,
    pub consoles: Option<Vec<ConsoleRef>>,
    pub vifs: Option<Vec<VifRef>>,
    pub vbds: Option<Vec<VbdRef>>,
    pub vusbs: Option<Vec<VusbRef>>,
    pub crash_dumps: Option<Vec<CrashdumpRef>>,
    pub vtpms: Option<Vec<VtpmRef>>,
    pub pv_bootloader: Option<String>,
    pub pv_kernel: Option<String>,
    pub pv_ramdisk: Option<String>,
    pub pv_args: Option<String>,
    pub pv_bootloader_args: Option<String>,
    pub pv_legacy_args: Option<String>,
    pub hvm_boot_policy: Option<String>,
    pub hvm_boot_params: Option<Strings>,
    pub hvm_shadow_multiplier: Option<f64>,
    pub platform: Option<Strings>,
    pub pci_bus: Option<String>,
    pub other_config: Option<Strings>,
    pub domid: Option<i64>,
    pub domarch: Option<String>,
    pub last_boot_cpu_flags: Option<Strings>,
    pub is_control_domain: Option<bool>,
    pub metrics: Option<VmMetricsRef>,
    pub guest_metrics: Option<VmGuestMetricsRef>,
    pub last_booted_record: Option<String>,
    pub recommendations: Option<String>,
    pub xenstore_data: Option<Strings>,
    pub ha_always_run: Option<bool>,
    pub ha_restart_priority: Option<String>,
    pub is_a_snapshot: Option<bool>,
    pub snapshot_of: Option<VmRef>,
    pub snapshots: Option<Vec<VmRef>>,
    pub snapshot_time: Option<DateTime<Utc>>,
    pub transportable_snapshot_id: Option<String>,
    pub blobs: Option<BTreeMap<String, BlobRef>>,
    pub tags: Option<Vec<String>>,
    pub blocked_operations: Option<BTreeMap<VmOperations, String>>,
    pub snapshot_info: Option<Strings>,
    pub snapshot_metadata: Option<String>,
    pub parent: Option<VmRef>,
    pub children: Option<Vec<VmRef>>,
    pub bios_strings: Option<Strings>,
    pub protection_policy: Option<VmppRef>,
    pub is_snapshot_from_vmpp: Option<bool>,
    pub snapshot_schedule: Option<VmssRef>,
    pub is_vmss_snapshot: Option<bool>,
    pub appliance: Option<VmApplianceRef>,
    pub start_delay: Option<i64>,
    pub shutdown_delay: Option<i64>,
    pub order: Option<i64>,
    pub vgpus: Option<Vec<VgpuRef>>,
    pub attached_pcis: Option<Vec<PciRef>>,
    pub suspend_sr: Option<SrRef>,
    pub version: Option<i64>,
    pub generation_id: Option<String>,
    pub hardware_platform_version: Option<i64>,
    pub has_vendor_device: Option<bool>,
    pub requires_reboot: Option<bool>,
    pub reference_label: Option<String>,
    pub domain_type: Option<DomainType>,
    pub nvram: Option<Strings>,
}

impl VmRecord {
    /// Decode a VM record from its wire map.
    pub fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        let map = as_object(value)?;
        Ok(Self {
            uuid: to_string(map.get("uuid"))?,
            allowed_operations: to_set(map.get("allowed_operations"), to_enum::<VmOperations>)?,
            current_operations: to_map(
                map.get("current_operations"),
                str::to_owned,
                to_enum::<VmOperations>,
            )?,
            power_state: to_enum(map.get("power_state"))?,
            name_label: to_string(map.get("name_label"))?,
            name_description: to_string(map.get("name_description"))?,
            user_version: to_long(map.get("user_version"))?,
            is_a_template: to_bool(map.get("is_a_template"))?,
            is_default_template: to_bool(map.get("is_default_template"))?,
            suspend_vdi: to_ref(map.get("suspend_VDI"))?,
            resident_on: to_ref(map.get("resident_on"))?,
            affinity: to_ref(map.get("affinity"))?,
            memory_overhead: to_long(map.get("memory_overhead"))?,
            memory_target: to_long(map.get("memory_target"))?,
            memory_static_max: to_long(map.get("memory_static_max"))?,
            memory_dynamic_max: to_long(map.get("memory_dynamic_max"))?,
            memory_dynamic_min: to_long(map.get("memory_dynamic_min"))?,
            memory_static_min: to_long(map.get("memory_static_min"))?,
            vcpus_params: to_map(map.get("VCPUs_params"), str::to_owned, to_string)?,
            vcpus_max: to_long(map.get("VCPUs_max"))?,
            vcpus_at_startup: to_long(map.get("VCPUs_at_startup"))?,
            actions_after_shutdown: to_enum(map.get("actions_after_shutdown"))?,
            actions_after_reboot: to_enum(map.get("actions_after_reboot"))?,
            actions_after_crash: to_enum(map.get("actions_after_crash"))?,
            consoles: to_set(map.get("consoles"), to_ref::<ConsoleRef>)?,
            vifs: to_set(map.get("VIFs"), to_ref::<VifRef>)?,
            vbds: to_set(map.get("VBDs"), to_ref::<VbdRef>)?,
            vusbs: to_set(map.get("VUSBs"), to_ref::<VusbRef>)?,
            crash_dumps: to_set(map.get("crash_dumps"), to_ref::<CrashdumpRef>)?,
            vtpms: to_set(map.get("VTPMs"), to_ref::<VtpmRef>)?,
            pv_bootloader: to_string(map.get("PV_bootloader"))?,
            pv_kernel: to_string(map.get("PV_kernel"))?,
            pv_ramdisk: to_string(map.get("PV_ramdisk"))?,
            pv_args: to_string(map.get("PV_args"))?,
            pv_bootloader_args: to_string(map.get("PV_bootloader_args"))?,
            pv_legacy_args: to_string(map.get("PV_legacy_args"))?,
            hvm_boot_policy: to_string(map.get("HVM_boot_policy"))?,
            hvm_boot_params: to_map(map.get("HVM_boot_params"), str::to_owned, to_string)?,
            hvm_shadow_multiplier: to_double(map.get("HVM_shadow_multiplier"))?,
            platform: to_map(map.get("platform"), str::to_owned, to_string)?,
            pci_bus: to_string(map.get("PCI_bus"))?,
            other_config: to_map(map.get("other_config"), str::to_owned, to_string)?,
            domid: to_long(map.get("domid"))?,
            domarch: to_string(map.get("domarch"))?,
            last_boot_cpu_flags: to_map(map.get("last_boot_CPU_flags"), str::to_owned, to_string)?,
            is_control_domain: to_bool(map.get("is_control_domain"))?,
            metrics: to_ref(map.get("metrics"))?,
            guest_metrics: to_ref(map.get("guest_metrics"))?,
            last_booted_record: to_string(map.get("last_booted_record"))?,
            recommendations: to_string(map.get("recommendations"))?,
            xenstore_data: to_map(map.get("xenstore_data"), str::to_owned, to_string)?,
            ha_always_run: to_bool(map.get("ha_always_run"))?,
            ha_restart_priority: to_string(map.get("ha_restart_priority"))?,
            is_a_snapshot: to_bool(map.get("is_a_snapshot"))?,
            snapshot_of: to_ref(map.get("snapshot_of"))?,
            snapshots: to_set(map.get("snapshots"), to_ref::<VmRef>)?,
            snapshot_time: to_datetime(map.get("snapshot_time"))?,
            transportable_snapshot_id: to_string(map.get("transportable_snapshot_id"))?,
            blobs: to_map(map.get("blobs"), str::to_owned, to_ref::<BlobRef>)?,
            tags: to_set(map.get("tags"), to_string)?,
            blocked_operations: to_map(
                map.get("blocked_operations"),
                VmOperations::decode,
                to_string,
            )?,
            snapshot_info: to_map(map.get("snapshot_info"), str::to_owned, to_string)?,
            snapshot_metadata: to_string(map.get("snapshot_metadata"))?,
            parent: to_ref(map.get("parent"))?,
            children: to_set(map.get("children"), to_ref::<VmRef>)?,
            bios_strings: to_map(map.get("bios_strings"), str::to_owned, to_string)?,
            protection_policy: to_ref(map.get("protection_policy"))?,
            is_snapshot_from_vmpp: to_bool(map.get("is_snapshot_from_vmpp"))?,
            snapshot_schedule: to_ref(map.get("snapshot_schedule"))?,
            is_vmss_snapshot: to_bool(map.get("is_vmss_snapshot"))?,
            appliance: to_ref(map.get("appliance"))?,
            start_delay: to_long(map.get("start_delay"))?,
            shutdown_delay: to_long(map.get("shutdown_delay"))?,
            order: to_long(map.get("order"))?,
            vgpus: to_set(map.get("VGPUs"), to_ref::<VgpuRef>)?,
            attached_pcis: to_set(map.get("attached_PCIs"), to_ref::<PciRef>)?,
            suspend_sr: to_ref(map.get("suspend_SR"))?,
            version: to_long(map.get("version"))?,
            generation_id: to_string(map.get("generation_id"))?,
            hardware_platform_version: to_long(map.get("hardware_platform_version"))?,
            has_vendor_device: to_bool(map.get("has_vendor_device"))?,
            requires_reboot: to_bool(map.get("requires_reboot"))?,
            reference_label: to_string(map.get("reference_label"))?,
            domain_type: to_enum(map.get("domain_type"))?,
            nvram: to_map(map.get("NVRAM"), str::to_owned, to_string)?,
        })
    }
}

/// All the fields of a physical host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostRecord {
    pub uuid: Option<String>,
    pub name_label: Option<String>,
    pub name_description: Option<String>,
    pub memory_overhead: Option<i64>,
    pub allowed_operations: Option<Vec<HostAllowedOperations>>,
    pub current_operations: Option<BTreeMap<String, HostAllowedOperations>>,
    pub api_version_major: Option<i64>,
    pub api_version_minor: Option<i64>,
    pub api_version_vendor: Option<String>,
    pub api_version_vendor_implementation: Option<Strings>,
    pub enabled: Option<bool>,
    pub software_version: Option<Strings>,
    pub other_config: Option<Strings>,
    pub capabilities: Option<Vec<String>>,
    pub cpu_configuration: Option<Strings>,
    pub sched_policy: Option<String>,
    pub supported_bootloaders: Option<Vec<String>>,
    pub resident_vms: Option<Vec<VmRef>>,
    pub logging: Option<Strings>,
    pub pifs: Option<Vec<PifRef>>,
    pub suspend_image_sr: Option<SrRef>,
    pub crash_dump_sr: Option<SrRef>,
    pub crashdumps: Option<Vec<HostCrashdumpRef>>,
    pub patches: Option<Vec<HostPatchRef>>,
    pub updates: Option<Vec<PoolUpdateRef>>,
    pub pbds: Option<Vec<PbdRef>>,
    pub host_cpus: Option<Vec<HostCpuRef>>,
    pub cpu_info: Option<Strings>,
    pub hostname: Option<String>,
    pub address: Option<String>,
    pub metrics: Option<HostMetricsRef>,
    pub license_params: Option<Strings>,
    pub ha_statefiles: Option<Vec<String>>,
    pub ha_network_peers: Option<Vec<String>>,
    pub blobs: Option<BTreeMap<String, BlobRef>>,
    pub tags: Option<Vec<String>>,
    pub external_auth_type: Option<String>,
    pub external_auth_service_name: Option<String>,
    pub external_auth_configuration: Option<Strings>,
    pub edition: Option<String>,
    pub license_server: Option<Strings>,
    pub bios_strings: Option<Strings>,
    pub power_on_mode: Option<String>,
    pub power_on_config: Option<Strings>,
    pub local_cache_sr: Option<SrRef>,
    pub chipset_info: Option<Strings>,
    pub pcis: Option<Vec<PciRef>>,
    pub pgpus: Option<Vec<PgpuRef>>,
    pub pusbs: Option<Vec<PusbRef>>,
    pub ssl_legacy: Option<bool>,
    pub guest_vcpus_params: Option<Strings>,
    pub display: Option<HostDisplay>,
    pub virtual_hardware_platform_versions: Option<Vec<i64>>,
    pub control_domain: Option<VmRef>,
    pub updates_requiring_reboot: Option<Vec<PoolUpdateRef>>,
    pub features: Option<Vec<FeatureRef>>,
    pub iscsi_iqn: Option<String>,
    pub multipathing: Option<bool>,
    pub uefi_certificates: Option<String>,
}

impl HostRecord {
    /// Decode a host record from its wire map.
    pub fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        let map = as_object(value)?;
        Ok(Self {
            uuid: to_string(map.get("uuid"))?,
            name_label: to_string(map.get("name_label"))?,
            name_description: to_string(map.get("name_description"))?,
            memory_overhead: to_long(map.get("memory_overhead"))?,
            allowed_operations: to_set(
                map.get("allowed_operations"),
                to_enum::<HostAllowedOperations>,
            )?,
            current_operations: to_map(
                map.get("current_operations"),
                str::to_owned,
                to_enum::<HostAllowedOperations>,
            )?,
            api_version_major: to_long(map.get("API_version_major"))?,
            api_version_minor: to_long(map.get("API_version_minor"))?,
            api_version_vendor: to_string(map.get("API_version_vendor"))?,
            api_version_vendor_implementation: to_map(
                map.get("API_version_vendor_implementation"),
                str::to_owned,
                to_string,
            )?,
            enabled: to_bool(map.get("enabled"))?,
            software_version: to_map(map.get("software_version"), str::to_owned, to_string)?,
            other_config: to_map(map.get("other_config"), str::to_owned, to_string)?,
            capabilities: to_set(map.get("capabilities"), to_string)?,
            cpu_configuration: to_map(map.get("cpu_configuration"), str::to_owned, to_string)?,
            sched_policy: to_string(map.get("sched_policy"))?,
            supported_bootloaders: to_set(map.get("supported_bootloaders"), to_string)?,
            resident_vms: to_set(map.get("resident_VMs"), to_ref::<VmRef>)?,
            logging: to_map(map.get("logging"), str::to_owned, to_string)?,
            pifs: to_set(map.get("PIFs"), to_ref::<PifRef>)?,
            suspend_image_sr: to_ref(map.get("suspend_image_sr"))?,
            crash_dump_sr: to_ref(map.get("crash_dump_sr"))?,
            crashdumps: to_set(map.get("crashdumps"), to_ref::<HostCrashdumpRef>)?,
            patches: to_set(map.get("patches"), to_ref::<HostPatchRef>)?,
            updates: to_set(map.get("updates"), to_ref::<PoolUpdateRef>)?,
            pbds: to_set(map.get("PBDs"), to_ref::<PbdRef>)?,
            host_cpus: to_set(map.get("host_CPUs"), to_ref::<HostCpuRef>)?,
            cpu_info: to_map(map.get("cpu_info"), str::to_owned, to_string)?,
            hostname: to_string(map.get("hostname"))?,
            address: to_string(map.get("address"))?,
            metrics: to_ref(map.get("metrics"))?,
            license_params: to_map(map.get("license_params"), str::to_owned, to_string)?,
            ha_statefiles: to_set(map.get("ha_statefiles"), to_string)?,
            ha_network_peers: to_set(map.get("ha_network_peers"), to_string)?,
            blobs: to_map(map.get("blobs"), str::to_owned, to_ref::<BlobRef>)?,
            tags: to_set(map.get("tags"), to_string)?,
            external_auth_type: to_string(map.get("external_auth_type"))?,
            external_auth_service_name: to_string(map.get("external_auth_service_name"))?,
            external_auth_configuration: to_map(
                map.get("external_auth_configuration"),
                str::to_owned,
                to_string,
            )?,
            edition: to_string(map.get("edition"))?,
            license_server: to_map(map.get("license_server"), str::to_owned, to_string)?,
            bios_strings: to_map(map.get("bios_strings"), str::to_owned, to_string)?,
            power_on_mode: to_string(map.get("power_on_mode"))?,
            power_on_config: to_map(map.get("power_on_config"), str::to_owned, to_string)?,
            local_cache_sr: to_ref(map.get("local_cache_sr"))?,
            chipset_info: to_map(map.get("chipset_info"), str::to_owned, to_string)?,
            pcis: to_set(map.get("PCIs"), to_ref::<PciRef>)?,
            pgpus: to_set(map.get("PGPUs"), to_ref::<PgpuRef>)?,
            pusbs: to_set(map.get("PUSBs"), to_ref::<PusbRef>)?,
            ssl_legacy: to_bool(map.get("ssl_legacy"))?,
            guest_vcpus_params: to_map(map.get("guest_VCPUs_params"), str::to_owned, to_string)?,
            display: to_enum(map.get("display"))?,
            virtual_hardware_platform_versions: to_set(
                map.get("virtual_hardware_platform_versions"),
                to_long,
            )?,
            control_domain: to_ref(map.get("control_domain"))?,
            updates_requiring_reboot: to_set(
                map.get("updates_requiring_reboot"),
                to_ref::<PoolUpdateRef>,
            )?,
            features: to_set(map.get("features"), to_ref::<FeatureRef>)?,
            iscsi_iqn: to_string(map.get("iscsi_iqn"))?,
            multipathing: to_bool(map.get("multipathing"))?,
            uefi_certificates: to_string(map.get("uefi_certificates"))?,
        })
    }
}

/// All the fields of a resource pool.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PoolRecord {
    pub uuid: Option<String>,
    pub name_label: Option<String>,
    pub name_description: Option<String>,
    pub master: Option<HostRef>,
    pub default_sr: Option<SrRef>,
    pub suspend_image_sr: Option<SrRef>,
    pub crash_dump_sr: Option<SrRef>,
    pub other_config: Option<Strings>,
    pub ha_enabled: Option<bool>,
    pub ha_configuration: Option<Strings>,
    pub ha_statefiles: Option<Vec<String>>,
    pub ha_host_failures_to_tolerate: Option<i64>,
    pub ha_plan_exists_for: Option<i64>,
    pub ha_allow_overcommit: Option<bool>,
    pub ha_overcommitted: Option<bool>,
    pub blobs: Option<BTreeMap<String, BlobRef>>,
    pub tags: Option<Vec<String>>,
    pub gui_config: Option<Strings>,
    pub health_check_config: Option<Strings>,
    pub wlb_url: Option<String>,
    pub wlb_username: Option<String>,
    pub wlb_enabled: Option<bool>,
    pub wlb_verify_cert: Option<bool>,
    pub redo_log_enabled: Option<bool>,
    pub redo_log_vdi: Option<VdiRef>,
    pub vswitch_controller: Option<String>,
    pub restrictions: Option<Strings>,
    pub metadata_vdis: Option<Vec<VdiRef>>,
    pub ha_cluster_stack: Option<String>,
    pub allowed_operations: Option<Vec<PoolAllowedOperations>>,
    pub current_operations: Option<BTreeMap<String, PoolAllowedOperations>>,
    pub guest_agent_config: Option<Strings>,
    pub cpu_info: Option<Strings>,
    pub policy_no_vendor_device: Option<bool>,
    pub live_patching_disabled: Option<bool>,
    pub igmp_snooping_enabled: Option<bool>,
    pub uefi_certificates: Option<String>,
}

impl PoolRecord {
    /// Decode a pool record from its wire map.
    pub fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        let map = as_object(value)?;
        Ok(Self {
            uuid: to_string(map.get("uuid"))?,
            name_label: to_string(map.get("name_label"))?,
            name_description: to_string(map.get("name_description"))?,
            master: to_ref(map.get("master"))?,
            default_sr: to_ref(map.get("default_SR"))?,
            suspend_image_sr: to_ref(map.get("suspend_image_SR"))?,
            crash_dump_sr: to_ref(map.get("crash_dump_SR"))?,
            other_config: to_map(map.get("other_config"), str::to_owned, to_string)?,
            ha_enabled: to_bool(map.get("ha_enabled"))?,
            ha_configuration: to_map(map.get("ha_configuration"), str::to_owned, to_string)?,
            ha_statefiles: to_set(map.get("ha_statefiles"), to_string)?,
            ha_host_failures_to_tolerate: to_long(map.get("ha_host_failures_to_tolerate"))?,
            ha_plan_exists_for: to_long(map.get("ha_plan_exists_for"))?,
            ha_allow_overcommit: to_bool(map.get("ha_allow_overcommit"))?,
            ha_overcommitted: to_bool(map.get("ha_overcommitted"))?,
            blobs: to_map(map.get("blobs"), str::to_owned, to_ref::<BlobRef>)?,
            tags: to_set(map.get("tags"), to_string)?,
            gui_config: to_map(map.get("gui_config"), str::to_owned, to_string)?,
            health_check_config: to_map(map.get("health_check_config"), str::to_owned, to_string)?,
            wlb_url: to_string(map.get("wlb_url"))?,
            wlb_username: to_string(map.get("wlb_username"))?,
            wlb_enabled: to_bool(map.get("wlb_enabled"))?,
            wlb_verify_cert: to_bool(map.get("wlb_verify_cert"))?,
            redo_log_enabled: to_bool(map.get("redo_log_enabled"))?,
            redo_log_vdi: to_ref(map.get("redo_log_vdi"))?,
            vswitch_controller: to_string(map.get("vswitch_controller"))?,
            restrictions: to_map(map.get("restrictions"), str::to_owned, to_string)?,
            metadata_vdis: to_set(map.get("metadata_VDIs"), to_ref::<VdiRef>)?,
            ha_cluster_stack: to_string(map.get("ha_cluster_stack"))?,
            allowed_operations: to_set(
                map.get("allowed_operations"),
                to_enum::<PoolAllowedOperations>,
            )?,
            current_operations: to_map(
                map.get("current_operations"),
                str::to_owned,
                to_enum::<PoolAllowedOperations>,
            )?,
            guest_agent_config: to_map(map.get("guest_agent_config"), str::to_owned, to_string)?,
            cpu_info: to_map(map.get("cpu_info"), str::to_owned, to_string)?,
            policy_no_vendor_device: to_bool(map.get("policy_no_vendor_device"))?,
            live_patching_disabled: to_bool(map.get("live_patching_disabled"))?,
            igmp_snooping_enabled: to_bool(map.get("igmp_snooping_enabled"))?,
            uefi_certificates: to_string(map.get("uefi_certificates"))?,
        })
    }
}

/// All the fields of a virtual disk image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VdiRecord {
    pub uuid: Option<String>,
    pub name_label: Option<String>,
    pub name_description: Option<String>,
    pub allowed_operations: Option<Vec<VdiOperations>>,
    pub current_operations: Option<BTreeMap<String, VdiOperations>>,
    pub sr: Option<SrRef>,
    pub vbds: Option<Vec<VbdRef>>,
    pub crash_dumps: Option<Vec<CrashdumpRef>>,
    pub virtual_size: Option<i64>,
    pub physical_utilisation: Option<i64>,
    pub type_: Option<VdiType>,
    pub sharable: Option<bool>,
    pub read_only: Option<bool>,
    pub other_config: Option<Strings>,
    pub storage_lock: Option<bool>,
    pub location: Option<String>,
    pub managed: Option<bool>,
    pub missing: Option<bool>,
    pub parent: Option<VdiRef>,
    pub xenstore_data: Option<Strings>,
    pub sm_config: Option<Strings>,
    pub is_a_snapshot: Option<bool>,
    pub snapshot_of: Option<VdiRef>,
    pub snapshots: Option<Vec<VdiRef>>,
    pub snapshot_time: Option<DateTime<Utc>>,
    pub tags: Option<Vec<String>>,
    pub allow_caching: Option<bool>,
    pub on_boot: Option<OnBoot>,
    pub metadata_of_pool: Option<PoolRef>,
    pub metadata_latest: Option<bool>,
    pub is_tools_iso: Option<bool>,
    pub cbt_enabled: Option<bool>,
}

impl VdiRecord {
    /// Decode a VDI record from its wire map.
    pub fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        let map = as_object(value)?;
        Ok(Self {
            uuid: to_string(map.get("uuid"))?,
            name_label: to_string(map.get("name_label"))?,
            name_description: to_string(map.get("name_description"))?,
            allowed_operations: to_set(map.get("allowed_operations"), to_enum::<VdiOperations>)?,
            current_operations: to_map(
                map.get("current_operations"),
                str::to_owned,
                to_enum::<VdiOperations>,
            )?,
            sr: to_ref(map.get("SR"))?,
            vbds: to_set(map.get("VBDs"), to_ref::<VbdRef>)?,
            crash_dumps: to_set(map.get("crash_dumps"), to_ref::<CrashdumpRef>)?,
            virtual_size: to_long(map.get("virtual_size"))?,
            physical_utilisation: to_long(map.get("physical_utilisation"))?,
            type_: to_enum(map.get("type"))?,
            sharable: to_bool(map.get("sharable"))?,
            read_only: to_bool(map.get("read_only"))?,
            other_config: to_map(map.get("other_config"), str::to_owned, to_string)?,
            storage_lock: to_bool(map.get("storage_lock"))?,
            location: to_string(map.get("location"))?,
            managed: to_bool(map.get("managed"))?,
            missing: to_bool(map.get("missing"))?,
            parent: to_ref(map.get("parent"))?,
            xenstore_data: to_map(map.get("xenstore_data"), str::to_owned, to_string)?,
            sm_config: to_map(map.get("sm_config"), str::to_owned, to_string)?,
            is_a_snapshot: to_bool(map.get("is_a_snapshot"))?,
            snapshot_of: to_ref(map.get("snapshot_of"))?,
            snapshots: to_set(map.get("snapshots"), to_ref::<VdiRef>)?,
            snapshot_time: to_datetime(map.get("snapshot_time"))?,
            tags: to_set(map.get("tags"), to_string)?,
            allow_caching: to_bool(map.get("allow_caching"))?,
            on_boot: to_enum(map.get("on_boot"))?,
            metadata_of_pool: to_ref(map.get("metadata_of_pool"))?,
            metadata_latest: to_bool(map.get("metadata_latest"))?,
            is_tools_iso: to_bool(map.get("is_tools_iso"))?,
            cbt_enabled: to_bool(map.get("cbt_enabled"))?,
        })
    }
}

/// All the fields of a physical network interface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PifRecord {
    pub uuid: Option<String>,
    pub device: Option<String>,
    pub network: Option<NetworkRef>,
    pub host: Option<HostRef>,
    pub mac: Option<String>,
    pub mtu: Option<i64>,
    pub vlan: Option<i64>,
    pub metrics: Option<PifMetricsRef>,
    pub physical: Option<bool>,
    pub currently_attached: Option<bool>,
    pub ip_configuration_mode: Option<IpConfigurationMode>,
    pub ip: Option<String>,
    pub netmask: Option<String>,
    pub gateway: Option<String>,
    pub dns: Option<String>,
    pub bond_slave_of: Option<BondRef>,
    pub bond_master_of: Option<Vec<BondRef>>,
    pub vlan_master_of: Option<VlanRef>,
    pub vlan_slave_of: Option<Vec<VlanRef>>,
    pub management: Option<bool>,
    pub other_config: Option<Strings>,
    pub disallow_unplug: Option<bool>,
    pub tunnel_access_pif_of: Option<Vec<TunnelRef>>,
    pub tunnel_transport_pif_of: Option<Vec<TunnelRef>>,
    pub ipv6_configuration_mode: Option<Ipv6ConfigurationMode>,
    pub ipv6: Option<Vec<String>>,
    pub ipv6_gateway: Option<String>,
    pub primary_address_type: Option<PrimaryAddressType>,
    pub managed: Option<bool>,
    pub properties: Option<Strings>,
    pub capabilities: Option<Vec<String>>,
    pub igmp_snooping_status: Option<PifIgmpStatus>,
    pub sriov_physical_pif_of: Option<Vec<NetworkSriovRef>>,
    pub sriov_logical_pif_of: Option<Vec<NetworkSriovRef>>,
    pub pci: Option<PciRef>,
}

impl PifRecord {
    /// Decode a PIF record from its wire map.
    pub fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        let map = as_object(value)?;
        Ok(Self {
            uuid: to_string(map.get("uuid"))?,
            device: to_string(map.get("device"))?,
            network: to_ref(map.get("network"))?,
            host: to_ref(map.get("host"))?,
            mac: to_string(map.get("MAC"))?,
            mtu: to_long(map.get("MTU"))?,
            vlan: to_long(map.get("VLAN"))?,
            metrics: to_ref(map.get("metrics"))?,
            physical: to_bool(map.get("physical"))?,
            currently_attached: to_bool(map.get("currently_attached"))?,
            ip_configuration_mode: to_enum(map.get("ip_configuration_mode"))?,
            ip: to_string(map.get("IP"))?,
            netmask: to_string(map.get("netmask"))?,
            gateway: to_string(map.get("gateway"))?,
            dns: to_string(map.get("DNS"))?,
            bond_slave_of: to_ref(map.get("bond_slave_of"))?,
            bond_master_of: to_set(map.get("bond_master_of"), to_ref::<BondRef>)?,
            vlan_master_of: to_ref(map.get("VLAN_master_of"))?,
            vlan_slave_of: to_set(map.get("VLAN_slave_of"), to_ref::<VlanRef>)?,
            management: to_bool(map.get("management"))?,
            other_config: to_map(map.get("other_config"), str::to_owned, to_string)?,
            disallow_unplug: to_bool(map.get("disallow_unplug"))?,
            tunnel_access_pif_of: to_set(map.get("tunnel_access_PIF_of"), to_ref::<TunnelRef>)?,
            tunnel_transport_pif_of: to_set(
                map.get("tunnel_transport_PIF_of"),
                to_ref::<TunnelRef>,
            )?,
            ipv6_configuration_mode: to_enum(map.get("ipv6_configuration_mode"))?,
            ipv6: to_set(map.get("IPv6"), to_string)?,
            ipv6_gateway: to_string(map.get("ipv6_gateway"))?,
            primary_address_type: to_enum(map.get("primary_address_type"))?,
            managed: to_bool(map.get("managed"))?,
            properties: to_map(map.get("properties"), str::to_owned, to_string)?,
            capabilities: to_set(map.get("capabilities"), to_string)?,
            igmp_snooping_status: to_enum(map.get("igmp_snooping_status"))?,
            sriov_physical_pif_of: to_set(
                map.get("sriov_physical_PIF_of"),
                to_ref::<NetworkSriovRef>,
            )?,
            sriov_logical_pif_of: to_set(
                map.get("sriov_logical_PIF_of"),
                to_ref::<NetworkSriovRef>,
            )?,
            pci: to_ref(map.get("PCI"))?,
        })
    }
}

/// All the fields of a PCI device.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PciRecord {
    pub uuid: Option<String>,
    pub class_name: Option<String>,
    pub vendor_name: Option<String>,
    pub device_name: Option<String>,
    pub host: Option<HostRef>,
    pub pci_id: Option<String>,
    pub dependencies: Option<Vec<PciRef>>,
    pub other_config: Option<Strings>,
    pub subsystem_vendor_name: Option<String>,
    pub subsystem_device_name: Option<String>,
    pub driver_name: Option<String>,
}

impl PciRecord {
    /// Decode a PCI record from its wire map.
    pub fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        let map = as_object(value)?;
        Ok(Self {
            uuid: to_string(map.get("uuid"))?,
            class_name: to_string(map.get("class_name"))?,
            vendor_name: to_string(map.get("vendor_name"))?,
            device_name: to_string(map.get("device_name"))?,
            host: to_ref(map.get("host"))?,
            pci_id: to_string(map.get("pci_id"))?,
            dependencies: to_set(map.get("dependencies"), to_ref::<PciRef>)?,
            other_config: to_map(map.get("other_config"), str::to_owned, to_string)?,
            subsystem_vendor_name: to_string(map.get("subsystem_vendor_name"))?,
            subsystem_device_name: to_string(map.get("subsystem_device_name"))?,
            driver_name: to_string(map.get("driver_name"))?,
        })
    }
}

/// All the fields of a virtual GPU.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VgpuRecord {
    pub uuid: Option<String>,
    pub vm: Option<VmRef>,
    pub gpu_group: Option<GpuGroupRef>,
    pub device: Option<String>,
    pub currently_attached: Option<bool>,
    pub other_config: Option<Strings>,
    pub type_: Option<VgpuTypeRef>,
    pub resident_on: Option<PgpuRef>,
    pub scheduled_to_be_resident_on: Option<PgpuRef>,
    pub compatibility_metadata: Option<Strings>,
    pub extra_args: Option<String>,
    pub pci: Option<PciRef>,
}

impl VgpuRecord {
    /// Decode a vGPU record from its wire map.
    pub fn from_wire(value: &Value) -> Result<Self, DecodeError> {
        let map = as_object(value)?;
        Ok(Self {
            uuid: to_string(map.get("uuid"))?,
            vm: to_ref(map.get("VM"))?,
            gpu_group: to_ref(map.get("GPU_group"))?,
            device: to_string(map.get("device"))?,
            currently_attached: to_bool(map.get("currently_attached"))?,
            other_config: to_map(map.get("other_config"), str::to_owned, to_string)?,
            type_: to_ref(map.get("type"))?,
            resident_on: to_ref(map.get("resident_on"))?,
            scheduled_to_be_resident_on: to_ref(map.get("scheduled_to_be_resident_on"))?,
            compatibility_metadata: to_map(
                map.get("compatibility_metadata"),
                str::to_owned,
                to_string,
            )?,
            extra_args: to_string(map.get("extra_args"))?,
            pci: to_ref(map.get("PCI"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn partial_wire_map_decodes_present_fields_only() {
        let wire = json!({
            "uuid": "8f0c42c0",
            "name_label": "web-01",
            "power_state": "Running",
            "VCPUs_max": "8",
            "is_a_template": false
        });
        let rec = VmRecord::from_wire(&wire).unwrap();
        assert_eq!(rec.uuid.as_deref(), Some("8f0c42c0"));
        assert_eq!(rec.name_label.as_deref(), Some("web-01"));
        assert_eq!(rec.power_state, Some(VmPowerState::Running));
        assert_eq!(rec.vcpus_max, Some(8));
        assert_eq!(rec.is_a_template, Some(false));
        assert_eq!(rec.memory_static_max, None);
        assert_eq!(rec.vifs, None);
        assert_eq!(rec.domain_type, None);
    }

    #[test]
    fn full_vm_shape_fields() {
        let wire = json!({
            "allowed_operations": ["start", "clean_shutdown", "start"],
            "current_operations": {"task1": "clean_reboot"},
            "blocked_operations": {"pool_migrate": "pinned"},
            "VIFs": ["OpaqueRef:vif1", "OpaqueRef:vif2"],
            "snapshot_time": "19700101T00:00:00",
            "actions_after_crash": "coredump_and_restart",
            "suspend_VDI": "OpaqueRef:vdi9"
        });
        let rec = VmRecord::from_wire(&wire).unwrap();
        // duplicate element collapsed, order kept
        assert_eq!(
            rec.allowed_operations,
            Some(vec![VmOperations::Start, VmOperations::CleanShutdown])
        );
        assert_eq!(
            rec.current_operations.unwrap()["task1"],
            VmOperations::CleanReboot
        );
        assert_eq!(
            rec.blocked_operations.unwrap()[&VmOperations::PoolMigrate],
            "pinned"
        );
        assert_eq!(rec.vifs.unwrap().len(), 2);
        assert_eq!(rec.snapshot_time.unwrap().timestamp(), 0);
        assert_eq!(
            rec.actions_after_crash,
            Some(OnCrashBehaviour::CoredumpAndRestart)
        );
        assert_eq!(rec.suspend_vdi.unwrap().id(), "OpaqueRef:vdi9");
    }

    #[test]
    fn forward_compatible_enum_field() {
        let wire = json!({"power_state": "Hibernated"});
        let rec = VmRecord::from_wire(&wire).unwrap();
        assert_eq!(rec.power_state, Some(VmPowerState::Unrecognized));
    }

    #[test]
    fn record_decode_requires_an_object() {
        assert!(VmRecord::from_wire(&json!("not a map")).is_err());
        assert!(HostRecord::from_wire(&json!(["nope"])).is_err());
    }

    #[test]
    fn field_type_mismatch_fails_fast() {
        let wire = json!({"name_label": {"nested": "map"}});
        assert!(VmRecord::from_wire(&wire).is_err());
    }

    #[test]
    fn host_record_subset() {
        let wire = json!({
            "uuid": "h-1",
            "API_version_major": "2",
            "resident_VMs": ["OpaqueRef:vm1"],
            "display": "disable_on_reboot",
            "virtual_hardware_platform_versions": ["0", "2"]
        });
        let rec = HostRecord::from_wire(&wire).unwrap();
        assert_eq!(rec.api_version_major, Some(2));
        assert_eq!(rec.resident_vms.unwrap()[0].id(), "OpaqueRef:vm1");
        assert_eq!(rec.display, Some(HostDisplay::DisableOnReboot));
        assert_eq!(rec.virtual_hardware_platform_versions, Some(vec![0, 2]));
    }

    #[test]
    fn vdi_record_type_and_on_boot() {
        let wire = json!({
            "type": "ha_statefile",
            "on_boot": "reset",
            "virtual_size": "1073741824"
        });
        let rec = VdiRecord::from_wire(&wire).unwrap();
        assert_eq!(rec.type_, Some(VdiType::HaStatefile));
        assert_eq!(rec.on_boot, Some(OnBoot::Reset));
        assert_eq!(rec.virtual_size, Some(1_073_741_824));
    }

    #[test]
    fn pif_record_mixed_case_keys() {
        let wire = json!({
            "MAC": "aa:bb:cc:dd:ee:ff",
            "MTU": "1500",
            "VLAN": "-1",
            "IPv6": ["fe80::1"],
            "primary_address_type": "IPv6",
            "igmp_snooping_status": "unknown"
        });
        let rec = PifRecord::from_wire(&wire).unwrap();
        assert_eq!(rec.mac.as_deref(), Some("aa:bb:cc:dd:ee:ff"));
        assert_eq!(rec.mtu, Some(1500));
        assert_eq!(rec.vlan, Some(-1));
        assert_eq!(rec.ipv6, Some(vec!["fe80::1".to_string()]));
        assert_eq!(rec.primary_address_type, Some(PrimaryAddressType::Ipv6));
        assert_eq!(rec.igmp_snooping_status, Some(PifIgmpStatus::Unknown));
    }
}

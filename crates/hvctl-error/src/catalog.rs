//! The registered failure shapes, in upstream registration order.
//!
//! Every entry is `(code, message template, ordered parameter names)`.
//! Message templates are static descriptions; parameters are carried
//! separately on [`Failure`](crate::Failure) and never interpolated.

use crate::FailureShape;

const fn shape(
    code: &'static str,
    message: &'static str,
    params: &'static [&'static str],
) -> FailureShape {
    FailureShape {
        code,
        message,
        params,
    }
}

/// Every failure shape the remote API can report, in registration order.
/// First registration wins on (hypothetical) duplicate codes.
#[rustfmt::skip]
pub static CATALOG: &[FailureShape] = &[
    shape("ACTIVATION_WHILE_NOT_FREE", "An activation key can only be applied when the edition is set to 'free'.", &[]),
    shape("ADDRESS_VIOLATES_LOCKING_CONSTRAINT", "The specified IP address violates the VIF locking configuration.", &[]),
    shape("AUTH_ALREADY_ENABLED", "External authentication for this server is already enabled.", &[]),
    shape("AUTH_DISABLE_FAILED", "The host failed to disable external authentication.", &["message"]),
    shape("AUTH_DISABLE_FAILED_PERMISSION_DENIED", "The host failed to disable external authentication.", &["message"]),
    shape("AUTH_DISABLE_FAILED_WRONG_CREDENTIALS", "The host failed to disable external authentication.", &["message"]),
    shape("AUTH_ENABLE_FAILED", "The host failed to enable external authentication.", &["message"]),
    shape("AUTH_ENABLE_FAILED_DOMAIN_LOOKUP_FAILED", "The host failed to enable external authentication.", &["message"]),
    shape("AUTH_ENABLE_FAILED_INVALID_ACCOUNT", "The host failed to enable external authentication.", &["message"]),
    shape("AUTH_ENABLE_FAILED_INVALID_OU", "The host failed to enable external authentication.", &["message"]),
    shape("AUTH_ENABLE_FAILED_PERMISSION_DENIED", "The host failed to enable external authentication.", &["message"]),
    shape("AUTH_ENABLE_FAILED_UNAVAILABLE", "The host failed to enable external authentication.", &["message"]),
    shape("AUTH_ENABLE_FAILED_WRONG_CREDENTIALS", "The host failed to enable external authentication.", &["message"]),
    shape("AUTH_IS_DISABLED", "External authentication is disabled, unable to resolve subject name.", &[]),
    shape("AUTH_SERVICE_ERROR", "Error querying the external directory service.", &["message"]),
    shape("AUTH_UNKNOWN_TYPE", "Unknown type of external authentication.", &["type"]),
    shape("BACKUP_SCRIPT_FAILED", "The backup could not be performed because the backup script failed.", &["log"]),
    shape("BALLOONING_TIMEOUT_BEFORE_MIGRATION", "Timeout trying to balloon down memory before VM migration. If the error occurs repeatedly, consider increasing the memory-dynamic-min value.", &[]),
    shape("BOOTLOADER_FAILED", "The bootloader returned an error", &["vm", "msg"]),
    shape("BRIDGE_NAME_EXISTS", "The specified bridge already exists.", &["bridge"]),
    shape("BRIDGE_NOT_AVAILABLE", "Could not find bridge required by VM.", &["bridge"]),
    shape("CANNOT_ADD_TUNNEL_TO_BOND_SLAVE", "This PIF is a bond slave and cannot have a tunnel on it.", &["PIF"]),
    shape("CANNOT_ADD_TUNNEL_TO_SRIOV_LOGICAL", "This is a network SR-IOV logical PIF and cannot have a tunnel on it.", &[]),
    shape("CANNOT_ADD_TUNNEL_TO_VLAN_ON_SRIOV_LOGICAL", "This is a vlan PIF on network SR-IOV and cannot have a tunnel on it.", &[]),
    shape("CANNOT_ADD_VLAN_TO_BOND_SLAVE", "This PIF is a bond slave and cannot have a VLAN on it.", &["PIF"]),
    shape("CANNOT_CHANGE_PIF_PROPERTIES", "This properties of this PIF cannot be changed. Only the properties of non-bonded physical PIFs, or bond masters can be changed.", &[]),
    shape("CANNOT_CONTACT_HOST", "Cannot forward messages because the server cannot be contacted. The server may be switched off or there may be network connectivity problems.", &["host"]),
    shape("CANNOT_CREATE_STATE_FILE", "An HA statefile could not be created, perhaps because no SR with the appropriate capability was found.", &[]),
    shape("CANNOT_DESTROY_DISASTER_RECOVERY_TASK", "The disaster recovery task could not be cleanly destroyed.", &[]),
    shape("CANNOT_DESTROY_SYSTEM_NETWORK", "You tried to destroy a system network: these cannot be destroyed.", &[]),
    shape("CANNOT_ENABLE_REDO_LOG", "Could not enable redo log.", &[]),
    shape("CANNOT_EVACUATE_HOST", "This server cannot be evacuated.", &["errors"]),
    shape("CANNOT_FETCH_PATCH", "The requested update could not be obtained from the master.", &["uuid"]),
    shape("CANNOT_FIND_OEM_BACKUP_PARTITION", "The backup partition to stream the update to cannot be found.", &[]),
    shape("CANNOT_FIND_PATCH", "The requested update could not be found. This can occur when you designate a new master or xe patch-clean. Please upload the update again.", &[]),
    shape("CANNOT_FIND_STATE_PARTITION", "This operation could not be performed because the state partition could not be found", &[]),
    shape("CANNOT_FIND_UPDATE", "The requested update could not be found. Please upload the update again. This can occur when you run xe update-pool-clean before xe update-apply.", &[]),
    shape("CANNOT_FORGET_SRIOV_LOGICAL", "This is a network SR-IOV logical PIF and cannot do forget on it", &[]),
    shape("CANNOT_PLUG_BOND_SLAVE", "This PIF is a bond slave and cannot be plugged.", &["PIF"]),
    shape("CANNOT_PLUG_VIF", "Cannot plug VIF", &[]),
    shape("CANNOT_RESET_CONTROL_DOMAIN", "The power-state of a control domain cannot be reset.", &[]),
    shape("CERTIFICATE_ALREADY_EXISTS", "A certificate already exists with the specified name.", &["name"]),
    shape("CERTIFICATE_CORRUPT", "The specified certificate is corrupt or unreadable.", &["name"]),
    shape("CERTIFICATE_DOES_NOT_EXIST", "The specified certificate does not exist.", &["name"]),
    shape("CERTIFICATE_LIBRARY_CORRUPT", "The certificate library is corrupt or unreadable.", &[]),
    shape("CERTIFICATE_NAME_INVALID", "The specified certificate name is invalid.", &["name"]),
    shape("CHANGE_PASSWORD_REJECTED", "The system rejected the password change request; perhaps the new password was too short?", &[]),
    shape("CLUSTERED_SR_DEGRADED", "An SR is using clustered local storage. It is not safe to reboot a host at the moment.", &[]),
    shape("CLUSTERING_DISABLED", "An operation was attempted while clustering was disabled on the cluster_host.", &[]),
    shape("CLUSTERING_ENABLED", "An operation was attempted while clustering was enabled on the cluster_host.", &[]),
    shape("CLUSTER_ALREADY_EXISTS", "A cluster already exists in the pool.", &[]),
    shape("CLUSTER_CREATE_IN_PROGRESS", "The operation could not be performed because cluster creation is in progress.", &[]),
    shape("CLUSTER_DOES_NOT_HAVE_ONE_NODE", "An operation failed as it expected the cluster to have only one node but found multiple cluster_hosts.", &[]),
    shape("CLUSTER_FORCE_DESTROY_FAILED", "Force destroy failed on a Cluster_host while force destroying the cluster.", &[]),
    shape("CLUSTER_HOST_IS_LAST", "The last cluster host cannot be destroyed. Destroy the cluster instead", &[]),
    shape("CLUSTER_HOST_NOT_JOINED", "Cluster_host operation failed as the cluster_host has not joined the cluster.", &[]),
    shape("CLUSTER_STACK_IN_USE", "The cluster stack is already in use.", &[]),
    shape("COULD_NOT_FIND_NETWORK_INTERFACE_WITH_SPECIFIED_DEVICE_NAME_AND_MAC_ADDRESS", "Could not find a network interface with the specified device name and MAC address.", &["device", "mac"]),
    shape("COULD_NOT_IMPORT_DATABASE", "An error occurred while attempting to import a database from a metadata VDI", &[]),
    shape("COULD_NOT_UPDATE_IGMP_SNOOPING_EVERYWHERE", "The IGMP Snooping setting cannot be applied for some of the host, network(s).", &[]),
    shape("CPU_FEATURE_MASKING_NOT_SUPPORTED", "The CPU does not support masking of features.", &[]),
    shape("CRL_ALREADY_EXISTS", "A CRL already exists with the specified name.", &["name"]),
    shape("CRL_CORRUPT", "The specified CRL is corrupt or unreadable.", &["name"]),
    shape("CRL_DOES_NOT_EXIST", "The specified CRL does not exist.", &["name"]),
    shape("CRL_NAME_INVALID", "The specified CRL name is invalid.", &["name"]),
    shape("DB_UNIQUENESS_CONSTRAINT_VIOLATION", "You attempted an operation which would have resulted in duplicate keys in the database.", &[]),
    shape("DEFAULT_SR_NOT_FOUND", "The default SR reference does not point to a valid SR", &[]),
    shape("DEVICE_ALREADY_ATTACHED", "The device is already attached to a VM", &["device"]),
    shape("DEVICE_ALREADY_DETACHED", "The device is not currently attached", &["device"]),
    shape("DEVICE_ALREADY_EXISTS", "A device with the name given already exists on the selected VM", &["device"]),
    shape("DEVICE_ATTACH_TIMEOUT", "A timeout happened while attempting to attach a device to a VM.", &["type", "ref"]),
    shape("DEVICE_DETACH_REJECTED", "The VM rejected the attempt to detach the device.", &["type", "ref", "msg"]),
    shape("DEVICE_DETACH_TIMEOUT", "A timeout happened while attempting to detach a device from a VM.", &["type", "ref"]),
    shape("DEVICE_NOT_ATTACHED", "The operation could not be performed because the VBD was not connected to the VM.", &[]),
    shape("DISK_VBD_MUST_BE_READWRITE_FOR_HVM", "All VBDs of type 'disk' must be read/write for HVM guests", &[]),
    shape("DOMAIN_BUILDER_ERROR", "An internal error generated by the domain builder.", &["function", "code", "message"]),
    shape("DOMAIN_EXISTS", "The operation could not be performed because a domain still exists for the specified VM.", &["vm", "domid"]),
    shape("DUPLICATE_MAC_SEED", "This MAC seed is already in use by a VM in the pool", &[]),
    shape("DUPLICATE_PIF_DEVICE_NAME", "A PIF with this specified device name already exists.", &["device"]),
    shape("DUPLICATE_VM", "Cannot restore this VM because it would create a duplicate", &["vm"]),
    shape("EVENTS_LOST", "Some events have been lost from the queue and cannot be retrieved.", &[]),
    shape("EVENT_FROM_TOKEN_PARSE_FAILURE", "The event.from token could not be parsed. Valid values include: '', and a value returned from a previous event.from call.", &["token"]),
    shape("EVENT_SUBSCRIPTION_PARSE_FAILURE", "The server failed to parse your event subscription. Valid values include: , class-name, class-name/object-reference.", &["subscription"]),
    shape("FAILED_TO_START_EMULATOR", "An emulator required to run this VM failed to start", &[]),
    shape("FEATURE_REQUIRES_HVM", "The VM is set up to use a feature that requires it to boot as HVM.", &[]),
    shape("FEATURE_RESTRICTED", "The use of this feature is restricted.", &[]),
    shape("FIELD_TYPE_ERROR", "The value specified is of the wrong type", &["field"]),
    shape("GPU_GROUP_CONTAINS_NO_PGPUS", "The GPU group does not contain any PGPUs.", &["gpu_group"]),
    shape("GPU_GROUP_CONTAINS_PGPU", "The GPU group contains active PGPUs and cannot be deleted.", &["pgpus"]),
    shape("GPU_GROUP_CONTAINS_VGPU", "The GPU group contains active VGPUs and cannot be deleted.", &["vgpus"]),
    shape("HANDLE_INVALID", "You gave an invalid object reference. The object may have recently been deleted. The class parameter gives the type of reference given, and the handle parameter echoes the bad value given.", &["class", "handle"]),
    shape("HA_ABORT_NEW_MASTER", "This server cannot accept the proposed new master setting at this time.", &["reason"]),
    shape("HA_CANNOT_CHANGE_BOND_STATUS_OF_MGMT_IFACE", "This operation cannot be performed because creating or deleting a bond involving the management interface is not allowed while HA is on. In order to do that, disable HA, create or delete the bond then re-enable HA.", &[]),
    shape("HA_CONSTRAINT_VIOLATION_NETWORK_NOT_SHARED", "This operation cannot be performed because the referenced network is not properly shared. The network must either be entirely virtual or must be physically present via a currently_attached PIF on every host.", &[]),
    shape("HA_CONSTRAINT_VIOLATION_SR_NOT_SHARED", "This operation cannot be performed because the referenced SR is not properly shared. The SR must both be marked as shared and a currently_attached PBD must exist for each host.", &[]),
    shape("HA_DISABLE_IN_PROGRESS", "The operation could not be performed because HA disable is in progress", &[]),
    shape("HA_ENABLE_IN_PROGRESS", "The operation could not be performed because HA enable is in progress", &[]),
    shape("HA_FAILED_TO_FORM_LIVESET", "HA could not be enabled on the Pool because a liveset could not be formed: check storage and network heartbeat paths.", &[]),
    shape("HA_HEARTBEAT_DAEMON_STARTUP_FAILED", "The server could not join the liveset because the HA daemon failed to start.", &[]),
    shape("HA_HOST_CANNOT_ACCESS_STATEFILE", "The server could not join the liveset because the HA daemon could not access the heartbeat disk.", &[]),
    shape("HA_HOST_CANNOT_SEE_PEERS", "The operation failed because the HA software on the specified server could not see a subset of other servers. Check your network connectivity.", &[]),
    shape("HA_HOST_IS_ARMED", "The operation could not be performed while the server is still armed; it must be disarmed first.", &["host"]),
    shape("HA_IS_ENABLED", "The operation could not be performed because HA is enabled on the Pool", &[]),
    shape("HA_LOST_STATEFILE", "This server lost access to the HA statefile.", &[]),
    shape("HA_NOT_ENABLED", "The operation could not be performed because HA is not enabled on the Pool", &[]),
    shape("HA_NOT_INSTALLED", "The operation could not be performed because the HA software is not installed on this server.", &[]),
    shape("HA_NO_PLAN", "Cannot find a plan for placement of VMs as there are no other servers available.", &[]),
    shape("HA_OPERATION_WOULD_BREAK_FAILOVER_PLAN", "This operation cannot be performed because it would invalidate VM failover planning such that the system would be unable to guarantee to restart protected VMs after a Host failure.", &[]),
    shape("HA_POOL_IS_ENABLED_BUT_HOST_IS_DISABLED", "This server cannot join the pool because the pool has HA enabled but this server has HA disabled.", &[]),
    shape("HA_SHOULD_BE_FENCED", "Server cannot rejoin pool because it should have fenced (it is not in the master's partition).", &[]),
    shape("HA_TOO_FEW_HOSTS", "HA can only be enabled for 2 servers or more. Note that 2 servers requires a pre-configured quorum tiebreak script.", &[]),
    shape("HOSTS_NOT_COMPATIBLE", "The hosts in this pool are not compatible.", &[]),
    shape("HOSTS_NOT_HOMOGENEOUS", "The hosts in this pool are not homogeneous.", &["reason"]),
    shape("HOST_BROKEN", "This server failed in the middle of an automatic failover operation and needs to retry the failover action.", &[]),
    shape("HOST_CANNOT_ATTACH_NETWORK", "Server cannot attach network (in the case of NIC bonding, this may be because attaching the network on this server would require other networks - that are currently active - to be taken down).", &["host", "network"]),
    shape("HOST_CANNOT_DESTROY_SELF", "The pool master host cannot be removed.", &[]),
    shape("HOST_CANNOT_READ_METRICS", "The metrics of this server could not be read.", &[]),
    shape("HOST_CD_DRIVE_EMPTY", "The host CDROM drive does not contain a valid CD", &[]),
    shape("HOST_DISABLED", "The specified server is disabled.", &["host"]),
    shape("HOST_DISABLED_UNTIL_REBOOT", "The specified server is disabled and cannot be re-enabled until after it has rebooted.", &["host"]),
    shape("HOST_EVACUATE_IN_PROGRESS", "This host is being evacuated.", &["host"]),
    shape("HOST_HAS_NO_MANAGEMENT_IP", "The server failed to acquire an IP address on its management interface and therefore cannot contact the master.", &[]),
    shape("HOST_HAS_RESIDENT_VMS", "This server cannot be forgotten because there are user VMs still running.", &["host"]),
    shape("HOST_IN_EMERGENCY_MODE", "Cannot perform operation as the host is running in emergency mode.", &[]),
    shape("HOST_IN_USE", "This operation cannot be completed as the host is in use by (at least) the object of type and ref echoed below.", &["host", "type", "ref"]),
    shape("HOST_IS_LIVE", "This operation cannot be completed because the server is still live.", &[]),
    shape("HOST_IS_SLAVE", "You cannot make regular API calls directly on a slave. Please pass API calls via the master host.", &[]),
    shape("HOST_ITS_OWN_SLAVE", "The host is its own slave. Please use pool-emergency-transition-to-master or pool-emergency-reset-master.", &[]),
    shape("HOST_MASTER_CANNOT_TALK_BACK", "The master reports that it cannot talk back to the slave on the supplied management IP address.", &[]),
    shape("HOST_NAME_INVALID", "The server name is invalid.", &["reason"]),
    shape("HOST_NOT_DISABLED", "This operation cannot be performed because the host is not disabled. Please disable the host and then try again.", &[]),
    shape("HOST_NOT_ENOUGH_FREE_MEMORY", "Not enough server memory is available to perform this operation.", &["needed", "available"]),
    shape("HOST_NOT_ENOUGH_PCPUS", "The host does not have enough pCPUs to run the VM. It needs at least as many as the VM has vCPUs.", &["vcpus", "pcpus"]),
    shape("HOST_NOT_LIVE", "This operation cannot be completed as the server is not live.", &[]),
    shape("HOST_OFFLINE", "You attempted an operation which involves a host which could not be contacted.", &["host"]),
    shape("HOST_POWER_ON_MODE_DISABLED", "This operation cannot be completed because the server power on mode is disabled.", &[]),
    shape("HOST_STILL_BOOTING", "The host toolstack is still initialising. Please wait.", &[]),
    shape("HOST_UNKNOWN_TO_MASTER", "The master says the host is not known to it. Perhaps the Host was deleted from the master's database? Perhaps the slave is pointing to the wrong master?", &["host"]),
    shape("ILLEGAL_VBD_DEVICE", "The specified VBD device is not recognized: please use a non-negative integer", &[]),
    shape("IMPORT_ERROR", "The VM could not be imported.", &["msg"]),
    shape("IMPORT_ERROR_ATTACHED_DISKS_NOT_FOUND", "The VM could not be imported because attached disks could not be found.", &[]),
    shape("IMPORT_ERROR_CANNOT_HANDLE_CHUNKED", "Cannot import VM using chunked encoding.", &[]),
    shape("IMPORT_ERROR_FAILED_TO_FIND_OBJECT", "The VM could not be imported because a required object could not be found.", &[]),
    shape("IMPORT_ERROR_PREMATURE_EOF", "The VM could not be imported; the end of the file was reached prematurely.", &[]),
    shape("IMPORT_ERROR_SOME_CHECKSUMS_FAILED", "Some data checksums were incorrect; the VM may be corrupt.", &[]),
    shape("IMPORT_ERROR_UNEXPECTED_FILE", "The VM could not be imported because the XVA file is invalid: an unexpected file was encountered.", &[]),
    shape("IMPORT_INCOMPATIBLE_VERSION", "The import failed because this export has been created by a different (incompatible) product version", &[]),
    shape("INCOMPATIBLE_CLUSTER_STACK_ACTIVE", "This operation cannot be performed, because it is incompatible with the currently active HA cluster stack.", &[]),
    shape("INCOMPATIBLE_PIF_PROPERTIES", "These PIFs cannot be bonded, because their properties are different.", &[]),
    shape("INCOMPATIBLE_STATEFILE_SR", "The specified SR is incompatible with the selected HA cluster stack.", &[]),
    shape("INTERFACE_HAS_NO_IP", "The specified interface cannot be used because it has no IP address", &[]),
    shape("INTERNAL_ERROR", "The server failed to handle your request, due to an internal error. The given message may give details useful for debugging the problem.", &["message"]),
    shape("INVALID_CIDR_ADDRESS_SPECIFIED", "A required parameter contained an invalid CIDR address (<addr>/<prefix length>)", &[]),
    shape("INVALID_CLUSTER_STACK", "The cluster stack provided is not supported.", &[]),
    shape("INVALID_DEVICE", "The device name is invalid", &["device"]),
    shape("INVALID_EDITION", "The edition you supplied is invalid.", &[]),
    shape("INVALID_FEATURE_STRING", "The given feature string is not valid.", &[]),
    shape("INVALID_IP_ADDRESS_SPECIFIED", "A required parameter contained an invalid IP address", &[]),
    shape("INVALID_PATCH", "The uploaded patch file is invalid", &[]),
    shape("INVALID_PATCH_WITH_LOG", "The uploaded patch file is invalid. See attached log for more details.", &[]),
    shape("INVALID_UPDATE", "The uploaded update package is invalid.", &[]),
    shape("INVALID_VALUE", "The value given is invalid", &["field", "value"]),
    shape("IS_TUNNEL_ACCESS_PIF", "Cannot create a VLAN or tunnel on top of a tunnel access PIF - use the underlying transport PIF instead.", &[]),
    shape("JOINING_HOST_CANNOT_BE_MASTER_OF_OTHER_HOSTS", "The server joining the pool cannot already be a master of another pool.", &[]),
    shape("JOINING_HOST_CANNOT_CONTAIN_SHARED_SRS", "The server joining the pool cannot contain any shared storage.", &[]),
    shape("JOINING_HOST_CANNOT_HAVE_RUNNING_OR_SUSPENDED_VMS", "The server joining the pool cannot have any running or suspended VMs.", &[]),
    shape("JOINING_HOST_CANNOT_HAVE_RUNNING_VMS", "The server joining the pool cannot have any running VMs.", &[]),
    shape("JOINING_HOST_CANNOT_HAVE_VMS_WITH_CURRENT_OPERATIONS", "The host joining the pool cannot have any VMs with active tasks.", &[]),
    shape("JOINING_HOST_CONNECTION_FAILED", "There was an error connecting to the host while joining it in the pool.", &[]),
    shape("JOINING_HOST_SERVICE_FAILED", "There was an error connecting to the server. The service contacted didn't reply properly.", &[]),
    shape("LICENCE_RESTRICTION", "This operation is not allowed because your license lacks a needed feature. Please contact your support representative.", &["feature"]),
    shape("LICENSE_CANNOT_DOWNGRADE_WHILE_IN_POOL", "Cannot downgrade license while in pool. Please disband the pool first, then downgrade licenses on hosts separately.", &[]),
    shape("LICENSE_CHECKOUT_ERROR", "The license for the edition you requested is not available.", &[]),
    shape("LICENSE_DOES_NOT_SUPPORT_POOLING", "This server cannot join a pool because its license does not support pooling.", &[]),
    shape("LICENSE_DOES_NOT_SUPPORT_XHA", "HA cannot be enabled because this server's license does not allow it.", &[]),
    shape("LICENSE_EXPIRED", "Your license has expired. Please contact your support representative.", &[]),
    shape("LICENSE_FILE_DEPRECATED", "This type of license file is for previous versions of the server. Please upgrade to the new licensing system.", &[]),
    shape("LICENSE_HOST_POOL_MISMATCH", "Host and pool have incompatible licenses (editions).", &[]),
    shape("LICENSE_PROCESSING_ERROR", "There was an error processing your license. Please contact your support representative.", &[]),
    shape("LOCATION_NOT_UNIQUE", "A VDI with the specified location already exists within the SR", &[]),
    shape("MAC_DOES_NOT_EXIST", "The MAC address specified does not exist on this server.", &["MAC"]),
    shape("MAC_INVALID", "The MAC address specified is not valid.", &["MAC"]),
    shape("MAC_STILL_EXISTS", "The MAC address specified still exists on this server.", &["MAC"]),
    shape("MAP_DUPLICATE_KEY", "You tried to add a key-value pair to a map, but that key is already there.", &["type", "param_name", "uuid", "key"]),
    shape("MEMORY_CONSTRAINT_VIOLATION", "The dynamic memory range does not satisfy the following constraint.", &[]),
    shape("MESSAGE_DEPRECATED", "This message has been deprecated.", &[]),
    shape("MESSAGE_METHOD_UNKNOWN", "You tried to call a method that does not exist. The method name that you used is echoed.", &["method"]),
    shape("MESSAGE_PARAMETER_COUNT_MISMATCH", "You tried to call a method with the incorrect number of parameters. The fully-qualified method name that you used, and the number of received and expected parameters are returned.", &["method", "expected", "received"]),
    shape("MESSAGE_REMOVED", "This function is no longer available.", &[]),
    shape("MIRROR_FAILED", "The VDI mirroring cannot be performed", &[]),
    shape("MISSING_CONNECTION_DETAILS", "The license-server connection details (address or port) were missing or incomplete.", &[]),
    shape("NETWORK_ALREADY_CONNECTED", "You tried to create a PIF, but the network you tried to attach it to is already attached to some other PIF, and so the creation failed.", &["network", "connected_PIF"]),
    shape("NETWORK_CONTAINS_PIF", "The network contains active PIFs and cannot be deleted.", &[]),
    shape("NETWORK_CONTAINS_VIF", "The network contains active VIFs and cannot be deleted.", &[]),
    shape("NETWORK_HAS_INCOMPATIBLE_SRIOV_PIFS", "The PIF is not compatible with the selected SR-IOV network", &[]),
    shape("NETWORK_HAS_INCOMPATIBLE_VLAN_ON_SRIOV_PIFS", "VLAN on the PIF is not compatible with the selected SR-IOV VLAN network", &[]),
    shape("NETWORK_INCOMPATIBLE_PURPOSES", "You tried to add a purpose to a network but the new purpose is not compatible with an existing purpose of the network or other networks.", &[]),
    shape("NETWORK_INCOMPATIBLE_WITH_BOND", "The network is incompatible with bond", &[]),
    shape("NETWORK_INCOMPATIBLE_WITH_SRIOV", "The network is incompatible with sriov", &[]),
    shape("NETWORK_INCOMPATIBLE_WITH_TUNNEL", "The network is incompatible with tunnel", &[]),
    shape("NETWORK_INCOMPATIBLE_WITH_VLAN_ON_BRIDGE", "The network is incompatible with vlan on bridge", &[]),
    shape("NETWORK_INCOMPATIBLE_WITH_VLAN_ON_SRIOV", "The network is incompatible with vlan on sriov", &[]),
    shape("NETWORK_SRIOV_ALREADY_ENABLED", "The PIF selected for the SR-IOV network is already enabled", &[]),
    shape("NETWORK_SRIOV_DISABLE_FAILED", "Failed to disable SR-IOV on PIF", &[]),
    shape("NETWORK_SRIOV_ENABLE_FAILED", "Failed to enable SR-IOV on PIF", &[]),
    shape("NETWORK_SRIOV_INSUFFICIENT_CAPACITY", "There is insufficient capacity for VF reservation", &[]),
    shape("NETWORK_UNMANAGED", "The network is not managed by xapi.", &[]),
    shape("NOT_ALLOWED_ON_OEM_EDITION", "This command is not allowed on the OEM edition.", &[]),
    shape("NOT_IMPLEMENTED", "The function is not implemented", &["function"]),
    shape("NOT_IN_EMERGENCY_MODE", "This pool is not in emergency mode.", &[]),
    shape("NOT_SUPPORTED_DURING_UPGRADE", "This operation is not supported during an upgrade.", &[]),
    shape("NOT_SYSTEM_DOMAIN", "The given VM is not registered as a system domain. This operation can only be performed on a registered system domain.", &[]),
    shape("NO_CLUSTER_HOSTS_REACHABLE", "No other cluster host was reachable when joining", &[]),
    shape("NO_COMPATIBLE_CLUSTER_HOST", "Clustering is not enabled on this host or pool.", &[]),
    shape("NO_HOSTS_AVAILABLE", "There were no servers available to complete the specified operation.", &[]),
    shape("NO_MORE_REDO_LOGS_ALLOWED", "The upper limit of active redo log instances was reached.", &[]),
    shape("NVIDIA_TOOLS_ERROR", "Nvidia tools error. Please ensure that the latest Nvidia tools are installed", &[]),
    shape("OBJECT_NOLONGER_EXISTS", "The specified object no longer exists.", &[]),
    shape("ONLY_ALLOWED_ON_OEM_EDITION", "This command is only allowed on the OEM edition.", &[]),
    shape("OPENVSWITCH_NOT_ACTIVE", "This operation needs the OpenVSwitch networking backend to be enabled on all hosts in the pool.", &[]),
    shape("OPERATION_BLOCKED", "You attempted an operation that was explicitly blocked (see the blocked_operations field of the given object).", &["ref", "code"]),
    shape("OPERATION_NOT_ALLOWED", "You attempted an operation that was not allowed.", &["reason"]),
    shape("OPERATION_PARTIALLY_FAILED", "Some VMs belonging to the appliance threw an exception while carrying out the specified operation", &[]),
    shape("OTHER_OPERATION_IN_PROGRESS", "Another operation involving the object is currently in progress", &["class", "object"]),
    shape("OUT_OF_SPACE", "There is not enough space to upload the update", &["location"]),
    shape("PATCH_ALREADY_APPLIED", "This patch has already been applied", &[]),
    shape("PATCH_ALREADY_EXISTS", "The uploaded patch file already exists", &["uuid"]),
    shape("PATCH_APPLY_FAILED", "The patch apply failed. Please see attached output.", &["output"]),
    shape("PATCH_APPLY_FAILED_BACKUP_FILES_EXIST", "The patch apply failed: there are backup files created while applying patch. Please remove these backup files before applying patch again.", &[]),
    shape("PATCH_IS_APPLIED", "The specified patch is applied and cannot be destroyed.", &[]),
    shape("PATCH_PRECHECK_FAILED_ISO_MOUNTED", "Tools ISO must be ejected from all running VMs.", &[]),
    shape("PATCH_PRECHECK_FAILED_OUT_OF_SPACE", "The patch pre-check stage failed: the server does not have enough space.", &[]),
    shape("PATCH_PRECHECK_FAILED_PREREQUISITE_MISSING", "The patch pre-check stage failed: prerequisite patches are missing.", &[]),
    shape("PATCH_PRECHECK_FAILED_UNKNOWN_ERROR", "The patch pre-check stage failed with an unknown error. See attached info for more details.", &[]),
    shape("PATCH_PRECHECK_FAILED_VM_RUNNING", "The patch pre-check stage failed: there are one or more VMs still running on the server. All VMs must be suspended before the patch can be applied.", &[]),
    shape("PATCH_PRECHECK_FAILED_WRONG_SERVER_BUILD", "The patch pre-check stage failed: the server is of an incorrect build.", &[]),
    shape("PATCH_PRECHECK_FAILED_WRONG_SERVER_VERSION", "The patch pre-check stage failed: the server is of an incorrect version.", &[]),
    shape("PBD_EXISTS", "A PBD already exists connecting the SR to the server.", &[]),
    shape("PERMISSION_DENIED", "Caller not allowed to perform this operation.", &["message"]),
    shape("PGPU_INSUFFICIENT_CAPACITY_FOR_VGPU", "There is insufficient capacity on this PGPU to run the VGPU.", &["pgpu", "vgpu_type"]),
    shape("PGPU_IN_USE_BY_VM", "This PGPU is currently in use by running VMs.", &["VMs"]),
    shape("PGPU_NOT_COMPATIBLE_WITH_GPU_GROUP", "PGPU type not compatible with destination group.", &[]),
    shape("PIF_ALLOWS_UNPLUG", "The operation you requested cannot be performed because the specified PIF allows unplug.", &[]),
    shape("PIF_ALREADY_BONDED", "This operation cannot be performed because the pif is bonded.", &["PIF"]),
    shape("PIF_BOND_MORE_THAN_ONE_IP", "Only one PIF on a bond is allowed to have an IP configuration.", &[]),
    shape("PIF_BOND_NEEDS_MORE_MEMBERS", "A bond must consist of at least two member interfaces", &[]),
    shape("PIF_CANNOT_BOND_CROSS_HOST", "You cannot bond interfaces across different servers.", &[]),
    shape("PIF_CONFIGURATION_ERROR", "An unknown error occurred while attempting to configure an interface.", &["PIF", "msg"]),
    shape("PIF_DEVICE_NOT_FOUND", "The specified device was not found.", &[]),
    shape("PIF_DOES_NOT_ALLOW_UNPLUG", "The operation you requested cannot be performed because the specified PIF does not allow unplug.", &[]),
    shape("PIF_HAS_FCOE_SR_IN_USE", "The operation you requested cannot be performed because the specified PIF has FCoE SR in use.", &[]),
    shape("PIF_HAS_NO_NETWORK_CONFIGURATION", "PIF has no IP configuration (mode currently set to 'none')", &[]),
    shape("PIF_HAS_NO_V6_NETWORK_CONFIGURATION", "PIF has no IPv6 configuration (mode currently set to 'none')", &[]),
    shape("PIF_INCOMPATIBLE_PRIMARY_ADDRESS_TYPE", "The primary address types are not compatible", &[]),
    shape("PIF_IS_MANAGEMENT_INTERFACE", "The operation you requested cannot be performed because the specified PIF is the management interface.", &[]),
    shape("PIF_IS_NOT_PHYSICAL", "You tried to perform an operation which is only available on physical PIF", &[]),
    shape("PIF_IS_NOT_SRIOV_CAPABLE", "The selected PIF is not capable of network SR-IOV", &[]),
    shape("PIF_IS_PHYSICAL", "You tried to destroy a PIF, but it represents an aspect of the physical host configuration, and so cannot be destroyed. The parameter echoes the PIF handle you gave.", &["PIF"]),
    shape("PIF_IS_SRIOV_LOGICAL", "You tried to create a bond on top of a network SR-IOV logical PIF - use the underlying physical PIF instead", &[]),
    shape("PIF_IS_VLAN", "You tried to create a VLAN on top of another VLAN - use the underlying physical PIF/bond instead", &["PIF"]),
    shape("PIF_NOT_ATTACHED_TO_HOST", "Cluster_host creation failed as the PIF provided is not attached to the host.", &[]),
    shape("PIF_NOT_PRESENT", "This host has no PIF on the given network.", &[]),
    shape("PIF_SRIOV_STILL_EXISTS", "The PIF is still related with a network SR-IOV", &[]),
    shape("PIF_TUNNEL_STILL_EXISTS", "Operation cannot proceed while a tunnel exists on this interface.", &[]),
    shape("PIF_UNMANAGED", "The operation you requested cannot be performed because the specified PIF is not managed by xapi.", &[]),
    shape("PIF_VLAN_EXISTS", "You tried to create a PIF, but it already exists.", &["PIF"]),
    shape("PIF_VLAN_STILL_EXISTS", "Operation cannot proceed while a VLAN exists on this interface.", &["PIF"]),
    shape("POOL_AUTH_ALREADY_ENABLED", "External authentication is already enabled for at least one server in this pool.", &[]),
    shape("POOL_AUTH_DISABLE_FAILED", "The pool failed to disable the external authentication of at least one host.", &["host", "message"]),
    shape("POOL_AUTH_DISABLE_FAILED_INVALID_ACCOUNT", "External authentication has been disabled with errors: Some AD machine accounts were not disabled on the AD server due to invalid account.", &[]),
    shape("POOL_AUTH_DISABLE_FAILED_PERMISSION_DENIED", "External authentication has been disabled with errors: Your AD machine account was not disabled on the AD server as permission was denied.", &[]),
    shape("POOL_AUTH_DISABLE_FAILED_WRONG_CREDENTIALS", "External authentication has been disabled with errors: Some AD machine accounts were not disabled on the AD server due to invalid credentials.", &[]),
    shape("POOL_AUTH_ENABLE_FAILED", "The pool failed to enable external authentication.", &["host", "message"]),
    shape("POOL_AUTH_ENABLE_FAILED_DOMAIN_LOOKUP_FAILED", "The pool failed to enable external authentication.", &[]),
    shape("POOL_AUTH_ENABLE_FAILED_DUPLICATE_HOSTNAME", "The pool failed to enable external authentication.", &[]),
    shape("POOL_AUTH_ENABLE_FAILED_INVALID_ACCOUNT", "The pool failed to enable external authentication.", &[]),
    shape("POOL_AUTH_ENABLE_FAILED_INVALID_OU", "The pool failed to enable external authentication.", &[]),
    shape("POOL_AUTH_ENABLE_FAILED_PERMISSION_DENIED", "The pool failed to enable external authentication.", &[]),
    shape("POOL_AUTH_ENABLE_FAILED_UNAVAILABLE", "The pool failed to enable external authentication.", &[]),
    shape("POOL_AUTH_ENABLE_FAILED_WRONG_CREDENTIALS", "The pool failed to enable external authentication.", &[]),
    shape("POOL_JOINING_EXTERNAL_AUTH_MISMATCH", "Cannot join pool whose external authentication configuration is different.", &[]),
    shape("POOL_JOINING_HOST_HAS_BONDS", "The host joining the pool must not have any bonds.", &[]),
    shape("POOL_JOINING_HOST_HAS_NETWORK_SRIOVS", "The host joining the pool must not have any network SR-IOVs.", &[]),
    shape("POOL_JOINING_HOST_HAS_NON_MANAGEMENT_VLANS", "The host joining the pool must not have any non-management vlans.", &[]),
    shape("POOL_JOINING_HOST_HAS_TUNNELS", "The host joining the pool must not have any tunnels.", &[]),
    shape("POOL_JOINING_HOST_MANAGEMENT_VLAN_DOES_NOT_MATCH", "The host joining the pool must have the same management vlan.", &[]),
    shape("POOL_JOINING_HOST_MUST_HAVE_PHYSICAL_MANAGEMENT_NIC", "The server joining the pool must have a physical management NIC (i.e. the management NIC must not be on a VLAN or bonded PIF).", &[]),
    shape("POOL_JOINING_HOST_MUST_HAVE_SAME_API_VERSION", "The host joining the pool must have the same API version as the pool master.", &[]),
    shape("POOL_JOINING_HOST_MUST_HAVE_SAME_DB_SCHEMA", "The host joining the pool must have the same database schema as the pool master.", &[]),
    shape("POOL_JOINING_HOST_MUST_HAVE_SAME_PRODUCT_VERSION", "The server joining the pool must have the same product version as the pool master.", &[]),
    shape("POOL_JOINING_HOST_MUST_ONLY_HAVE_PHYSICAL_PIFS", "The host joining the pool must not have any bonds, VLANs or tunnels.", &[]),
    shape("PROVISION_FAILED_OUT_OF_SPACE", "The provision call failed because it ran out of space.", &[]),
    shape("PROVISION_ONLY_ALLOWED_ON_TEMPLATE", "The provision call can only be invoked on templates, not regular VMs.", &[]),
    shape("PUSB_VDI_CONFLICT", "The VDI corresponding to this PUSB has existing VBDs.", &[]),
    shape("PVS_CACHE_STORAGE_ALREADY_PRESENT", "The PVS site already has cache storage configured for the host.", &[]),
    shape("PVS_CACHE_STORAGE_IS_IN_USE", "The PVS cache storage is in use by the site and cannot be removed.", &[]),
    shape("PVS_PROXY_ALREADY_PRESENT", "The VIF is already associated with a PVS proxy", &[]),
    shape("PVS_SERVER_ADDRESS_IN_USE", "The address specified is already in use by an existing PVS_server object", &[]),
    shape("PVS_SITE_CONTAINS_RUNNING_PROXIES", "The PVS site contains running proxies.", &[]),
    shape("PVS_SITE_CONTAINS_SERVERS", "The PVS site contains servers and cannot be forgotten.", &[]),
    shape("RBAC_PERMISSION_DENIED", "RBAC permission denied.", &["permission", "message"]),
    shape("REDO_LOG_IS_ENABLED", "The operation could not be performed because a redo log is enabled on the Pool.", &[]),
    shape("REQUIRED_PIF_IS_UNPLUGGED", "The operation you requested cannot be performed because the specified PIF is currently unplugged.", &[]),
    shape("RESTORE_INCOMPATIBLE_VERSION", "The restore could not be performed because this backup has been created by a different (incompatible) product version", &[]),
    shape("RESTORE_SCRIPT_FAILED", "The restore could not be performed because the restore script failed. Is the file corrupt?", &["log"]),
    shape("RESTORE_TARGET_MGMT_IF_NOT_IN_BACKUP", "The restore could not be performed because the server's current management interface is not in the backup. The interfaces mentioned in the backup are:", &[]),
    shape("RESTORE_TARGET_MISSING_DEVICE", "The restore could not be performed because a network interface is missing", &[]),
    shape("ROLE_ALREADY_EXISTS", "Role already exists.", &[]),
    shape("ROLE_NOT_FOUND", "Role cannot be found.", &[]),
    shape("SESSION_AUTHENTICATION_FAILED", "The credentials given by the user are incorrect, so access has been denied, and you have not been issued a session handle.", &[]),
    shape("SESSION_INVALID", "You gave an invalid session reference. It may have been invalidated by a server restart, or timed out. You should get a new session handle, using one of the session.login_ calls. This error does not invalidate the current connection. The handle parameter echoes the bad value given.", &["handle"]),
    shape("SESSION_NOT_REGISTERED", "This session is not registered to receive events. You must call event.register before event.next. The session handle you are using is echoed.", &["handle"]),
    shape("SLAVE_REQUIRES_MANAGEMENT_INTERFACE", "The management interface on a slave cannot be disabled because the slave would enter emergency mode.", &[]),
    shape("SM_PLUGIN_COMMUNICATION_FAILURE", "The SM plug-in did not respond to a query.", &[]),
    shape("SR_ATTACH_FAILED", "Attaching this SR failed.", &["sr"]),
    shape("SR_BACKEND_FAILURE", "There was an SR backend failure.", &["status", "stdout", "stderr"]),
    shape("SR_DEVICE_IN_USE", "The SR operation cannot be performed because a device underlying the SR is in use by the server.", &[]),
    shape("SR_DOES_NOT_SUPPORT_MIGRATION", "Cannot migrate a VDI to or from an SR that doesn't support migration.", &[]),
    shape("SR_FULL", "The SR is full. Requested new size exceeds the maximum size", &["requested", "maximum"]),
    shape("SR_HAS_MULTIPLE_PBDS", "The SR.shared flag cannot be set to false while the SR remains connected to multiple servers.", &["PBD"]),
    shape("SR_HAS_NO_PBDS", "The SR has no attached PBDs", &["sr"]),
    shape("SR_HAS_PBD", "The SR is still connected to a host via a PBD. It cannot be destroyed or forgotten.", &[]),
    shape("SR_INDESTRUCTIBLE", "The SR could not be destroyed because the 'indestructible' flag was set on it.", &[]),
    shape("SR_IS_CACHE_SR", "The SR is currently being used as a local cache SR.", &[]),
    shape("SR_NOT_ATTACHED", "The SR is not attached.", &[]),
    shape("SR_NOT_EMPTY", "The SR operation cannot be performed because the SR is not empty.", &[]),
    shape("SR_NOT_SHARABLE", "The PBD could not be plugged because the SR is in use by another host and is not marked as sharable.", &["sr", "host"]),
    shape("SR_OPERATION_NOT_SUPPORTED", "The SR backend does not support the operation (check the SR's allowed operations)", &["sr"]),
    shape("SR_REQUIRES_UPGRADE", "The operation cannot be performed until the SR has been upgraded", &[]),
    shape("SR_SOURCE_SPACE_INSUFFICIENT", "The source SR does not have sufficient temporary space available to proceed the operation.", &[]),
    shape("SR_UNKNOWN_DRIVER", "The SR could not be connected because the driver was not recognised.", &["driver"]),
    shape("SR_UUID_EXISTS", "An SR with that uuid already exists.", &[]),
    shape("SR_VDI_LOCKING_FAILED", "The operation could not proceed because necessary VDIs were already locked at the storage level.", &[]),
    shape("SSL_VERIFY_ERROR", "The remote system's SSL certificate failed to verify against our certificate library.", &[]),
    shape("SUBJECT_ALREADY_EXISTS", "Subject already exists.", &[]),
    shape("SUBJECT_CANNOT_BE_RESOLVED", "Subject cannot be resolved by the external directory service.", &[]),
    shape("SUSPEND_IMAGE_NOT_ACCESSIBLE", "The suspend image of a checkpoint is not accessible from the host on which the VM is running", &[]),
    shape("SYSTEM_STATUS_MUST_USE_TAR_ON_OEM", "You must use tar output to retrieve system status from an OEM server.", &[]),
    shape("SYSTEM_STATUS_RETRIEVAL_FAILED", "Retrieving system status from the host failed. A diagnostic reason suitable for support organisations is also returned.", &["reason"]),
    shape("TASK_CANCELLED", "The request was asynchronously canceled.", &["task"]),
    shape("TLS_CONNECTION_FAILED", "Cannot contact the other host using TLS on the specified address and port", &[]),
    shape("TOO_BUSY", "The request was rejected because the server is too busy.", &[]),
    shape("TOO_MANY_PENDING_TASKS", "The request was rejected because there are too many pending tasks on the server.", &[]),
    shape("TOO_MANY_STORAGE_MIGRATES", "You reached the maximal number of concurrently migrating VMs.", &[]),
    shape("TOO_MANY_VUSBS", "The VM has too many VUSBs.", &[]),
    shape("TRANSPORT_PIF_NOT_CONFIGURED", "The tunnel transport PIF has no IP configuration set.", &[]),
    shape("UNIMPLEMENTED_IN_SM_BACKEND", "You have attempted a function which is not implemented", &["message"]),
    shape("UNKNOWN_BOOTLOADER", "The requested bootloader is unknown", &["vm", "bootloader"]),
    shape("UPDATE_ALREADY_APPLIED", "This update has already been applied.", &[]),
    shape("UPDATE_ALREADY_APPLIED_IN_POOL", "This update has already been applied to all hosts in the pool.", &[]),
    shape("UPDATE_ALREADY_EXISTS", "The uploaded update already exists", &["uuid"]),
    shape("UPDATE_APPLY_FAILED", "The update failed to apply. Please see attached output.", &[]),
    shape("UPDATE_IS_APPLIED", "The specified update has been applied and cannot be destroyed.", &[]),
    shape("UPDATE_POOL_APPLY_FAILED", "The update cannot be applied for the following host(s).", &[]),
    shape("UPDATE_PRECHECK_FAILED_CONFLICT_PRESENT", "The update pre-check stage failed: conflicting update(s) are present.", &[]),
    shape("UPDATE_PRECHECK_FAILED_GPGKEY_NOT_IMPORTED", "The update pre-check stage failed: RPM package validation requires a GPG key that is not present on the host.", &[]),
    shape("UPDATE_PRECHECK_FAILED_OUT_OF_SPACE", "The update pre-check stage failed: the server does not have enough space.", &[]),
    shape("UPDATE_PRECHECK_FAILED_PREREQUISITE_MISSING", "The update pre-check stage failed: prerequisite update(s) are missing.", &[]),
    shape("UPDATE_PRECHECK_FAILED_UNKNOWN_ERROR", "The update pre-check stage failed with an unknown error.", &[]),
    shape("UPDATE_PRECHECK_FAILED_WRONG_SERVER_VERSION", "The update pre-check stage failed: the server is of an incorrect version.", &[]),
    shape("USB_ALREADY_ATTACHED", "The USB device is currently attached to a VM.", &[]),
    shape("USB_GROUP_CONFLICT", "USB_groups are currently restricted to contain no more than one VUSB.", &[]),
    shape("USB_GROUP_CONTAINS_NO_PUSBS", "The USB group does not contain any PUSBs.", &[]),
    shape("USB_GROUP_CONTAINS_PUSB", "The USB group contains active PUSBs and cannot be deleted.", &[]),
    shape("USB_GROUP_CONTAINS_VUSB", "The USB group contains active VUSBs and cannot be deleted.", &[]),
    shape("USER_IS_NOT_LOCAL_SUPERUSER", "Only the local superuser can perform this operation.", &["msg"]),
    shape("UUID_INVALID", "The uuid you supplied was invalid.", &["type", "uuid"]),
    shape("V6D_FAILURE", "There was a problem with the license daemon (v6d).", &[]),
    shape("VALUE_NOT_SUPPORTED", "You attempted to set a value that is not supported by this implementation. The fully-qualified field name and the value that you tried to set are returned. Also returned is a developer-only diagnostic reason.", &["field", "value", "reason"]),
    shape("VBD_CDS_MUST_BE_READONLY", "Read/write CDs are not supported", &[]),
    shape("VBD_IS_EMPTY", "Operation could not be performed because the drive is empty", &["vbd"]),
    shape("VBD_NOT_EMPTY", "Operation could not be performed because the drive is not empty", &["vbd"]),
    shape("VBD_NOT_REMOVABLE_MEDIA", "Media could not be ejected because it is not removable", &["vbd"]),
    shape("VBD_NOT_UNPLUGGABLE", "Drive could not be hot-unplugged because it is not marked as unpluggable", &["vbd"]),
    shape("VBD_TRAY_LOCKED", "This VM has locked the DVD drive tray, so the disk cannot be ejected", &["vbd"]),
    shape("VDI_CBT_ENABLED", "The requested operation is not allowed for VDIs with CBT enabled or VMs having such VDIs, and CBT is enabled for the specified VDI.", &[]),
    shape("VDI_CONTAINS_METADATA_OF_THIS_POOL", "The VDI could not be opened for metadata recovery as it contains the current pool's metadata.", &[]),
    shape("VDI_COPY_FAILED", "The VDI copy action has failed", &[]),
    shape("VDI_HAS_RRDS", "The operation cannot be performed because this VDI has rrd stats", &[]),
    shape("VDI_INCOMPATIBLE_TYPE", "This operation cannot be performed because the specified VDI is of an incompatible type (eg: an HA statefile cannot be attached to a guest)", &["vdi", "type"]),
    shape("VDI_IN_USE", "This operation cannot be performed because this VDI is in use by some other operation", &["vdi", "operation"]),
    shape("VDI_IS_A_PHYSICAL_DEVICE", "The operation cannot be performed on physical device", &["vdi"]),
    shape("VDI_IS_ENCRYPTED", "The requested operation is not allowed because the specified VDI is encrypted.", &[]),
    shape("VDI_IS_NOT_ISO", "This operation can only be performed on CD VDIs (iso files or CDROM drives)", &["vdi", "type"]),
    shape("VDI_LOCATION_MISSING", "This operation cannot be performed because the specified VDI could not be found in the specified SR", &["sr", "location"]),
    shape("VDI_MISSING", "This operation cannot be performed because the specified VDI could not be found on the storage substrate", &["sr", "vdi"]),
    shape("VDI_NEEDS_VM_FOR_MIGRATE", "Cannot migrate a VDI which is not attached to a running VM.", &[]),
    shape("VDI_NOT_AVAILABLE", "This operation cannot be performed because this VDI could not be properly attached to the VM.", &["vdi"]),
    shape("VDI_NOT_IN_MAP", "This VDI was not mapped to a destination SR in VM.migrate_send operation", &["vdi"]),
    shape("VDI_NOT_MANAGED", "This operation cannot be performed because the system does not manage this VDI", &["vdi"]),
    shape("VDI_NOT_SPARSE", "The VDI is not stored using a sparse format. It is not possible to query and manipulate only the changed blocks (or 'block differences' or 'disk deltas') between two VDIs. Please select a VDI which uses a sparse-aware technology such as VHD.", &["vdi"]),
    shape("VDI_NO_CBT_METADATA", "The requested operation is not allowed because the specified VDI does not have changed block tracking metadata.", &[]),
    shape("VDI_ON_BOOT_MODE_INCOMPATIBLE_WITH_OPERATION", "This operation is not permitted on VDIs in the 'on-boot=reset' mode, or on VMs having such VDIs.", &[]),
    shape("VDI_READONLY", "The operation required write access but this VDI is read-only", &["vdi"]),
    shape("VDI_TOO_LARGE", "The VDI is too large.", &[]),
    shape("VDI_TOO_SMALL", "The VDI is too small. Please resize it to at least the minimum size.", &["vdi", "minimum_size"]),
    shape("VGPU_DESTINATION_INCOMPATIBLE", "The VGPU is not compatible with any PGPU in the destination.", &[]),
    shape("VGPU_GUEST_DRIVER_LIMIT", "The guest driver does not support VGPU migration.", &[]),
    shape("VGPU_TYPE_NOT_COMPATIBLE", "Cannot create a virtual GPU that is incompatible with the existing types on the VM.", &[]),
    shape("VGPU_TYPE_NOT_COMPATIBLE_WITH_RUNNING_TYPE", "The VGPU type is incompatible with one or more of the VGPU types currently running on this PGPU", &[]),
    shape("VGPU_TYPE_NOT_ENABLED", "VGPU type is not one of the PGPU's enabled types.", &["type", "enabled_types"]),
    shape("VGPU_TYPE_NOT_SUPPORTED", "VGPU type is not one of the PGPU's supported types.", &["type", "supported_types"]),
    shape("VIF_IN_USE", "Network has active VIFs", &["network", "VIF"]),
    shape("VIF_NOT_IN_MAP", "This VIF was not mapped to a destination Network in VM.migrate_send operation", &[]),
    shape("VLAN_IN_USE", "Operation cannot be performed because this VLAN is already in use. Please check your network configuration.", &[]),
    shape("VLAN_TAG_INVALID", "You tried to create a VLAN, but the tag you gave was invalid -- it must be between 0 and 4094. The parameter echoes the VLAN tag you gave.", &["VLAN"]),
    shape("VMPP_ARCHIVE_MORE_FREQUENT_THAN_BACKUP", "Archive more frequent than backup.", &[]),
    shape("VMPP_HAS_VM", "There is at least one VM assigned to this protection policy.", &[]),
    shape("VMSS_HAS_VM", "There is at least one VM assigned to snapshot schedule.", &[]),
    shape("VMS_FAILED_TO_COOPERATE", "The given VMs failed to release memory when instructed to do so", &[]),
    shape("VM_ASSIGNED_TO_PROTECTION_POLICY", "This VM is assigned to a protection policy.", &[]),
    shape("VM_ASSIGNED_TO_SNAPSHOT_SCHEDULE", "This VM is assigned to a snapshot schedule.", &[]),
    shape("VM_ATTACHED_TO_MORE_THAN_ONE_VDI_WITH_TIMEOFFSET_MARKED_AS_RESET_ON_BOOT", "You attempted to start a VM that's attached to more than one VDI with a timeoffset marked as reset-on-boot.", &[]),
    shape("VM_BAD_POWER_STATE", "You attempted an operation on a VM that was not in an appropriate power state at the time; for example, you attempted to start a VM that was already running. The parameters returned are the VM's handle, and the expected and actual VM state at the time of the call.", &["vm", "expected", "actual"]),
    shape("VM_BIOS_STRINGS_ALREADY_SET", "The BIOS strings for this VM have already been set and cannot be changed.", &[]),
    shape("VM_CALL_PLUGIN_RATE_LIMIT", "There is a minimal interval required between consecutive plug-in calls made on the same VM, please wait before retry.", &[]),
    shape("VM_CANNOT_DELETE_DEFAULT_TEMPLATE", "You cannot delete the specified default template.", &[]),
    shape("VM_CHECKPOINT_RESUME_FAILED", "An error occured while restoring the memory image of the specified virtual machine", &["vm"]),
    shape("VM_CHECKPOINT_SUSPEND_FAILED", "An error occured while saving the memory image of the specified virtual machine", &["vm"]),
    shape("VM_CRASHED", "The VM crashed", &["vm"]),
    shape("VM_DUPLICATE_VBD_DEVICE", "The specified VM has a duplicate VBD device and cannot be started.", &["vm", "vbd", "device"]),
    shape("VM_FAILED_SHUTDOWN_ACKNOWLEDGMENT", "VM didn't acknowledge the need to shutdown.", &["vm"]),
    shape("VM_FAILED_SUSPEND_ACKNOWLEDGMENT", "VM didn't acknowledge the need to suspend.", &[]),
    shape("VM_HALTED", "The VM unexpectedly halted", &["vm"]),
    shape("VM_HAS_CHECKPOINT", "Cannot migrate a VM which has a checkpoint.", &[]),
    shape("VM_HAS_NO_SUSPEND_VDI", "VM cannot be resumed because it has no suspend VDI", &[]),
    shape("VM_HAS_PCI_ATTACHED", "This operation could not be performed, because the VM has one or more PCI devices passed through.", &["vm"]),
    shape("VM_HAS_SRIOV_VIF", "This operation could not be performed, because the VM has one or more SR-IOV VIFs.", &[]),
    shape("VM_HAS_TOO_MANY_SNAPSHOTS", "Cannot migrate a VM with more than one snapshot.", &[]),
    shape("VM_HAS_VGPU", "This operation could not be performed, because the VM has one or more virtual GPUs.", &["vm"]),
    shape("VM_HAS_VUSBS", "The operation is not allowed when the VM has VUSBs.", &[]),
    shape("VM_HOST_INCOMPATIBLE_VERSION", "This VM operation cannot be performed on an older-versioned host during an upgrade.", &[]),
    shape("VM_HOST_INCOMPATIBLE_VERSION_MIGRATE", "Cannot migrate a VM to a destination host which is older than the source host.", &[]),
    shape("VM_HOST_INCOMPATIBLE_VIRTUAL_HARDWARE_PLATFORM_VERSION", "You attempted to run a VM on a host that cannot provide the VM's required Virtual Hardware Platform version.", &[]),
    shape("VM_HVM_REQUIRED", "HVM is required for this operation", &[]),
    shape("VM_INCOMPATIBLE_WITH_THIS_HOST", "The VM is incompatible with the CPU features of this host.", &[]),
    shape("VM_IS_IMMOBILE", "The VM is configured in a way that prevents it from being mobile.", &[]),
    shape("VM_IS_PART_OF_AN_APPLIANCE", "This operation is not allowed as the VM is part of an appliance.", &[]),
    shape("VM_IS_PROTECTED", "This operation cannot be performed because the specified VM is protected by HA", &["vm"]),
    shape("VM_IS_TEMPLATE", "The operation attempted is not valid for a template VM", &["vm"]),
    shape("VM_IS_USING_NESTED_VIRT", "This operation is illegal because the VM is using nested virtualization.", &[]),
    shape("VM_LACKS_FEATURE", "You attempted an operation on a VM which lacks the feature.", &["vm"]),
    shape("VM_LACKS_FEATURE_SHUTDOWN", "You attempted an operation which needs the cooperative shutdown feature on a VM which lacks it.", &[]),
    shape("VM_LACKS_FEATURE_STATIC_IP_SETTING", "You attempted an operation which needs the VM static-ip-setting feature on a VM which lacks it.", &[]),
    shape("VM_LACKS_FEATURE_SUSPEND", "You attempted an operation which needs the VM cooperative suspend feature on a VM which lacks it.", &[]),
    shape("VM_LACKS_FEATURE_VCPU_HOTPLUG", "You attempted an operation which needs the VM hotplug-vcpu feature on a VM which lacks it.", &[]),
    shape("VM_MEMORY_SIZE_TOO_LOW", "The specified VM has too little memory to be started.", &[]),
    shape("VM_MIGRATE_CONTACT_REMOTE_SERVICE_FAILED", "Failed to contact service on the destination host.", &[]),
    shape("VM_MIGRATE_FAILED", "An error occurred during the migration process.", &["vm", "source", "destination", "msg"]),
    shape("VM_MISSING_PV_DRIVERS", "You attempted an operation on a VM which requires PV drivers to be installed but the drivers were not detected.", &["vm"]),
    shape("VM_NOT_RESIDENT_HERE", "The specified VM is not currently resident on the specified server.", &["vm", "host"]),
    shape("VM_NO_CRASHDUMP_SR", "This VM does not have a crash dump SR specified.", &["vm"]),
    shape("VM_NO_EMPTY_CD_VBD", "The VM has no empty CD drive (VBD).", &["vm"]),
    shape("VM_NO_SUSPEND_SR", "This VM does not have a suspend SR specified.", &["vm"]),
    shape("VM_NO_VCPUS", "You need at least 1 VCPU to start a VM", &[]),
    shape("VM_OLD_PV_DRIVERS", "You attempted an operation on a VM which requires a more recent version of the PV drivers. Please upgrade your PV drivers.", &[]),
    shape("VM_PCI_BUS_FULL", "The VM does not have any free PCI slots", &[]),
    shape("VM_PV_DRIVERS_IN_USE", "VM PV drivers still in use", &[]),
    shape("VM_REBOOTED", "The VM unexpectedly rebooted", &["vm"]),
    shape("VM_REQUIRES_GPU", "You attempted to run a VM on a host which doesn't have a pGPU available in the GPU group needed by the VM. The VM has a vGPU attached to this GPU group.", &["vm", "GPU_group"]),
    shape("VM_REQUIRES_IOMMU", "You attempted to run a VM on a host which doesn't have I/O virtualization (IOMMU/VT-d) enabled, which is needed by the VM.", &["host"]),
    shape("VM_REQUIRES_NETWORK", "You attempted to run a VM on a host which doesn't have a PIF on a Network needed by the VM. The VM has at least one VIF attached to the Network.", &["vm", "network"]),
    shape("VM_REQUIRES_SR", "You attempted to run a VM on a host which doesn't have access to an SR needed by the VM. The VM has at least one VBD attached to a VDI in the SR.", &["vm", "sr"]),
    shape("VM_REQUIRES_VDI", "VM cannot be started because it requires a VDI which cannot be attached", &["vm", "vdi"]),
    shape("VM_REQUIRES_VGPU", "You attempted to run a VM on a host on which the vGPU required by the VM cannot be allocated on any pGPUs in the GPU_group needed by the VM.", &["vm", "GPU_group", "vGPU_type"]),
    shape("VM_REQUIRES_VUSB", "You attempted to run a VM on a host on which the VUSB required by the VM cannot be allocated on any PUSBs in the USB_group needed by the VM.", &[]),
    shape("VM_REVERT_FAILED", "An error occured while reverting the specified virtual machine to the specified snapshot", &[]),
    shape("VM_SHUTDOWN_TIMEOUT", "VM failed to shutdown before the timeout expired", &["vm", "timeout"]),
    shape("VM_SNAPSHOT_WITH_QUIESCE_FAILED", "The quiesced-snapshot operation failed for an unexpected reason", &["vm"]),
    shape("VM_SNAPSHOT_WITH_QUIESCE_NOT_SUPPORTED", "The VSS plug-in is not installed on this virtual machine", &[]),
    shape("VM_SNAPSHOT_WITH_QUIESCE_PLUGIN_DEOS_NOT_RESPOND", "The VSS plug-in cannot be contacted", &[]),
    shape("VM_SNAPSHOT_WITH_QUIESCE_TIMEOUT", "The VSS plug-in has timed out", &["vm"]),
    shape("VM_SUSPEND_TIMEOUT", "VM failed to suspend before the timeout expired", &[]),
    shape("VM_TOO_MANY_VCPUS", "Too many VCPUs to start this VM", &["vm"]),
    shape("VM_TO_IMPORT_IS_NOT_NEWER_VERSION", "The VM cannot be imported unforced because it is either the same version or an older version of an existing VM.", &[]),
    shape("VM_UNSAFE_BOOT", "You attempted an operation on a VM that was judged to be unsafe by the server. This can happen if the VM would run on a CPU that has a potentially incompatible set of feature flags to those the VM requires. If you want to override this warning then use the 'force' option.", &["vm"]),
    shape("WLB_AUTHENTICATION_FAILED", "WLB rejected our configured authentication details.", &[]),
    shape("WLB_CONNECTION_REFUSED", "WLB refused a connection to the server.", &[]),
    shape("WLB_CONNECTION_RESET", "The connection to the WLB server was reset.", &[]),
    shape("WLB_DISABLED", "This pool has wlb-enabled set to false.", &[]),
    shape("WLB_INTERNAL_ERROR", "WLB reported an internal error.", &[]),
    shape("WLB_MALFORMED_REQUEST", "WLB rejected the server's request as malformed.", &[]),
    shape("WLB_MALFORMED_RESPONSE", "WLB said something that the server wasn't expecting or didn't understand. The method called on WLB, a diagnostic reason, and the response from WLB are returned.", &[]),
    shape("WLB_NOT_INITIALIZED", "No WLB connection is configured.", &[]),
    shape("WLB_TIMEOUT", "The communication with the WLB server timed out.", &[]),
    shape("WLB_UNKNOWN_HOST", "The configured WLB server name failed to resolve in DNS.", &[]),
    shape("WLB_URL_INVALID", "The WLB URL is invalid. Ensure it is in the format: <ipaddress>:<port>. The configured/given URL is returned.", &[]),
    shape("WLB_XENSERVER_AUTHENTICATION_FAILED", "WLB reported that the server rejected its configured authentication details.", &[]),
    shape("WLB_XENSERVER_CONNECTION_REFUSED", "WLB reported that the server refused to let it connect (even though we're connecting perfectly fine in the other direction).", &[]),
    shape("WLB_XENSERVER_MALFORMED_RESPONSE", "WLB reported that the server said something to it that WLB wasn't expecting or didn't understand.", &[]),
    shape("WLB_XENSERVER_TIMEOUT", "WLB reported that communication with the server timed out.", &[]),
    shape("WLB_XENSERVER_UNKNOWN_HOST", "WLB reported that its configured server name for this server instance failed to resolve in DNS.", &[]),
    shape("XAPI_HOOK_FAILED", "3rd party xapi hook failed", &[]),
    shape("XENAPI_MISSING_PLUGIN", "The requested plug-in could not be found.", &["name"]),
    shape("XENAPI_PLUGIN_FAILURE", "There was a failure communicating with the plug-in.", &["status", "stdout", "stderr"]),
    shape("XEN_INCOMPATIBLE", "The current version of Xen or its control libraries is incompatible with the Toolstack.", &[]),
    shape("XEN_VSS_REQ_ERROR_ADDING_VOLUME_TO_SNAPSET_FAILED", "Some volumes to be snapshot could not be added to the VSS snapshot set", &[]),
    shape("XEN_VSS_REQ_ERROR_CREATING_SNAPSHOT", "An attempt to create the snapshots failed", &[]),
    shape("XEN_VSS_REQ_ERROR_CREATING_SNAPSHOT_XML_STRING", "Could not create the XML string generated by the transportable snapshot", &[]),
    shape("XEN_VSS_REQ_ERROR_INIT_FAILED", "Initialization of the VSS requester failed", &[]),
    shape("XEN_VSS_REQ_ERROR_NO_VOLUMES_SUPPORTED", "Could not find any volumes supported by the VSS Provider", &[]),
    shape("XEN_VSS_REQ_ERROR_PREPARING_WRITERS", "An attempt to prepare VSS writers for the snapshot failed", &[]),
    shape("XEN_VSS_REQ_ERROR_PROV_NOT_LOADED", "The VSS Provider is not loaded", &[]),
    shape("XEN_VSS_REQ_ERROR_START_SNAPSHOT_SET_FAILED", "An attempt to start a new VSS snapshot failed", &[]),
    shape("XMLRPC_UNMARSHAL_FAILURE", "The server failed to unmarshal the XMLRPC message; it was expecting one element and received something else.", &[]),
];

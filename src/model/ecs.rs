//! Compute and network interface (ECS) types.

use std::collections::BTreeMap;

use super::PageArgs;

/// A compute instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Instance {
    /// Provider-assigned identifier
    pub instance_id: String,
    /// Display name
    pub instance_name: String,
    /// Lifecycle status
    pub status: String,
    /// VPC the instance lives in
    pub vpc_id: String,
    /// Private addresses in the VPC
    pub private_ips: Vec<String>,
}

/// Filters for listing instances.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeInstancesArgs {
    /// Region to query
    pub region_id: String,
    /// Restrict to these instances
    pub instance_ids: Vec<String>,
    /// Restrict by VPC
    pub vpc_id: Option<String>,
    /// Paging
    pub page: PageArgs,
}

/// An elastic network interface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkInterface {
    /// Interface identifier
    pub network_interface_id: String,
    /// Instance the interface is attached to, empty when detached
    pub instance_id: String,
    /// Primary private address
    pub private_ip: String,
    /// `Primary` or `Secondary`
    pub interface_type: String,
}

/// Filters for listing network interfaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeNetworkInterfacesArgs {
    /// Region to query
    pub region_id: String,
    /// Restrict by VPC
    pub vpc_id: Option<String>,
    /// Restrict to these interfaces
    pub network_interface_ids: Vec<String>,
    /// Restrict by private address
    pub private_ips: Vec<String>,
}

/// An elastic IP address.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EipAddress {
    /// Allocation identifier
    pub allocation_id: String,
    /// Public address
    pub ip_address: String,
    /// Bound instance, empty when unbound
    pub instance_id: String,
    /// Binding status
    pub status: String,
}

/// Filters for listing elastic IPs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeEipAddressesArgs {
    /// Region to query
    pub region_id: String,
    /// Restrict by allocation
    pub allocation_id: Option<String>,
    /// Restrict by public address
    pub ip_address: Option<String>,
    /// Paging
    pub page: PageArgs,
}

/// Tags to attach to a compute resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddTagsArgs {
    /// Region of the resource
    pub region_id: String,
    /// Resource identifier
    pub resource_id: String,
    /// `instance`, `eni`, ...
    pub resource_type: String,
    /// Tag set
    pub tags: BTreeMap<String, String>,
}

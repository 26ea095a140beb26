//! Load balancer (SLB) types.

use std::collections::BTreeMap;
use std::fmt;

use super::PageArgs;

/// A load balancer descriptor.
///
/// The default value is the empty snapshot used when a request context does
/// not carry a target resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadBalancer {
    /// Provider-assigned identifier
    pub load_balancer_id: String,
    /// Display name
    pub load_balancer_name: String,
    /// Service address
    pub address: String,
    /// `internet` or `intranet`
    pub address_type: String,
    /// VPC the load balancer lives in, empty for classic network
    pub vpc_id: String,
    /// Instance specification, empty for pay-by-usage
    pub load_balancer_spec: String,
    /// Lifecycle status reported by the provider
    pub status: String,
}

/// Filters for listing load balancers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeLoadBalancersArgs {
    /// Region to query
    pub region_id: String,
    /// Restrict to one load balancer
    pub load_balancer_id: Option<String>,
    /// Restrict by name
    pub load_balancer_name: Option<String>,
    /// Restrict by service address
    pub address: Option<String>,
    /// Restrict by VPC
    pub vpc_id: Option<String>,
    /// Restrict to load balancers carrying all of these tags
    pub tags: BTreeMap<String, String>,
}

/// Arguments for creating a load balancer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateLoadBalancerArgs {
    /// Target region
    pub region_id: String,
    /// Display name
    pub load_balancer_name: String,
    /// `internet` or `intranet`
    pub address_type: String,
    /// VSwitch for VPC load balancers
    pub vswitch_id: Option<String>,
    /// Instance specification
    pub load_balancer_spec: Option<String>,
    /// Public bandwidth in Mbps
    pub bandwidth: Option<u32>,
}

/// Response to a successful load balancer creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateLoadBalancerResponse {
    /// Identifier of the new load balancer
    pub load_balancer_id: String,
    /// Assigned service address
    pub address: String,
    /// VPC of the new load balancer
    pub vpc_id: String,
}

/// Toggle for delete protection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetDeleteProtectionArgs {
    /// Target load balancer
    pub load_balancer_id: String,
    /// Whether deletion is blocked
    pub enabled: bool,
}

/// Toggle for modification protection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetModificationProtectionArgs {
    /// Target load balancer
    pub load_balancer_id: String,
    /// Whether console modification is blocked
    pub enabled: bool,
    /// Reason shown to operators
    pub reason: String,
}

/// Change of instance specification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifyInstanceSpecArgs {
    /// Target load balancer
    pub load_balancer_id: String,
    /// New specification
    pub load_balancer_spec: String,
}

/// Change of internet billing or bandwidth.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifyInternetSpecArgs {
    /// Target load balancer
    pub load_balancer_id: String,
    /// `paybybandwidth` or `paybytraffic`
    pub internet_charge_type: String,
    /// Public bandwidth in Mbps
    pub bandwidth: Option<u32>,
}

/// A backend server attached to a load balancer or backend group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendServer {
    /// Instance or ENI identifier
    pub server_id: String,
    /// Traffic weight
    pub weight: u32,
    /// Backend port, used by backend groups only
    pub port: Option<u16>,
    /// `ecs` or `eni`
    pub server_type: String,
    /// Free-form description
    pub description: String,
}

/// Listener protocol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ListenerProtocol {
    /// Layer 4 TCP
    #[default]
    Tcp,
    /// Layer 4 UDP
    Udp,
    /// Layer 7 HTTP
    Http,
    /// Layer 7 HTTPS
    Https,
}

impl ListenerProtocol {
    /// All protocols, in provider order.
    pub const ALL: [ListenerProtocol; 4] = [
        ListenerProtocol::Tcp,
        ListenerProtocol::Udp,
        ListenerProtocol::Http,
        ListenerProtocol::Https,
    ];

    /// Name of the protocol-specific describe operation.
    pub fn describe_operation(self) -> &'static str {
        match self {
            ListenerProtocol::Tcp => "DescribeLoadBalancerTCPListenerAttribute",
            ListenerProtocol::Udp => "DescribeLoadBalancerUDPListenerAttribute",
            ListenerProtocol::Http => "DescribeLoadBalancerHTTPListenerAttribute",
            ListenerProtocol::Https => "DescribeLoadBalancerHTTPSListenerAttribute",
        }
    }

    /// Name of the protocol-specific create operation.
    pub fn create_operation(self) -> &'static str {
        match self {
            ListenerProtocol::Tcp => "CreateLoadBalancerTCPListener",
            ListenerProtocol::Udp => "CreateLoadBalancerUDPListener",
            ListenerProtocol::Http => "CreateLoadBalancerHTTPListener",
            ListenerProtocol::Https => "CreateLoadBalancerHTTPSListener",
        }
    }

    /// Name of the protocol-specific update operation.
    pub fn set_attribute_operation(self) -> &'static str {
        match self {
            ListenerProtocol::Tcp => "SetLoadBalancerTCPListenerAttribute",
            ListenerProtocol::Udp => "SetLoadBalancerUDPListenerAttribute",
            ListenerProtocol::Http => "SetLoadBalancerHTTPListenerAttribute",
            ListenerProtocol::Https => "SetLoadBalancerHTTPSListenerAttribute",
        }
    }
}

impl fmt::Display for ListenerProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListenerProtocol::Tcp => write!(f, "tcp"),
            ListenerProtocol::Udp => write!(f, "udp"),
            ListenerProtocol::Http => write!(f, "http"),
            ListenerProtocol::Https => write!(f, "https"),
        }
    }
}

/// Listener configuration, used both for reads and for create/update calls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listener {
    /// Owning load balancer
    pub load_balancer_id: String,
    /// Listener protocol
    pub protocol: ListenerProtocol,
    /// Frontend port
    pub listener_port: u16,
    /// Backend port when no backend group is bound
    pub backend_server_port: Option<u16>,
    /// Bandwidth cap in Mbps, `-1` for unlimited
    pub bandwidth: i32,
    /// Bound backend group
    pub vserver_group_id: Option<String>,
    /// Scheduling algorithm (`wrr`, `rr`, ...)
    pub scheduler: String,
    /// Server certificate, HTTPS only
    pub server_certificate_id: Option<String>,
    /// Free-form description
    pub description: String,
    /// `running` or `stopped`
    pub status: String,
}

/// A tag attached to a load balancer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tag {
    /// Tag key
    pub key: String,
    /// Tag value
    pub value: String,
    /// Number of instances carrying this tag
    pub instance_count: u32,
}

/// Filters for listing tags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeTagsArgs {
    /// Region to query
    pub region_id: String,
    /// Restrict to one load balancer
    pub load_balancer_id: Option<String>,
    /// Paging
    pub page: PageArgs,
}

/// Tags to attach to or detach from a load balancer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagsArgs {
    /// Region of the load balancer
    pub region_id: String,
    /// Target load balancer
    pub load_balancer_id: String,
    /// Tag set
    pub tags: BTreeMap<String, String>,
}

/// A backend (virtual server) group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VServerGroup {
    /// Group identifier
    pub vserver_group_id: String,
    /// Group name
    pub vserver_group_name: String,
    /// Owning load balancer
    pub load_balancer_id: String,
    /// Members
    pub backend_servers: Vec<BackendServer>,
}

/// Filters for listing backend groups of a load balancer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeVServerGroupsArgs {
    /// Region to query
    pub region_id: String,
    /// Owning load balancer
    pub load_balancer_id: String,
}

/// Identifies one backend group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VServerGroupRef {
    /// Region of the group
    pub region_id: String,
    /// Group identifier
    pub vserver_group_id: String,
}

/// Arguments for creating a backend group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateVServerGroupArgs {
    /// Region of the load balancer
    pub region_id: String,
    /// Owning load balancer
    pub load_balancer_id: String,
    /// Group name
    pub vserver_group_name: String,
    /// Initial members
    pub backend_servers: Vec<BackendServer>,
}

/// Arguments for renaming a backend group or replacing its member attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetVServerGroupAttributeArgs {
    /// Region of the group
    pub region_id: String,
    /// Target group
    pub vserver_group_id: String,
    /// New name, unchanged when empty
    pub vserver_group_name: String,
    /// Member attributes (weight, description) to apply
    pub backend_servers: Vec<BackendServer>,
}

/// Arguments for swapping backend group members.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModifyVServerGroupBackendServersArgs {
    /// Region of the group
    pub region_id: String,
    /// Target group
    pub vserver_group_id: String,
    /// Members to replace
    pub old_backend_servers: Vec<BackendServer>,
    /// Replacement members
    pub new_backend_servers: Vec<BackendServer>,
}

/// Arguments for adding members to or removing members from a backend group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VServerGroupBackendServersArgs {
    /// Region of the group
    pub region_id: String,
    /// Owning load balancer
    pub load_balancer_id: String,
    /// Target group
    pub vserver_group_id: String,
    /// Members to add or remove
    pub backend_servers: Vec<BackendServer>,
}

//! Routing (VPC) types.

use std::time::Duration;

use super::PageArgs;

/// A virtual private cloud.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vpc {
    /// VPC identifier
    pub vpc_id: String,
    /// Display name
    pub vpc_name: String,
    /// Primary CIDR block
    pub cidr_block: String,
    /// Router of the VPC
    pub vrouter_id: String,
    /// Region of the VPC
    pub region_id: String,
}

/// Filters for listing VPCs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeVpcsArgs {
    /// Region to query
    pub region_id: String,
    /// Restrict to one VPC
    pub vpc_id: Option<String>,
    /// Paging
    pub page: PageArgs,
}

/// A virtual router.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VRouter {
    /// Router identifier
    pub vrouter_id: String,
    /// VPC the router belongs to
    pub vpc_id: String,
    /// Route tables attached to the router
    pub route_table_ids: Vec<String>,
}

/// Filters for listing routers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeVRoutersArgs {
    /// Region to query
    pub region_id: String,
    /// Restrict to one router
    pub vrouter_id: Option<String>,
    /// Paging
    pub page: PageArgs,
}

/// A route entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteEntry {
    /// Owning route table
    pub route_table_id: String,
    /// Destination CIDR
    pub destination_cidr_block: String,
    /// `Instance`, `NetworkInterface`, ...
    pub next_hop_type: String,
    /// Next hop identifier
    pub next_hop_id: String,
    /// `Available`, `Pending`, ...
    pub status: String,
}

/// A route table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    /// Table identifier
    pub route_table_id: String,
    /// Owning router
    pub vrouter_id: String,
    /// Entries in the table
    pub route_entries: Vec<RouteEntry>,
}

/// Filters for listing route tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeRouteTablesArgs {
    /// Region to query
    pub region_id: String,
    /// Owning router
    pub vrouter_id: String,
    /// Restrict to one table
    pub route_table_id: Option<String>,
    /// Paging
    pub page: PageArgs,
}

/// Filters for listing route entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeRouteEntryListArgs {
    /// Region to query
    pub region_id: String,
    /// Table to list
    pub route_table_id: String,
    /// Restrict by destination
    pub destination_cidr_block: Option<String>,
    /// Restrict by next hop
    pub next_hop_id: Option<String>,
}

/// Arguments for creating or deleting a route entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteEntryArgs {
    /// Target table
    pub route_table_id: String,
    /// Destination CIDR
    pub destination_cidr_block: String,
    /// Next hop kind
    pub next_hop_type: String,
    /// Next hop identifier
    pub next_hop_id: String,
}

/// Arguments for waiting until every entry in a table is available.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaitForRouteEntriesArgs {
    /// Router owning the table
    pub vrouter_id: String,
    /// Table to watch
    pub route_table_id: String,
    /// Give up after this long
    pub timeout: Duration,
}

//! Private DNS zone (PVTZ) types.

use super::PageArgs;

/// A private zone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Zone {
    /// Zone identifier
    pub zone_id: String,
    /// Zone name, e.g. `svc.cluster.local`
    pub zone_name: String,
    /// Number of records in the zone
    pub record_count: u32,
    /// Operator remark
    pub remark: String,
}

/// Filters for listing zones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeZonesArgs {
    /// Substring match on the zone name
    pub keyword: Option<String>,
    /// Paging
    pub page: PageArgs,
}

/// Arguments for checking whether a zone name is available.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckZoneNameArgs {
    /// Candidate zone name
    pub zone_name: String,
}

/// A VPC binding of a zone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneVpc {
    /// Region of the VPC
    pub region_id: String,
    /// VPC identifier
    pub vpc_id: String,
}

/// Identifies one zone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneRef {
    /// Zone identifier
    pub zone_id: String,
}

/// Detailed zone description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneInfo {
    /// Zone identifier
    pub zone_id: String,
    /// Zone name
    pub zone_name: String,
    /// Operator remark
    pub remark: String,
    /// VPCs the zone is visible from
    pub bind_vpcs: Vec<ZoneVpc>,
}

/// A region the zone service is available in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    /// Region identifier
    pub region_id: String,
    /// Display name
    pub region_name: String,
}

/// A record in a zone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneRecord {
    /// Record identifier
    pub record_id: i64,
    /// Host record (left-hand side)
    pub rr: String,
    /// `A`, `CNAME`, `TXT`, ...
    pub record_type: String,
    /// Record value
    pub value: String,
    /// Time to live in seconds
    pub ttl: u32,
    /// MX priority
    pub priority: Option<u32>,
    /// `ENABLE` or `DISABLE`
    pub status: String,
}

/// Filters for listing records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescribeZoneRecordsArgs {
    /// Zone to list
    pub zone_id: String,
    /// Substring match on the host record
    pub keyword: Option<String>,
    /// Paging
    pub page: PageArgs,
}

/// Arguments for creating a zone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddZoneArgs {
    /// Zone name
    pub zone_name: String,
    /// Operator remark
    pub remark: String,
}

/// Response to a successful zone creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddZoneResponse {
    /// Identifier of the new zone
    pub zone_id: String,
    /// Name of the new zone
    pub zone_name: String,
}

/// Arguments for updating a zone remark.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateZoneRemarkArgs {
    /// Target zone
    pub zone_id: String,
    /// New remark
    pub remark: String,
}

/// Arguments for binding a zone to VPCs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindZoneVpcArgs {
    /// Target zone
    pub zone_id: String,
    /// Full set of VPCs to bind
    pub vpcs: Vec<ZoneVpc>,
}

/// Arguments for creating a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddZoneRecordArgs {
    /// Target zone
    pub zone_id: String,
    /// Host record
    pub rr: String,
    /// Record type
    pub record_type: String,
    /// Record value
    pub value: String,
    /// Time to live in seconds
    pub ttl: u32,
    /// MX priority
    pub priority: Option<u32>,
}

/// Response to a successful record creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddZoneRecordResponse {
    /// Identifier of the new record
    pub record_id: i64,
}

/// Arguments for updating a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateZoneRecordArgs {
    /// Target record
    pub record_id: i64,
    /// Host record
    pub rr: String,
    /// Record type
    pub record_type: String,
    /// Record value
    pub value: String,
    /// Time to live in seconds
    pub ttl: u32,
    /// MX priority
    pub priority: Option<u32>,
}

/// Identifies one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneRecordRef {
    /// Record identifier
    pub record_id: i64,
}

/// Arguments for enabling or disabling a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetZoneRecordStatusArgs {
    /// Target record
    pub record_id: i64,
    /// `ENABLE` or `DISABLE`
    pub status: String,
}

//! Private DNS zone (PVTZ) family.
//!
//! Operation names carry a `pvtz.` prefix so they never collide with the
//! load balancer surface in logs.

use super::{ApiFamily, Call, DryRunProxy};
use crate::audit::Component;
use crate::context::RequestContext;
use crate::error::Error;
use crate::model::pvtz::{
    AddZoneArgs, AddZoneRecordArgs, AddZoneRecordResponse, AddZoneResponse, BindZoneVpcArgs,
    CheckZoneNameArgs, DescribeZoneRecordsArgs, DescribeZonesArgs, Region,
    SetZoneRecordStatusArgs, UpdateZoneRecordArgs, UpdateZoneRemarkArgs, Zone, ZoneInfo,
    ZoneRecord, ZoneRecordRef, ZoneRef,
};
use crate::model::Pagination;

/// Capability set of a private zone client.
pub trait PrivateZoneApi: Send + Sync {
    /// Lists zones.
    fn describe_zones(
        &self,
        ctx: &RequestContext,
        args: &DescribeZonesArgs,
    ) -> Result<(Vec<Zone>, Pagination), Error>;

    /// Returns `true` if the zone name is free to use.
    fn check_zone_name(&self, ctx: &RequestContext, args: &CheckZoneNameArgs)
        -> Result<bool, Error>;

    /// Describes one zone with its VPC bindings.
    fn describe_zone_info(&self, ctx: &RequestContext, zone: &ZoneRef) -> Result<ZoneInfo, Error>;

    /// Lists regions the zone service is available in.
    fn describe_regions(&self, ctx: &RequestContext) -> Result<Vec<Region>, Error>;

    /// Lists records of a zone.
    fn describe_zone_records(
        &self,
        ctx: &RequestContext,
        args: &DescribeZoneRecordsArgs,
    ) -> Result<(Vec<ZoneRecord>, Pagination), Error>;

    /// Lists records of a zone whose host record equals `rr`.
    fn describe_zone_records_by_rr(
        &self,
        ctx: &RequestContext,
        zone_id: &str,
        rr: &str,
    ) -> Result<Vec<ZoneRecord>, Error>;

    /// Creates a zone.
    fn add_zone(&self, ctx: &RequestContext, args: &AddZoneArgs)
        -> Result<AddZoneResponse, Error>;

    /// Deletes a zone.
    fn delete_zone(&self, ctx: &RequestContext, zone: &ZoneRef) -> Result<(), Error>;

    /// Updates a zone remark.
    fn update_zone_remark(&self, ctx: &RequestContext, args: &UpdateZoneRemarkArgs)
        -> Result<(), Error>;

    /// Binds a zone to a set of VPCs.
    fn bind_zone_vpc(&self, ctx: &RequestContext, args: &BindZoneVpcArgs) -> Result<(), Error>;

    /// Deletes every record of a zone whose host record equals `rr`.
    fn delete_zone_records_by_rr(
        &self,
        ctx: &RequestContext,
        zone_id: &str,
        rr: &str,
    ) -> Result<(), Error>;

    /// Creates a record.
    fn add_zone_record(
        &self,
        ctx: &RequestContext,
        args: &AddZoneRecordArgs,
    ) -> Result<AddZoneRecordResponse, Error>;

    /// Updates a record.
    fn update_zone_record(&self, ctx: &RequestContext, args: &UpdateZoneRecordArgs)
        -> Result<(), Error>;

    /// Deletes a record.
    fn delete_zone_record(&self, ctx: &RequestContext, record: &ZoneRecordRef)
        -> Result<(), Error>;

    /// Enables or disables a record.
    fn set_zone_record_status(
        &self,
        ctx: &RequestContext,
        args: &SetZoneRecordStatusArgs,
    ) -> Result<(), Error>;
}

impl ApiFamily for dyn PrivateZoneApi {
    const COMPONENT: Component = Component::Pvtz;
}

/// Dry-run proxy in front of a [`PrivateZoneApi`] client.
pub type PrivateZoneProxy = DryRunProxy<dyn PrivateZoneApi>;

impl PrivateZoneApi for PrivateZoneProxy {
    fn describe_zones(
        &self,
        ctx: &RequestContext,
        args: &DescribeZonesArgs,
    ) -> Result<(Vec<Zone>, Pagination), Error> {
        self.dispatch(ctx, Call::read("pvtz.DescribeZones"), |c| {
            c.describe_zones(ctx, args)
        })
    }

    fn check_zone_name(
        &self,
        ctx: &RequestContext,
        args: &CheckZoneNameArgs,
    ) -> Result<bool, Error> {
        self.dispatch(ctx, Call::read("pvtz.CheckZoneName"), |c| {
            c.check_zone_name(ctx, args)
        })
    }

    fn describe_zone_info(&self, ctx: &RequestContext, zone: &ZoneRef) -> Result<ZoneInfo, Error> {
        self.dispatch(ctx, Call::read("pvtz.DescribeZoneInfo"), |c| {
            c.describe_zone_info(ctx, zone)
        })
    }

    fn describe_regions(&self, ctx: &RequestContext) -> Result<Vec<Region>, Error> {
        self.dispatch(ctx, Call::read("pvtz.DescribeRegions"), |c| {
            c.describe_regions(ctx)
        })
    }

    fn describe_zone_records(
        &self,
        ctx: &RequestContext,
        args: &DescribeZoneRecordsArgs,
    ) -> Result<(Vec<ZoneRecord>, Pagination), Error> {
        self.dispatch(ctx, Call::read("pvtz.DescribeZoneRecords"), |c| {
            c.describe_zone_records(ctx, args)
        })
    }

    fn describe_zone_records_by_rr(
        &self,
        ctx: &RequestContext,
        zone_id: &str,
        rr: &str,
    ) -> Result<Vec<ZoneRecord>, Error> {
        self.dispatch(ctx, Call::read("pvtz.DescribeZoneRecordsByRR"), |c| {
            c.describe_zone_records_by_rr(ctx, zone_id, rr)
        })
    }

    fn add_zone(&self, ctx: &RequestContext, args: &AddZoneArgs) -> Result<AddZoneResponse, Error> {
        let call = Call::new("pvtz.AddZone", "AddZone")
            .resource("")
            .describe(format!("should not add zone {}", args.zone_name));
        self.dispatch(ctx, call, |c| c.add_zone(ctx, args))
    }

    fn delete_zone(&self, ctx: &RequestContext, zone: &ZoneRef) -> Result<(), Error> {
        let call = Call::new("pvtz.DeleteZone", "DeleteZone")
            .resource(zone.zone_id.as_str())
            .describe(format!("should not delete zone {}", zone.zone_id));
        self.dispatch(ctx, call, |c| c.delete_zone(ctx, zone))
    }

    fn update_zone_remark(
        &self,
        ctx: &RequestContext,
        args: &UpdateZoneRemarkArgs,
    ) -> Result<(), Error> {
        let call = Call::new("pvtz.UpdateZoneRemark", "UpdateZoneRemark")
            .resource(args.zone_id.as_str())
            .describe(format!("should not update remark of zone {}", args.zone_id));
        self.dispatch(ctx, call, |c| c.update_zone_remark(ctx, args))
    }

    fn bind_zone_vpc(&self, ctx: &RequestContext, args: &BindZoneVpcArgs) -> Result<(), Error> {
        let vpcs: Vec<&str> = args.vpcs.iter().map(|v| v.vpc_id.as_str()).collect();
        let call = Call::new("pvtz.BindZoneVpc", "BindZoneVpc")
            .resource(args.zone_id.as_str())
            .describe(format!(
                "should not bind zone {} to vpcs [{}]",
                args.zone_id,
                vpcs.join(", ")
            ));
        self.dispatch(ctx, call, |c| c.bind_zone_vpc(ctx, args))
    }

    fn delete_zone_records_by_rr(
        &self,
        ctx: &RequestContext,
        zone_id: &str,
        rr: &str,
    ) -> Result<(), Error> {
        let call = Call::new("pvtz.DeleteZoneRecordsByRR", "DeleteZoneRecordsByRR")
            .resource(zone_id)
            .describe(format!("should not delete records {} of zone {}", rr, zone_id));
        self.dispatch(ctx, call, |c| c.delete_zone_records_by_rr(ctx, zone_id, rr))
    }

    fn add_zone_record(
        &self,
        ctx: &RequestContext,
        args: &AddZoneRecordArgs,
    ) -> Result<AddZoneRecordResponse, Error> {
        let call = Call::new("pvtz.AddZoneRecord", "AddZoneRecord")
            .resource(args.zone_id.as_str())
            .describe(format!(
                "should not add record {} {} {} to zone {}",
                args.rr, args.record_type, args.value, args.zone_id
            ));
        self.dispatch(ctx, call, |c| c.add_zone_record(ctx, args))
    }

    fn update_zone_record(
        &self,
        ctx: &RequestContext,
        args: &UpdateZoneRecordArgs,
    ) -> Result<(), Error> {
        let call = Call::new("pvtz.UpdateZoneRecord", "UpdateZoneRecord")
            .resource(args.record_id.to_string())
            .describe(format!(
                "should not update record {} to {} {} {}",
                args.record_id, args.rr, args.record_type, args.value
            ));
        self.dispatch(ctx, call, |c| c.update_zone_record(ctx, args))
    }

    fn delete_zone_record(&self, ctx: &RequestContext, record: &ZoneRecordRef) -> Result<(), Error> {
        let call = Call::new("pvtz.DeleteZoneRecord", "DeleteZoneRecord")
            .resource(record.record_id.to_string())
            .describe(format!("should not delete record {}", record.record_id));
        self.dispatch(ctx, call, |c| c.delete_zone_record(ctx, record))
    }

    fn set_zone_record_status(
        &self,
        ctx: &RequestContext,
        args: &SetZoneRecordStatusArgs,
    ) -> Result<(), Error> {
        let call = Call::new("pvtz.SetZoneRecordStatus", "SetZoneRecordStatus")
            .resource(args.record_id.to_string())
            .describe(format!(
                "should not set status of record {} to {}",
                args.record_id, args.status
            ));
        self.dispatch(ctx, call, |c| c.set_zone_record_status(ctx, args))
    }
}

//! Routing (VPC) family.

use super::{ApiFamily, Call, DryRunProxy};
use crate::audit::Component;
use crate::context::RequestContext;
use crate::error::Error;
use crate::model::vpc::{
    DescribeRouteEntryListArgs, DescribeRouteTablesArgs, DescribeVRoutersArgs, DescribeVpcsArgs,
    RouteEntry, RouteEntryArgs, RouteTable, VRouter, Vpc, WaitForRouteEntriesArgs,
};
use crate::model::Pagination;

/// Capability set of a routing client.
pub trait RouteApi: Send + Sync {
    /// Lists VPCs.
    fn describe_vpcs(
        &self,
        ctx: &RequestContext,
        args: &DescribeVpcsArgs,
    ) -> Result<(Vec<Vpc>, Pagination), Error>;

    /// Lists virtual routers.
    fn describe_vrouters(
        &self,
        ctx: &RequestContext,
        args: &DescribeVRoutersArgs,
    ) -> Result<(Vec<VRouter>, Pagination), Error>;

    /// Lists route tables of a router.
    fn describe_route_tables(
        &self,
        ctx: &RequestContext,
        args: &DescribeRouteTablesArgs,
    ) -> Result<(Vec<RouteTable>, Pagination), Error>;

    /// Lists entries of one route table.
    fn describe_route_entry_list(
        &self,
        ctx: &RequestContext,
        args: &DescribeRouteEntryListArgs,
    ) -> Result<Vec<RouteEntry>, Error>;

    /// Creates a route entry.
    fn create_route_entry(&self, ctx: &RequestContext, args: &RouteEntryArgs) -> Result<(), Error>;

    /// Deletes a route entry.
    fn delete_route_entry(&self, ctx: &RequestContext, args: &RouteEntryArgs) -> Result<(), Error>;

    /// Blocks until every entry of a table is available or the timeout
    /// elapses.
    fn wait_for_all_route_entries_available(
        &self,
        ctx: &RequestContext,
        args: &WaitForRouteEntriesArgs,
    ) -> Result<(), Error>;
}

impl ApiFamily for dyn RouteApi {
    const COMPONENT: Component = Component::Vpc;
}

/// Dry-run proxy in front of a [`RouteApi`] client.
pub type RouteProxy = DryRunProxy<dyn RouteApi>;

impl RouteApi for RouteProxy {
    fn describe_vpcs(
        &self,
        ctx: &RequestContext,
        args: &DescribeVpcsArgs,
    ) -> Result<(Vec<Vpc>, Pagination), Error> {
        self.dispatch(ctx, Call::read("route.DescribeVpcs"), |c| {
            c.describe_vpcs(ctx, args)
        })
    }

    fn describe_vrouters(
        &self,
        ctx: &RequestContext,
        args: &DescribeVRoutersArgs,
    ) -> Result<(Vec<VRouter>, Pagination), Error> {
        self.dispatch(ctx, Call::read("route.DescribeVRouters"), |c| {
            c.describe_vrouters(ctx, args)
        })
    }

    fn describe_route_tables(
        &self,
        ctx: &RequestContext,
        args: &DescribeRouteTablesArgs,
    ) -> Result<(Vec<RouteTable>, Pagination), Error> {
        self.dispatch(ctx, Call::read("route.DescribeRouteTables"), |c| {
            c.describe_route_tables(ctx, args)
        })
    }

    fn describe_route_entry_list(
        &self,
        ctx: &RequestContext,
        args: &DescribeRouteEntryListArgs,
    ) -> Result<Vec<RouteEntry>, Error> {
        self.dispatch(ctx, Call::read("route.DescribeRouteEntryList"), |c| {
            c.describe_route_entry_list(ctx, args)
        })
    }

    fn create_route_entry(&self, ctx: &RequestContext, args: &RouteEntryArgs) -> Result<(), Error> {
        let call = route_call("route.CreateRouteEntry", "CreateRouteEntry", args).describe(
            format!(
                "should not create route entry, table id {}, next hop {}",
                args.route_table_id, args.next_hop_id
            ),
        );
        self.dispatch(ctx, call, |c| c.create_route_entry(ctx, args))
    }

    fn delete_route_entry(&self, ctx: &RequestContext, args: &RouteEntryArgs) -> Result<(), Error> {
        let call = route_call("route.DeleteRouteEntry", "DeleteRouteEntry", args).describe(
            format!(
                "should not delete route entry {}, table id {}",
                args.destination_cidr_block, args.route_table_id
            ),
        );
        self.dispatch(ctx, call, |c| c.delete_route_entry(ctx, args))
    }

    fn wait_for_all_route_entries_available(
        &self,
        ctx: &RequestContext,
        args: &WaitForRouteEntriesArgs,
    ) -> Result<(), Error> {
        let call = Call::new(
            "route.WaitForAllRouteEntriesAvailable",
            "WaitForAllRouteEntriesAvailable",
        )
        .qualify(format!("RouteTable/{}", args.route_table_id))
        .resource(args.route_table_id.as_str());
        self.dispatch(ctx, call, |c| {
            c.wait_for_all_route_entries_available(ctx, args)
        })
    }
}

fn route_call(operation: &'static str, action: &'static str, args: &RouteEntryArgs) -> Call {
    Call::new(operation, action)
        .qualify(format!("RouteTable/{}", args.route_table_id))
        .resource(args.route_table_id.as_str())
}

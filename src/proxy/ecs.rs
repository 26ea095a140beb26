//! Compute and network interface (ECS) family.

use super::{ApiFamily, Call, DryRunProxy};
use crate::audit::Component;
use crate::context::RequestContext;
use crate::error::Error;
use crate::model::ecs::{
    AddTagsArgs, DescribeEipAddressesArgs, DescribeInstancesArgs, DescribeNetworkInterfacesArgs,
    EipAddress, Instance, NetworkInterface,
};
use crate::model::Pagination;

/// Capability set of a compute client.
pub trait InstanceApi: Send + Sync {
    /// Attaches tags to an instance or interface.
    fn add_tags(&self, ctx: &RequestContext, args: &AddTagsArgs) -> Result<(), Error>;

    /// Lists instances.
    fn describe_instances(
        &self,
        ctx: &RequestContext,
        args: &DescribeInstancesArgs,
    ) -> Result<(Vec<Instance>, Pagination), Error>;

    /// Lists network interfaces.
    fn describe_network_interfaces(
        &self,
        ctx: &RequestContext,
        args: &DescribeNetworkInterfacesArgs,
    ) -> Result<Vec<NetworkInterface>, Error>;

    /// Lists elastic IPs.
    fn describe_eip_addresses(
        &self,
        ctx: &RequestContext,
        args: &DescribeEipAddressesArgs,
    ) -> Result<(Vec<EipAddress>, Pagination), Error>;
}

impl ApiFamily for dyn InstanceApi {
    const COMPONENT: Component = Component::Ecs;
}

/// Dry-run proxy in front of an [`InstanceApi`] client.
pub type InstanceProxy = DryRunProxy<dyn InstanceApi>;

impl InstanceApi for InstanceProxy {
    fn add_tags(&self, ctx: &RequestContext, args: &AddTagsArgs) -> Result<(), Error> {
        let call = Call::new("AddTags", "AddTags").resource(args.resource_id.as_str());
        self.dispatch(ctx, call, |c| c.add_tags(ctx, args))
    }

    fn describe_instances(
        &self,
        ctx: &RequestContext,
        args: &DescribeInstancesArgs,
    ) -> Result<(Vec<Instance>, Pagination), Error> {
        self.dispatch(ctx, Call::read("DescribeInstances"), |c| {
            c.describe_instances(ctx, args)
        })
    }

    fn describe_network_interfaces(
        &self,
        ctx: &RequestContext,
        args: &DescribeNetworkInterfacesArgs,
    ) -> Result<Vec<NetworkInterface>, Error> {
        self.dispatch(ctx, Call::read("DescribeNetworkInterfaces"), |c| {
            c.describe_network_interfaces(ctx, args)
        })
    }

    fn describe_eip_addresses(
        &self,
        ctx: &RequestContext,
        args: &DescribeEipAddressesArgs,
    ) -> Result<(Vec<EipAddress>, Pagination), Error> {
        self.dispatch(ctx, Call::read("DescribeEipAddresses"), |c| {
            c.describe_eip_addresses(ctx, args)
        })
    }
}

//! Load balancer (SLB) family.

use super::{ApiFamily, Call, DryRunProxy};
use crate::audit::Component;
use crate::context::RequestContext;
use crate::error::Error;
use crate::model::slb::{
    BackendServer, CreateLoadBalancerArgs, CreateLoadBalancerResponse, CreateVServerGroupArgs,
    DescribeLoadBalancersArgs, DescribeTagsArgs, DescribeVServerGroupsArgs, Listener,
    ListenerProtocol, LoadBalancer, ModifyInstanceSpecArgs, ModifyInternetSpecArgs,
    ModifyVServerGroupBackendServersArgs, SetDeleteProtectionArgs, SetModificationProtectionArgs,
    SetVServerGroupAttributeArgs, Tag, TagsArgs, VServerGroup, VServerGroupBackendServersArgs,
    VServerGroupRef,
};
use crate::model::Pagination;

/// Capability set of a load balancer client.
///
/// Listener reads, creates and updates are protocol-qualified through
/// [`ListenerProtocol`]; each protocol maps to its own provider operation.
pub trait LoadBalancerApi: Send + Sync {
    /// Lists load balancers matching `args`.
    fn describe_load_balancers(
        &self,
        ctx: &RequestContext,
        args: &DescribeLoadBalancersArgs,
    ) -> Result<Vec<LoadBalancer>, Error>;

    /// Describes one load balancer.
    fn describe_load_balancer_attribute(
        &self,
        ctx: &RequestContext,
        load_balancer_id: &str,
    ) -> Result<LoadBalancer, Error>;

    /// Describes one listener.
    fn describe_listener_attribute(
        &self,
        ctx: &RequestContext,
        load_balancer_id: &str,
        protocol: ListenerProtocol,
        port: u16,
    ) -> Result<Listener, Error>;

    /// Lists tags.
    fn describe_tags(
        &self,
        ctx: &RequestContext,
        args: &DescribeTagsArgs,
    ) -> Result<(Vec<Tag>, Pagination), Error>;

    /// Lists backend groups of a load balancer.
    fn describe_vserver_groups(
        &self,
        ctx: &RequestContext,
        args: &DescribeVServerGroupsArgs,
    ) -> Result<Vec<VServerGroup>, Error>;

    /// Describes one backend group with its members.
    fn describe_vserver_group_attribute(
        &self,
        ctx: &RequestContext,
        group: &VServerGroupRef,
    ) -> Result<VServerGroup, Error>;

    /// Creates a load balancer.
    fn create_load_balancer(
        &self,
        ctx: &RequestContext,
        args: &CreateLoadBalancerArgs,
    ) -> Result<CreateLoadBalancerResponse, Error>;

    /// Renames a load balancer.
    fn set_load_balancer_name(
        &self,
        ctx: &RequestContext,
        load_balancer_id: &str,
        load_balancer_name: &str,
    ) -> Result<(), Error>;

    /// Deletes a load balancer.
    fn delete_load_balancer(&self, ctx: &RequestContext, load_balancer_id: &str)
        -> Result<(), Error>;

    /// Toggles delete protection.
    fn set_delete_protection(
        &self,
        ctx: &RequestContext,
        args: &SetDeleteProtectionArgs,
    ) -> Result<(), Error>;

    /// Toggles modification protection.
    fn set_modification_protection(
        &self,
        ctx: &RequestContext,
        args: &SetModificationProtectionArgs,
    ) -> Result<(), Error>;

    /// Changes the instance specification.
    fn modify_instance_spec(
        &self,
        ctx: &RequestContext,
        args: &ModifyInstanceSpecArgs,
    ) -> Result<(), Error>;

    /// Changes internet billing or bandwidth.
    fn modify_internet_spec(
        &self,
        ctx: &RequestContext,
        args: &ModifyInternetSpecArgs,
    ) -> Result<(), Error>;

    /// Attaches default backend servers.
    fn add_backend_servers(
        &self,
        ctx: &RequestContext,
        load_balancer_id: &str,
        backend_servers: &[BackendServer],
    ) -> Result<Vec<BackendServer>, Error>;

    /// Detaches default backend servers.
    fn remove_backend_servers(
        &self,
        ctx: &RequestContext,
        load_balancer_id: &str,
        backend_servers: &[BackendServer],
    ) -> Result<Vec<BackendServer>, Error>;

    /// Starts a listener.
    fn start_listener(
        &self,
        ctx: &RequestContext,
        load_balancer_id: &str,
        port: u16,
    ) -> Result<(), Error>;

    /// Stops a listener.
    fn stop_listener(
        &self,
        ctx: &RequestContext,
        load_balancer_id: &str,
        port: u16,
    ) -> Result<(), Error>;

    /// Creates a listener.
    fn create_listener(&self, ctx: &RequestContext, listener: &Listener) -> Result<(), Error>;

    /// Deletes a listener.
    fn delete_listener(
        &self,
        ctx: &RequestContext,
        load_balancer_id: &str,
        port: u16,
    ) -> Result<(), Error>;

    /// Updates a listener.
    fn set_listener_attribute(&self, ctx: &RequestContext, listener: &Listener)
        -> Result<(), Error>;

    /// Attaches tags.
    fn add_tags(&self, ctx: &RequestContext, args: &TagsArgs) -> Result<(), Error>;

    /// Detaches tags.
    fn remove_tags(&self, ctx: &RequestContext, args: &TagsArgs) -> Result<(), Error>;

    /// Creates a backend group.
    fn create_vserver_group(
        &self,
        ctx: &RequestContext,
        args: &CreateVServerGroupArgs,
    ) -> Result<VServerGroup, Error>;

    /// Deletes a backend group.
    fn delete_vserver_group(&self, ctx: &RequestContext, group: &VServerGroupRef)
        -> Result<(), Error>;

    /// Renames a backend group or updates member attributes.
    fn set_vserver_group_attribute(
        &self,
        ctx: &RequestContext,
        args: &SetVServerGroupAttributeArgs,
    ) -> Result<VServerGroup, Error>;

    /// Swaps backend group members.
    fn modify_vserver_group_backend_servers(
        &self,
        ctx: &RequestContext,
        args: &ModifyVServerGroupBackendServersArgs,
    ) -> Result<VServerGroup, Error>;

    /// Adds backend group members.
    fn add_vserver_group_backend_servers(
        &self,
        ctx: &RequestContext,
        args: &VServerGroupBackendServersArgs,
    ) -> Result<VServerGroup, Error>;

    /// Removes backend group members.
    fn remove_vserver_group_backend_servers(
        &self,
        ctx: &RequestContext,
        args: &VServerGroupBackendServersArgs,
    ) -> Result<VServerGroup, Error>;
}

impl ApiFamily for dyn LoadBalancerApi {
    const COMPONENT: Component = Component::Slb;
}

/// Dry-run proxy in front of a [`LoadBalancerApi`] client.
pub type LoadBalancerProxy = DryRunProxy<dyn LoadBalancerApi>;

impl LoadBalancerApi for LoadBalancerProxy {
    fn describe_load_balancers(
        &self,
        ctx: &RequestContext,
        args: &DescribeLoadBalancersArgs,
    ) -> Result<Vec<LoadBalancer>, Error> {
        self.dispatch(ctx, Call::read("DescribeLoadBalancers"), |c| {
            c.describe_load_balancers(ctx, args)
        })
    }

    fn describe_load_balancer_attribute(
        &self,
        ctx: &RequestContext,
        load_balancer_id: &str,
    ) -> Result<LoadBalancer, Error> {
        self.dispatch(ctx, Call::read("DescribeLoadBalancerAttribute"), |c| {
            c.describe_load_balancer_attribute(ctx, load_balancer_id)
        })
    }

    fn describe_listener_attribute(
        &self,
        ctx: &RequestContext,
        load_balancer_id: &str,
        protocol: ListenerProtocol,
        port: u16,
    ) -> Result<Listener, Error> {
        self.dispatch(ctx, Call::read(protocol.describe_operation()), |c| {
            c.describe_listener_attribute(ctx, load_balancer_id, protocol, port)
        })
    }

    fn describe_tags(
        &self,
        ctx: &RequestContext,
        args: &DescribeTagsArgs,
    ) -> Result<(Vec<Tag>, Pagination), Error> {
        self.dispatch(ctx, Call::read("DescribeTags"), |c| c.describe_tags(ctx, args))
    }

    fn describe_vserver_groups(
        &self,
        ctx: &RequestContext,
        args: &DescribeVServerGroupsArgs,
    ) -> Result<Vec<VServerGroup>, Error> {
        self.dispatch(ctx, Call::read("DescribeVServerGroups"), |c| {
            c.describe_vserver_groups(ctx, args)
        })
    }

    fn describe_vserver_group_attribute(
        &self,
        ctx: &RequestContext,
        group: &VServerGroupRef,
    ) -> Result<VServerGroup, Error> {
        self.dispatch(ctx, Call::read("DescribeVServerGroupAttribute"), |c| {
            c.describe_vserver_group_attribute(ctx, group)
        })
    }

    fn create_load_balancer(
        &self,
        ctx: &RequestContext,
        args: &CreateLoadBalancerArgs,
    ) -> Result<CreateLoadBalancerResponse, Error> {
        // No id exists before creation.
        let call = Call::new("CreateLoadBalancer", "CreateSLB").resource("");
        self.dispatch(ctx, call, |c| c.create_load_balancer(ctx, args))
    }

    fn set_load_balancer_name(
        &self,
        ctx: &RequestContext,
        load_balancer_id: &str,
        load_balancer_name: &str,
    ) -> Result<(), Error> {
        self.dispatch(ctx, Call::new("SetLoadBalancerName", "SetSLBName"), |c| {
            c.set_load_balancer_name(ctx, load_balancer_id, load_balancer_name)
        })
    }

    fn delete_load_balancer(
        &self,
        ctx: &RequestContext,
        load_balancer_id: &str,
    ) -> Result<(), Error> {
        self.dispatch(ctx, Call::new("DeleteLoadBalancer", "DeleteSLB"), |c| {
            c.delete_load_balancer(ctx, load_balancer_id)
        })
    }

    fn set_delete_protection(
        &self,
        ctx: &RequestContext,
        args: &SetDeleteProtectionArgs,
    ) -> Result<(), Error> {
        let call = Call::new("SetLoadBalancerDeleteProtection", "SetSLBDeleteProtection");
        self.dispatch(ctx, call, |c| c.set_delete_protection(ctx, args))
    }

    fn set_modification_protection(
        &self,
        ctx: &RequestContext,
        args: &SetModificationProtectionArgs,
    ) -> Result<(), Error> {
        let call = Call::new(
            "SetLoadBalancerModificationProtection",
            "SetSLBModificationProtection",
        );
        self.dispatch(ctx, call, |c| c.set_modification_protection(ctx, args))
    }

    fn modify_instance_spec(
        &self,
        ctx: &RequestContext,
        args: &ModifyInstanceSpecArgs,
    ) -> Result<(), Error> {
        let call = Call::new("ModifyLoadBalancerInstanceSpec", "ModifySLBSpec");
        self.dispatch(ctx, call, |c| c.modify_instance_spec(ctx, args))
    }

    fn modify_internet_spec(
        &self,
        ctx: &RequestContext,
        args: &ModifyInternetSpecArgs,
    ) -> Result<(), Error> {
        let call = Call::new("ModifyLoadBalancerInternetSpec", "ModifyInternetSpec");
        self.dispatch(ctx, call, |c| c.modify_internet_spec(ctx, args))
    }

    fn add_backend_servers(
        &self,
        ctx: &RequestContext,
        load_balancer_id: &str,
        backend_servers: &[BackendServer],
    ) -> Result<Vec<BackendServer>, Error> {
        let call = Call::new("AddBackendServers", "AddBackendServer").resource(load_balancer_id);
        self.dispatch(ctx, call, |c| {
            c.add_backend_servers(ctx, load_balancer_id, backend_servers)
        })
    }

    fn remove_backend_servers(
        &self,
        ctx: &RequestContext,
        load_balancer_id: &str,
        backend_servers: &[BackendServer],
    ) -> Result<Vec<BackendServer>, Error> {
        self.dispatch(
            ctx,
            Call::new("RemoveBackendServers", "RemoveBackendServer"),
            |c| c.remove_backend_servers(ctx, load_balancer_id, backend_servers),
        )
    }

    fn start_listener(
        &self,
        ctx: &RequestContext,
        load_balancer_id: &str,
        port: u16,
    ) -> Result<(), Error> {
        let call = Call::new("StartLoadBalancerListener", "StartListener")
            .port(port)
            .resource(load_balancer_id);
        self.dispatch(ctx, call, |c| c.start_listener(ctx, load_balancer_id, port))
    }

    fn stop_listener(
        &self,
        ctx: &RequestContext,
        load_balancer_id: &str,
        port: u16,
    ) -> Result<(), Error> {
        let call = Call::new("StopLoadBalancerListener", "StopListener")
            .port(port)
            .resource(load_balancer_id);
        self.dispatch(ctx, call, |c| c.stop_listener(ctx, load_balancer_id, port))
    }

    fn create_listener(&self, ctx: &RequestContext, listener: &Listener) -> Result<(), Error> {
        let call = Call::new(listener.protocol.create_operation(), "CreateListener")
            .port(listener.listener_port)
            .resource(listener.load_balancer_id.as_str());
        self.dispatch(ctx, call, |c| c.create_listener(ctx, listener))
    }

    fn delete_listener(
        &self,
        ctx: &RequestContext,
        load_balancer_id: &str,
        port: u16,
    ) -> Result<(), Error> {
        let call = Call::new("DeleteLoadBalancerListener", "DeleteListener")
            .port(port)
            .resource(load_balancer_id);
        self.dispatch(ctx, call, |c| c.delete_listener(ctx, load_balancer_id, port))
    }

    fn set_listener_attribute(
        &self,
        ctx: &RequestContext,
        listener: &Listener,
    ) -> Result<(), Error> {
        let call = Call::new(listener.protocol.set_attribute_operation(), "UpdateListener")
            .port(listener.listener_port)
            .resource(listener.load_balancer_id.as_str());
        self.dispatch(ctx, call, |c| c.set_listener_attribute(ctx, listener))
    }

    fn add_tags(&self, ctx: &RequestContext, args: &TagsArgs) -> Result<(), Error> {
        let call = Call::new("AddTags", "AddTags").resource(args.load_balancer_id.as_str());
        self.dispatch(ctx, call, |c| c.add_tags(ctx, args))
    }

    fn remove_tags(&self, ctx: &RequestContext, args: &TagsArgs) -> Result<(), Error> {
        let call = Call::new("RemoveTags", "RemoveTags")
            .resource(args.load_balancer_id.as_str())
            .describe(format!(
                "should not remove tags of slb {}",
                args.load_balancer_id
            ));
        self.dispatch(ctx, call, |c| c.remove_tags(ctx, args))
    }

    fn create_vserver_group(
        &self,
        ctx: &RequestContext,
        args: &CreateVServerGroupArgs,
    ) -> Result<VServerGroup, Error> {
        let call = Call::new("CreateVServerGroup", "CreateVgroup")
            .resource(args.load_balancer_id.as_str())
            .describe(format!("vgroup {}", args.vserver_group_name));
        self.dispatch(ctx, call, |c| c.create_vserver_group(ctx, args))
    }

    fn delete_vserver_group(
        &self,
        ctx: &RequestContext,
        group: &VServerGroupRef,
    ) -> Result<(), Error> {
        let call = Call::new("DeleteVServerGroup", "DeleteVgroup").vgroup(&group.vserver_group_id);
        self.dispatch(ctx, call, |c| c.delete_vserver_group(ctx, group))
    }

    fn set_vserver_group_attribute(
        &self,
        ctx: &RequestContext,
        args: &SetVServerGroupAttributeArgs,
    ) -> Result<VServerGroup, Error> {
        let call = Call::new("SetVServerGroupAttribute", "UpdateVgroup").vgroup(&args.vserver_group_id);
        self.dispatch(ctx, call, |c| c.set_vserver_group_attribute(ctx, args))
    }

    fn modify_vserver_group_backend_servers(
        &self,
        ctx: &RequestContext,
        args: &ModifyVServerGroupBackendServersArgs,
    ) -> Result<VServerGroup, Error> {
        let call = Call::new("ModifyVServerGroupBackendServers", "ModifyVgroup")
            .vgroup(&args.vserver_group_id);
        self.dispatch(ctx, call, |c| {
            c.modify_vserver_group_backend_servers(ctx, args)
        })
    }

    fn add_vserver_group_backend_servers(
        &self,
        ctx: &RequestContext,
        args: &VServerGroupBackendServersArgs,
    ) -> Result<VServerGroup, Error> {
        let call = Call::new("AddVServerGroupBackendServers", "AddVgroup")
            .vgroup(&args.vserver_group_id)
            .resource(args.load_balancer_id.as_str());
        self.dispatch(ctx, call, |c| c.add_vserver_group_backend_servers(ctx, args))
    }

    fn remove_vserver_group_backend_servers(
        &self,
        ctx: &RequestContext,
        args: &VServerGroupBackendServersArgs,
    ) -> Result<VServerGroup, Error> {
        let call = Call::new("RemoveVServerGroupBackendServers", "RemoveVgroup")
            .vgroup(&args.vserver_group_id);
        self.dispatch(ctx, call, |c| {
            c.remove_vserver_group_backend_servers(ctx, args)
        })
    }
}

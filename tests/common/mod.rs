//! Call-counting stub clients shared by the integration tests.

#![allow(dead_code)]

use std::sync::Mutex;
use std::time::Instant;

use dryrun_gate::audit::{AuditEvent, AuditSink};
use dryrun_gate::model::ecs::{
    AddTagsArgs, DescribeEipAddressesArgs, DescribeInstancesArgs, DescribeNetworkInterfacesArgs,
    EipAddress, Instance, NetworkInterface,
};
use dryrun_gate::model::pvtz::{
    AddZoneArgs, AddZoneRecordArgs, AddZoneRecordResponse, AddZoneResponse, BindZoneVpcArgs,
    CheckZoneNameArgs, DescribeZoneRecordsArgs, DescribeZonesArgs, Region,
    SetZoneRecordStatusArgs, UpdateZoneRecordArgs, UpdateZoneRemarkArgs, Zone, ZoneInfo,
    ZoneRecord, ZoneRecordRef, ZoneRef,
};
use dryrun_gate::model::slb::{
    BackendServer, CreateLoadBalancerArgs, CreateLoadBalancerResponse, CreateVServerGroupArgs,
    DescribeLoadBalancersArgs, DescribeTagsArgs, DescribeVServerGroupsArgs, Listener,
    ListenerProtocol, LoadBalancer, ModifyInstanceSpecArgs, ModifyInternetSpecArgs,
    ModifyVServerGroupBackendServersArgs, SetDeleteProtectionArgs, SetModificationProtectionArgs,
    SetVServerGroupAttributeArgs, Tag, TagsArgs, VServerGroup, VServerGroupBackendServersArgs,
    VServerGroupRef,
};
use dryrun_gate::model::vpc::{
    DescribeRouteEntryListArgs, DescribeRouteTablesArgs, DescribeVRoutersArgs, DescribeVpcsArgs,
    RouteEntry, RouteEntryArgs, RouteTable, VRouter, Vpc, WaitForRouteEntriesArgs,
};
use dryrun_gate::model::Pagination;
use dryrun_gate::{
    AuditSinkError, AuditSinkErrorKind, Error, InstanceApi, LoadBalancerApi, PrivateZoneApi,
    RequestContext, RouteApi, TransportError,
};

/// Log of calls that reached a stub, plus the deadline each one carried.
#[derive(Debug, Default)]
pub struct CallLog {
    calls: Mutex<Vec<(&'static str, Option<Instant>)>>,
    failure: Mutex<Option<TransportError>>,
}

impl CallLog {
    fn hit(&self, operation: &'static str, ctx: &RequestContext) -> Result<(), Error> {
        self.calls.lock().unwrap().push((operation, ctx.deadline()));
        match self.failure.lock().unwrap().clone() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    /// Makes every later call fail with `err`.
    pub fn fail_with(&self, err: TransportError) {
        *self.failure.lock().unwrap() = Some(err);
    }

    pub fn count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn count_of(&self, operation: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(op, _)| *op == operation)
            .count()
    }

    pub fn operations(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().iter().map(|(op, _)| *op).collect()
    }

    pub fn deadlines(&self) -> Vec<Option<Instant>> {
        self.calls.lock().unwrap().iter().map(|(_, d)| *d).collect()
    }
}

/// Single-page pagination for `len` entries.
pub fn page_of(len: usize) -> Pagination {
    Pagination {
        page_number: 1,
        page_size: 50,
        total_count: len as u32,
    }
}

/// Sink that refuses every event.
#[derive(Debug, Default)]
pub struct UnavailableSink {
    pub attempts: Mutex<usize>,
}

impl AuditSink for UnavailableSink {
    fn record(&self, _event: AuditEvent) -> Result<(), AuditSinkError> {
        *self.attempts.lock().unwrap() += 1;
        Err(AuditSinkError::with_message(
            AuditSinkErrorKind::Unavailable,
            "event recorder is down",
        ))
    }
}

/// Load balancer stub. `label` is echoed as the name of every described
/// load balancer so tests can tell two stubs apart.
#[derive(Debug, Default)]
pub struct StubLoadBalancer {
    pub label: &'static str,
    pub load_balancers: Vec<LoadBalancer>,
    pub tags: Vec<Tag>,
    pub vserver_groups: Vec<VServerGroup>,
    pub log: CallLog,
    pub tags_added: Mutex<Vec<TagsArgs>>,
}

impl StubLoadBalancer {
    pub fn labelled(label: &'static str) -> Self {
        Self {
            label,
            ..Default::default()
        }
    }
}

impl LoadBalancerApi for StubLoadBalancer {
    fn describe_load_balancers(
        &self,
        ctx: &RequestContext,
        _args: &DescribeLoadBalancersArgs,
    ) -> Result<Vec<LoadBalancer>, Error> {
        self.log.hit("DescribeLoadBalancers", ctx)?;
        Ok(self.load_balancers.clone())
    }

    fn describe_load_balancer_attribute(
        &self,
        ctx: &RequestContext,
        load_balancer_id: &str,
    ) -> Result<LoadBalancer, Error> {
        self.log.hit("DescribeLoadBalancerAttribute", ctx)?;
        Ok(LoadBalancer {
            load_balancer_id: load_balancer_id.to_string(),
            load_balancer_name: self.label.to_string(),
            ..Default::default()
        })
    }

    fn describe_listener_attribute(
        &self,
        ctx: &RequestContext,
        load_balancer_id: &str,
        protocol: ListenerProtocol,
        port: u16,
    ) -> Result<Listener, Error> {
        self.log.hit(protocol.describe_operation(), ctx)?;
        Ok(Listener {
            load_balancer_id: load_balancer_id.to_string(),
            protocol,
            listener_port: port,
            ..Default::default()
        })
    }

    fn describe_tags(
        &self,
        ctx: &RequestContext,
        _args: &DescribeTagsArgs,
    ) -> Result<(Vec<Tag>, Pagination), Error> {
        self.log.hit("DescribeTags", ctx)?;
        Ok((self.tags.clone(), page_of(self.tags.len())))
    }

    fn describe_vserver_groups(
        &self,
        ctx: &RequestContext,
        _args: &DescribeVServerGroupsArgs,
    ) -> Result<Vec<VServerGroup>, Error> {
        self.log.hit("DescribeVServerGroups", ctx)?;
        Ok(self.vserver_groups.clone())
    }

    fn describe_vserver_group_attribute(
        &self,
        ctx: &RequestContext,
        group: &VServerGroupRef,
    ) -> Result<VServerGroup, Error> {
        self.log.hit("DescribeVServerGroupAttribute", ctx)?;
        let found = self
            .vserver_groups
            .iter()
            .find(|g| g.vserver_group_id == group.vserver_group_id);
        Ok(found.cloned().unwrap_or_else(|| VServerGroup {
            vserver_group_id: group.vserver_group_id.clone(),
            ..Default::default()
        }))
    }

    fn create_load_balancer(
        &self,
        ctx: &RequestContext,
        _args: &CreateLoadBalancerArgs,
    ) -> Result<CreateLoadBalancerResponse, Error> {
        self.log.hit("CreateLoadBalancer", ctx)?;
        Ok(CreateLoadBalancerResponse::default())
    }

    fn set_load_balancer_name(
        &self,
        ctx: &RequestContext,
        _load_balancer_id: &str,
        _load_balancer_name: &str,
    ) -> Result<(), Error> {
        self.log.hit("SetLoadBalancerName", ctx)
    }

    fn delete_load_balancer(&self, ctx: &RequestContext, _load_balancer_id: &str) -> Result<(), Error> {
        self.log.hit("DeleteLoadBalancer", ctx)
    }

    fn set_delete_protection(
        &self,
        ctx: &RequestContext,
        _args: &SetDeleteProtectionArgs,
    ) -> Result<(), Error> {
        self.log.hit("SetLoadBalancerDeleteProtection", ctx)
    }

    fn set_modification_protection(
        &self,
        ctx: &RequestContext,
        _args: &SetModificationProtectionArgs,
    ) -> Result<(), Error> {
        self.log.hit("SetLoadBalancerModificationProtection", ctx)
    }

    fn modify_instance_spec(
        &self,
        ctx: &RequestContext,
        _args: &ModifyInstanceSpecArgs,
    ) -> Result<(), Error> {
        self.log.hit("ModifyLoadBalancerInstanceSpec", ctx)
    }

    fn modify_internet_spec(
        &self,
        ctx: &RequestContext,
        _args: &ModifyInternetSpecArgs,
    ) -> Result<(), Error> {
        self.log.hit("ModifyLoadBalancerInternetSpec", ctx)
    }

    fn add_backend_servers(
        &self,
        ctx: &RequestContext,
        _load_balancer_id: &str,
        backend_servers: &[BackendServer],
    ) -> Result<Vec<BackendServer>, Error> {
        self.log.hit("AddBackendServers", ctx)?;
        Ok(backend_servers.to_vec())
    }

    fn remove_backend_servers(
        &self,
        ctx: &RequestContext,
        _load_balancer_id: &str,
        backend_servers: &[BackendServer],
    ) -> Result<Vec<BackendServer>, Error> {
        self.log.hit("RemoveBackendServers", ctx)?;
        Ok(backend_servers.to_vec())
    }

    fn start_listener(&self, ctx: &RequestContext, _load_balancer_id: &str, _port: u16) -> Result<(), Error> {
        self.log.hit("StartLoadBalancerListener", ctx)
    }

    fn stop_listener(&self, ctx: &RequestContext, _load_balancer_id: &str, _port: u16) -> Result<(), Error> {
        self.log.hit("StopLoadBalancerListener", ctx)
    }

    fn create_listener(&self, ctx: &RequestContext, listener: &Listener) -> Result<(), Error> {
        self.log.hit(listener.protocol.create_operation(), ctx)
    }

    fn delete_listener(&self, ctx: &RequestContext, _load_balancer_id: &str, _port: u16) -> Result<(), Error> {
        self.log.hit("DeleteLoadBalancerListener", ctx)
    }

    fn set_listener_attribute(&self, ctx: &RequestContext, listener: &Listener) -> Result<(), Error> {
        self.log.hit(listener.protocol.set_attribute_operation(), ctx)
    }

    fn add_tags(&self, ctx: &RequestContext, args: &TagsArgs) -> Result<(), Error> {
        self.log.hit("AddTags", ctx)?;
        self.tags_added.lock().unwrap().push(args.clone());
        Ok(())
    }

    fn remove_tags(&self, ctx: &RequestContext, _args: &TagsArgs) -> Result<(), Error> {
        self.log.hit("RemoveTags", ctx)
    }

    fn create_vserver_group(
        &self,
        ctx: &RequestContext,
        args: &CreateVServerGroupArgs,
    ) -> Result<VServerGroup, Error> {
        self.log.hit("CreateVServerGroup", ctx)?;
        Ok(VServerGroup {
            vserver_group_name: args.vserver_group_name.clone(),
            ..Default::default()
        })
    }

    fn delete_vserver_group(&self, ctx: &RequestContext, _group: &VServerGroupRef) -> Result<(), Error> {
        self.log.hit("DeleteVServerGroup", ctx)
    }

    fn set_vserver_group_attribute(
        &self,
        ctx: &RequestContext,
        args: &SetVServerGroupAttributeArgs,
    ) -> Result<VServerGroup, Error> {
        self.log.hit("SetVServerGroupAttribute", ctx)?;
        Ok(VServerGroup {
            vserver_group_id: args.vserver_group_id.clone(),
            vserver_group_name: args.vserver_group_name.clone(),
            load_balancer_id: String::new(),
            backend_servers: args.backend_servers.clone(),
        })
    }

    fn modify_vserver_group_backend_servers(
        &self,
        ctx: &RequestContext,
        _args: &ModifyVServerGroupBackendServersArgs,
    ) -> Result<VServerGroup, Error> {
        self.log.hit("ModifyVServerGroupBackendServers", ctx)?;
        Ok(VServerGroup::default())
    }

    fn add_vserver_group_backend_servers(
        &self,
        ctx: &RequestContext,
        _args: &VServerGroupBackendServersArgs,
    ) -> Result<VServerGroup, Error> {
        self.log.hit("AddVServerGroupBackendServers", ctx)?;
        Ok(VServerGroup::default())
    }

    fn remove_vserver_group_backend_servers(
        &self,
        ctx: &RequestContext,
        _args: &VServerGroupBackendServersArgs,
    ) -> Result<VServerGroup, Error> {
        self.log.hit("RemoveVServerGroupBackendServers", ctx)?;
        Ok(VServerGroup::default())
    }
}

/// Compute stub.
#[derive(Debug, Default)]
pub struct StubInstances {
    pub instances: Vec<Instance>,
    pub network_interfaces: Vec<NetworkInterface>,
    pub eip_addresses: Vec<EipAddress>,
    pub log: CallLog,
}

impl InstanceApi for StubInstances {
    fn add_tags(&self, ctx: &RequestContext, _args: &AddTagsArgs) -> Result<(), Error> {
        self.log.hit("AddTags", ctx)
    }

    fn describe_instances(
        &self,
        ctx: &RequestContext,
        _args: &DescribeInstancesArgs,
    ) -> Result<(Vec<Instance>, Pagination), Error> {
        self.log.hit("DescribeInstances", ctx)?;
        Ok((self.instances.clone(), page_of(self.instances.len())))
    }

    fn describe_network_interfaces(
        &self,
        ctx: &RequestContext,
        _args: &DescribeNetworkInterfacesArgs,
    ) -> Result<Vec<NetworkInterface>, Error> {
        self.log.hit("DescribeNetworkInterfaces", ctx)?;
        Ok(self.network_interfaces.clone())
    }

    fn describe_eip_addresses(
        &self,
        ctx: &RequestContext,
        _args: &DescribeEipAddressesArgs,
    ) -> Result<(Vec<EipAddress>, Pagination), Error> {
        self.log.hit("DescribeEipAddresses", ctx)?;
        Ok((self.eip_addresses.clone(), page_of(self.eip_addresses.len())))
    }
}

/// Private zone stub.
#[derive(Debug, Default)]
pub struct StubZones {
    pub zones: Vec<Zone>,
    pub records: Vec<ZoneRecord>,
    pub regions: Vec<Region>,
    pub log: CallLog,
}

impl PrivateZoneApi for StubZones {
    fn describe_zones(
        &self,
        ctx: &RequestContext,
        _args: &DescribeZonesArgs,
    ) -> Result<(Vec<Zone>, Pagination), Error> {
        self.log.hit("pvtz.DescribeZones", ctx)?;
        Ok((self.zones.clone(), page_of(self.zones.len())))
    }

    fn check_zone_name(&self, ctx: &RequestContext, args: &CheckZoneNameArgs) -> Result<bool, Error> {
        self.log.hit("pvtz.CheckZoneName", ctx)?;
        Ok(!self.zones.iter().any(|z| z.zone_name == args.zone_name))
    }

    fn describe_zone_info(&self, ctx: &RequestContext, zone: &ZoneRef) -> Result<ZoneInfo, Error> {
        self.log.hit("pvtz.DescribeZoneInfo", ctx)?;
        let name = self
            .zones
            .iter()
            .find(|z| z.zone_id == zone.zone_id)
            .map(|z| z.zone_name.clone())
            .unwrap_or_default();
        Ok(ZoneInfo {
            zone_id: zone.zone_id.clone(),
            zone_name: name,
            ..Default::default()
        })
    }

    fn describe_regions(&self, ctx: &RequestContext) -> Result<Vec<Region>, Error> {
        self.log.hit("pvtz.DescribeRegions", ctx)?;
        Ok(self.regions.clone())
    }

    fn describe_zone_records(
        &self,
        ctx: &RequestContext,
        _args: &DescribeZoneRecordsArgs,
    ) -> Result<(Vec<ZoneRecord>, Pagination), Error> {
        self.log.hit("pvtz.DescribeZoneRecords", ctx)?;
        Ok((self.records.clone(), page_of(self.records.len())))
    }

    fn describe_zone_records_by_rr(
        &self,
        ctx: &RequestContext,
        _zone_id: &str,
        rr: &str,
    ) -> Result<Vec<ZoneRecord>, Error> {
        self.log.hit("pvtz.DescribeZoneRecordsByRR", ctx)?;
        Ok(self.records.iter().filter(|r| r.rr == rr).cloned().collect())
    }

    fn add_zone(&self, ctx: &RequestContext, _args: &AddZoneArgs) -> Result<AddZoneResponse, Error> {
        self.log.hit("pvtz.AddZone", ctx)?;
        Ok(AddZoneResponse::default())
    }

    fn delete_zone(&self, ctx: &RequestContext, _zone: &ZoneRef) -> Result<(), Error> {
        self.log.hit("pvtz.DeleteZone", ctx)
    }

    fn update_zone_remark(&self, ctx: &RequestContext, _args: &UpdateZoneRemarkArgs) -> Result<(), Error> {
        self.log.hit("pvtz.UpdateZoneRemark", ctx)
    }

    fn bind_zone_vpc(&self, ctx: &RequestContext, _args: &BindZoneVpcArgs) -> Result<(), Error> {
        self.log.hit("pvtz.BindZoneVpc", ctx)
    }

    fn delete_zone_records_by_rr(&self, ctx: &RequestContext, _zone_id: &str, _rr: &str) -> Result<(), Error> {
        self.log.hit("pvtz.DeleteZoneRecordsByRR", ctx)
    }

    fn add_zone_record(
        &self,
        ctx: &RequestContext,
        _args: &AddZoneRecordArgs,
    ) -> Result<AddZoneRecordResponse, Error> {
        self.log.hit("pvtz.AddZoneRecord", ctx)?;
        Ok(AddZoneRecordResponse::default())
    }

    fn update_zone_record(&self, ctx: &RequestContext, _args: &UpdateZoneRecordArgs) -> Result<(), Error> {
        self.log.hit("pvtz.UpdateZoneRecord", ctx)
    }

    fn delete_zone_record(&self, ctx: &RequestContext, _record: &ZoneRecordRef) -> Result<(), Error> {
        self.log.hit("pvtz.DeleteZoneRecord", ctx)
    }

    fn set_zone_record_status(&self, ctx: &RequestContext, _args: &SetZoneRecordStatusArgs) -> Result<(), Error> {
        self.log.hit("pvtz.SetZoneRecordStatus", ctx)
    }
}

/// Routing stub.
#[derive(Debug, Default)]
pub struct StubRoutes {
    pub vpcs: Vec<Vpc>,
    pub vrouters: Vec<VRouter>,
    pub tables: Vec<RouteTable>,
    pub log: CallLog,
}

impl RouteApi for StubRoutes {
    fn describe_vpcs(
        &self,
        ctx: &RequestContext,
        _args: &DescribeVpcsArgs,
    ) -> Result<(Vec<Vpc>, Pagination), Error> {
        self.log.hit("route.DescribeVpcs", ctx)?;
        Ok((self.vpcs.clone(), page_of(self.vpcs.len())))
    }

    fn describe_vrouters(
        &self,
        ctx: &RequestContext,
        _args: &DescribeVRoutersArgs,
    ) -> Result<(Vec<VRouter>, Pagination), Error> {
        self.log.hit("route.DescribeVRouters", ctx)?;
        Ok((self.vrouters.clone(), page_of(self.vrouters.len())))
    }

    fn describe_route_tables(
        &self,
        ctx: &RequestContext,
        _args: &DescribeRouteTablesArgs,
    ) -> Result<(Vec<RouteTable>, Pagination), Error> {
        self.log.hit("route.DescribeRouteTables", ctx)?;
        Ok((self.tables.clone(), page_of(self.tables.len())))
    }

    fn describe_route_entry_list(
        &self,
        ctx: &RequestContext,
        args: &DescribeRouteEntryListArgs,
    ) -> Result<Vec<RouteEntry>, Error> {
        self.log.hit("route.DescribeRouteEntryList", ctx)?;
        Ok(self
            .tables
            .iter()
            .filter(|t| t.route_table_id == args.route_table_id)
            .flat_map(|t| t.route_entries.iter().cloned())
            .collect())
    }

    fn create_route_entry(&self, ctx: &RequestContext, _args: &RouteEntryArgs) -> Result<(), Error> {
        self.log.hit("route.CreateRouteEntry", ctx)
    }

    fn delete_route_entry(&self, ctx: &RequestContext, _args: &RouteEntryArgs) -> Result<(), Error> {
        self.log.hit("route.DeleteRouteEntry", ctx)
    }

    fn wait_for_all_route_entries_available(
        &self,
        ctx: &RequestContext,
        _args: &WaitForRouteEntriesArgs,
    ) -> Result<(), Error> {
        self.log.hit("route.WaitForAllRouteEntriesAvailable", ctx)
    }
}

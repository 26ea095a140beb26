//! Dry-run routing demonstration.
//!
//! This example wires an in-memory route client behind a `RouteProxy`:
//! 1. Reads are served by the raw client
//! 2. Route creation and deletion are refused and audited
//! 3. Waiting for route entries is allowed and audited
//! 4. The recorded audit trail is printed at the end
//!
//! Run with: `cargo run --example dry_run_audit`

use std::sync::{Arc, Mutex};
use std::time::Duration;

use dryrun_gate::audit::AuditTrail;
use dryrun_gate::model::vpc::{
    DescribeRouteEntryListArgs, DescribeRouteTablesArgs, DescribeVRoutersArgs, DescribeVpcsArgs,
    RouteEntry, RouteEntryArgs, RouteTable, VRouter, Vpc, WaitForRouteEntriesArgs,
};
use dryrun_gate::model::Pagination;
use dryrun_gate::{CallerIdentity, Error, RequestContext, RouteApi, RouteProxy};

/// Route client backed by a vector instead of a cloud account.
struct InMemoryRoutes {
    entries: Mutex<Vec<RouteEntry>>,
}

impl RouteApi for InMemoryRoutes {
    fn describe_vpcs(
        &self,
        _ctx: &RequestContext,
        _args: &DescribeVpcsArgs,
    ) -> Result<(Vec<Vpc>, Pagination), Error> {
        Ok((Vec::new(), Pagination::default()))
    }

    fn describe_vrouters(
        &self,
        _ctx: &RequestContext,
        _args: &DescribeVRoutersArgs,
    ) -> Result<(Vec<VRouter>, Pagination), Error> {
        Ok((Vec::new(), Pagination::default()))
    }

    fn describe_route_tables(
        &self,
        _ctx: &RequestContext,
        _args: &DescribeRouteTablesArgs,
    ) -> Result<(Vec<RouteTable>, Pagination), Error> {
        let table = RouteTable {
            route_table_id: "vtb-demo".to_string(),
            vrouter_id: "vrt-demo".to_string(),
            route_entries: self.entries.lock().unwrap().clone(),
        };
        Ok((vec![table], Pagination::default()))
    }

    fn describe_route_entry_list(
        &self,
        _ctx: &RequestContext,
        _args: &DescribeRouteEntryListArgs,
    ) -> Result<Vec<RouteEntry>, Error> {
        Ok(self.entries.lock().unwrap().clone())
    }

    fn create_route_entry(&self, _ctx: &RequestContext, args: &RouteEntryArgs) -> Result<(), Error> {
        self.entries.lock().unwrap().push(RouteEntry {
            route_table_id: args.route_table_id.clone(),
            destination_cidr_block: args.destination_cidr_block.clone(),
            next_hop_type: args.next_hop_type.clone(),
            next_hop_id: args.next_hop_id.clone(),
            status: "Available".to_string(),
        });
        Ok(())
    }

    fn delete_route_entry(&self, _ctx: &RequestContext, args: &RouteEntryArgs) -> Result<(), Error> {
        self.entries
            .lock()
            .unwrap()
            .retain(|e| e.destination_cidr_block != args.destination_cidr_block);
        Ok(())
    }

    fn wait_for_all_route_entries_available(
        &self,
        _ctx: &RequestContext,
        _args: &WaitForRouteEntriesArgs,
    ) -> Result<(), Error> {
        Ok(())
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(true)
        .init();

    println!("=== Dry-Run Routing Example ===\n");

    let raw = Arc::new(InMemoryRoutes {
        entries: Mutex::new(vec![RouteEntry {
            route_table_id: "vtb-demo".to_string(),
            destination_cidr_block: "172.16.0.0/24".to_string(),
            next_hop_type: "Instance".to_string(),
            next_hop_id: "i-node-0".to_string(),
            status: "Available".to_string(),
        }]),
    });
    let trail = Arc::new(AuditTrail::new());
    let routes = RouteProxy::new(raw.clone(), trail.clone());

    let ctx = RequestContext::new()
        .with_caller(CallerIdentity::new("kube-system", "node-1"))
        .with_reason("node joined the cluster");

    // Scenario 1: reads go straight through
    println!("--- Scenario 1: Reads ---");
    let (tables, _) = routes
        .describe_route_tables(&ctx, &DescribeRouteTablesArgs::default())
        .expect("in-memory read");
    for table in &tables {
        println!("✓ {} has {} entries", table.route_table_id, table.route_entries.len());
    }

    // Scenario 2: mutations are refused
    println!("\n--- Scenario 2: Mutations ---");
    let entry = RouteEntryArgs {
        route_table_id: "vtb-demo".to_string(),
        destination_cidr_block: "172.16.1.0/24".to_string(),
        next_hop_type: "Instance".to_string(),
        next_hop_id: "i-node-1".to_string(),
    };
    match routes.create_route_entry(&ctx, &entry) {
        Ok(()) => println!("✗ route was created"),
        Err(e) => println!("✓ blocked: {}", e),
    }
    println!(
        "✓ raw client still holds {} entries",
        raw.entries.lock().unwrap().len()
    );

    // Scenario 3: allow-listed calls still run
    println!("\n--- Scenario 3: Allow-listed calls ---");
    let wait = WaitForRouteEntriesArgs {
        vrouter_id: "vrt-demo".to_string(),
        route_table_id: "vtb-demo".to_string(),
        timeout: Duration::from_secs(30),
    };
    match routes.wait_for_all_route_entries_available(&ctx, &wait) {
        Ok(()) => println!("✓ waited for route entries"),
        Err(e) => println!("✗ unexpected error: {}", e),
    }

    println!("\n--- Audit Trail ({} events) ---", trail.len());
    for event in trail.events() {
        println!("{}", event);
    }
}

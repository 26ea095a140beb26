//! Dry-run gate for cloud provider API clients.
//!
//! This crate wraps the raw clients of four API families (load balancer,
//! compute, private DNS zone, routing) in proxies that implement the same
//! capability traits. A controller wired to the proxies can reconcile as
//! usual while nothing in the cloud changes:
//! - **Reads** pass through to the raw client untouched
//! - **Mutations** are refused with [`OperationBlocked`] and reported as one
//!   `ERROR` [`AuditEvent`](audit::AuditEvent)
//! - **Allow-listed mutations** still run, with a `NORMAL` audit event
//!
//! # Core Types
//!
//! - [`RequestContext`]: caller identity, target snapshot, reason and deadline
//! - [`PolicyTable`](policy::PolicyTable): per-family operation classifier
//! - [`DryRunProxy`]: the gate itself, aliased per family
//! - [`AuditSink`](audit::AuditSink): where audit events go
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use dryrun_gate::audit::{AuditTrail, Severity};
//! use dryrun_gate::model::vpc::RouteEntryArgs;
//! use dryrun_gate::{CallerIdentity, RequestContext, RouteApi, RouteProxy};
//! # use dryrun_gate::Error;
//! # use dryrun_gate::model::Pagination;
//! # use dryrun_gate::model::vpc::*;
//! # struct Offline;
//! # impl RouteApi for Offline {
//! #     fn describe_vpcs(&self, _: &RequestContext, _: &DescribeVpcsArgs) -> Result<(Vec<Vpc>, Pagination), Error> { Ok(Default::default()) }
//! #     fn describe_vrouters(&self, _: &RequestContext, _: &DescribeVRoutersArgs) -> Result<(Vec<VRouter>, Pagination), Error> { Ok(Default::default()) }
//! #     fn describe_route_tables(&self, _: &RequestContext, _: &DescribeRouteTablesArgs) -> Result<(Vec<RouteTable>, Pagination), Error> { Ok(Default::default()) }
//! #     fn describe_route_entry_list(&self, _: &RequestContext, _: &DescribeRouteEntryListArgs) -> Result<Vec<RouteEntry>, Error> { Ok(Vec::new()) }
//! #     fn create_route_entry(&self, _: &RequestContext, _: &RouteEntryArgs) -> Result<(), Error> { unreachable!() }
//! #     fn delete_route_entry(&self, _: &RequestContext, _: &RouteEntryArgs) -> Result<(), Error> { unreachable!() }
//! #     fn wait_for_all_route_entries_available(&self, _: &RequestContext, _: &WaitForRouteEntriesArgs) -> Result<(), Error> { Ok(()) }
//! # }
//!
//! let trail = Arc::new(AuditTrail::new());
//! let routes = RouteProxy::new(Arc::new(Offline), trail.clone());
//!
//! let ctx = RequestContext::new().with_caller(CallerIdentity::new("kube-system", "node-1"));
//! let args = RouteEntryArgs {
//!     route_table_id: "vtb-1".to_string(),
//!     destination_cidr_block: "10.0.1.0/24".to_string(),
//!     ..Default::default()
//! };
//!
//! let err = routes.create_route_entry(&ctx, &args).unwrap_err();
//! assert!(err.to_string().contains("route.CreateRouteEntry"));
//!
//! let events = trail.events();
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].severity(), Severity::Error);
//! assert_eq!(events[0].key(), "kube-system/node-1/RouteTable/vtb-1");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod audit;
mod context;
mod error;
mod holder;
pub mod model;
pub mod policy;
pub mod proxy;

pub use context::{CallerIdentity, RequestContext};
pub use error::{
    AuditSinkError, AuditSinkErrorKind, Error, OperationBlocked, PolicyConfigError,
    TransportError, WiringFault,
};
pub use holder::ClientHolder;
pub use proxy::{
    DryRunProxy, InstanceApi, InstanceProxy, LoadBalancerApi, LoadBalancerProxy, PrivateZoneApi,
    PrivateZoneProxy, RouteApi, RouteProxy,
};

//! Per-family classification of API operations.
//!
//! A [`PolicyTable`] maps every operation name of one API family to a
//! [`Decision`]. Reads always pass through. Mutations are denied unless they
//! are on the family's allow-list, which is configuration rather than code:
//! start from the defaults and adjust with [`PolicyBuilder`].

use std::collections::BTreeSet;
use std::fmt;

use crate::audit::Component;
use crate::error::PolicyConfigError;

/// What a proxy does with one call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Forward to the raw client, return its result, emit nothing.
    PassThrough,
    /// Do not call the raw client; emit one `ERROR` event and fail.
    DenyAndAudit,
    /// Forward to the raw client and emit one `NORMAL` event.
    AllowWithAudit,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::PassThrough => write!(f, "pass_through"),
            Decision::DenyAndAudit => write!(f, "deny_and_audit"),
            Decision::AllowWithAudit => write!(f, "allow_with_audit"),
        }
    }
}

/// The method surface of one API family, split by shape.
#[derive(Debug)]
struct Surface {
    reads: &'static [&'static str],
    mutations: &'static [&'static str],
    default_allow: &'static [&'static str],
}

static SLB: Surface = Surface {
    reads: &[
        "DescribeLoadBalancers",
        "DescribeLoadBalancerAttribute",
        "DescribeLoadBalancerTCPListenerAttribute",
        "DescribeLoadBalancerUDPListenerAttribute",
        "DescribeLoadBalancerHTTPListenerAttribute",
        "DescribeLoadBalancerHTTPSListenerAttribute",
        "DescribeTags",
        "DescribeVServerGroups",
        "DescribeVServerGroupAttribute",
    ],
    mutations: &[
        "CreateLoadBalancer",
        "SetLoadBalancerName",
        "DeleteLoadBalancer",
        "SetLoadBalancerDeleteProtection",
        "SetLoadBalancerModificationProtection",
        "ModifyLoadBalancerInstanceSpec",
        "ModifyLoadBalancerInternetSpec",
        "AddBackendServers",
        "RemoveBackendServers",
        "StartLoadBalancerListener",
        "StopLoadBalancerListener",
        "CreateLoadBalancerTCPListener",
        "CreateLoadBalancerUDPListener",
        "CreateLoadBalancerHTTPListener",
        "CreateLoadBalancerHTTPSListener",
        "DeleteLoadBalancerListener",
        "SetLoadBalancerTCPListenerAttribute",
        "SetLoadBalancerUDPListenerAttribute",
        "SetLoadBalancerHTTPListenerAttribute",
        "SetLoadBalancerHTTPSListenerAttribute",
        "AddTags",
        "RemoveTags",
        "CreateVServerGroup",
        "DeleteVServerGroup",
        "SetVServerGroupAttribute",
        "ModifyVServerGroupBackendServers",
        "AddVServerGroupBackendServers",
        "RemoveVServerGroupBackendServers",
    ],
    default_allow: &["AddTags", "SetVServerGroupAttribute"],
};

static ECS: Surface = Surface {
    reads: &[
        "DescribeInstances",
        "DescribeNetworkInterfaces",
        "DescribeEipAddresses",
    ],
    mutations: &["AddTags"],
    default_allow: &["AddTags"],
};

static PVTZ: Surface = Surface {
    reads: &[
        "pvtz.DescribeZones",
        "pvtz.CheckZoneName",
        "pvtz.DescribeZoneInfo",
        "pvtz.DescribeRegions",
        "pvtz.DescribeZoneRecords",
        "pvtz.DescribeZoneRecordsByRR",
    ],
    mutations: &[
        "pvtz.AddZone",
        "pvtz.DeleteZone",
        "pvtz.UpdateZoneRemark",
        "pvtz.BindZoneVpc",
        "pvtz.DeleteZoneRecordsByRR",
        "pvtz.AddZoneRecord",
        "pvtz.UpdateZoneRecord",
        "pvtz.DeleteZoneRecord",
        "pvtz.SetZoneRecordStatus",
    ],
    default_allow: &[],
};

static VPC: Surface = Surface {
    reads: &[
        "route.DescribeVpcs",
        "route.DescribeVRouters",
        "route.DescribeRouteTables",
        "route.DescribeRouteEntryList",
    ],
    mutations: &[
        "route.CreateRouteEntry",
        "route.DeleteRouteEntry",
        "route.WaitForAllRouteEntriesAvailable",
    ],
    default_allow: &["route.WaitForAllRouteEntriesAvailable"],
};

fn surface(component: Component) -> &'static Surface {
    match component {
        Component::Slb => &SLB,
        Component::Ecs => &ECS,
        Component::Pvtz => &PVTZ,
        Component::Vpc => &VPC,
    }
}

/// Immutable decision table for one API family.
///
/// Classification depends only on the operation name: never on arguments,
/// never on the caller. Names outside the family surface are denied.
///
/// # Examples
///
/// ```
/// use dryrun_gate::audit::Component;
/// use dryrun_gate::policy::{Decision, PolicyTable};
///
/// let table = PolicyTable::for_component(Component::Slb);
///
/// assert_eq!(table.classify("DescribeLoadBalancers"), Decision::PassThrough);
/// assert_eq!(table.classify("CreateLoadBalancer"), Decision::DenyAndAudit);
/// assert_eq!(table.classify("AddTags"), Decision::AllowWithAudit);
/// assert_eq!(table.classify("NoSuchApi"), Decision::DenyAndAudit);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyTable {
    component: Component,
    reads: &'static [&'static str],
    mutations: &'static [&'static str],
    allowed: BTreeSet<&'static str>,
}

impl PolicyTable {
    /// Returns the default table for `component`.
    pub fn for_component(component: Component) -> Self {
        let surface = surface(component);
        Self {
            component,
            reads: surface.reads,
            mutations: surface.mutations,
            allowed: surface.default_allow.iter().copied().collect(),
        }
    }

    /// Starts a builder seeded with the default table for `component`.
    pub fn builder(component: Component) -> PolicyBuilder {
        PolicyBuilder::new(component)
    }

    /// Returns the family this table classifies.
    pub fn component(&self) -> Component {
        self.component
    }

    /// Classifies one operation.
    pub fn classify(&self, operation: &str) -> Decision {
        if self.reads.iter().any(|r| *r == operation) {
            Decision::PassThrough
        } else if self.allowed.contains(operation) {
            Decision::AllowWithAudit
        } else {
            Decision::DenyAndAudit
        }
    }

    /// Read operations of the family.
    pub fn reads(&self) -> &'static [&'static str] {
        self.reads
    }

    /// Mutating operations of the family, allowed or not.
    pub fn mutations(&self) -> &'static [&'static str] {
        self.mutations
    }

    /// Mutations currently on the allow-list.
    pub fn allowed(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.allowed.iter().copied()
    }
}

/// Builder for adjusting a family's allow-list.
///
/// Overrides are validated in [`build`](Self::build): only mutations of the
/// family may be moved on or off the allow-list.
///
/// # Examples
///
/// ```
/// use dryrun_gate::audit::Component;
/// use dryrun_gate::policy::{Decision, PolicyTable};
///
/// let table = PolicyTable::builder(Component::Slb)
///     .deny("SetVServerGroupAttribute")
///     .allow("RemoveTags")
///     .build()
///     .expect("known mutations");
///
/// assert_eq!(table.classify("SetVServerGroupAttribute"), Decision::DenyAndAudit);
/// assert_eq!(table.classify("RemoveTags"), Decision::AllowWithAudit);
/// ```
#[derive(Debug)]
pub struct PolicyBuilder {
    component: Component,
    overrides: Vec<(String, bool)>,
}

impl PolicyBuilder {
    /// Creates a builder seeded with the default table for `component`.
    pub fn new(component: Component) -> Self {
        Self {
            component,
            overrides: Vec::new(),
        }
    }

    /// Puts a mutation on the allow-list.
    pub fn allow(mut self, operation: impl Into<String>) -> Self {
        self.overrides.push((operation.into(), true));
        self
    }

    /// Takes a mutation off the allow-list.
    pub fn deny(mut self, operation: impl Into<String>) -> Self {
        self.overrides.push((operation.into(), false));
        self
    }

    /// Validates the overrides and builds the table. Later overrides of the
    /// same operation win.
    ///
    /// # Errors
    ///
    /// Returns `PolicyConfigError` if an override names a read operation or
    /// an operation outside the family surface.
    pub fn build(self) -> Result<PolicyTable, PolicyConfigError> {
        let mut table = PolicyTable::for_component(self.component);
        for (operation, allow) in self.overrides {
            let name = table.resolve_mutation(&operation)?;
            if allow {
                table.allowed.insert(name);
            } else {
                table.allowed.remove(name);
            }
        }
        tracing::debug!(
            component = %table.component,
            allowed = ?table.allowed,
            "built dry-run policy table"
        );
        Ok(table)
    }
}

impl PolicyTable {
    fn resolve_mutation(&self, operation: &str) -> Result<&'static str, PolicyConfigError> {
        if let Some(name) = self.mutations.iter().find(|m| **m == operation) {
            return Ok(*name);
        }
        if self.reads.iter().any(|r| *r == operation) {
            return Err(PolicyConfigError::ReadOperation {
                operation: operation.to_string(),
            });
        }
        Err(PolicyConfigError::UnknownOperation {
            operation: operation.to_string(),
        })
    }
}

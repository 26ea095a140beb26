//! Dry-run proxies for the four API families.
//!
//! [`DryRunProxy<C>`] wraps one raw client of family `C` and implements the
//! same capability trait, so it can be dropped in wherever a raw client is
//! expected. Every call goes through one dispatch step:
//!
//! ```text
//! proxy method
//!   ↓
//! PolicyTable::classify(operation)
//!   ├─ PassThrough    → raw client, result returned as-is
//!   ├─ DenyAndAudit   → ERROR event to the sink, Err(OperationBlocked)
//!   └─ AllowWithAudit → NORMAL event to the sink, raw client, result as-is
//! ```
//!
//! The request context is forwarded to the raw client by reference, so any
//! deadline it carries reaches the transport unchanged.

mod ecs;
mod pvtz;
mod slb;
mod vpc;

pub use ecs::{InstanceApi, InstanceProxy};
pub use pvtz::{PrivateZoneApi, PrivateZoneProxy};
pub use slb::{LoadBalancerApi, LoadBalancerProxy};
pub use vpc::{RouteApi, RouteProxy};

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::audit::{AuditEvent, AuditSink, Component, Severity};
use crate::context::RequestContext;
use crate::error::{Error, OperationBlocked, WiringFault};
use crate::holder::ClientHolder;
use crate::policy::{Decision, PolicyTable};

/// Binds a capability trait object to the component it belongs to.
pub trait ApiFamily {
    /// Component tag used for policy lookup and audit events.
    const COMPONENT: Component;
}

/// Policy gate in front of one raw client.
///
/// Use the family aliases ([`LoadBalancerProxy`], [`InstanceProxy`],
/// [`PrivateZoneProxy`], [`RouteProxy`]) rather than naming this directly.
pub struct DryRunProxy<C: ?Sized> {
    holder: ClientHolder<C>,
    sink: Arc<dyn AuditSink>,
    policy: PolicyTable,
}

impl<C: ?Sized + ApiFamily + 'static> DryRunProxy<C> {
    /// Creates a proxy with the family's default policy table.
    pub fn new(client: Arc<C>, sink: Arc<dyn AuditSink>) -> Self {
        Self {
            holder: ClientHolder::new(client),
            sink,
            policy: PolicyTable::for_component(C::COMPONENT),
        }
    }

    /// Creates a proxy with a custom policy table.
    ///
    /// # Errors
    ///
    /// Returns `WiringFault` if `policy` belongs to a different family.
    pub fn with_policy(
        client: Arc<C>,
        sink: Arc<dyn AuditSink>,
        policy: PolicyTable,
    ) -> Result<Self, WiringFault> {
        if policy.component() != C::COMPONENT {
            tracing::error!(
                expected = %C::COMPONENT,
                actual = %policy.component(),
                "policy table wired to the wrong proxy"
            );
            return Err(WiringFault::new(policy_label(C::COMPONENT)));
        }
        Ok(Self {
            holder: ClientHolder::new(client),
            sink,
            policy,
        })
    }
}

impl<C: ?Sized + 'static> DryRunProxy<C> {
    /// Returns the raw client currently behind the proxy.
    pub fn raw_client(&self) -> Arc<C> {
        self.holder.get()
    }

    /// Replaces the raw client. Calls already in flight finish on the old one.
    pub fn set_raw_client(&self, client: Arc<C>) {
        self.holder.replace(client);
        tracing::info!(component = %self.component(), "replaced raw client");
    }

    /// Replaces the raw client from a type-erased candidate holding `Arc<C>`.
    ///
    /// # Errors
    ///
    /// Returns `WiringFault` if the candidate is not an `Arc<C>`. The held
    /// client is unchanged. This indicates a wiring defect; do not retry.
    pub fn try_set_raw_client(&self, candidate: Box<dyn Any + Send>) -> Result<(), WiringFault> {
        match self.holder.replace_any(candidate) {
            Ok(_) => {
                tracing::info!(component = %self.component(), "replaced raw client");
                Ok(())
            }
            Err(fault) => {
                tracing::error!(
                    component = %self.component(),
                    error = %fault,
                    "rejected raw client of the wrong family"
                );
                Err(fault)
            }
        }
    }

    /// Returns the policy table in force.
    pub fn policy(&self) -> &PolicyTable {
        &self.policy
    }

    /// Returns the component this proxy guards.
    pub fn component(&self) -> Component {
        self.policy.component()
    }

    fn dispatch<T>(
        &self,
        ctx: &RequestContext,
        call: Call,
        forward: impl FnOnce(&C) -> Result<T, Error>,
    ) -> Result<T, Error> {
        match self.policy.classify(call.operation) {
            Decision::PassThrough => {
                tracing::trace!(
                    component = %self.component(),
                    operation = call.operation,
                    "passing through"
                );
                forward(&*self.holder.get())
            }
            Decision::DenyAndAudit => {
                let event = call.to_event(self.component(), Severity::Error, ctx);
                tracing::warn!(
                    component = %self.component(),
                    operation = call.operation,
                    key = %event.key(),
                    "blocked mutating call"
                );
                self.emit(event);
                Err(OperationBlocked::new(call.operation, ctx.reason()).into())
            }
            Decision::AllowWithAudit => {
                let event = call.to_event(self.component(), Severity::Normal, ctx);
                tracing::debug!(
                    component = %self.component(),
                    operation = call.operation,
                    key = %event.key(),
                    "allowing audited mutation"
                );
                self.emit(event);
                forward(&*self.holder.get())
            }
        }
    }

    fn emit(&self, event: AuditEvent) {
        if let Err(err) = self.sink.record(event) {
            tracing::warn!(
                component = %self.component(),
                error = %err,
                "dropping audit event"
            );
        }
    }
}

fn policy_label(component: Component) -> &'static str {
    match component {
        Component::Slb => "an SLB policy table",
        Component::Ecs => "an ECS policy table",
        Component::Pvtz => "a PVTZ policy table",
        Component::Vpc => "a VPC policy table",
    }
}

impl<C: ?Sized> fmt::Debug for DryRunProxy<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DryRunProxy")
            .field("holder", &self.holder)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

/// Where an audit event's resource id comes from.
enum Resource {
    /// The load balancer snapshot in the request context
    Target,
    /// An identifier taken from the call arguments
    Id(String),
}

/// Audit metadata of one proxied call.
///
/// Reads only need the operation name; the rest matters once a call is
/// denied or audited.
struct Call {
    operation: &'static str,
    action: &'static str,
    qualifier: Option<String>,
    resource: Resource,
    description: Option<String>,
}

impl Call {
    fn read(operation: &'static str) -> Self {
        Self::new(operation, operation)
    }

    fn new(operation: &'static str, action: &'static str) -> Self {
        Self {
            operation,
            action,
            qualifier: None,
            resource: Resource::Target,
            description: None,
        }
    }

    /// Appends `/<qualifier>` to the caller key.
    fn qualify(mut self, qualifier: impl fmt::Display) -> Self {
        self.qualifier = Some(qualifier.to_string());
        self
    }

    fn port(self, port: u16) -> Self {
        self.qualify(port)
    }

    fn vgroup(self, vserver_group_id: &str) -> Self {
        self.qualify(format!("VGroupID/{}", vserver_group_id))
    }

    fn resource(mut self, id: impl Into<String>) -> Self {
        self.resource = Resource::Id(id.into());
        self
    }

    fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    fn to_event(&self, component: Component, severity: Severity, ctx: &RequestContext) -> AuditEvent {
        let caller = ctx.caller_identity();
        let key = match &self.qualifier {
            Some(q) => format!("{}/{}", caller, q),
            None => caller.key(),
        };
        let resource_id = match &self.resource {
            Resource::Target => ctx.target_resource().load_balancer_id.clone(),
            Resource::Id(id) => id.clone(),
        };
        let message = match (&self.description, ctx.reason()) {
            (Some(d), "") => d.clone(),
            (Some(d), reason) => format!("{}, reason: {}", d, reason),
            (None, reason) => reason.to_string(),
        };
        AuditEvent::new(component, key, self.action, severity)
            .with_resource_id(resource_id)
            .with_message(message)
    }
}

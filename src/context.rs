use std::fmt;
use std::sync::OnceLock;
use std::time::Instant;

use crate::model::slb::LoadBalancer;

/// Namespace and name of the workload on whose behalf a call is made.
///
/// Rendered as `namespace/name`, which is also the base of every audit key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallerIdentity {
    /// Namespace of the caller
    pub namespace: String,
    /// Name of the caller
    pub name: String,
}

impl CallerIdentity {
    /// Sentinel namespace and name substituted when no caller is known.
    pub const UNKNOWN: &'static str = "unknown";

    /// Creates a caller identity.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Returns the sentinel `unknown/unknown` identity.
    pub fn unknown() -> Self {
        Self::new(Self::UNKNOWN, Self::UNKNOWN)
    }

    /// Returns `true` if this is the sentinel identity.
    pub fn is_unknown(&self) -> bool {
        self.namespace == Self::UNKNOWN && self.name == Self::UNKNOWN
    }

    /// Renders the identity as an audit key (`namespace/name`).
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CallerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// Per-call correlation data supplied by the caller.
///
/// Every slot is optional. The accessors never fail: a missing slot yields a
/// fixed default so that building an audit record cannot go wrong no matter
/// how carelessly the context was populated.
///
/// The same reference is forwarded to the raw client on every call that is
/// allowed through, so a deadline set here reaches the transport unchanged.
///
/// # Examples
///
/// ```
/// use dryrun_gate::{CallerIdentity, RequestContext};
///
/// let ctx = RequestContext::new()
///     .with_caller(CallerIdentity::new("default", "svc1"))
///     .with_reason("listener port changed");
///
/// assert_eq!(ctx.caller_identity().key(), "default/svc1");
/// assert_eq!(ctx.reason(), "listener port changed");
/// assert!(ctx.target_resource().load_balancer_id.is_empty());
///
/// let empty = RequestContext::new();
/// assert!(empty.caller_identity().is_unknown());
/// assert_eq!(empty.reason(), "");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    caller: Option<CallerIdentity>,
    target: Option<LoadBalancer>,
    reason: Option<String>,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the caller identity.
    pub fn with_caller(mut self, caller: CallerIdentity) -> Self {
        self.caller = Some(caller);
        self
    }

    /// Sets the snapshot of the load balancer the caller is reconciling.
    pub fn with_target(mut self, target: LoadBalancer) -> Self {
        self.target = Some(target);
        self
    }

    /// Sets a human-readable reason for the call.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Sets the deadline the raw client should honor.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Returns the caller identity, or `unknown/unknown`.
    pub fn caller_identity(&self) -> CallerIdentity {
        self.caller.clone().unwrap_or_else(CallerIdentity::unknown)
    }

    /// Returns the target load balancer, or an empty snapshot.
    pub fn target_resource(&self) -> &LoadBalancer {
        static EMPTY: OnceLock<LoadBalancer> = OnceLock::new();
        match &self.target {
            Some(lb) => lb,
            None => EMPTY.get_or_init(LoadBalancer::default),
        }
    }

    /// Returns the reason as supplied, or `""` when absent or blank.
    pub fn reason(&self) -> &str {
        match self.reason.as_deref() {
            Some(reason) if !reason.trim().is_empty() => reason,
            _ => "",
        }
    }

    /// Returns the deadline, if the caller set one.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

//! Audit event schema.

use std::fmt;

/// API family an audit event belongs to.
///
/// Also used as the family identifier of a policy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// Load balancers, listeners and backend groups
    Slb,
    /// Compute instances and network interfaces
    Ecs,
    /// Private DNS zones and records
    Pvtz,
    /// VPC routing
    Vpc,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Slb => write!(f, "SLB"),
            Component::Ecs => write!(f, "ECS"),
            Component::Pvtz => write!(f, "PVTZ"),
            Component::Vpc => write!(f, "VPC"),
        }
    }
}

/// Severity of an audit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational: the call was allowed through
    Normal,
    /// The call was blocked
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Normal => write!(f, "NORMAL"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// A structured record of one policy decision.
///
/// Created once per blocked or audited call and handed straight to the
/// proxy's sink; the proxy keeps no copy.
///
/// # Example
///
/// ```
/// use dryrun_gate::audit::{AuditEvent, Component, Severity};
///
/// let event = AuditEvent::new(Component::Slb, "default/svc1/80", "DeleteListener", Severity::Error)
///     .with_resource_id("lb-123");
///
/// assert_eq!(event.key(), "default/svc1/80");
/// assert_eq!(event.resource_id(), "lb-123");
/// assert_eq!(event.message(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    component: Component,
    /// Caller identity, optionally suffixed with a sub-resource qualifier
    key: String,
    /// Identifier of the cloud resource, empty when unknown
    resource_id: String,
    /// Short action name, e.g. `CreateSLB`
    action: String,
    severity: Severity,
    /// Free text, typically the caller's reason or a description
    message: String,
}

impl AuditEvent {
    /// Creates an event with an empty resource id and message.
    pub fn new(
        component: Component,
        key: impl Into<String>,
        action: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            component,
            key: key.into(),
            resource_id: String::new(),
            action: action.into(),
            severity,
            message: String::new(),
        }
    }

    /// Sets the resource identifier.
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.resource_id = resource_id.into();
        self
    }

    /// Sets the free-text message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Returns the component.
    pub fn component(&self) -> Component {
        self.component
    }

    /// Returns the key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the resource identifier.
    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }

    /// Returns the action name.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Returns the severity.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AuditEvent[component={}, severity={}, key={}, action={}",
            self.component, self.severity, self.key, self.action
        )?;
        if !self.resource_id.is_empty() {
            write!(f, ", resource_id={}", self.resource_id)?;
        }
        if !self.message.is_empty() {
            write!(f, ", message={}", self.message)?;
        }
        write!(f, "]")
    }
}

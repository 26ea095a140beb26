//! Audit sink trait and the tracing-backed sink.

use std::sync::Arc;

use super::{AuditEvent, Severity};
use crate::error::AuditSinkError;

/// Destination for audit events.
///
/// Implementations may forward to a cluster event recorder, a structured log
/// or an in-memory buffer. The trait is object-safe so proxies can hold an
/// `Arc<dyn AuditSink>`.
///
/// A returned error is logged by the proxy and otherwise ignored.
pub trait AuditSink: Send + Sync {
    /// Accepts one event.
    ///
    /// # Errors
    ///
    /// Returns `AuditSinkError` if the event could not be delivered.
    fn record(&self, event: AuditEvent) -> Result<(), AuditSinkError>;
}

impl<S: AuditSink + ?Sized> AuditSink for Arc<S> {
    fn record(&self, event: AuditEvent) -> Result<(), AuditSinkError> {
        (**self).record(event)
    }
}

/// Sink that emits every event as a structured `tracing` record.
///
/// Blocked calls are logged at `warn`, allowed mutations at `info`, both
/// on the `dryrun_audit` target. Never fails.
///
/// # Example
///
/// ```
/// use dryrun_gate::audit::{AuditEvent, AuditSink, Component, Severity, TracingSink};
///
/// let sink = TracingSink::new();
/// let event = AuditEvent::new(Component::Vpc, "rtb-1", "CreateRouteEntry", Severity::Error);
///
/// assert!(sink.record(event).is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink {
    _private: (),
}

impl TracingSink {
    /// Creates a new tracing sink.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl AuditSink for TracingSink {
    fn record(&self, event: AuditEvent) -> Result<(), AuditSinkError> {
        match event.severity() {
            Severity::Error => tracing::warn!(
                target: "dryrun_audit",
                component = %event.component(),
                key = %event.key(),
                resource_id = %event.resource_id(),
                action = %event.action(),
                severity = %event.severity(),
                detail = %event.message(),
                "dry-run blocked call"
            ),
            Severity::Normal => tracing::info!(
                target: "dryrun_audit",
                component = %event.component(),
                key = %event.key(),
                resource_id = %event.resource_id(),
                action = %event.action(),
                severity = %event.severity(),
                detail = %event.message(),
                "dry-run audited call"
            ),
        }
        Ok(())
    }
}

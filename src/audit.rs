//! Audit records for intercepted operations.
//!
//! This module provides:
//! - `AuditEvent`: Structured record of one policy decision
//! - `AuditSink`: Destination for audit events, injected into every proxy
//! - `TracingSink`: Sink that emits events as structured `tracing` records
//! - `AuditTrail`: Thread-safe in-memory recorder
//!
//! Sinks are best-effort. A proxy logs a failed `record` and carries on; the
//! decision it already made is never changed by the sink.

mod event;
mod sink;
mod trail;

pub use event::{AuditEvent, Component, Severity};
pub use sink::{AuditSink, TracingSink};
pub use trail::AuditTrail;

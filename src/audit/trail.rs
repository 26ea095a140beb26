//! In-memory audit trail recorder.

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{AuditEvent, AuditSink};
use crate::error::{AuditSinkError, AuditSinkErrorKind};

/// Thread-safe in-memory recorder for audit events.
///
/// Useful for tests and for controllers that batch events before forwarding
/// them. An optional capacity makes `record` fail with
/// [`AuditSinkErrorKind::Full`] once reached.
///
/// An unbounded trail grows with every event. Long-running controllers should
/// set a capacity or drain it with [`clear`](Self::clear).
///
/// # Example
///
/// ```
/// use dryrun_gate::audit::{AuditEvent, AuditSink, AuditTrail, Component, Severity};
///
/// let trail = AuditTrail::new();
/// trail
///     .record(AuditEvent::new(Component::Slb, "default/svc1", "CreateSLB", Severity::Error))
///     .unwrap();
///
/// assert_eq!(trail.events().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct AuditTrail {
    events: Mutex<Vec<AuditEvent>>,
    capacity: Option<usize>,
}

impl AuditTrail {
    /// Creates a new unbounded audit trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a trail that rejects events once it holds `capacity` of them.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            capacity: Some(capacity),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<AuditEvent>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a snapshot of all recorded events, in recording order.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.lock().clone()
    }

    /// Returns the number of recorded events.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Clears all recorded events.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl AuditSink for AuditTrail {
    fn record(&self, event: AuditEvent) -> Result<(), AuditSinkError> {
        let mut events = self.lock();
        if let Some(capacity) = self.capacity {
            if events.len() >= capacity {
                return Err(AuditSinkError::with_message(
                    AuditSinkErrorKind::Full,
                    format!("trail holds {} events", capacity),
                ));
            }
        }
        events.push(event);
        Ok(())
    }
}

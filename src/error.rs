use std::fmt;

/// Errors returned by every family API, raw or proxied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The dry-run policy refused to forward a mutating call.
    Blocked(OperationBlocked),
    /// The underlying client reported a failure.
    Transport(TransportError),
}

impl Error {
    /// Returns the blocked-operation details if this is a denial.
    pub fn as_blocked(&self) -> Option<&OperationBlocked> {
        match self {
            Error::Blocked(b) => Some(b),
            Error::Transport(_) => None,
        }
    }

    /// Returns `true` if the policy denied the call.
    pub fn is_blocked(&self) -> bool {
        matches!(self, Error::Blocked(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Blocked(b) => write!(f, "{}", b),
            Error::Transport(t) => write!(f, "{}", t),
        }
    }
}

impl std::error::Error for Error {}

impl From<OperationBlocked> for Error {
    fn from(b: OperationBlocked) -> Self {
        Error::Blocked(b)
    }
}

impl From<TransportError> for Error {
    fn from(t: TransportError) -> Self {
        Error::Transport(t)
    }
}

/// A mutating call that was intercepted instead of executed.
///
/// Every `OperationBlocked` is paired with exactly one `ERROR` audit event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationBlocked {
    operation: &'static str,
    reason: Option<String>,
}

impl OperationBlocked {
    /// Creates a denial for `operation`. An empty reason is treated as absent.
    pub fn new(operation: &'static str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self {
            operation,
            reason: if reason.is_empty() {
                None
            } else {
                Some(reason)
            },
        }
    }

    /// Name of the API operation that was blocked.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Caller-supplied reason, if the request context carried one.
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}

impl fmt::Display for OperationBlocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "api {} should not be called in dry-run mode",
            self.operation
        )?;
        if let Some(reason) = &self.reason {
            write!(f, ", reason: {}", reason)?;
        }
        Ok(())
    }
}

impl std::error::Error for OperationBlocked {}

/// Opaque failure reported by a raw client.
///
/// The proxy never inspects or rewrites these; they are returned exactly as
/// the client produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    code: Option<String>,
    message: String,
}

impl TransportError {
    /// Creates a transport error with a message only.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    /// Creates a transport error carrying a provider error code.
    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }

    /// Provider error code, if any.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "transport error [{}]: {}", code, self.message),
            None => write!(f, "transport error: {}", self.message),
        }
    }
}

impl std::error::Error for TransportError {}

/// A proxy was handed a client or policy table of the wrong family.
///
/// This is a wiring defect, not a runtime condition. Callers should treat it
/// as fatal and must not retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WiringFault {
    expected: &'static str,
}

impl WiringFault {
    pub(crate) fn new(expected: &'static str) -> Self {
        Self { expected }
    }

    /// What the proxy expected to be given.
    pub fn expected(&self) -> &'static str {
        self.expected
    }
}

impl fmt::Display for WiringFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "wiring fault: expected {}", self.expected)
    }
}

impl std::error::Error for WiringFault {}

/// Error returned when an audit sink cannot accept an event.
///
/// Proxies log these and move on; they never reach the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditSinkError {
    kind: AuditSinkErrorKind,
    message: Option<String>,
}

impl AuditSinkError {
    /// Creates a new sink error with the specified kind.
    pub fn new(kind: AuditSinkErrorKind) -> Self {
        Self {
            kind,
            message: None,
        }
    }

    /// Creates a new sink error with a custom message.
    pub fn with_message(kind: AuditSinkErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: Some(message.into()),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> AuditSinkErrorKind {
        self.kind
    }

    /// Returns the error message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for AuditSinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(msg) = &self.message {
            write!(f, "audit sink error ({}): {}", self.kind, msg)
        } else {
            write!(f, "audit sink error ({})", self.kind)
        }
    }
}

impl std::error::Error for AuditSinkError {}

/// Kind of audit sink error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditSinkErrorKind {
    /// The downstream event system is not reachable.
    Unavailable,
    /// The sink has reached capacity.
    Full,
    /// I/O error while writing the event.
    Io,
}

impl fmt::Display for AuditSinkErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "unavailable"),
            Self::Full => write!(f, "sink full"),
            Self::Io => write!(f, "I/O error"),
        }
    }
}

/// Invalid reconfiguration of a policy table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyConfigError {
    /// The operation is not part of the family's method surface.
    UnknownOperation {
        /// The rejected operation name
        operation: String,
    },
    /// Read operations always pass through and cannot be re-classified.
    ReadOperation {
        /// The rejected operation name
        operation: String,
    },
}

impl fmt::Display for PolicyConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyConfigError::UnknownOperation { operation } => {
                write!(f, "unknown operation '{}'", operation)
            }
            PolicyConfigError::ReadOperation { operation } => {
                write!(f, "read operation '{}' cannot be re-classified", operation)
            }
        }
    }
}

impl std::error::Error for PolicyConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocked_message_names_operation() {
        let err = OperationBlocked::new("CreateLoadBalancer", "");
        assert_eq!(err.reason(), None);
        assert_eq!(
            err.to_string(),
            "api CreateLoadBalancer should not be called in dry-run mode"
        );
    }

    #[test]
    fn blocked_message_carries_reason() {
        let err = OperationBlocked::new("SetLoadBalancerTCPListenerAttribute", "bandwidth drift");
        assert_eq!(err.reason(), Some("bandwidth drift"));
        assert!(err.to_string().ends_with(", reason: bandwidth drift"));
    }

    #[test]
    fn transport_error_display() {
        assert_eq!(
            TransportError::new("timeout").to_string(),
            "transport error: timeout"
        );
        assert_eq!(
            TransportError::with_code("Throttling", "slow down").to_string(),
            "transport error [Throttling]: slow down"
        );
    }

    #[test]
    fn error_accessors() {
        let blocked: Error = OperationBlocked::new("DeleteZone", "").into();
        assert!(blocked.is_blocked());
        assert_eq!(blocked.as_blocked().map(|b| b.operation()), Some("DeleteZone"));

        let transport: Error = TransportError::new("boom").into();
        assert!(!transport.is_blocked());
        assert!(transport.as_blocked().is_none());
    }

    #[test]
    fn sink_error_kinds_display() {
        assert_eq!(AuditSinkErrorKind::Unavailable.to_string(), "unavailable");
        assert_eq!(AuditSinkErrorKind::Full.to_string(), "sink full");
        assert_eq!(
            AuditSinkError::with_message(AuditSinkErrorKind::Io, "disk").to_string(),
            "audit sink error (I/O error): disk"
        );
    }
}

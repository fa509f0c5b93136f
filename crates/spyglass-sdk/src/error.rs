//! Error types for the Spyglass ABI

/// Result type for introspection calls
pub type InspectResult<T> = Result<T, InspectError>;

/// Introspection error taxonomy
///
/// `TypeMismatch` and `ContractViolation` are caller bugs surfaced as
/// recoverable errors; `EngineError` is the engine failing to answer a
/// well-formed query. No variant is retried or suppressed internally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InspectError {
    /// Value is of the wrong intrinsic kind for the operation
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        /// Expected kind name (e.g. "promise")
        expected: String,
        /// Actual kind name as the engine reports it
        got: String,
    },

    /// Call-surface contract broken (e.g. wrong argument count)
    #[error("Contract violation: {0}")]
    ContractViolation(String),

    /// The engine itself failed to retrieve the requested state
    #[error("Engine query failed: {0}")]
    EngineError(String),
}

impl From<String> for InspectError {
    fn from(s: String) -> Self {
        InspectError::EngineError(s)
    }
}

impl From<&str> for InspectError {
    fn from(s: &str) -> Self {
        InspectError::EngineError(s.to_string())
    }
}

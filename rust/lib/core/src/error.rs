use thiserror::Error;

// ── Error codes ─────────────────────────────────────────────────────
//
// Stable, machine-readable identifiers. Embedding applications match on
// these, never on the human-readable message string.

/// Stable error code constants.
///
/// Surfaces that render a `ServiceError` (a REST gateway, a UI toast layer)
/// should match on the code. Codes never change; messages may be reworded.
pub mod error_code {
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    pub const UNAUTHENTICATED: &str = "UNAUTHENTICATED";
    pub const PERMISSION_DENIED: &str = "PERMISSION_DENIED";
}

// ── ServiceError ────────────────────────────────────────────────────

/// Unified service error type used across all modules.
///
/// Module-level errors (`auth::AuthError`, `leads::LeadsError`) convert into
/// this type at the boundary, so the embedding application deals with one
/// taxonomy. Each variant maps to a stable code (see [`error_code`]).
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Input data is invalid, or an invalid selection was made.
    #[error("{0}")]
    Validation(String),

    /// No active session where one is required.
    #[error("{0}")]
    Unauthorized(String),

    /// Authenticated but lacks the required capability.
    #[error("{0}")]
    PermissionDenied(String),
}

impl ServiceError {
    /// Stable, machine-readable error code.
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::Validation(_) => error_code::VALIDATION_FAILED,
            ServiceError::Unauthorized(_) => error_code::UNAUTHENTICATED,
            ServiceError::PermissionDenied(_) => error_code::PERMISSION_DENIED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_code_mapping() {
        assert_eq!(
            ServiceError::Validation("x".into()).error_code(),
            "VALIDATION_FAILED"
        );
        assert_eq!(
            ServiceError::Unauthorized("x".into()).error_code(),
            "UNAUTHENTICATED"
        );
        assert_eq!(
            ServiceError::PermissionDenied("x".into()).error_code(),
            "PERMISSION_DENIED"
        );
    }

    #[test]
    fn error_display_is_just_message() {
        // Display is just the message; surfaces add their own framing.
        assert_eq!(
            ServiceError::Validation("bad input".into()).to_string(),
            "bad input"
        );
        assert_eq!(
            ServiceError::PermissionDenied("no access".into()).to_string(),
            "no access"
        );
    }
}

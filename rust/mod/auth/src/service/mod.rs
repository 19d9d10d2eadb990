pub mod permissions;

use thiserror::Error;

/// Auth service error type.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("forbidden: {0}")]
    Forbidden(String),
}

impl From<AuthError> for opencrm_core::ServiceError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Unauthorized(m) => opencrm_core::ServiceError::Unauthorized(m),
            AuthError::Forbidden(m) => opencrm_core::ServiceError::PermissionDenied(m),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opencrm_core::{ServiceError, error::error_code};

    #[test]
    fn test_error_conversion() {
        let e: ServiceError = AuthError::Unauthorized("no session".into()).into();
        assert_eq!(e.error_code(), error_code::UNAUTHENTICATED);

        let e: ServiceError = AuthError::Forbidden("nope".into()).into();
        assert_eq!(e.error_code(), error_code::PERMISSION_DENIED);
    }
}

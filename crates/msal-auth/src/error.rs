//! Errors shared across the bridge.

use msal_rpc::RpcFailure;
use thiserror::Error;

/// A failure reported by the native authentication backend.
///
/// Every backend failure, regardless of its platform-specific error code,
/// collapses to this one shape once an RPC has been attempted. Only the
/// human-readable message crosses the bridge; the backend code is not
/// exposed to callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct BackendError {
    /// Message surfaced by the native backend.
    pub message: String,
}

impl From<RpcFailure> for BackendError {
    fn from(failure: RpcFailure) -> Self {
        Self {
            message: failure.message,
        }
    }
}

/// A response from the backend was missing an expected field. This means the
/// RPC itself succeeded but the response did not have the documented shape.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("The backend response was missing a required field: {0}")]
pub struct MissingFieldError(pub &'static str);

/// This macro is used to require that a value is present or return an error
/// otherwise. It is equivalent to using `val.ok_or(MissingFieldError(..))?`,
/// but easier to use and with a more descriptive error message.
/// Note that this macro will return early from the function if the value is
/// not present.
#[macro_export]
macro_rules! require {
    ($val:expr) => {
        match $val {
            Some(val) => val,
            None => return Err($crate::MissingFieldError(stringify!($val)).into()),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_keeps_only_the_message() {
        let error = BackendError::from(RpcFailure::new("X", "Y"));
        assert_eq!(error.message, "Y");
        assert!(!error.to_string().contains('X'));
    }

    #[test]
    fn translation_is_total_over_arbitrary_codes() {
        for code in ["", "invalid_grant", "-1", "UNKNOWN"] {
            let error = BackendError::from(RpcFailure::new(code, "something went wrong"));
            assert_eq!(error.to_string(), "something went wrong");
        }
    }
}

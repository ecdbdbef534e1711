use thiserror::Error;

/// A structured failure reported by the native backend over the RPC boundary.
///
/// The code is backend-specific and only meaningful to the transport; callers
/// above the bridge see the message alone once the failure has been
/// translated into the domain error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("[{code}] {message}")]
pub struct RpcFailure {
    /// Backend-specific error code.
    pub code: String,
    /// Human-readable description of the failure.
    pub message: String,
}

impl RpcFailure {
    /// Creates a failure from a backend-reported code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_code_and_message() {
        let failure = RpcFailure::new("no_current_account", "No account is signed in");
        assert_eq!(
            failure.to_string(),
            "[no_current_account] No account is signed in"
        );
    }
}

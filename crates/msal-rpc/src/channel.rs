use serde_json::Value;

use crate::{failure::RpcFailure, RequestArgs};

/// This trait defines the interface used to invoke methods on the
/// platform-native authentication backend. It is up to the platform to
/// implement this trait and any necessary correlation of concurrent calls.
///
/// The implementation of this trait needs to guarantee that:
///     - Any number of invocations may be in flight concurrently; calls are
///       correlated by the transport, not by the caller.
///     - No ordering is imposed across concurrently issued calls.
///     - A backend-reported error always resolves as `Err(RpcFailure)`,
///       never as a silent null result.
pub trait RpcChannel {
    /// Invoke a named method on the native side with the given argument
    /// mapping. The call suspends until the backend responds; no timeout or
    /// cancellation is applied at this layer.
    fn invoke(
        &self,
        method: &str,
        args: RequestArgs,
    ) -> impl std::future::Future<Output = Result<Value, RpcFailure>>;
}

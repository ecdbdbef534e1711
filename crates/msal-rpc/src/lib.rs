//! The RPC boundary separating the MSAL bridge from the platform-native
//! authentication backend.
//!
//! This crate defines only the shape of that boundary: a named asynchronous
//! invocation carrying an argument mapping, resolving to a JSON value or to a
//! structured [`RpcFailure`]. The transport that actually carries the call to
//! the native side is supplied by the embedding application.

mod channel;
mod failure;

pub use channel::RpcChannel;
pub use failure::RpcFailure;

/// The argument mapping sent along with every invocation.
pub type RequestArgs = serde_json::Map<String, serde_json::Value>;

//! Client-side bridge for single-account interactive authentication.
//!
//! The heavy lifting (token acquisition, caching, silent renewal, broker
//! negotiation) lives in the platform-native MSAL backend, reachable only
//! through an asynchronous [`RpcChannel`](msal_rpc::RpcChannel). This crate
//! is the thin layer in front of it: it validates the configuration required
//! on the active platform, assembles the platform-appropriate request
//! payload, and translates backend failures into a single domain error type.
//!
//! The entry point is `AuthClient::create`, which initializes the native
//! single-account public client application and returns a client bound to
//! one client identity for the life of the process.

mod account;
mod assets;
mod client;
mod config;
mod error;
mod payload;
mod platform;

pub use account::Account;
pub use assets::{AssetSource, FileAssetSource};
pub use client::{
    methods, AuthClient, CreateError, CreateRequest, CurrentAccountError, SignOutError,
};
pub use config::{AndroidConfig, AuthorityType, Broker, IosConfig, PlatformConfig};
pub use error::{BackendError, MissingFieldError};
pub use payload::{build_create_payload, AssetLoadError, ConfigurationError, PayloadError};
pub use platform::Platform;

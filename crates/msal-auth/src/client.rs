use msal_rpc::{RequestArgs, RpcChannel};
use thiserror::Error;

use crate::{
    account::{Account, AccountResponse},
    assets::AssetSource,
    config::{AndroidConfig, IosConfig},
    error::{BackendError, MissingFieldError},
    payload::{build_create_payload, AssetLoadError, ConfigurationError, PayloadError},
    platform::Platform,
};

/// Method names understood by the native backend.
pub mod methods {
    /// Initializes the native single-account public client application.
    pub const CREATE_SINGLE_ACCOUNT_PCA: &str = "createSingleAccountPca";
    /// Reads the account currently signed in, if any.
    pub const CURRENT_ACCOUNT: &str = "currentAccount";
    /// Signs the current account out.
    pub const SIGN_OUT: &str = "signOut";
}

/// Request for creating a single-account public client application.
///
/// Only the configuration matching the active platform is consulted; the
/// other may be left unset. Supplying neither, or only the wrong one, fails
/// validation before any RPC is attempted.
#[derive(Debug, Clone, Default)]
pub struct CreateRequest {
    /// Application (client) id registered with the identity provider.
    pub client_id: String,
    /// Configuration for the Android backend.
    pub android: Option<AndroidConfig>,
    /// Configuration for the iOS backend.
    pub ios: Option<IosConfig>,
}

/// Errors from creating an [`AuthClient`].
#[derive(Debug, Error)]
pub enum CreateError {
    /// The configuration required on the active platform was missing.
    /// Raised synchronously; the call site must be fixed, retrying is useless.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// The Android configuration document could not be loaded. Also raised
    /// synchronously, before any RPC.
    #[error(transparent)]
    AssetLoad(#[from] AssetLoadError),
    /// The native backend rejected the initialization.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl From<PayloadError> for CreateError {
    fn from(error: PayloadError) -> Self {
        match error {
            PayloadError::Configuration(e) => Self::Configuration(e),
            PayloadError::AssetLoad(e) => Self::AssetLoad(e),
        }
    }
}

/// Errors from reading the current account.
#[derive(Debug, Error)]
pub enum CurrentAccountError {
    /// The native backend reported a failure.
    #[error(transparent)]
    Backend(#[from] BackendError),
    /// The backend responded but a required account field was missing.
    #[error(transparent)]
    MissingField(#[from] MissingFieldError),
    /// The backend response was not an account mapping at all.
    #[error("Unexpected currentAccount response shape: {0}")]
    Shape(#[from] serde_json::Error),
}

/// Errors from signing out.
#[derive(Debug, Error)]
pub enum SignOutError {
    /// The native backend reported a failure.
    #[error(transparent)]
    Backend(#[from] BackendError),
    /// The backend response was not the expected boolean acknowledgement.
    #[error("Unexpected signOut response shape: {0}")]
    Shape(#[from] serde_json::Error),
}

/// Facade over the platform-native single-account authentication backend.
///
/// A client is created once via `create`, which is the only
/// point where configuration is validated and the native session is
/// initialized. It then lives for the rest of the process; the native backend
/// owns the session, so there is no explicit teardown.
#[derive(Debug, Clone)]
pub struct AuthClient<C> {
    channel: C,
    client_id: String,
}

impl<C: RpcChannel> AuthClient<C> {
    /// Creates a client for the platform of the current build target.
    #[cfg(any(target_os = "android", target_os = "ios"))]
    pub async fn create(
        channel: C,
        assets: &impl AssetSource,
        request: CreateRequest,
    ) -> Result<Self, CreateError> {
        Self::create_for(Platform::current(), channel, assets, request).await
    }

    /// Creates a client for an explicit platform.
    ///
    /// `create` resolves the platform from the build target; this entry
    /// point exists so host builds can exercise both branches.
    pub async fn create_for(
        platform: Platform,
        channel: C,
        assets: &impl AssetSource,
        request: CreateRequest,
    ) -> Result<Self, CreateError> {
        // Validation is synchronous and complete before the first await, so a
        // configuration error can never race with a pending RPC.
        let payload = build_create_payload(platform, &request, assets)?;

        log::debug!("Initializing single-account PCA on {platform}");
        channel
            .invoke(methods::CREATE_SINGLE_ACCOUNT_PCA, payload)
            .await
            .map_err(BackendError::from)?;

        Ok(Self {
            channel,
            client_id: request.client_id,
        })
    }

    /// The client identity this instance was created with.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Reads the account currently signed in on the native backend.
    ///
    /// A fresh [`Account`] is constructed from every response.
    pub async fn current_account(&self) -> Result<Account, CurrentAccountError> {
        let response = self
            .channel
            .invoke(methods::CURRENT_ACCOUNT, RequestArgs::new())
            .await
            .map_err(BackendError::from)?;

        let response: AccountResponse = serde_json::from_value(response)?;
        Ok(response.try_into()?)
    }

    /// Signs the current account out.
    ///
    /// The backend's boolean is passed through verbatim: `true` means an
    /// account was signed out, `false` that there was nothing to sign out.
    pub async fn sign_out(&self) -> Result<bool, SignOutError> {
        let response = self
            .channel
            .invoke(methods::SIGN_OUT, RequestArgs::new())
            .await
            .map_err(BackendError::from)?;

        Ok(serde_json::from_value(response)?)
    }
}

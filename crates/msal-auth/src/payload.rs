//! Assembly of the platform-appropriate `createSingleAccountPca` payload.
//!
//! The two native backends expect structurally different request shapes:
//! Android wants its whole bundled configuration document under a single
//! `config` argument, while iOS wants discrete top-level fields. This module
//! isolates that asymmetry so the facade and the RPC layer stay
//! platform-agnostic.

use msal_rpc::RequestArgs;
use serde_json::Value;
use thiserror::Error;

use crate::{
    assets::AssetSource,
    client::CreateRequest,
    config::{AndroidConfig, IosConfig, PlatformConfig},
    platform::Platform,
};

/// The configuration object required on the active platform was not supplied.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("No {platform} configuration was supplied")]
pub struct ConfigurationError {
    /// The platform whose configuration was missing.
    pub platform: Platform,
}

/// The Android configuration document could not be loaded or parsed.
#[derive(Debug, Error)]
pub enum AssetLoadError {
    /// The asset at the configured path could not be read.
    #[error("Failed to read the configuration asset at {path}: {source}")]
    Unreadable {
        /// Path the asset was requested from.
        path: String,
        /// Underlying read error.
        source: std::io::Error,
    },
    /// The asset was read but is not valid JSON.
    #[error("The configuration asset at {path} is not valid JSON: {source}")]
    Malformed {
        /// Path the asset was loaded from.
        path: String,
        /// Underlying parse error.
        source: serde_json::Error,
    },
    /// The asset parsed to something other than a JSON object.
    #[error("The configuration asset at {path} must contain a JSON object")]
    NotAnObject {
        /// Path the asset was loaded from.
        path: String,
    },
}

/// Errors that can occur while assembling the creation payload. These are all
/// local precondition failures, raised synchronously before any RPC is
/// attempted.
#[derive(Debug, Error)]
pub enum PayloadError {
    /// The configuration required on the active platform was missing.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// The Android configuration document could not be loaded.
    #[error(transparent)]
    AssetLoad(#[from] AssetLoadError),
}

/// Validates that the configuration required on `platform` is present and
/// assembles the argument mapping for `createSingleAccountPca`.
pub fn build_create_payload(
    platform: Platform,
    request: &CreateRequest,
    assets: &impl AssetSource,
) -> Result<RequestArgs, PayloadError> {
    match select_config(platform, request)? {
        PlatformConfig::Android(config) => {
            Ok(build_android_payload(&request.client_id, &config, assets)?)
        }
        PlatformConfig::Ios(config) => Ok(build_ios_payload(&request.client_id, &config)),
    }
}

fn select_config(
    platform: Platform,
    request: &CreateRequest,
) -> Result<PlatformConfig, ConfigurationError> {
    let config = match platform {
        Platform::Android => request.android.clone().map(PlatformConfig::Android),
        Platform::Ios => request.ios.clone().map(PlatformConfig::Ios),
    };
    config.ok_or(ConfigurationError { platform })
}

/// Android sends the whole bundled configuration document, with the client
/// identity merged in, nested under a single `config` argument. The merged
/// keys use the snake_case names the native backend reads from the document
/// and overwrite any pre-existing keys of the same name.
fn build_android_payload(
    client_id: &str,
    config: &AndroidConfig,
    assets: &impl AssetSource,
) -> Result<RequestArgs, AssetLoadError> {
    let path = &config.config_file_path;
    let text = assets
        .load_text(path)
        .map_err(|source| AssetLoadError::Unreadable {
            path: path.clone(),
            source,
        })?;
    let document: Value =
        serde_json::from_str(&text).map_err(|source| AssetLoadError::Malformed {
            path: path.clone(),
            source,
        })?;
    let Value::Object(mut document) = document else {
        return Err(AssetLoadError::NotAnObject { path: path.clone() });
    };

    document.insert("client_id".into(), Value::String(client_id.to_owned()));
    document.insert(
        "redirect_uri".into(),
        Value::String(config.redirect_uri.clone()),
    );

    let mut args = RequestArgs::new();
    args.insert("config".into(), Value::Object(document));
    Ok(args)
}

/// iOS sends discrete top-level fields, substituting the documented defaults
/// for anything unset. An absent authority sends no key at all; the backend
/// applies its own default authority.
fn build_ios_payload(client_id: &str, config: &IosConfig) -> RequestArgs {
    let mut args = RequestArgs::new();
    args.insert("clientId".into(), Value::String(client_id.to_owned()));
    if let Some(authority) = &config.authority {
        args.insert("authority".into(), Value::String(authority.clone()));
    }
    args.insert(
        "broker".into(),
        Value::String(config.broker.as_str().to_owned()),
    );
    args.insert(
        "authorityType".into(),
        Value::String(config.authority_type.as_str().to_owned()),
    );
    args
}

use serde::{Deserialize, Serialize};

/// Configuration required by the Android MSAL backend.
///
/// Android expects a bundled JSON configuration document rather than discrete
/// fields: `config_file_path` points at that asset and `redirect_uri` is
/// merged into the loaded document when the request payload is assembled.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AndroidConfig {
    /// Path to the bundled MSAL configuration document.
    pub config_file_path: String,
    /// Redirect URI registered for the application.
    pub redirect_uri: String,
}

/// Configuration accepted by the iOS MSAL backend.
///
/// Every field is optional; the documented defaults are substituted when the
/// payload is assembled.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct IosConfig {
    /// Authority the client authenticates against. When unset, no authority
    /// is sent and the backend applies its own default.
    pub authority: Option<String>,
    /// Broker used to satisfy authentication requests.
    pub broker: Broker,
    /// Kind of authority to authenticate against.
    pub authority_type: AuthorityType,
}

/// OS- or app-level component brokering authentication on behalf of the app.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum Broker {
    /// Broker through the Microsoft Authenticator app.
    #[default]
    MsAuthenticator,
    /// Let the backend pick its default brokering behavior.
    Default,
}

impl Broker {
    /// Wire representation sent to the native backend.
    pub fn as_str(self) -> &'static str {
        match self {
            Broker::MsAuthenticator => "msAuthenticator",
            Broker::Default => "default",
        }
    }
}

/// Kind of identity-provider authority to authenticate against.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum AuthorityType {
    /// Entra ID (Azure Active Directory).
    #[default]
    Aad,
    /// Azure AD B2C.
    B2c,
    /// Active Directory Federation Services.
    Adfs,
}

impl AuthorityType {
    /// Wire representation sent to the native backend.
    pub fn as_str(self) -> &'static str {
        match self {
            AuthorityType::Aad => "aad",
            AuthorityType::B2c => "b2c",
            AuthorityType::Adfs => "adfs",
        }
    }
}

/// The platform-specific configuration in effect for a request, produced by
/// validating the caller-supplied options against the active platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformConfig {
    /// Configuration for the Android backend.
    Android(AndroidConfig),
    /// Configuration for the iOS backend.
    Ios(IosConfig),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_backend_constants() {
        let config = IosConfig::default();
        assert_eq!(config.authority, None);
        assert_eq!(config.broker.as_str(), "msAuthenticator");
        assert_eq!(config.authority_type.as_str(), "aad");
    }

    #[test]
    fn ios_config_deserializes_with_defaults() {
        let config: IosConfig = serde_json::from_str(r#"{"authority": "https://example"}"#)
            .expect("config should deserialize");
        assert_eq!(config.authority.as_deref(), Some("https://example"));
        assert_eq!(config.broker, Broker::MsAuthenticator);
        assert_eq!(config.authority_type, AuthorityType::Aad);
    }

    #[test]
    fn wire_names_use_camel_case() {
        let config: IosConfig = serde_json::from_str(
            r#"{"broker": "default", "authorityType": "b2c"}"#,
        )
        .expect("config should deserialize");
        assert_eq!(config.broker, Broker::Default);
        assert_eq!(config.authority_type, AuthorityType::B2c);
    }
}

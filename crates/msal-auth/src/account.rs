use serde::Deserialize;

use crate::{error::MissingFieldError, require};

/// The account currently signed in on the native backend.
///
/// A fresh value is constructed from every `currentAccount` response; there
/// is no caching and no identity beyond field equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// Backend identifier for the account.
    pub id: String,
    /// Account username (typically the UPN).
    pub username: String,
    /// Display name.
    pub name: String,
}

/// Wire shape of a `currentAccount` response. Every field is optional so a
/// short response deserializes and the missing field can be named precisely.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AccountResponse {
    id: Option<String>,
    username: Option<String>,
    name: Option<String>,
}

impl TryFrom<AccountResponse> for Account {
    type Error = MissingFieldError;

    fn try_from(response: AccountResponse) -> Result<Self, Self::Error> {
        Ok(Account {
            id: require!(response.id),
            username: require!(response.username),
            name: require!(response.name),
        })
    }
}

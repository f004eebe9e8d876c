//! Credential handling for the two supported authentication modes.
//!
//! The catalog API accepts either an API key passed as a query parameter
//! (read-only access to public data, scoped by an explicit channel id) or an
//! OAuth 2.0 bearer token (access to the authenticated user's own channel).
//! Exactly one mode is active per client; [`Credential`] is the sum type that
//! makes the retriever agnostic to which one.

use crate::error::{Error, Result};

/// An identity credential for the catalog API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// API key authentication, scoped to an explicitly named channel.
    ApiKey {
        /// The API key, sent as the `key` query parameter.
        key: String,
        /// The channel whose resources are listed.
        channel_id: String,
    },
    /// OAuth bearer-token authentication.
    ///
    /// Listings are scoped to the authenticated user's own channel
    /// (`mine=true`); the token lifecycle (acquisition, refresh, revocation)
    /// is the caller's concern.
    OAuth {
        /// The access token, sent as an `Authorization: Bearer` header.
        token: String,
    },
}

impl Credential {
    /// Builds a credential from whatever material the caller has.
    ///
    /// A token wins over a key when both are present, since it carries its
    /// own channel scope. A key is only usable together with a channel id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Authentication`] when no usable combination was
    /// supplied. This is checked before any network activity.
    pub fn resolve(
        api_key: Option<String>,
        channel_id: Option<String>,
        access_token: Option<String>,
    ) -> Result<Self> {
        if let Some(token) = access_token {
            return Ok(Self::OAuth { token });
        }
        match (api_key, channel_id) {
            (Some(key), Some(channel_id)) => Ok(Self::ApiKey { key, channel_id }),
            (Some(_), None) => Err(Error::Authentication(
                "a channel id is required when using an API key".to_string(),
            )),
            (None, _) => Err(Error::Authentication(
                "an API key or an OAuth access token is required".to_string(),
            )),
        }
    }

    /// Applies this credential to an outgoing API request.
    pub(crate) fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self {
            Self::ApiKey { key, .. } => request.query(&[("key", key.as_str())]),
            Self::OAuth { token } => request.header("Authorization", format!("Bearer {token}")),
        }
    }

    /// Query parameter selecting whose resources a list call returns.
    ///
    /// `channelId=<id>` for key mode, `mine=true` for token mode.
    pub(crate) fn owner_param(&self) -> (&'static str, &str) {
        match self {
            Self::ApiKey { channel_id, .. } => ("channelId", channel_id.as_str()),
            Self::OAuth { .. } => ("mine", "true"),
        }
    }

    /// Query parameter selecting the channel for a `channels.list` call.
    ///
    /// Same scoping as [`Self::owner_param`], but the key-mode parameter is
    /// named `id` on that endpoint.
    pub(crate) fn channel_param(&self) -> (&'static str, &str) {
        match self {
            Self::ApiKey { channel_id, .. } => ("id", channel_id.as_str()),
            Self::OAuth { .. } => ("mine", "true"),
        }
    }

    /// Human-readable description of the channel this credential points at,
    /// used in error messages.
    pub(crate) fn channel_description(&self) -> String {
        match self {
            Self::ApiKey { channel_id, .. } => channel_id.clone(),
            Self::OAuth { .. } => "the authenticated user's channel".to_string(),
        }
    }
}

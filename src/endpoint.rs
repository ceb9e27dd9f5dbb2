//! OAuth endpoint families recognized by the mock transport.

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// The four OAuth operations the login SDK performs against its identity
/// provider. A mock session is scripted with one family at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointFamily {
    /// Authorization-code exchange at the token endpoint
    AuthorizationCode,
    /// Refresh-token grant at the token endpoint
    RefreshToken,
    /// ID token introspection
    TokenInfo,
    /// OIDC discovery document
    Configuration,
}

impl EndpointFamily {
    /// Substring this family's request URLs carry. Used as a secondary
    /// classification hint when the session has no family scripted.
    #[must_use]
    pub fn url_hint(self) -> &'static str {
        match self {
            Self::AuthorizationCode => "/oauth2/token",
            Self::RefreshToken => "refresh_token",
            Self::TokenInfo => "/token_info",
            Self::Configuration => ".well-known/openid-configuration",
        }
    }

    /// Classify a request URL by substring match.
    ///
    /// Refresh-token exchanges hit the same token endpoint as code
    /// exchanges, so the `refresh_token` grant type in the query string is
    /// checked before falling back to the token-endpoint path.
    #[must_use]
    pub fn from_url(url: &Url) -> Option<Self> {
        let target = url.as_str();
        if target.contains(Self::Configuration.url_hint()) {
            Some(Self::Configuration)
        } else if target.contains(Self::TokenInfo.url_hint()) {
            Some(Self::TokenInfo)
        } else if target.contains(Self::RefreshToken.url_hint()) {
            Some(Self::RefreshToken)
        } else if target.contains(Self::AuthorizationCode.url_hint()) {
            Some(Self::AuthorizationCode)
        } else {
            None
        }
    }
}

impl fmt::Display for EndpointFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AuthorizationCode => "authorization_code",
            Self::RefreshToken => "refresh_token",
            Self::TokenInfo => "token_info",
            Self::Configuration => "configuration",
        };
        write!(f, "{name}")
    }
}

//! Value objects shared across the testkit.

use serde::{Deserialize, Serialize};
use url::Url;

/// Which canned result the mock session produces for its scripted
/// endpoint family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeVariant {
    /// Deliver the family's valid payload
    #[default]
    Valid,
    /// Deliver the family's expired payload
    Expired,
    /// Deliver a simulated transport error, no payload
    Error,
}

/// The response leg of the completion triple: the little the login SDK
/// reads off an HTTP response before parsing the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMeta {
    pub status: u16,
    pub url: Url,
}

impl ResponseMeta {
    /// A 200 response echoing the request URL.
    #[must_use]
    pub fn ok(url: Url) -> Self {
        Self { status: 200, url }
    }
}

/// Outgoing request as the mock session sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRequest {
    pub method: String,
    pub url: Url,
}

impl TokenRequest {
    #[must_use]
    pub fn get(url: Url) -> Self {
        Self {
            method: "GET".to_string(),
            url,
        }
    }

    #[must_use]
    pub fn post(url: Url) -> Self {
        Self {
            method: "POST".to_string(),
            url,
        }
    }
}

/// The login page the production flow asks its presentation host to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginView {
    pub authorization_url: Url,
}

impl LoginView {
    #[must_use]
    pub fn new(authorization_url: Url) -> Self {
        Self { authorization_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_meta_ok_is_200() {
        let url = Url::parse("https://idp.example.com/oauth2/token").unwrap();
        let meta = ResponseMeta::ok(url.clone());
        assert_eq!(meta.status, 200);
        assert_eq!(meta.url, url);
    }

    #[test]
    fn test_outcome_variant_defaults_to_valid() {
        assert_eq!(OutcomeVariant::default(), OutcomeVariant::Valid);
    }
}

//! Canned response bodies, one immutable bundle per endpoint family.
//!
//! The literals mirror what the identity provider actually returns for
//! each endpoint: token grants with `expires_in`, token-info claims with
//! `exp`/`nonce`, and the OIDC discovery document. Expired variants differ
//! only in the fields the login SDK checks for freshness.

use crate::endpoint::EndpointFamily;

const AUTHORIZATION_CODE_VALID: &str = r#"{"access_token":"test_access_token","token_type":"Bearer","expires_in":600,"id_token":"test_id_token","refresh_token":"test_refresh_token"}"#;
const AUTHORIZATION_CODE_EXPIRED: &str = r#"{"access_token":"test_access_token","token_type":"Bearer","expires_in":0,"id_token":"test_id_token","refresh_token":"test_refresh_token"}"#;

const REFRESH_TOKEN_VALID: &str = r#"{"access_token":"rotated_access_token","token_type":"Bearer","expires_in":600,"id_token":"rotated_id_token","refresh_token":"rotated_refresh_token"}"#;
const REFRESH_TOKEN_EXPIRED: &str = r#"{"access_token":"rotated_access_token","token_type":"Bearer","expires_in":0,"id_token":"rotated_id_token","refresh_token":"rotated_refresh_token"}"#;

const TOKEN_INFO_VALID: &str = r#"{"aud":"test_client_id","exp":2541371242,"iat":1541112042,"iss":"https://idp.example.com","jti":"test_token_id","nbf":1541112042,"sub":"test_user_id","nonce":"test_nonce"}"#;
const TOKEN_INFO_EXPIRED: &str = r#"{"aud":"test_client_id","exp":1541112042,"iat":1541112042,"iss":"https://idp.example.com","jti":"test_token_id","nbf":1541112042,"sub":"test_user_id","nonce":"test_nonce"}"#;

const CONFIGURATION_VALID: &str = r#"{"issuer":"https://idp.example.com","authorization_endpoint":"https://idp.example.com/oauth2/authorize","token_endpoint":"https://idp.example.com/oauth2/token","token_info_endpoint":"https://idp.example.com/oauth2/id_tokens/token_info","response_types_supported":["code","token"],"grant_types_supported":["authorization_code","refresh_token"],"id_token_signing_alg_values_supported":["RS256"]}"#;
const CONFIGURATION_EXPIRED: &str = r#"{"issuer":"https://idp.example.com","authorization_endpoint":"","token_endpoint":"","token_info_endpoint":"","response_types_supported":[],"grant_types_supported":[],"id_token_signing_alg_values_supported":[]}"#;

/// Immutable canned payload for one endpoint family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseBundle {
    family: EndpointFamily,
    body: String,
    nonce: Option<String>,
}

impl ResponseBundle {
    /// The family's valid payload.
    #[must_use]
    pub fn valid(family: EndpointFamily) -> Self {
        Self {
            family,
            body: literal(family, false).to_string(),
            nonce: None,
        }
    }

    /// The family's expired payload.
    #[must_use]
    pub fn expired(family: EndpointFamily) -> Self {
        Self {
            family,
            body: literal(family, true).to_string(),
            nonce: None,
        }
    }

    /// Splice a correlation nonce into the body so it round-trips back to
    /// the test. Only token-info payloads carry a `nonce` field; any other
    /// body is returned unchanged.
    #[must_use]
    pub fn with_nonce(mut self, nonce: &str) -> Self {
        let Ok(serde_json::Value::Object(mut claims)) =
            serde_json::from_str::<serde_json::Value>(&self.body)
        else {
            return self;
        };
        if !claims.contains_key("nonce") {
            return self;
        }
        claims.insert(
            "nonce".to_string(),
            serde_json::Value::String(nonce.to_string()),
        );
        if let Ok(body) = serde_json::to_string(&claims) {
            self.body = body;
            self.nonce = Some(nonce.to_string());
        }
        self
    }

    #[must_use]
    pub fn family(&self) -> EndpointFamily {
        self.family
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Correlation value spliced into the body, if any.
    #[must_use]
    pub fn nonce(&self) -> Option<&str> {
        self.nonce.as_deref()
    }
}

fn literal(family: EndpointFamily, expired: bool) -> &'static str {
    match (family, expired) {
        (EndpointFamily::AuthorizationCode, false) => AUTHORIZATION_CODE_VALID,
        (EndpointFamily::AuthorizationCode, true) => AUTHORIZATION_CODE_EXPIRED,
        (EndpointFamily::RefreshToken, false) => REFRESH_TOKEN_VALID,
        (EndpointFamily::RefreshToken, true) => REFRESH_TOKEN_EXPIRED,
        (EndpointFamily::TokenInfo, false) => TOKEN_INFO_VALID,
        (EndpointFamily::TokenInfo, true) => TOKEN_INFO_EXPIRED,
        (EndpointFamily::Configuration, false) => CONFIGURATION_VALID,
        (EndpointFamily::Configuration, true) => CONFIGURATION_EXPIRED,
    }
}

//! Mock network session: classifies requests and scripts their outcomes.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use log::{debug, warn};
use url::Url;

use crate::endpoint::EndpointFamily;
use crate::error::SimulatedTransportError;
use crate::models::{OutcomeVariant, ResponseMeta, TokenRequest};
use crate::responses::ResponseBundle;
use crate::task::{Delivery, MockDataTask};
use crate::transport::{DataSession, DataTask, TaskCompletion};

/// Scripted behavior for a [`MockHttpSession`].
///
/// No validation is applied: an odd combination (say, a correlation value
/// with a configuration endpoint) is a test-authoring concern, not a
/// runtime fault.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    family: Option<EndpointFamily>,
    outcome: OutcomeVariant,
    correlation: Option<String>,
    error_table: HashMap<EndpointFamily, SimulatedTransportError>,
}

impl SessionConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Endpoint family the next requests should be treated as targeting.
    #[must_use]
    pub fn family(mut self, family: EndpointFamily) -> Self {
        self.family = Some(family);
        self
    }

    /// Which canned result to produce.
    #[must_use]
    pub fn outcome(mut self, outcome: OutcomeVariant) -> Self {
        self.outcome = outcome;
        self
    }

    /// Correlation value (nonce) to splice into token-info payloads.
    #[must_use]
    pub fn correlation(mut self, value: &str) -> Self {
        self.correlation = Some(value.to_string());
        self
    }

    /// Script a per-endpoint error, used when the outcome is
    /// [`OutcomeVariant::Error`]. Endpoints without an entry fall back to
    /// [`SimulatedTransportError::Generic`].
    #[must_use]
    pub fn error_for(mut self, family: EndpointFamily, error: SimulatedTransportError) -> Self {
        self.error_table.insert(family, error);
        self
    }
}

/// Stand-in for the production HTTP session.
///
/// Holds a [`SessionConfig`] and stamps out single-use [`MockDataTask`]s
/// whose outcome is fixed at creation time. Stateless across calls apart
/// from the script and the record of last-seen URLs.
#[derive(Default)]
pub struct MockHttpSession {
    config: Mutex<SessionConfig>,
    seen: Mutex<HashMap<EndpointFamily, Url>>,
}

impl MockHttpSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session pre-scripted with `config`.
    #[must_use]
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            config: Mutex::new(config),
            seen: Mutex::new(HashMap::new()),
        }
    }

    /// Replace the session script. Pure configuration mutation.
    pub fn configure(&self, config: SessionConfig) {
        *self.config.lock().unwrap_or_else(PoisonError::into_inner) = config;
    }

    /// Last request URL classified as `family`, for flow assertions.
    #[must_use]
    pub fn last_url(&self, family: EndpointFamily) -> Option<Url> {
        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&family)
            .cloned()
    }

    /// Whether any request was classified as `family`.
    #[must_use]
    pub fn was_called(&self, family: EndpointFamily) -> bool {
        self.last_url(family).is_some()
    }

    /// Build a task whose outcome is computed here, once. No I/O happens;
    /// the scripted endpoint family drives classification, with the
    /// request URL as a secondary hint when no family is scripted.
    pub fn create_task(
        &self,
        request: &TokenRequest,
        completion: TaskCompletion,
    ) -> Arc<MockDataTask> {
        let config = self
            .config
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        let Some(family) = config
            .family
            .or_else(|| EndpointFamily::from_url(&request.url))
        else {
            warn!(
                "no endpoint family scripted and none recognizable from {}",
                request.url
            );
            return Arc::new(MockDataTask::new(
                Delivery::Failure(SimulatedTransportError::Generic),
                completion,
            ));
        };

        self.seen
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(family, request.url.clone());
        debug!(
            "classified {} {} as {family} ({:?})",
            request.method, request.url, config.outcome
        );

        let delivery = match config.outcome {
            OutcomeVariant::Error => {
                let err = config
                    .error_table
                    .get(&family)
                    .cloned()
                    .unwrap_or(SimulatedTransportError::Generic);
                Delivery::Failure(err)
            }
            variant => {
                let mut bundle = if variant == OutcomeVariant::Expired {
                    ResponseBundle::expired(family)
                } else {
                    ResponseBundle::valid(family)
                };
                if family == EndpointFamily::TokenInfo {
                    if let Some(nonce) = config.correlation.as_deref() {
                        bundle = bundle.with_nonce(nonce);
                    }
                }
                Delivery::Payload {
                    bundle,
                    meta: ResponseMeta::ok(request.url.clone()),
                }
            }
        };

        Arc::new(MockDataTask::new(delivery, completion))
    }
}

impl DataSession for MockHttpSession {
    fn data_task(&self, request: &TokenRequest, completion: TaskCompletion) -> Arc<dyn DataTask> {
        self.create_task(request, completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> TaskCompletion {
        Box::new(|_, _, _| {})
    }

    fn token_url() -> Url {
        Url::parse("https://idp.example.com/oauth2/token?grant_type=authorization_code").unwrap()
    }

    #[test]
    fn test_scripted_family_wins_over_url_hint() {
        // URL says authorization-code; the script says token-info
        let session = MockHttpSession::with_config(
            SessionConfig::new().family(EndpointFamily::TokenInfo),
        );
        let task = session.create_task(&TokenRequest::post(token_url()), noop());
        assert_eq!(
            task.bundle().map(ResponseBundle::family),
            Some(EndpointFamily::TokenInfo)
        );
    }

    #[test]
    fn test_url_hint_fills_in_when_no_family_scripted() {
        let session = MockHttpSession::new();
        let task = session.create_task(&TokenRequest::post(token_url()), noop());
        assert_eq!(
            task.bundle().map(ResponseBundle::family),
            Some(EndpointFamily::AuthorizationCode)
        );
    }

    #[test]
    fn test_unclassifiable_request_gets_generic_error() {
        let session = MockHttpSession::new();
        let url = Url::parse("https://api.example.com/v1/profile").unwrap();
        let task = session.create_task(&TokenRequest::get(url), noop());
        assert!(task.bundle().is_none());
        assert_eq!(
            task.scripted_error(),
            Some(&SimulatedTransportError::Generic)
        );
    }

    #[test]
    fn test_error_table_lookup_and_fallback() {
        let session = MockHttpSession::with_config(
            SessionConfig::new()
                .family(EndpointFamily::RefreshToken)
                .outcome(OutcomeVariant::Error)
                .error_for(
                    EndpointFamily::RefreshToken,
                    SimulatedTransportError::endpoint(EndpointFamily::RefreshToken),
                ),
        );
        let task = session.create_task(&TokenRequest::post(token_url()), noop());
        assert_eq!(
            task.scripted_error(),
            Some(&SimulatedTransportError::endpoint(
                EndpointFamily::RefreshToken
            ))
        );

        // no table entry for configuration: generic fallback
        session.configure(
            SessionConfig::new()
                .family(EndpointFamily::Configuration)
                .outcome(OutcomeVariant::Error),
        );
        let task = session.create_task(&TokenRequest::get(token_url()), noop());
        assert_eq!(
            task.scripted_error(),
            Some(&SimulatedTransportError::Generic)
        );
    }

    #[test]
    fn test_correlation_value_reaches_token_info_bundle() {
        let session = MockHttpSession::with_config(
            SessionConfig::new()
                .family(EndpointFamily::TokenInfo)
                .correlation("abc123"),
        );
        let task = session.create_task(&TokenRequest::get(token_url()), noop());
        assert_eq!(task.bundle().and_then(ResponseBundle::nonce), Some("abc123"));
    }

    #[test]
    fn test_missing_correlation_degrades_to_absent_nonce() {
        let session = MockHttpSession::with_config(
            SessionConfig::new().family(EndpointFamily::TokenInfo),
        );
        let task = session.create_task(&TokenRequest::get(token_url()), noop());
        let bundle = task.bundle().unwrap();
        assert_eq!(bundle.nonce(), None);
    }

    #[test]
    fn test_session_records_last_seen_urls() {
        let session = MockHttpSession::with_config(
            SessionConfig::new().family(EndpointFamily::AuthorizationCode),
        );
        assert!(!session.was_called(EndpointFamily::AuthorizationCode));

        let _task = session.create_task(&TokenRequest::post(token_url()), noop());
        assert!(session.was_called(EndpointFamily::AuthorizationCode));
        assert_eq!(
            session.last_url(EndpointFamily::AuthorizationCode),
            Some(token_url())
        );
        assert!(!session.was_called(EndpointFamily::RefreshToken));
    }
}

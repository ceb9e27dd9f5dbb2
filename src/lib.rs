#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Test doubles for a mobile OAuth login SDK.
//!
//! Two collaborating fakes let unit tests drive the full
//! authorization-code / refresh-token / token-info / configuration flow
//! without a server:
//!
//! - [`MockHttpSession`] stands in for the production HTTP session. Tests
//!   script it with an endpoint family and an outcome variant; the code
//!   under test issues requests through the [`DataSession`] seam and gets
//!   canned payloads (or simulated errors) back through the usual
//!   `(data, response, error)` completion callback.
//! - [`MockLoginPresenter`] stands in for the modal-presentation host and
//!   records the last login view it was asked to present.
//!
//! ```rust
//! use login_testkit::{
//!     DataSession, DataTask, EndpointFamily, MockHttpSession, OutcomeVariant, SessionConfig,
//!     TokenRequest,
//! };
//! use url::Url;
//!
//! # async fn demo() {
//! let session = MockHttpSession::new();
//! session.configure(
//!     SessionConfig::new()
//!         .family(EndpointFamily::AuthorizationCode)
//!         .outcome(OutcomeVariant::Valid),
//! );
//!
//! let url = Url::parse("https://idp.example.com/oauth2/token?grant_type=authorization_code")
//!     .unwrap();
//! let task = session.data_task(
//!     &TokenRequest::post(url),
//!     Box::new(|data, response, error| {
//!         assert!(data.is_some());
//!         assert!(response.is_some());
//!         assert!(error.is_none());
//!     }),
//! );
//! task.start();
//! # }
//! ```

/// Version of the testkit crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod endpoint;
pub mod error;
pub mod models;
pub mod presenter;
pub mod responses;
pub mod session;
pub mod task;
pub mod transport;

/// Re-export commonly used items
pub use endpoint::EndpointFamily;
pub use error::SimulatedTransportError;
pub use models::{LoginView, OutcomeVariant, ResponseMeta, TokenRequest};
pub use presenter::{MockLoginPresenter, PresentCompletion, PresentationSurface};
pub use responses::ResponseBundle;
pub use session::{MockHttpSession, SessionConfig};
pub use task::MockDataTask;
pub use transport::{DataSession, DataTask, TaskCompletion};

//! The single error kind the mock transport can produce.

use crate::endpoint::EndpointFamily;
use thiserror::Error;

/// Synthetic transport error handed to a task completion.
///
/// Never raised through a `Result`: it rides the completion callback's
/// error leg, exactly like a real transport error, so the code under test
/// exercises its normal error-propagation path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulatedTransportError {
    /// Scripted per-endpoint failure from the session's error table.
    #[error("simulated {family} failure (status {status})")]
    Endpoint {
        family: EndpointFamily,
        status: u16,
    },

    /// Fallback when the error table has no entry for the endpoint.
    #[error("simulated transport failure")]
    Generic,
}

impl SimulatedTransportError {
    /// Per-endpoint error with the customary 400 status.
    #[must_use]
    pub fn endpoint(family: EndpointFamily) -> Self {
        Self::Endpoint {
            family,
            status: 400,
        }
    }
}

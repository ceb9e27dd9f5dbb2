//! Transport-shaped seam the login SDK calls through.
//!
//! Production code depends only on these traits, so the mock session slots
//! in without a test-versus-production branch anywhere in the flow.

use std::sync::Arc;

use crate::error::SimulatedTransportError;
use crate::models::{ResponseMeta, TokenRequest};

/// Completion callback with a real transport's `(data, response, error)`
/// shape. At delivery exactly one of the body and the error is present.
pub type TaskCompletion =
    Box<dyn FnOnce(Option<Vec<u8>>, Option<ResponseMeta>, Option<SimulatedTransportError>) + Send>;

/// An in-flight request handle.
pub trait DataTask: Send + Sync {
    /// Begin the request. Delivery is asynchronous; the call itself never
    /// blocks and never invokes the completion inline.
    fn start(&self);

    /// Accepted for interface parity with a real transport. Outcomes are
    /// computed up front, so cancelling a mock task has no effect.
    fn cancel(&self);
}

/// Minimal session surface the login SDK uses to issue requests.
pub trait DataSession: Send + Sync {
    /// Create a task for `request`, to be driven by the caller.
    fn data_task(&self, request: &TokenRequest, completion: TaskCompletion) -> Arc<dyn DataTask>;
}

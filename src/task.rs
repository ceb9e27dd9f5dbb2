//! Fake in-flight request task.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use log::{debug, warn};

use crate::error::SimulatedTransportError;
use crate::models::ResponseMeta;
use crate::responses::ResponseBundle;
use crate::transport::{DataTask, TaskCompletion};

/// What a task will hand its completion. Constructing one of these is the
/// only way to set an outcome, so a delivery always carries exactly one of
/// a payload or an error.
#[derive(Debug, Clone)]
pub(crate) enum Delivery {
    Payload {
        bundle: ResponseBundle,
        meta: ResponseMeta,
    },
    Failure(SimulatedTransportError),
}

/// Mock counterpart of a transport's data task.
///
/// The outcome is computed by the session at creation time; [`start`]
/// only schedules delivery. Each task is single-use.
///
/// [`start`]: DataTask::start
pub struct MockDataTask {
    delivery: Delivery,
    completion: Mutex<Option<TaskCompletion>>,
    started: AtomicBool,
}

impl MockDataTask {
    pub(crate) fn new(delivery: Delivery, completion: TaskCompletion) -> Self {
        Self {
            delivery,
            completion: Mutex::new(Some(completion)),
            started: AtomicBool::new(false),
        }
    }

    /// The bundle this task will deliver, if it is not scripted to fail.
    #[must_use]
    pub fn bundle(&self) -> Option<&ResponseBundle> {
        match &self.delivery {
            Delivery::Payload { bundle, .. } => Some(bundle),
            Delivery::Failure(_) => None,
        }
    }

    /// The error this task will deliver, if it is scripted to fail.
    #[must_use]
    pub fn scripted_error(&self) -> Option<&SimulatedTransportError> {
        match &self.delivery {
            Delivery::Payload { .. } => None,
            Delivery::Failure(err) => Some(err),
        }
    }

    /// Whether [`start`] has been called.
    ///
    /// [`start`]: DataTask::start
    #[must_use]
    pub fn started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }
}

impl DataTask for MockDataTask {
    /// Deliver the precomputed outcome to the completion, at most once.
    ///
    /// Delivery happens on the next executor turn, never inline, so the
    /// caller observes the same ordering a real transport would give it.
    /// A second `start` is a constant no-op.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    fn start(&self) {
        if self.started.swap(true, Ordering::SeqCst) {
            warn!("start() called on an already started task; ignoring");
            return;
        }
        let completion = self
            .completion
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        let Some(completion) = completion else {
            return;
        };
        let delivery = self.delivery.clone();
        tokio::spawn(async move {
            match delivery {
                Delivery::Payload { bundle, meta } => {
                    debug!(
                        "delivering {} payload ({} bytes)",
                        bundle.family(),
                        bundle.body().len()
                    );
                    completion(Some(bundle.body().as_bytes().to_vec()), Some(meta), None);
                }
                Delivery::Failure(err) => {
                    debug!("delivering simulated error: {err}");
                    completion(None, None, Some(err));
                }
            }
        });
    }

    fn cancel(&self) {
        debug!("cancel() on a mock task is a no-op");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::EndpointFamily;
    use url::Url;

    fn payload_task(completion: TaskCompletion) -> MockDataTask {
        let url = Url::parse("https://idp.example.com/oauth2/token").unwrap();
        MockDataTask::new(
            Delivery::Payload {
                bundle: ResponseBundle::valid(EndpointFamily::AuthorizationCode),
                meta: ResponseMeta::ok(url),
            },
            completion,
        )
    }

    #[tokio::test]
    async fn test_start_is_not_inline() {
        let (tx, rx) = tokio::sync::oneshot::channel();
        let task = payload_task(Box::new(move |data, _, _| {
            let _ = tx.send(data);
        }));

        task.start();
        // not delivered synchronously; the channel resolves on a later turn
        let data = rx.await.unwrap();
        assert!(data.is_some());
        assert!(task.started());
    }

    #[tokio::test]
    async fn test_second_start_is_a_noop() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let task = payload_task(Box::new(move |_, _, _| {
            let _ = tx.send(());
        }));

        task.start();
        task.start();
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;

        assert!(rx.try_recv().is_ok(), "first start must deliver");
        assert!(rx.try_recv().is_err(), "second start must not re-deliver");
    }

    #[tokio::test]
    async fn test_cancel_does_not_suppress_delivery() {
        let (tx, rx) = tokio::sync::oneshot::channel();
        let task = payload_task(Box::new(move |data, _, _| {
            let _ = tx.send(data);
        }));

        task.cancel();
        task.start();
        assert!(rx.await.unwrap().is_some());
    }

    #[test]
    fn test_accessors_reflect_the_scripted_outcome() {
        let task = payload_task(Box::new(|_, _, _| {}));
        assert!(task.bundle().is_some());
        assert!(task.scripted_error().is_none());
        assert!(!task.started());

        let failing = MockDataTask::new(
            Delivery::Failure(SimulatedTransportError::Generic),
            Box::new(|_, _, _| {}),
        );
        assert!(failing.bundle().is_none());
        assert_eq!(
            failing.scripted_error(),
            Some(&SimulatedTransportError::Generic)
        );
    }
}

//! Fake modal-presentation host for the login flow.

use std::sync::{Mutex, PoisonError};

use crate::models::LoginView;

/// Completion handed to `present`, mirroring a UI host's optional
/// presentation callback.
pub type PresentCompletion = Box<dyn FnOnce() + Send>;

/// Presentation surface the production login flow drives.
pub trait PresentationSurface: Send + Sync {
    /// Present `view` modally. `completion` fires when presentation
    /// finishes (on the mock it is recorded, never invoked).
    fn present(&self, view: LoginView, animated: bool, completion: Option<PresentCompletion>);
}

#[derive(Default)]
struct Recorded {
    view: Option<LoginView>,
    animated: bool,
    completion: Option<PresentCompletion>,
}

/// Records the last presented login view for later assertion.
/// Synchronous; nothing is invoked and no suspension occurs.
#[derive(Default)]
pub struct MockLoginPresenter {
    recorded: Mutex<Recorded>,
}

impl MockLoginPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The view most recently handed to `present`, if any.
    #[must_use]
    pub fn presented_view(&self) -> Option<LoginView> {
        self.recorded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .view
            .clone()
    }

    /// Animated flag from the last `present` call.
    #[must_use]
    pub fn presented_animated(&self) -> bool {
        self.recorded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .animated
    }

    /// Whether the last `present` call supplied a completion.
    #[must_use]
    pub fn has_completion(&self) -> bool {
        self.recorded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .completion
            .is_some()
    }

    /// Take the recorded completion so a test can drive it by hand.
    pub fn take_completion(&self) -> Option<PresentCompletion> {
        self.recorded
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .completion
            .take()
    }
}

impl PresentationSurface for MockLoginPresenter {
    fn present(&self, view: LoginView, animated: bool, completion: Option<PresentCompletion>) {
        let mut recorded = self.recorded.lock().unwrap_or_else(PoisonError::into_inner);
        recorded.view = Some(view);
        recorded.animated = animated;
        recorded.completion = completion;
    }
}

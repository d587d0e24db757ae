//! Single-value state store.

use std::sync::{Arc, PoisonError, RwLock};

use crate::action::Action;
use crate::error::ValidationError;
use crate::traits::HostHandle;

/// Holds one piece of application state.
///
/// Cloning a `StateStore` yields another handle to the same value. The value
/// is only ever changed through `replace`; readers get an `Arc` snapshot, so
/// an unchanged value keeps its pointer identity.
pub struct StateStore<S> {
    current: Arc<RwLock<Arc<S>>>,
}

impl<S> Clone for StateStore<S> {
    fn clone(&self) -> Self {
        Self {
            current: Arc::clone(&self.current),
        }
    }
}

impl<S> StateStore<S> {
    pub fn new(initial: S) -> Self {
        Self::from_arc(Arc::new(initial))
    }

    /// Create a store, treating `None` as a missing initial state.
    pub fn create(initial: Option<S>) -> Result<Self, ValidationError> {
        initial
            .map(Self::new)
            .ok_or(ValidationError::MissingInitialState)
    }

    fn from_arc(initial: Arc<S>) -> Self {
        Self {
            current: Arc::new(RwLock::new(initial)),
        }
    }

    pub fn read(&self) -> Arc<S> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Overwrite the current value. No merge, no diffing.
    pub fn replace(&self, next: S) -> Arc<S> {
        self.replace_arc(Arc::new(next))
    }

    pub(crate) fn replace_arc(&self, next: Arc<S>) -> Arc<S> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::clone(&next);
        next
    }
}

impl<S: Send + Sync + 'static> StateStore<S> {
    /// Turn `f(state, host, action)` into an entry handler.
    ///
    /// The state is read when the handler runs, not when it is wrapped.
    pub fn wrap<H, F, R>(&self, f: F) -> impl Fn(&H, &Action<H::Payload>) -> R + Send + Sync + 'static
    where
        H: HostHandle + 'static,
        F: Fn(&S, &H, &Action<H::Payload>) -> R + Send + Sync + 'static,
        R: 'static,
    {
        let store = self.clone();
        move |host: &H, action: &Action<H::Payload>| {
            let state = store.read();
            f(&*state, host, action)
        }
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for StateStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateStore")
            .field("current", &self.read())
            .finish()
    }
}

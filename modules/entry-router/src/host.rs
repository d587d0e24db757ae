//! HostHandle implementations.

use std::sync::{Arc, Mutex, PoisonError};

use crate::action::Action;
use crate::state::StateStore;
use crate::traits::HostHandle;

// ---------------------------------------------------------------------------
// MemoryHost (tests and embedding, no host pipeline required)
// ---------------------------------------------------------------------------

/// In-memory host. State reads come from a `StateStore`; dispatched actions
/// are recorded instead of re-entering a pipeline. Thread-safe.
pub struct MemoryHost<S, P> {
    state: StateStore<S>,
    dispatched: Mutex<Vec<Action<P>>>,
}

impl<S, P> MemoryHost<S, P> {
    pub fn new(initial: S) -> Self {
        Self::with_store(StateStore::new(initial))
    }

    pub fn with_store(state: StateStore<S>) -> Self {
        Self {
            state,
            dispatched: Mutex::new(Vec::new()),
        }
    }

    pub fn store(&self) -> &StateStore<S> {
        &self.state
    }

    /// Every action dispatched through this host, in order.
    pub fn dispatched(&self) -> Vec<Action<P>>
    where
        P: Clone,
    {
        self.dispatched
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl<S, P> HostHandle for MemoryHost<S, P>
where
    S: Send + Sync,
    P: Send,
{
    type State = Arc<S>;
    type Payload = P;

    fn get_state(&self) -> Arc<S> {
        self.state.read()
    }

    fn dispatch(&self, action: Action<P>) {
        self.dispatched
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(action);
    }
}

// ---------------------------------------------------------------------------
// Arc<H> blanket: lets callers keep a handle to the bound host
// ---------------------------------------------------------------------------

impl<H: HostHandle + ?Sized> HostHandle for Arc<H> {
    type State = H::State;
    type Payload = H::Payload;

    fn get_state(&self) -> Self::State {
        (**self).get_state()
    }

    fn dispatch(&self, action: Action<Self::Payload>) {
        (**self).dispatch(action)
    }
}

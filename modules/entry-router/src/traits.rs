//! Core traits for the entry router.

use crate::action::Action;

/// The host pipeline's capabilities, as seen from inside an entry.
///
/// A host exposes exactly a state read and a dispatch. Nothing else of the
/// host (subscriptions, reducer replacement) is reachable through the router.
pub trait HostHandle: Send + Sync {
    type State;
    type Payload;

    /// Read the host's current state.
    fn get_state(&self) -> Self::State;

    /// Dispatch a new action into the host pipeline.
    ///
    /// The action re-enters the pipeline from the top, so it is routed
    /// through the router again.
    fn dispatch(&self, action: Action<Self::Payload>);
}

/// Pure state updates. No I/O, no side effects on the host.
///
/// Used by the host pipeline independently of the router. Implemented for
/// plain `Fn(S, &Action<P>) -> S` closures.
pub trait Reducer<S, P>: Send + Sync {
    fn reduce(&self, state: S, action: &Action<P>) -> S;
}

impl<S, P, F> Reducer<S, P> for F
where
    F: Fn(S, &Action<P>) -> S + Send + Sync,
{
    fn reduce(&self, state: S, action: &Action<P>) -> S {
        self(state, action)
    }
}

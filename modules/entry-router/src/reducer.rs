//! Reducer adapters that keep a `StateStore` in sync with the host pipeline.
//!
//! Both adapters react to a single action type and expect the action to be
//! shaped `{ type, payload }`, with the payload of the same type as the
//! store's value.

use std::sync::Arc;

use crate::action::Action;
use crate::merge::ShallowMerge;
use crate::state::StateStore;
use crate::traits::Reducer;

/// Replaces the store's value with the payload of every matching action.
pub struct ReplaceReducer<S> {
    action_type: String,
    store: StateStore<S>,
}

impl<S> ReplaceReducer<S> {
    pub fn new(action_type: impl Into<String>, store: StateStore<S>) -> Self {
        Self {
            action_type: action_type.into(),
            store,
        }
    }
}

impl<S> Reducer<Arc<S>, S> for ReplaceReducer<S>
where
    S: Clone + Send + Sync,
{
    fn reduce(&self, state: Arc<S>, action: &Action<S>) -> Arc<S> {
        if !action.is(&self.action_type) {
            return state;
        }
        self.store.replace(action.payload.clone());
        self.store.read()
    }
}

/// Shallow-merges the payload of every matching action into the store.
///
/// A payload that changes nothing leaves the store's `Arc` in place, so
/// downstream `Arc::ptr_eq` checks see an unchanged value.
pub struct MergeReducer<S> {
    action_type: String,
    store: StateStore<S>,
}

impl<S> MergeReducer<S> {
    pub fn new(action_type: impl Into<String>, store: StateStore<S>) -> Self {
        Self {
            action_type: action_type.into(),
            store,
        }
    }
}

impl<S> Reducer<Arc<S>, S> for MergeReducer<S>
where
    S: ShallowMerge + Send + Sync,
{
    fn reduce(&self, state: Arc<S>, action: &Action<S>) -> Arc<S> {
        if !action.is(&self.action_type) {
            return state;
        }
        let current = self.store.read();
        match current.merged(&action.payload) {
            Some(next) => self.store.replace_arc(Arc::new(next)),
            None => current,
        }
    }
}

pub fn replace_reducer<S>(action_type: impl Into<String>, store: &StateStore<S>) -> ReplaceReducer<S> {
    ReplaceReducer::new(action_type, store.clone())
}

pub fn merge_reducer<S>(action_type: impl Into<String>, store: &StateStore<S>) -> MergeReducer<S> {
    MergeReducer::new(action_type, store.clone())
}

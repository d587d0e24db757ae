//! What an entry's return value means for propagation.

use serde_json::Value;
use tracing::{debug, warn};

/// What an entry decided about the action it was handed.
///
/// Only `Blocked` suppresses the pipeline's continuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    Blocked,
    Propagated,
}

/// Conversion from an entry's return value into an `EntryOutcome`.
///
/// Exactly `true` blocks. Every other value, falsy or not, propagates.
pub trait IntoOutcome {
    fn into_outcome(self) -> EntryOutcome;
}

impl IntoOutcome for EntryOutcome {
    fn into_outcome(self) -> EntryOutcome {
        self
    }
}

impl IntoOutcome for () {
    fn into_outcome(self) -> EntryOutcome {
        EntryOutcome::Propagated
    }
}

impl IntoOutcome for bool {
    fn into_outcome(self) -> EntryOutcome {
        if self {
            EntryOutcome::Blocked
        } else {
            EntryOutcome::Propagated
        }
    }
}

impl<T: IntoOutcome> IntoOutcome for Option<T> {
    fn into_outcome(self) -> EntryOutcome {
        self.map_or(EntryOutcome::Propagated, IntoOutcome::into_outcome)
    }
}

impl IntoOutcome for Value {
    fn into_outcome(self) -> EntryOutcome {
        match self {
            Value::Bool(true) => EntryOutcome::Blocked,
            Value::Bool(false) => EntryOutcome::Propagated,
            other => {
                debug!(value = %other, "entry returned a non-boolean value, propagating");
                EntryOutcome::Propagated
            }
        }
    }
}

impl<T, E> IntoOutcome for Result<T, E>
where
    T: IntoOutcome,
    E: std::fmt::Display,
{
    fn into_outcome(self) -> EntryOutcome {
        match self {
            Ok(value) => value.into_outcome(),
            Err(e) => {
                warn!(error = %e, "entry returned an error, propagating");
                EntryOutcome::Propagated
            }
        }
    }
}

/// Result of routing one action through an `Intercept`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Routed<R> {
    /// An entry blocked the action; the continuation never ran.
    Blocked,
    /// The continuation ran and returned `R`.
    Propagated(R),
}

impl<R> Routed<R> {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Routed::Blocked)
    }

    pub fn propagated(self) -> Option<R> {
        match self {
            Routed::Blocked => None,
            Routed::Propagated(r) => Some(r),
        }
    }
}

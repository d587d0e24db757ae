//! Action interception router.
//!
//! Sits in front of a host dispatch pipeline: every action is offered to at
//! most one registered entry, keyed by action type, before the pipeline's
//! continuation sees it. An entry may block the action from propagating.
//!
//! Consumers wire the router in with `EntryRouter::bind` and keep application
//! state in sync with the pipeline through a `StateStore` and the
//! replace/merge reducer adapters.

pub mod action;
pub mod config;
pub mod error;
pub mod host;
pub mod merge;
pub mod outcome;
pub mod reducer;
pub mod router;
pub mod state;
pub mod traits;

pub use action::Action;
pub use config::{load_config, RouterConfig};
pub use error::{ConfigurationError, EntryError, ValidationError};
pub use host::MemoryHost;
pub use merge::ShallowMerge;
pub use outcome::{EntryOutcome, IntoOutcome, Routed};
pub use reducer::{merge_reducer, replace_reducer, MergeReducer, ReplaceReducer};
pub use router::{entry, Entry, EntryRouter, Intercept, Interceptor, Registration};
pub use state::StateStore;
pub use traits::{HostHandle, Reducer};

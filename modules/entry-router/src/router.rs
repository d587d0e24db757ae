//! The entry router and its interception layers.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tracing::{debug, trace, warn};

use crate::action::Action;
use crate::config::RouterConfig;
use crate::error::ConfigurationError;
use crate::outcome::{EntryOutcome, IntoOutcome, Routed};
use crate::traits::HostHandle;

/// A registered entry: sees the host and the action, decides propagation.
pub type Entry<H> =
    Arc<dyn Fn(&H, &Action<<H as HostHandle>::Payload>) -> EntryOutcome + Send + Sync>;

/// Build an `Entry` from any handler whose return value converts to an
/// `EntryOutcome`. Useful when collecting entries for `register_all`.
pub fn entry<H, F, R>(handler: F) -> Entry<H>
where
    H: HostHandle,
    F: Fn(&H, &Action<H::Payload>) -> R + Send + Sync + 'static,
    R: IntoOutcome,
{
    Arc::new(move |host: &H, action: &Action<H::Payload>| handler(host, action).into_outcome())
}

/// Whether `register` added a new entry or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Inserted,
    Overwritten,
}

struct RouterInner<H: HostHandle> {
    config: RouterConfig,
    entries: RwLock<HashMap<String, Entry<H>>>,
    host: OnceLock<Arc<H>>,
}

/// Maps action types to entries and intercepts actions on their way into the
/// host pipeline.
///
/// Each router owns its own entry map and binds to at most one host. Clones
/// share the same map and binding.
pub struct EntryRouter<H: HostHandle> {
    inner: Arc<RouterInner<H>>,
}

impl<H: HostHandle> Clone for EntryRouter<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<H: HostHandle> Default for EntryRouter<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: HostHandle> EntryRouter<H> {
    pub fn new() -> Self {
        Self::with_config(RouterConfig::default())
    }

    pub fn with_config(config: RouterConfig) -> Self {
        Self {
            inner: Arc::new(RouterInner {
                config,
                entries: RwLock::new(HashMap::new()),
                host: OnceLock::new(),
            }),
        }
    }

    pub fn label(&self) -> &str {
        &self.inner.config.label
    }

    pub fn is_bound(&self) -> bool {
        self.inner.host.get().is_some()
    }

    /// Bind the host pipeline and return the interception layer for it.
    ///
    /// A router binds exactly once. A second call fails and leaves the first
    /// host in place.
    pub fn bind(&self, host: H) -> Result<Interceptor<H>, ConfigurationError> {
        let host = Arc::new(host);
        if self.inner.host.set(Arc::clone(&host)).is_err() {
            return Err(ConfigurationError::AlreadyBound {
                label: self.label().to_string(),
            });
        }
        debug!(router = %self.label(), "host bound");

        Ok(Interceptor {
            router: Arc::clone(&self.inner),
            host,
        })
    }

    /// Register a handler for `action_type`, replacing any existing one.
    ///
    /// Any string is a valid key, the empty string included. Replacing an
    /// entry is allowed but logged as a warning.
    pub fn register<F, R>(
        &self,
        action_type: impl Into<String>,
        handler: F,
    ) -> Registration
    where
        F: Fn(&H, &Action<H::Payload>) -> R + Send + Sync + 'static,
        R: IntoOutcome,
    {
        self.register_entry(action_type, entry(handler))
    }

    pub fn register_entry(
        &self,
        action_type: impl Into<String>,
        entry: Entry<H>,
    ) -> Registration {
        let action_type = action_type.into();

        let mut entries = self
            .inner
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if entries.contains_key(&action_type) {
            warn!(
                router = %self.label(),
                action_type = %action_type,
                "possible unexpected entry overwrite"
            );
        }

        match entries.insert(action_type, entry) {
            Some(_) => Registration::Overwritten,
            None => Registration::Inserted,
        }
    }

    /// Register every `(action_type, entry)` pair in iteration order.
    ///
    /// Returns one `Registration` per pair, in the same order. A later pair
    /// with a repeated key overwrites the earlier one.
    pub fn register_all<I, K>(&self, entries: I) -> Vec<Registration>
    where
        I: IntoIterator<Item = (K, Entry<H>)>,
        K: Into<String>,
    {
        entries
            .into_iter()
            .map(|(action_type, entry)| self.register_entry(action_type, entry))
            .collect()
    }

    pub fn has_entry(&self, action_type: &str) -> bool {
        self.inner.entry(action_type).is_some()
    }

    /// Registered action types, sorted.
    pub fn entry_types(&self) -> Vec<String> {
        let entries = self
            .inner
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let mut types: Vec<String> = entries.keys().cloned().collect();
        types.sort();
        types
    }
}

impl<H: HostHandle> RouterInner<H> {
    /// Clone the entry out so the lock is released before it runs. Entries
    /// may register further entries or dispatch back through the host.
    fn entry(&self, action_type: &str) -> Option<Entry<H>> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(action_type)
            .cloned()
    }
}

/// The router's middleware layer for one bound host.
///
/// `with_next` takes the pipeline's continuation and returns the per-action
/// handler.
pub struct Interceptor<H: HostHandle> {
    router: Arc<RouterInner<H>>,
    host: Arc<H>,
}

impl<H: HostHandle> Clone for Interceptor<H> {
    fn clone(&self) -> Self {
        Self {
            router: Arc::clone(&self.router),
            host: Arc::clone(&self.host),
        }
    }
}

impl<H: HostHandle> Interceptor<H> {
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn with_next<N, R>(&self, next: N) -> Intercept<H, N>
    where
        N: Fn(Action<H::Payload>) -> R,
    {
        Intercept {
            router: Arc::clone(&self.router),
            host: Arc::clone(&self.host),
            next,
        }
    }
}

/// Per-action handler: routes each action to its entry, then to `next`
/// unless the entry blocked it.
pub struct Intercept<H: HostHandle, N> {
    router: Arc<RouterInner<H>>,
    host: Arc<H>,
    next: N,
}

impl<H: HostHandle, N> Intercept<H, N> {
    pub fn call<R>(&self, action: Action<H::Payload>) -> Routed<R>
    where
        N: Fn(Action<H::Payload>) -> R,
    {
        let label = &self.router.config.label;

        let Some(entry) = self.router.entry(action.action_type()) else {
            if self.router.config.log_unmatched {
                trace!(router = %label, action_type = %action.action_type(), "no entry for action");
            }
            return Routed::Propagated((self.next)(action));
        };

        match entry(&*self.host, &action) {
            EntryOutcome::Blocked => {
                debug!(router = %label, action_type = %action.action_type(), "action blocked by entry");
                Routed::Blocked
            }
            EntryOutcome::Propagated => Routed::Propagated((self.next)(action)),
        }
    }
}

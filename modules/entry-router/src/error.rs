//! Typed errors for binding and store creation.

use thiserror::Error;

/// Invalid host binding. Fatal to the `bind` call that raised it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// A host handle is already bound to this router
    #[error("[{label}] host handle already bound")]
    AlreadyBound { label: String },
}

/// Invalid arguments to `StateStore::create`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("initial state expected")]
    MissingInitialState,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntryError {
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

//! Error types shared across the overlay.
//!
//! `AlreadyRegistered` is a programmer error surfaced during the
//! installation phase and should be treated as fatal at startup.
//! `NotFound` is not a failure in the dispatch path: the resolver converts
//! it into pass-through to the native behavior. An absent window is a valid
//! empty result and is not represented here at all.

use thiserror::Error;

use crate::ops::OperationId;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// An override for this operation is already installed. Overrides are
    /// installed exactly once per process; the first one stays active.
    #[error("override already registered for operation '{0}'")]
    AlreadyRegistered(OperationId),

    /// No override is installed for this operation.
    #[error("no override registered for operation '{0}'")]
    NotFound(OperationId),

    /// Configuration could not be read or parsed.
    #[error("config: {0}")]
    Config(String),
}

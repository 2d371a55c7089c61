//! Registration errors.

use std::collections::TryReserveError;

use crate::factory::FactoryError;

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Fatal registration failures.
///
/// Every variant leaves the registry exactly as it was before the call.
/// The caller decides whether to abort model construction.
#[derive(thiserror::Error, Debug)]
pub enum RegistryError {
    #[error("Not enough memory to allocate {what}")]
    OutOfMemory {
        what: &'static str,
        #[source]
        source: TryReserveError,
    },

    #[error(
        "Model specifies zone {zone} twice for the building {building}. \
         Each zone must only be specified once."
    )]
    DuplicateZone { zone: String, building: String },

    #[error(
        "Model specifies two different archives for the same building: {requested:?} and {pinned:?}"
    )]
    ConflictingArchivePath { requested: String, pinned: String },

    #[error("Failed to create simulation instance for {building}: {source}")]
    InstanceCreation {
        building: String,
        #[source]
        source: FactoryError,
    },

    #[error("Too many {what} for the id space")]
    IdSpaceExhausted { what: &'static str },
}

impl RegistryError {
    pub(crate) fn oom(what: &'static str) -> impl FnOnce(TryReserveError) -> Self {
        move |source| RegistryError::OutOfMemory { what, source }
    }
}

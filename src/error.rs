use thiserror::Error;

use crate::models::EntryId;

/// Failure reported by a catalog source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("media source unavailable: {0}")]
    Unavailable(String),
    #[error("media source returned corrupt data: {0}")]
    Corrupt(String),
}

/// Errors the engine recognises internally.
///
/// Event intake never returns these to the view layer: an invalid reference is
/// logged and ignored, and a load failure leaves an empty catalog behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("no media entry with id {0}")]
    InvalidReference(EntryId),
    #[error(transparent)]
    LoadFailure(#[from] LoadError),
}

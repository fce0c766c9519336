//! Error types surfaced by the runtime layer.

use ocular_core::{ProgressionError, StrainError};

use crate::repository::RepositoryError;
use crate::session::CharacterId;

/// Errors raised by session commands and persistence.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("no character registered with id {0}")]
    UnknownCharacter(CharacterId),

    #[error(transparent)]
    Progression(#[from] ProgressionError),

    #[error(transparent)]
    Strain(#[from] StrainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;

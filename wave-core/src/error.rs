use thiserror::Error;
use wave_model::{ModelError, UserId};

/// Failures of store mutations and of talking to the store task.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no user with id {0}")]
    UserNotFound(UserId),

    #[error("users store task has stopped")]
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error(transparent)]
    Model(#[from] ModelError),
}

use thiserror::Error;

/// Errors produced by model constructors and field lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown field path: {0}")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;

use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown object type: {0}")]
    UnknownObjectType(String),

    #[error("unknown query level: {0}")]
    UnknownLevel(String),
}

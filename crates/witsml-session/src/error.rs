use thiserror::Error;

/// A failed call to the remote server.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("server unreachable: {0}")]
    Unreachable(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("request rejected: code={code}, message={message}")]
    Rejected { code: i32, message: String },

    #[error("could not decode response: {0}")]
    Decode(String),
}

pub type TransportResult<T> = Result<T, TransportError>;

/// Errors from building or loading a catalog session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("well not found: {0}")]
    WellNotFound(String),

    #[error("wellbore not found: {wellbore_id} in well {well_id}")]
    WellboreNotFound { well_id: String, wellbore_id: String },

    #[error("unknown object type in snapshot: {0}")]
    UnknownObjectType(String),

    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    #[error("catalog lock poisoned: {0}")]
    Poisoned(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SessionResult<T> = Result<T, SessionError>;

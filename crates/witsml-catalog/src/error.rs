use thiserror::Error;
use witsml_session::TransportError;
use witsml_types::{ObjectType, QueryLevel};

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The session could not answer a listing the request depends on.
    #[error("upstream unavailable at {level} level: {source}")]
    UpstreamUnavailable {
        level: QueryLevel,
        source: TransportError,
    },

    #[error("unknown object type: {0}")]
    UnknownType(String),

    #[error("{object_type} object not found: {id}")]
    ObjectNotFound { object_type: ObjectType, id: String },

    #[error("invalid locator: {0}")]
    Locator(#[from] witsml_locator::LocatorError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CatalogError {
    pub(crate) fn upstream(level: QueryLevel, source: TransportError) -> Self {
        Self::UpstreamUnavailable { level, source }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

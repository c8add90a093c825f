//! Error types for locator parsing.

use thiserror::Error;

/// A malformed locator segment.
///
/// `position` is the zero-based index of the segment among the non-empty
/// segments of the locator (0 is the well, 1 the wellbore).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LocatorError {
    /// The segment has no `(<id>)` part.
    #[error("segment {position} {segment:?} has no (id) part")]
    MissingId { position: usize, segment: String },

    /// The segment has an empty `()` id.
    #[error("segment {position} {segment:?} has an empty id")]
    EmptyId { position: usize, segment: String },

    /// The segment opens an id but never closes it.
    #[error("segment {position} {segment:?} is missing a closing ')'")]
    Unterminated { position: usize, segment: String },

    /// The id itself contains parentheses.
    #[error("segment {position} {segment:?} has unbalanced parentheses in its id")]
    Unbalanced { position: usize, segment: String },
}

impl LocatorError {
    /// Index of the offending segment.
    pub fn position(&self) -> usize {
        match self {
            Self::MissingId { position, .. }
            | Self::EmptyId { position, .. }
            | Self::Unterminated { position, .. }
            | Self::Unbalanced { position, .. } => *position,
        }
    }
}

/// Convenience type alias for locator operations.
pub type Result<T> = std::result::Result<T, LocatorError>;

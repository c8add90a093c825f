//! Scanning of a single locator segment.
//!
//! A segment is `<name>(<id>)`:
//! - surrounding whitespace is ignored
//! - the id is the text between the last `(` and the trailing `)`
//! - the id must be non-empty and must not contain `(` or `)`
//! - the name is everything before that `(`, trimmed, and may be empty
//!
//! Names may contain parentheses of their own (`Pad A (north)(w-7)`), which
//! is why the id is taken from the last opening parenthesis.

use crate::error::{LocatorError, Result};

/// A scanned `<name>(<id>)` segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub name: String,
    pub id: String,
}

/// Scan one segment. `position` is only used to label errors.
///
/// # Examples
///
/// ```
/// use witsml_locator::segment::scan_segment;
///
/// let seg = scan_segment("Alpha(w-1)", 0).unwrap();
/// assert_eq!(seg.name, "Alpha");
/// assert_eq!(seg.id, "w-1");
/// assert!(scan_segment("Alpha", 0).is_err());
/// ```
pub fn scan_segment(raw: &str, position: usize) -> Result<Segment> {
    let text = raw.trim();

    let Some(body) = text.strip_suffix(')') else {
        return Err(if text.contains('(') {
            LocatorError::Unterminated { position, segment: text.to_string() }
        } else {
            LocatorError::MissingId { position, segment: text.to_string() }
        });
    };

    let Some(open) = body.rfind('(') else {
        return Err(LocatorError::MissingId { position, segment: text.to_string() });
    };

    let id = body[open + 1..].trim();
    if id.contains(')') {
        return Err(LocatorError::Unbalanced { position, segment: text.to_string() });
    }
    if id.is_empty() {
        return Err(LocatorError::EmptyId { position, segment: text.to_string() });
    }

    Ok(Segment {
        name: body[..open].trim().to_string(),
        id: id.to_string(),
    })
}

/// Split a locator into its non-empty, trimmed path segments.
pub(crate) fn split_path(uri: &str) -> Vec<&str> {
    uri.split('/')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

//! Locator parsing.
//!
//! [`parse`] never fails: a malformed segment lowers the query level to the
//! deepest level that could still be determined, and the degradation is
//! logged. [`try_parse`] reports the first malformed segment instead.

use tracing::{debug, warn};
use witsml_types::{WellRef, WellboreRef};

use crate::error::{LocatorError, Result};
use crate::segment::{scan_segment, split_path};
use crate::target::QueryTarget;

/// Parse a locator, degrading on malformed segments.
///
/// # Examples
///
/// ```
/// use witsml_locator::parse;
/// use witsml_types::QueryLevel;
///
/// let target = parse("/W1(w1)/WB1(wb1)", &["log", "MUDLOG"], "");
/// assert_eq!(target.level(), QueryLevel::Wellbore);
/// assert_eq!(target.object_types(), ["LOG", "MUDLOG"]);
///
/// // The wellbore segment is malformed, so only the well is addressed.
/// let target = parse("/W1(w1)/WB1", &["LOG"], "");
/// assert_eq!(target.level(), QueryLevel::Well);
/// ```
pub fn parse<S: AsRef<str>>(uri: &str, requested_types: &[S], well_filter: &str) -> QueryTarget {
    scan(uri, requested_types, well_filter, |err| {
        warn!(uri, position = err.position(), error = %err, "degrading malformed locator");
    })
}

/// Parse a locator, failing on the first malformed segment.
pub fn try_parse<S: AsRef<str>>(
    uri: &str,
    requested_types: &[S],
    well_filter: &str,
) -> Result<QueryTarget> {
    let mut failure: Option<LocatorError> = None;
    let target = scan(uri, requested_types, well_filter, |err| {
        failure.get_or_insert(err);
    });
    match failure {
        Some(err) => Err(err),
        None => Ok(target),
    }
}

/// Shared scanner. `on_malformed` sees the segment error that stopped the
/// descent; the returned target is the deepest one the locator supports.
fn scan<S, F>(uri: &str, requested_types: &[S], well_filter: &str, mut on_malformed: F) -> QueryTarget
where
    S: AsRef<str>,
    F: FnMut(LocatorError),
{
    let segments = split_path(uri);

    let Some(raw_well) = segments.first() else {
        return QueryTarget::server(well_filter);
    };
    let well = match scan_segment(raw_well, 0) {
        Ok(seg) => WellRef::new(seg.name, seg.id),
        Err(err) => {
            on_malformed(err);
            return QueryTarget::server(well_filter);
        }
    };

    let Some(raw_wellbore) = segments.get(1) else {
        return QueryTarget::well(well, well_filter);
    };
    let wellbore = match scan_segment(raw_wellbore, 1) {
        Ok(seg) => WellboreRef::new(well, seg.name, seg.id),
        Err(err) => {
            on_malformed(err);
            return QueryTarget::well(well, well_filter);
        }
    };

    if segments.len() > 2 {
        debug!(uri, ignored = segments.len() - 2, "ignoring segments below the wellbore");
    }

    QueryTarget::wellbore(wellbore, requested_types, well_filter)
}

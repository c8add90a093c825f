use serde::Serialize;
use witsml_types::{ObjectType, QueryLevel, ResourceIdentifier};

/// A non-fatal event recorded while resolving a target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "diagnostic", rename_all = "camelCase")]
pub enum Diagnostic {
    /// A requested type token is not in the type table.
    UnknownType { token: String },
    /// The listing for one type failed; the type contributed nothing.
    #[serde(rename_all = "camelCase")]
    ListingFailed { object_type: ObjectType, error: String },
    /// A listing contained `count` holes, which were skipped.
    SkippedNulls {
        level: QueryLevel,
        kind: String,
        count: usize,
    },
}

/// Output of a resolve: identifiers in order, plus what was skipped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub identifiers: Vec<ResourceIdentifier>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Resolution {
    /// `true` if any requested type was unknown or failed to list.
    pub fn is_partial(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| !matches!(d, Diagnostic::SkippedNulls { .. }))
    }

    /// Types whose listing failed, in request order.
    pub fn failed_types(&self) -> Vec<ObjectType> {
        self.diagnostics
            .iter()
            .filter_map(|d| match d {
                Diagnostic::ListingFailed { object_type, .. } => Some(*object_type),
                _ => None,
            })
            .collect()
    }

    /// Total holes skipped across all listings.
    pub fn skipped_nulls(&self) -> usize {
        self.diagnostics
            .iter()
            .map(|d| match d {
                Diagnostic::SkippedNulls { count, .. } => *count,
                _ => 0,
            })
            .sum()
    }
}

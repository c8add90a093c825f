use std::fmt;

use serde::Serialize;
use witsml_types::{QueryLevel, WellRef, WellboreRef};

/// A parsed locator: what to list, and where.
///
/// The level-specific constructors are the only way to build a target, so
/// the shape always matches the level:
/// - `well` is present at `Well` and `Wellbore` level
/// - `wellbore` is present only at `Wellbore` level
/// - `object_types` is empty unless the level is `Wellbore`
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryTarget {
    level: QueryLevel,
    well: Option<WellRef>,
    wellbore: Option<WellboreRef>,
    object_types: Vec<String>,
    well_filter: String,
}

impl QueryTarget {
    /// A server-level target listing wells that match `well_filter`.
    pub fn server(well_filter: impl Into<String>) -> Self {
        Self {
            level: QueryLevel::Server,
            well: None,
            wellbore: None,
            object_types: Vec::new(),
            well_filter: well_filter.into(),
        }
    }

    /// A well-level target listing the wellbores of `well`.
    pub fn well(well: WellRef, well_filter: impl Into<String>) -> Self {
        Self {
            level: QueryLevel::Well,
            well: Some(well),
            wellbore: None,
            object_types: Vec::new(),
            well_filter: well_filter.into(),
        }
    }

    /// A wellbore-level target listing objects of `object_types`.
    ///
    /// Type names are upper-cased; order and duplicates are preserved.
    pub fn wellbore<I, S>(wellbore: WellboreRef, object_types: I, well_filter: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            level: QueryLevel::Wellbore,
            well: Some(wellbore.well.clone()),
            wellbore: Some(wellbore),
            object_types: object_types
                .into_iter()
                .map(|t| t.as_ref().trim().to_uppercase())
                .collect(),
            well_filter: well_filter.into(),
        }
    }

    pub fn level(&self) -> QueryLevel {
        self.level
    }

    pub fn well(&self) -> Option<&WellRef> {
        self.well.as_ref()
    }

    pub fn wellbore(&self) -> Option<&WellboreRef> {
        self.wellbore.as_ref()
    }

    /// Requested type tokens, upper-cased, in caller order.
    pub fn object_types(&self) -> &[String] {
        &self.object_types
    }

    /// Free-text well filter, forwarded to the session at server level.
    pub fn well_filter(&self) -> &str {
        &self.well_filter
    }

    /// Locator of the node whose children this target lists.
    ///
    /// Empty at server level, `/W(w)` at well level, `/W(w)/WB(wb)` at
    /// wellbore level.
    pub fn parent_path(&self) -> String {
        match (&self.wellbore, &self.well) {
            (Some(wellbore), _) => wellbore.path(),
            (None, Some(well)) => well.path(),
            (None, None) => String::new(),
        }
    }
}

impl fmt::Display for QueryTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.parent_path();
        if path.is_empty() {
            f.write_str("/")
        } else {
            f.write_str(&path)
        }
    }
}

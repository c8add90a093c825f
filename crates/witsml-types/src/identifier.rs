use std::fmt;

use serde::{Deserialize, Serialize};

use crate::record::CatalogRecord;

/// One resolved child resource.
///
/// `parent_path` is the locator of the immediate parent (`/W(w)/WB(wb)`),
/// or empty for wells listed at server level.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceIdentifier {
    pub name: String,
    pub id: String,
    pub kind: String,
    pub parent_path: String,
}

impl ResourceIdentifier {
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        kind: impl Into<String>,
        parent_path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            kind: kind.into(),
            parent_path: parent_path.into(),
        }
    }

    /// Build from a listed record, copying its name and id.
    pub fn from_record<R: CatalogRecord>(record: &R, kind: &str, parent_path: &str) -> Self {
        Self::new(record.name(), record.id(), kind, parent_path)
    }

    /// Full locator of this resource: `<parent_path>/<name>(<id>)`.
    pub fn locator(&self) -> String {
        format!("{}/{}({})", self.parent_path, self.name, self.id)
    }
}

impl fmt::Display for ResourceIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.locator(), self.kind)
    }
}

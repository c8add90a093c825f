//! Listing entries returned by a catalog session.
//!
//! The resolver only reads `name` and `id`; everything else an object kind
//! carries rides along in [`ObjectRecord::attributes`] untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An ordered listing from the remote server.
///
/// `None` entries are holes in the remote response. They are kept in the
/// listing so consumers can count them; resolvers skip them.
pub type Listing<T> = Vec<Option<T>>;

/// Accessors every listed record exposes.
pub trait CatalogRecord {
    fn name(&self) -> &str;
    fn id(&self) -> &str;
}

/// A well as listed at server level.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WellRecord {
    pub name: String,
    pub id: String,
}

impl WellRecord {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self { name: name.into(), id: id.into() }
    }
}

impl CatalogRecord for WellRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// A wellbore as listed under a well.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellboreRecord {
    pub name: String,
    pub id: String,
    #[serde(default)]
    pub well_name: String,
    #[serde(default)]
    pub well_id: String,
}

impl WellboreRecord {
    pub fn new(
        well_name: impl Into<String>,
        well_id: impl Into<String>,
        name: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
            well_name: well_name.into(),
            well_id: well_id.into(),
        }
    }
}

impl CatalogRecord for WellboreRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// A wellbore child object of any supported type.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectRecord {
    pub name: String,
    pub id: String,
    /// Kind-specific fields, opaque to the catalog.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl ObjectRecord {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self { name: name.into(), id: id.into(), attributes: Map::new() }
    }

    /// Attach a kind-specific attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

impl CatalogRecord for ObjectRecord {
    fn name(&self) -> &str {
        &self.name
    }

    fn id(&self) -> &str {
        &self.id
    }
}

//! JSON model of a catalog file.
//!
//! ```json
//! {
//!   "wells": [{
//!     "name": "W1", "id": "w1",
//!     "wellbores": [{
//!       "name": "WB1", "id": "wb1",
//!       "objects": { "LOG": [{ "name": "Log1", "id": "l1" }] }
//!     }]
//!   }]
//! }
//! ```
//!
//! Object keys are type tokens or canonical tags; they are checked against
//! the type table when the snapshot is loaded into a catalog.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use witsml_types::ObjectRecord;

use crate::error::SessionResult;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub wells: Vec<WellSnapshot>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WellSnapshot {
    #[serde(default)]
    pub name: String,
    pub id: String,
    #[serde(default)]
    pub wellbores: Vec<WellboreSnapshot>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WellboreSnapshot {
    #[serde(default)]
    pub name: String,
    pub id: String,
    #[serde(default)]
    pub objects: BTreeMap<String, Vec<ObjectRecord>>,
}

impl CatalogSnapshot {
    pub fn from_json(json: &str) -> SessionResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> SessionResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a snapshot file.
    pub fn load(path: impl AsRef<Path>) -> SessionResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

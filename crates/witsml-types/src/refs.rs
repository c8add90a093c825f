//! Addressed nodes of the well hierarchy.
//!
//! A locator names each node as `<name>(<id>)`. The id is what the server
//! addresses by; the name is carried for display and may be empty.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Render one locator segment: `/<name>(<id>)`.
pub fn path_segment(name: &str, id: &str) -> String {
    format!("/{name}({id})")
}

/// A well, identified by its server-side id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WellRef {
    pub name: String,
    pub id: String,
}

impl WellRef {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self { name: name.into(), id: id.into() }
    }

    /// Locator of this well: `/<name>(<id>)`.
    pub fn path(&self) -> String {
        path_segment(&self.name, &self.id)
    }
}

impl fmt::Display for WellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.id)
    }
}

/// A wellbore scoped to its owning well.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WellboreRef {
    pub name: String,
    pub id: String,
    pub well: WellRef,
}

impl WellboreRef {
    pub fn new(well: WellRef, name: impl Into<String>, id: impl Into<String>) -> Self {
        Self { name: name.into(), id: id.into(), well }
    }

    /// Locator of this wellbore: `/<well.name>(<well.id>)/<name>(<id>)`.
    pub fn path(&self) -> String {
        let mut path = self.well.path();
        path.push_str(&path_segment(&self.name, &self.id));
        path
    }
}

impl fmt::Display for WellboreRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.id)
    }
}

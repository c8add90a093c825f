//! In-memory catalog session for tests, demos, and offline use.
//!
//! [`InMemoryCatalog`] keeps wells, wellbores, and objects in insertion order
//! behind a `RwLock` and answers the [`ObjectCatalogSession`] listing calls
//! from that data. It never produces holes or transport failures other than
//! lock poisoning.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;
use witsml_types::{Listing, ObjectRecord, ObjectType, WellRecord, WellboreRecord};

use crate::error::{SessionError, SessionResult, TransportError, TransportResult};
use crate::session::ObjectCatalogSession;
use crate::snapshot::CatalogSnapshot;

#[derive(Debug)]
struct WellEntry {
    record: WellRecord,
    wellbores: Vec<WellboreEntry>,
}

#[derive(Debug)]
struct WellboreEntry {
    record: WellboreRecord,
    objects: BTreeMap<ObjectType, Vec<ObjectRecord>>,
}

/// An in-memory implementation of [`ObjectCatalogSession`].
///
/// The well filter is a case-insensitive substring match against the well
/// name or id. Listing an unknown well or wellbore yields an empty listing.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    wells: RwLock<Vec<WellEntry>>,
}

impl InMemoryCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a snapshot, validating every object type key.
    pub fn from_snapshot(snapshot: &CatalogSnapshot) -> SessionResult<Self> {
        let catalog = Self::new();
        for well in &snapshot.wells {
            catalog.insert_well(WellRecord::new(&well.name, &well.id))?;
            for wellbore in &well.wellbores {
                catalog.insert_wellbore(&well.id, &wellbore.name, &wellbore.id)?;
                for (key, objects) in &wellbore.objects {
                    let object_type: ObjectType = key
                        .parse()
                        .map_err(|_| SessionError::UnknownObjectType(key.clone()))?;
                    for object in objects {
                        catalog.insert_object(&well.id, &wellbore.id, object_type, object.clone())?;
                    }
                }
            }
        }
        debug!(wells = snapshot.wells.len(), "loaded catalog snapshot");
        Ok(catalog)
    }

    /// Load a snapshot file into a new catalog.
    pub fn load(path: impl AsRef<Path>) -> SessionResult<Self> {
        Self::from_snapshot(&CatalogSnapshot::load(path)?)
    }

    /// Add a well. A well with the same id is replaced in place.
    pub fn insert_well(&self, record: WellRecord) -> SessionResult<()> {
        let mut wells = self.write()?;
        match wells.iter_mut().find(|w| w.record.id == record.id) {
            Some(existing) => existing.record = record,
            None => wells.push(WellEntry { record, wellbores: Vec::new() }),
        }
        Ok(())
    }

    /// Add a wellbore under an existing well.
    pub fn insert_wellbore(&self, well_id: &str, name: &str, id: &str) -> SessionResult<()> {
        let mut wells = self.write()?;
        let well = wells
            .iter_mut()
            .find(|w| w.record.id == well_id)
            .ok_or_else(|| SessionError::WellNotFound(well_id.to_string()))?;
        let record = WellboreRecord::new(&well.record.name, &well.record.id, name, id);
        match well.wellbores.iter_mut().find(|wb| wb.record.id == id) {
            Some(existing) => existing.record = record,
            None => well.wellbores.push(WellboreEntry { record, objects: BTreeMap::new() }),
        }
        Ok(())
    }

    /// Append an object of `object_type` under an existing wellbore.
    pub fn insert_object(
        &self,
        well_id: &str,
        wellbore_id: &str,
        object_type: ObjectType,
        record: ObjectRecord,
    ) -> SessionResult<()> {
        let mut wells = self.write()?;
        let wellbore = wells
            .iter_mut()
            .find(|w| w.record.id == well_id)
            .and_then(|w| w.wellbores.iter_mut().find(|wb| wb.record.id == wellbore_id))
            .ok_or_else(|| SessionError::WellboreNotFound {
                well_id: well_id.to_string(),
                wellbore_id: wellbore_id.to_string(),
            })?;
        wellbore.objects.entry(object_type).or_default().push(record);
        Ok(())
    }

    /// Number of wells held.
    pub fn well_count(&self) -> SessionResult<usize> {
        self.wells
            .read()
            .map(|w| w.len())
            .map_err(|e| SessionError::Poisoned(e.to_string()))
    }

    fn write(&self) -> SessionResult<std::sync::RwLockWriteGuard<'_, Vec<WellEntry>>> {
        self.wells
            .write()
            .map_err(|e| SessionError::Poisoned(e.to_string()))
    }

    fn read(&self) -> TransportResult<std::sync::RwLockReadGuard<'_, Vec<WellEntry>>> {
        self.wells
            .read()
            .map_err(|e| TransportError::Unreachable(format!("catalog lock poisoned: {e}")))
    }
}

fn matches_filter(record: &WellRecord, filter: &str) -> bool {
    let filter = filter.trim().to_lowercase();
    filter.is_empty()
        || record.name.to_lowercase().contains(&filter)
        || record.id.to_lowercase().contains(&filter)
}

#[async_trait]
impl ObjectCatalogSession for InMemoryCatalog {
    async fn list_wells(&self, filter: &str) -> TransportResult<Listing<WellRecord>> {
        let wells = self.read()?;
        Ok(wells
            .iter()
            .filter(|w| matches_filter(&w.record, filter))
            .map(|w| Some(w.record.clone()))
            .collect())
    }

    async fn list_wellbores(&self, well_id: &str) -> TransportResult<Listing<WellboreRecord>> {
        let wells = self.read()?;
        Ok(wells
            .iter()
            .find(|w| w.record.id == well_id)
            .map(|w| w.wellbores.iter().map(|wb| Some(wb.record.clone())).collect())
            .unwrap_or_default())
    }

    async fn list_objects(
        &self,
        object_type: ObjectType,
        well_id: &str,
        wellbore_id: &str,
    ) -> TransportResult<Listing<ObjectRecord>> {
        let wells = self.read()?;
        Ok(wells
            .iter()
            .find(|w| w.record.id == well_id)
            .and_then(|w| w.wellbores.iter().find(|wb| wb.record.id == wellbore_id))
            .and_then(|wb| wb.objects.get(&object_type))
            .map(|objects| objects.iter().cloned().map(Some).collect())
            .unwrap_or_default())
    }
}

//! A session whose answers are scripted per call, for resolver tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use witsml_session::{ObjectCatalogSession, TransportError, TransportResult};
use witsml_types::{Listing, ObjectRecord, ObjectType, WellRecord, WellboreRecord};

/// Unscripted calls answer with an empty listing. Every call is recorded.
#[derive(Default)]
pub(crate) struct ScriptedSession {
    wells: Option<TransportResult<Listing<WellRecord>>>,
    wellbores: HashMap<String, TransportResult<Listing<WellboreRecord>>>,
    objects: HashMap<ObjectType, TransportResult<Listing<ObjectRecord>>>,
    delays: HashMap<ObjectType, Duration>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedSession {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_wells(mut self, listing: Listing<WellRecord>) -> Self {
        self.wells = Some(Ok(listing));
        self
    }

    pub(crate) fn failing_wells(mut self, error: TransportError) -> Self {
        self.wells = Some(Err(error));
        self
    }

    pub(crate) fn with_wellbores(mut self, well_id: &str, listing: Listing<WellboreRecord>) -> Self {
        self.wellbores.insert(well_id.to_string(), Ok(listing));
        self
    }

    pub(crate) fn failing_wellbores(mut self, well_id: &str, error: TransportError) -> Self {
        self.wellbores.insert(well_id.to_string(), Err(error));
        self
    }

    pub(crate) fn with_objects(mut self, object_type: ObjectType, listing: Listing<ObjectRecord>) -> Self {
        self.objects.insert(object_type, Ok(listing));
        self
    }

    pub(crate) fn failing_objects(mut self, object_type: ObjectType, error: TransportError) -> Self {
        self.objects.insert(object_type, Err(error));
        self
    }

    /// Hold the listing of `object_type` back for `delay` before answering.
    pub(crate) fn with_delay(mut self, object_type: ObjectType, delay: Duration) -> Self {
        self.delays.insert(object_type, delay);
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ObjectCatalogSession for ScriptedSession {
    async fn list_wells(&self, filter: &str) -> TransportResult<Listing<WellRecord>> {
        self.record(format!("wells:{filter}"));
        self.wells.clone().unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn list_wellbores(&self, well_id: &str) -> TransportResult<Listing<WellboreRecord>> {
        self.record(format!("wellbores:{well_id}"));
        self.wellbores
            .get(well_id)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn list_objects(
        &self,
        object_type: ObjectType,
        well_id: &str,
        wellbore_id: &str,
    ) -> TransportResult<Listing<ObjectRecord>> {
        self.record(format!("objects:{}:{well_id}:{wellbore_id}", object_type.tag()));
        if let Some(delay) = self.delays.get(&object_type) {
            tokio::time::sleep(*delay).await;
        }
        self.objects
            .get(&object_type)
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

use async_trait::async_trait;
use witsml_types::{Listing, ObjectRecord, ObjectType, WellRecord, WellboreRecord};

use crate::error::TransportResult;

/// Listing interface to a remote WITSML server.
///
/// A session is connected and authenticated by its owner before any listing
/// call; implementations never re-enter that lifecycle. Listings come back in
/// server order and may contain `None` holes. An empty listing is a normal
/// answer, not an error.
///
/// Implementations must be `Send + Sync`: the catalog may issue several
/// `list_objects` calls concurrently against one session.
#[async_trait]
pub trait ObjectCatalogSession: Send + Sync {
    /// Wells visible to the session. `filter` is free text interpreted by
    /// the implementation; an empty filter matches every well.
    async fn list_wells(&self, filter: &str) -> TransportResult<Listing<WellRecord>>;

    /// Wellbores of one well.
    async fn list_wellbores(&self, well_id: &str) -> TransportResult<Listing<WellboreRecord>>;

    /// Objects of one type under one wellbore.
    async fn list_objects(
        &self,
        object_type: ObjectType,
        well_id: &str,
        wellbore_id: &str,
    ) -> TransportResult<Listing<ObjectRecord>>;
}

use serde::Serialize;
use tracing::{debug, warn};
use witsml_session::ObjectCatalogSession;
use witsml_types::{ObjectRecord, ObjectType, QueryLevel};

use crate::error::{CatalogError, CatalogResult};
use crate::resolver::CatalogResolver;

/// Every object of one type under one wellbore.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectCollection {
    pub object_type: ObjectType,
    pub well_id: String,
    pub wellbore_id: String,
    pub items: Vec<ObjectRecord>,
}

impl ObjectCollection {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn to_json(&self) -> CatalogResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl CatalogResolver {
    /// Fetch the full records of one object type under a wellbore.
    ///
    /// Unlike the fan-out in [`resolve`](Self::resolve), an unknown type
    /// token or a failed listing is an error here.
    pub async fn fetch_collection<S>(
        &self,
        session: &S,
        well_id: &str,
        wellbore_id: &str,
        object_type: &str,
    ) -> CatalogResult<ObjectCollection>
    where
        S: ObjectCatalogSession + ?Sized,
    {
        let (ty, items) = list_type(session, well_id, wellbore_id, object_type).await?;
        Ok(ObjectCollection {
            object_type: ty,
            well_id: well_id.to_string(),
            wellbore_id: wellbore_id.to_string(),
            items,
        })
    }

    /// Fetch one object of a type by its id.
    pub async fn fetch_object<S>(
        &self,
        session: &S,
        well_id: &str,
        wellbore_id: &str,
        object_type: &str,
        object_id: &str,
    ) -> CatalogResult<ObjectRecord>
    where
        S: ObjectCatalogSession + ?Sized,
    {
        let (ty, items) = list_type(session, well_id, wellbore_id, object_type).await?;
        items
            .into_iter()
            .find(|record| record.id == object_id)
            .ok_or_else(|| {
                debug!(object_type = %ty, well_id, wellbore_id, object_id, "object not in listing");
                CatalogError::ObjectNotFound { object_type: ty, id: object_id.to_string() }
            })
    }
}

/// List one type under a wellbore, dropping holes.
async fn list_type<S>(
    session: &S,
    well_id: &str,
    wellbore_id: &str,
    object_type: &str,
) -> CatalogResult<(ObjectType, Vec<ObjectRecord>)>
where
    S: ObjectCatalogSession + ?Sized,
{
    let ty: ObjectType = object_type
        .parse()
        .map_err(|_| CatalogError::UnknownType(object_type.trim().to_string()))?;

    let listing = session
        .list_objects(ty, well_id, wellbore_id)
        .await
        .map_err(|e| {
            warn!(object_type = %ty, well_id, wellbore_id, error = %e, "object fetch failed");
            CatalogError::upstream(QueryLevel::Wellbore, e)
        })?;

    let total = listing.len();
    let items: Vec<ObjectRecord> = listing.into_iter().flatten().collect();
    debug!(object_type = %ty, items = items.len(), skipped = total - items.len(), "fetched objects");
    Ok((ty, items))
}

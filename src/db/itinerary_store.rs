use futures::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    Client, Collection,
};
use std::sync::Arc;

use crate::error::StoreError;
use crate::models::{itinerary::ItineraryRecord, record_id::ItineraryId};

pub const ITINERARY_COLLECTION: &str = "itinerary";

/// Persistence collaborator for generated itineraries. Reads hand back raw
/// documents so the caller decides how to present store-specific values.
pub trait ItineraryStore {
    async fn insert(&self, record: &ItineraryRecord) -> Result<ItineraryId, StoreError>;

    /// Newest first by `created_at`.
    async fn recent(&self, limit: i64) -> Result<Vec<Document>, StoreError>;

    async fn find_by_id(&self, id: &ItineraryId) -> Result<Option<Document>, StoreError>;

    async fn collection_names(&self) -> Result<Vec<String>, StoreError>;

    fn database_name(&self) -> &str;
}

#[derive(Clone)]
pub struct MongoItineraryStore {
    client: Arc<Client>,
    database_name: String,
}

impl MongoItineraryStore {
    pub fn new(client: Arc<Client>, database_name: impl Into<String>) -> Self {
        Self {
            client,
            database_name: database_name.into(),
        }
    }

    fn records(&self) -> Collection<ItineraryRecord> {
        self.client
            .database(&self.database_name)
            .collection(ITINERARY_COLLECTION)
    }

    fn documents(&self) -> Collection<Document> {
        self.client
            .database(&self.database_name)
            .collection(ITINERARY_COLLECTION)
    }
}

impl ItineraryStore for MongoItineraryStore {
    async fn insert(&self, record: &ItineraryRecord) -> Result<ItineraryId, StoreError> {
        let result = self.records().insert_one(record).await?;

        result
            .inserted_id
            .as_object_id()
            .map(ItineraryId::from)
            .ok_or_else(|| {
                StoreError::DatabaseError("inserted id is not an ObjectId".to_string())
            })
    }

    async fn recent(&self, limit: i64) -> Result<Vec<Document>, StoreError> {
        let cursor = self
            .documents()
            .find(doc! {})
            .sort(doc! { "created_at": -1 })
            .limit(limit)
            .await?;

        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: &ItineraryId) -> Result<Option<Document>, StoreError> {
        let filter = doc! { "_id": id.as_object_id() };

        Ok(self.documents().find_one(filter).await?)
    }

    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self
            .client
            .database(&self.database_name)
            .list_collection_names()
            .await?)
    }

    fn database_name(&self) -> &str {
        &self.database_name
    }
}

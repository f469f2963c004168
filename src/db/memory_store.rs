use mongodb::bson::{self, oid::ObjectId, Document};
use tokio::sync::RwLock;

use crate::db::itinerary_store::{ItineraryStore, ITINERARY_COLLECTION};
use crate::error::StoreError;
use crate::models::{itinerary::ItineraryRecord, record_id::ItineraryId};

/// Keeps itinerary documents in process memory. Used when no MongoDB is
/// around, mainly by the test suites.
#[derive(Default)]
pub struct InMemoryItineraryStore {
    documents: RwLock<Vec<Document>>,
    unavailable: bool,
}

impl InMemoryItineraryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails, for exercising error paths.
    pub fn unavailable() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
            unavailable: true,
        }
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable {
            return Err(StoreError::DatabaseError(
                "in-memory store is marked unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

impl ItineraryStore for InMemoryItineraryStore {
    async fn insert(&self, record: &ItineraryRecord) -> Result<ItineraryId, StoreError> {
        self.check_available()?;

        let object_id = record.id.unwrap_or_else(ObjectId::new);
        let mut document = bson::to_document(record)?;
        document.insert("_id", object_id);

        self.documents.write().await.push(document);
        Ok(ItineraryId::from(object_id))
    }

    async fn recent(&self, limit: i64) -> Result<Vec<Document>, StoreError> {
        self.check_available()?;

        let documents = self.documents.read().await;
        // Walk newest insert first so equal timestamps keep insertion recency.
        let mut newest_first: Vec<Document> = documents.iter().rev().cloned().collect();
        newest_first.sort_by(|a, b| {
            let a_time = a.get_datetime("created_at").ok();
            let b_time = b.get_datetime("created_at").ok();
            b_time.cmp(&a_time)
        });
        newest_first.truncate(limit.max(0) as usize);

        Ok(newest_first)
    }

    async fn find_by_id(&self, id: &ItineraryId) -> Result<Option<Document>, StoreError> {
        self.check_available()?;

        let wanted = id.as_object_id();
        Ok(self
            .documents
            .read()
            .await
            .iter()
            .find(|doc| doc.get_object_id("_id").ok() == Some(wanted))
            .cloned())
    }

    async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        self.check_available()?;

        if self.documents.read().await.is_empty() {
            Ok(Vec::new())
        } else {
            Ok(vec![ITINERARY_COLLECTION.to_string()])
        }
    }

    fn database_name(&self) -> &str {
        "memory"
    }
}

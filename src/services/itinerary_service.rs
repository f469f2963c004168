use chrono::Utc;
use log::{info, warn};
use mongodb::bson::{DateTime, Document};
use serde::Serialize;
use serde_json::Value;

use crate::db::itinerary_store::ItineraryStore;
use crate::error::ApiError;
use crate::models::{
    itinerary::ItineraryRecord, record_id::ItineraryId, trip_preference::TripPreference,
};
use crate::services::{
    document_serializer::{serialize_document, to_iso8601},
    itinerary_generation_service::generate_itinerary,
};

pub const RECENT_LIMIT: i64 = 10;

#[derive(Debug, Serialize)]
pub struct GeneratedItinerary {
    pub id: String,
    pub itinerary: Value,
}

pub struct ItineraryService<S> {
    store: S,
}

impl<S: ItineraryStore> ItineraryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Generates, saves once, and returns the plan with its `created_at`.
    pub async fn generate(&self, prefs: TripPreference) -> Result<GeneratedItinerary, ApiError> {
        prefs.validate()?;

        let itinerary = generate_itinerary(&prefs);
        let created_at = DateTime::from_chrono(Utc::now());
        let record = ItineraryRecord::new(itinerary, created_at);

        let id = self.store.insert(&record).await?;
        info!("Saved itinerary {} ({})", id, record.itinerary.name);

        let mut payload = serde_json::to_value(&record.itinerary)?;
        if let Value::Object(fields) = &mut payload {
            fields.insert("created_at".to_string(), Value::String(to_iso8601(&created_at)));
        }

        Ok(GeneratedItinerary {
            id: id.to_string(),
            itinerary: payload,
        })
    }

    pub async fn list_recent(&self) -> Result<Vec<Document>, ApiError> {
        let documents = self.store.recent(RECENT_LIMIT).await?;

        Ok(documents.iter().map(serialize_document).collect())
    }

    pub async fn get(&self, raw_id: &str) -> Result<Document, ApiError> {
        let not_found = || ApiError::NotFound("Itinerary not found".to_string());

        let id = match ItineraryId::parse(raw_id) {
            Some(id) => id,
            None => {
                warn!("Rejected malformed itinerary id '{}'", raw_id);
                return Err(not_found());
            }
        };

        match self.store.find_by_id(&id).await? {
            Some(doc) => Ok(serialize_document(&doc)),
            None => Err(not_found()),
        }
    }
}

use actix_web::{web, HttpResponse};
use log::error;
use mongodb::bson::Document;
use serde::Serialize;

use crate::db::itinerary_store::ItineraryStore;
use crate::error::ApiError;
use crate::models::trip_preference::TripPreference;
use crate::services::itinerary_service::ItineraryService;

#[derive(Serialize)]
struct ItineraryList {
    items: Vec<Document>,
}

/*
    POST /api/itineraries/generate
*/
pub async fn generate<S: ItineraryStore + 'static>(
    service: web::Data<ItineraryService<S>>,
    input: web::Json<TripPreference>,
) -> Result<HttpResponse, ApiError> {
    let generated = service.generate(input.into_inner()).await.map_err(|err| {
        if let ApiError::Internal(msg) = &err {
            error!("Failed to generate itinerary: {}", msg);
        }
        err
    })?;

    Ok(HttpResponse::Ok().json(generated))
}

/*
    GET /api/itineraries
*/
pub async fn list<S: ItineraryStore + 'static>(
    service: web::Data<ItineraryService<S>>,
) -> Result<HttpResponse, ApiError> {
    let items = service.list_recent().await.map_err(|err| {
        error!("Failed to list itineraries: {}", err);
        err
    })?;

    Ok(HttpResponse::Ok().json(ItineraryList { items }))
}

/*
    GET /api/itineraries/{id}
*/
pub async fn get_by_id<S: ItineraryStore + 'static>(
    path: web::Path<String>,
    service: web::Data<ItineraryService<S>>,
) -> Result<HttpResponse, ApiError> {
    let doc = service.get(&path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(doc))
}

use actix_web::web;

use crate::db::itinerary_store::ItineraryStore;
use crate::error::ApiError;

pub mod health;
pub mod itinerary;

/// Registers every route. The caller supplies `web::Data<ItineraryService<S>>`.
pub fn config<S: ItineraryStore + 'static>(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::Validation(err.to_string()).into());

    cfg.app_data(json_config)
        .route("/", web::get().to(health::root))
        .route("/health", web::get().to(|| async { "OK" }))
        .route("/test", web::get().to(health::diagnostics::<S>))
        .service(
            web::scope("/api")
                .route("/hello", web::get().to(health::hello))
                .service(
                    web::scope("/itineraries")
                        .route("", web::get().to(itinerary::list::<S>))
                        .route("/generate", web::post().to(itinerary::generate::<S>))
                        .route("/{id}", web::get().to(itinerary::get_by_id::<S>)),
                ),
        );
}

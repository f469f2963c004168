use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};
use serde_json::{json, Value};

use itinerix_api::{
    db::memory_store::InMemoryItineraryStore, routes,
    services::itinerary_service::ItineraryService,
};

pub struct TestApp {
    pub service: web::Data<ItineraryService<InMemoryItineraryStore>>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_store(InMemoryItineraryStore::new())
    }

    pub fn unavailable() -> Self {
        Self::with_store(InMemoryItineraryStore::unavailable())
    }

    fn with_store(store: InMemoryItineraryStore) -> Self {
        Self {
            service: web::Data::new(ItineraryService::new(store)),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.service.clone())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .configure(routes::config::<InMemoryItineraryStore>)
    }
}

pub fn trip_request(destination: &str) -> Value {
    json!({
        "destination": destination,
        "start_date": "2024-06-01",
        "end_date": "2024-06-03",
        "travelers": 2,
        "budget_level": "moderate",
        "pace": "relaxed",
        "mood": ["romantic"],
        "interests": ["food"],
        "notes": null
    })
}

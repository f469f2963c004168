use actix_web::{web, HttpResponse, Responder};
use log::warn;
use serde::Serialize;
use serde_json::json;
use std::time::Duration;

use crate::config::env_flag;
use crate::db::itinerary_store::ItineraryStore;
use crate::services::itinerary_service::ItineraryService;

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);
const MAX_LISTED_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 50;

#[derive(Serialize)]
struct DiagnosticReport {
    backend: String,
    database: String,
    database_url: String,
    database_name: String,
    connection_status: String,
    collections: Vec<String>,
}

pub async fn root() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "Itinerix API is running" }))
}

pub async fn hello() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "Hello from Itinerix backend!" }))
}

fn truncate(message: &str) -> String {
    message.chars().take(MAX_ERROR_CHARS).collect()
}

/*
    GET /test
*/
pub async fn diagnostics<S: ItineraryStore + 'static>(
    service: web::Data<ItineraryService<S>>,
) -> impl Responder {
    let mut report = DiagnosticReport {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: env_flag("DATABASE_URL").to_string(),
        database_name: env_flag("DATABASE_NAME").to_string(),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    let store = service.store();
    match tokio::time::timeout(PROBE_TIMEOUT, store.collection_names()).await {
        Ok(Ok(mut names)) => {
            names.truncate(MAX_LISTED_COLLECTIONS);
            report.database = "✅ Connected & Working".to_string();
            report.connection_status = "Connected".to_string();
            report.collections = names;
        }
        Ok(Err(e)) => {
            warn!("Database probe on '{}' failed: {}", store.database_name(), e);
            report.database = format!("⚠️  Connected but Error: {}", truncate(&e.to_string()));
        }
        Err(_) => {
            warn!("Database probe on '{}' timed out", store.database_name());
            report.database = format!(
                "❌ Error: {}",
                truncate(&format!("no response within {}s", PROBE_TIMEOUT.as_secs()))
            );
        }
    }

    HttpResponse::Ok().json(report)
}

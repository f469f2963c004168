use std::io;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;
use log::{error, info};

use itinerix_api::{
    config::AppConfig,
    db::{itinerary_store::MongoItineraryStore, mongo::create_mongo_client},
    routes,
    services::itinerary_service::ItineraryService,
};

#[actix_web::main]
async fn main() -> io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    info!("Application starting...");

    let config = AppConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        io::Error::other(e)
    })?;

    let client = create_mongo_client(&config.database_url, &config.database_name)
        .await
        .map_err(|e| {
            error!("Failed to create MongoDB client: {}", e);
            io::Error::other(e)
        })?;

    let store = MongoItineraryStore::new(client, config.database_name.clone());
    let service = web::Data::new(ItineraryService::new(store));

    info!("Binding to {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(service.clone())
            .configure(routes::config::<MongoItineraryStore>)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::info;

use geo_api::{config::init_tracing, create_app, validation, AppState};
use geo_core::services::PrefectureService;
use geo_infra::database::{load_prefectures, InMemoryPrefectureRepository};
use geo_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("invalid configuration")?;
    init_tracing(&config.logging)?;

    info!(environment = %config.environment, "Starting GeoRef API server");

    validation::init();

    let prefectures = load_prefectures(config.data.prefecture_data_path.as_deref())
        .context("failed to load prefecture data")?;
    let repository = Arc::new(InMemoryPrefectureRepository::new(prefectures));
    info!(prefectures = repository.len(), "Prefecture data loaded");

    let app_state = web::Data::new(AppState::new(PrefectureService::new(repository)));

    let bind_address = config.server.bind_address();
    info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || create_app(app_state.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {bind_address}"))?
        .run()
        .await?;

    Ok(())
}

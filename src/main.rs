use actix_web::{web, App, HttpServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod app;
mod db;
mod model;
mod service;

use api::health::PushStatus;
use app::AppState;
use model::Config;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present (ignore if missing)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let bind_addr = config.bind_addr();

    let state = AppState::new(config)
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let db_pool = web::Data::new(state.db_pool);
    let push_status = web::Data::new(PushStatus {
        enabled: state.push_enabled,
    });
    let case_service = web::Data::new(state.case_service);
    let verdict_service = web::Data::new(state.verdict_service);
    let vote_service = web::Data::new(state.vote_service);
    let bookmark_service = web::Data::new(state.bookmark_service);
    let comment_service = web::Data::new(state.comment_service);

    tracing::info!("Starting LoveCourt server on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(db_pool.clone())
            .app_data(push_status.clone())
            .app_data(case_service.clone())
            .app_data(verdict_service.clone())
            .app_data(vote_service.clone())
            .app_data(bookmark_service.clone())
            .app_data(comment_service.clone())
            .configure(api::case::configure)
            .configure(api::verdict::configure)
            .configure(api::vote::configure)
            .configure(api::bookmark::configure)
            .configure(api::comment::configure)
            .configure(api::health::configure)
            .configure(api::openapi::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await
}

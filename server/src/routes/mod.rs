pub mod config;
pub mod health;
pub mod page;
pub mod settings;

use axum::{routing::get, Router};
use status_page::page::HealthPage;
use std::path::PathBuf;
use tower_http::services::ServeDir;

#[derive(Clone)]
pub struct AppState {
    pub page: HealthPage,
}

pub fn build_router(state: AppState) -> Router {
    let web_dir = web_dir();
    Router::new()
        .route("/api/config", get(config::get_config).post(config::set_config))
        .route("/api/page", get(page::page_api))
        .route("/settings", get(settings::settings_page).post(settings::settings_save))
        .route("/partials/health-card", get(page::health_card_partial))
        .route("/health", get(health::health))
        .route("/", get(page::home_page))
        .nest_service("/web", ServeDir::new(web_dir))
        .with_state(state)
}

fn web_dir() -> PathBuf {
    std::env::var("STATUS_PAGE_WEB_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join("web"))
}

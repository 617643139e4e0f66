mod forms;
mod routes;
mod views;

use status_page::{health::ReqwestFetcher, page::HealthPage, settings::PageConfig};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = PageConfig::from_env().expect("invalid configuration");
    let page = HealthPage::new(&config, Arc::new(ReqwestFetcher::new()));
    page.mount().await;

    let app = routes::build_router(routes::AppState { page });

    info!("server listening on http://{}", config.bind_addr);
    axum_server::bind(config.bind_addr)
        .serve(app.into_make_service())
        .await
        .expect("server failed");
}

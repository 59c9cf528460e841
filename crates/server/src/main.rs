use std::{net::SocketAddr, sync::Arc};

use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;

mod api;
mod app_state;
mod config;
mod page;

use app_state::AppState;
use config::{load_settings, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(&cli);
    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .init();

    let app = build_router(Arc::new(AppState::default()), settings.max_body_bytes);

    let addr: SocketAddr = settings.server_bind.parse()?;
    info!(%addr, "city selector listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/healthz", get(api::healthz))
        .route(server_api::index_route(), get(api::index).post(api::submit))
        .route(server_api::toggle_route(), post(api::toggle))
        .route(server_api::cities_route(), get(api::list_cities))
        .route(server_api::selection_route(), post(api::submit_json))
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;

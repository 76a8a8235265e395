mod catalog;
mod config;
mod dataset;
mod error;
mod models;
mod routes;
mod templates;

use std::{path::Path, sync::Arc};

use anyhow::Context;
use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{catalog::Catalog, config::Config};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

pub fn router(state: Arc<AppState>, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/movie/{id}", get(routes::movie_detail))
        .route("/surprise", get(routes::surprise))
        .route("/aboutme", get(routes::about))
        .route("/api/movies", get(routes::api_movies))
        .route("/api/movies/{id}", get(routes::api_movie))
        .route("/api/surprise", get(routes::api_surprise))
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(routes::not_found)
        .with_state(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,marquee=debug".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let movies = dataset::load_path(&config.catalog_path)
        .with_context(|| format!("loading {}", config.catalog_path.display()))?;
    let catalog = Catalog::new(movies, config.posters())?;
    tracing::info!(movies = catalog.len(), "catalog ready");

    let state = Arc::new(AppState { catalog: Arc::new(catalog) });
    let app = router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}

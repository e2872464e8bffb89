//! Route definitions and router construction.
//!
//! # Path Parameter Syntax
//! Axum 0.8 uses brace syntax for path parameters: `{name}`, `{filename}`

use axum::Router;
use axum::routing::get;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::bootstrap::{AxumContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// JSON API routes, nested under `/api/v1` by the caller.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/packages", get(handlers::packages::index))
        .route("/packages/{name}", get(handlers::packages::show))
        .route("/summary", get(handlers::packages::summary))
}

/// Create the main Axum router.
pub fn create_router(ctx: AxumContext, cors_config: &CorsConfig) -> Router {
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .route("/health", get(health_check))
        .route(
            "/download/{name}/{filename}",
            get(handlers::downloads::download),
        )
        .nest("/api/v1", api_routes())
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

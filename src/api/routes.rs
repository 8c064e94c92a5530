use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::coaching::coaching_routes;
use super::health::health_check;

pub fn create_routes() -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", coaching_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

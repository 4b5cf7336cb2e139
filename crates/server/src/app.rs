use axum::{Router, routing::get};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;

use crate::routes::root;

/// Builds the application router: the single root route plus response compression
pub fn app() -> Router {
    Router::new()
        .route("/", get(root::root))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
}

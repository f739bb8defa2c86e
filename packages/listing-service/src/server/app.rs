//! Application setup and server configuration.

use std::sync::Arc;

use axum::{extract::Extension, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{
    create_listing_handler, health_handler, list_listings_handler, ping_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub deps: Arc<ServerDeps>,
}

/// Build the Axum application router
pub fn build_app(deps: ServerDeps) -> Router {
    let app_state = AxumAppState {
        deps: Arc::new(deps),
    };

    Router::new()
        .route("/listings/ping", get(ping_handler))
        .route("/listings/health", get(health_handler))
        .route(
            "/listings",
            get(list_listings_handler).post(create_listing_handler),
        )
        .layer(Extension(app_state))
        .layer(TraceLayer::new_for_http())
}

pub mod health;

use axum::{routing::get, Router};

use crate::site::handler::handle_site;
use crate::state::AppState;

/// Health lives under a prefix tenant sites are not expected to publish;
/// everything else, on any method, is a site request.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/_edge/health", get(health::health_handler))
        .fallback(handle_site)
        .with_state(state)
}

use axum::Json;
use serde_json::{json, Value};

/// GET /_edge/health
/// Liveness only; does not touch either store.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "templar-edge"
    }))
}

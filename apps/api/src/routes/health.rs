use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Static health status plus a timestamp. Deliberately no dependency checks:
/// the service has no state to probe beyond being up.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "roaster-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

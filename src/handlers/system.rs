use axum::{extract::State, response::Json};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::server::AppState;

/// GET /health - liveness plus which mode the console is serving in
pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    let now = chrono::Utc::now();
    let demo = state.store.demo_mode().await;

    Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "name": "Platform Gateway Console",
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": now,
            "mode": if demo { "demo" } else { "live" },
        }
    }))
}

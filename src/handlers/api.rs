// The /api surface: demo-backend dispatch plus the small mutations backing
// the console chrome (nav expand state, demo role, banner flag).

use axum::{
    extract::{Path, Query, State},
    http::Method,
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;

use crate::api::{ApiResponse, ApiResult, Envelope};
use crate::auth::ensure_demo_session;
use crate::error::ApiError;
use crate::models::Identity;
use crate::server::AppState;
use crate::types::Role;

/// Any-method /api/*endpoint - serve the call from the mock registry
pub async fn dispatch(
    State(state): State<Arc<AppState>>,
    method: Method,
    Path(endpoint): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    body: Option<Json<Value>>,
) -> Result<Json<Envelope>, ApiError> {
    if !state.store.demo_mode().await {
        return Err(ApiError::bad_gateway(
            "upstream not configured: demo mode is off and no real gateway is wired in",
        ));
    }

    let role = state.store.demo_role().await;
    let body = body.map(|Json(value)| value);
    let envelope = state
        .mock
        .respond(&method, &endpoint, &query, body.as_ref(), role)
        .await?;

    Ok(Json(envelope))
}

#[derive(Debug, Deserialize)]
pub struct ToggleRequest {
    pub section: String,
}

/// POST /api/nav/toggle - flip a section's expand/collapse flag
pub async fn nav_toggle(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ToggleRequest>,
) -> ApiResult<Value> {
    let expanded = state.store.toggle_section(&request.section).await;
    Ok(ApiResponse::success(json!({
        "section": request.section,
        "expanded": expanded,
    })))
}

#[derive(Debug, Deserialize)]
pub struct RoleRequest {
    pub role: Role,
}

/// PUT /api/demo/role - switch the demo role and re-mint the session
pub async fn demo_role(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RoleRequest>,
) -> ApiResult<Identity> {
    state.store.set_demo_role(request.role).await;
    let identity = ensure_demo_session(&state.store).await?;
    Ok(ApiResponse::success(identity))
}

/// POST /api/banner/hide - dismiss the demo banner
pub async fn banner_hide(State(state): State<Arc<AppState>>) -> ApiResult<Value> {
    state.store.set_banner_hidden(true).await;
    Ok(ApiResponse::success(json!({ "bannerHidden": true })))
}

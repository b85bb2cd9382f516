use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Response {
    let session = match state.session.current().await {
        Some(_) => "active",
        None => "empty",
    };
    let children = state.catalog.len().await;

    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "session": session,
        "children": children,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

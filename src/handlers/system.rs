use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::api::load_health;
use crate::models::AppState;

/// Health endpoint: proxied to the remote backend when configured, answered
/// locally otherwise.
pub async fn health_get(State(state): State<AppState>) -> impl IntoResponse {
    let payload = load_health(&state.client, &state.api_base_url).await;
    tracing::debug!(response = ?payload, "Health check");
    Json(payload)
}

use crate::models::HealthResponse;
use crate::startup::AppState;
use axum::{extract::State, Json};

/// Liveness: always 200, independent of the AI provider.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        is_success: true,
        official_email: state.config.official_email.clone(),
        timestamp: chrono::Utc::now(),
        uptime: state.started_at.elapsed().as_secs_f64(),
    })
}

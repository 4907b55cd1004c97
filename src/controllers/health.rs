use crate::models::health_dto::Health;
use axum::Json;
use utoipa;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = Health)
    ),
    tag = "health"
)]
pub async fn health() -> Json<Health> {
    // No database or downstream dependency exists yet, liveness is unconditional
    Json(Health {
        status: "ok".to_string(),
    })
}

use crate::models::info_dto::Info;
use axum::extract::Json;
use utoipa;

#[utoipa::path(get, path = "/")]
pub async fn ping() -> Json<Info> {
    Json(Info {
        status: "ok".to_string(),
        message: "Data Analyst Agent API".to_string(),
    })
}

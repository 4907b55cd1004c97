use crate::models::ack_dto::Ack;
use crate::models::error_dto::ApiError;
use axum::extract::{Json, Multipart};
use tracing::debug;

pub const QUESTIONS_FIELD: &str = "questions.txt";

// The original client sends the questions as text/plain; curl defaults to
// application/octet-stream and older clients omit the header entirely.
const ALLOWED_CONTENT_TYPES: [&str; 2] = ["text/plain", "application/octet-stream"];

/// Accepts a multipart upload with a required `questions.txt` part and replies
/// with the fixed skeleton acknowledgment. The uploaded content is drained and
/// discarded, never stored or logged.
#[utoipa::path(
    post,
    path = "/api/",
    request_body(content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Upload acknowledged", body = Ack),
        (status = 400, description = "Malformed multipart body or unsupported content type", body = crate::models::error_dto::ErrorBody),
        (status = 422, description = "Required questions.txt part is missing", body = crate::models::error_dto::ErrorBody)
    ),
    tag = "analyze"
)]
pub async fn analyze(mut multipart: Multipart) -> Result<Json<Ack>, ApiError> {
    let mut questions_seen = false;

    while let Some(field) = multipart.next_field().await? {
        // Match by field name first, then fall back to the part's filename so
        // clients that name the field differently still get through.
        let matches_questions = field.name() == Some(QUESTIONS_FIELD)
            || field.file_name() == Some(QUESTIONS_FIELD);

        if matches_questions {
            if let Some(content_type) = field.content_type() {
                if !ALLOWED_CONTENT_TYPES.contains(&content_type) {
                    return Err(ApiError::UnsupportedContentType {
                        field: QUESTIONS_FIELD,
                        content_type: content_type.to_string(),
                    });
                }
            }
            // Touch-read to confirm the part is fully received.
            let questions = field.bytes().await?;
            debug!("received questions part ({} bytes)", questions.len());
            questions_seen = true;
        } else {
            // Extra attachments are accepted and ignored at this step.
            let _ = field.bytes().await?;
        }
    }

    if !questions_seen {
        return Err(ApiError::MissingRequiredField {
            field: QUESTIONS_FIELD,
        });
    }

    Ok(Json(Ack::skeleton()))
}

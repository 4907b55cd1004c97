use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Errors the upload endpoint reports back to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{field} is required")]
    MissingRequiredField { field: &'static str },
    #[error("invalid multipart/form-data: {0}")]
    InvalidMultipart(#[from] MultipartError),
    #[error("{field} must be a text file, got {content_type}")]
    UnsupportedContentType {
        field: &'static str,
        content_type: String,
    },
}

/// Validation-error body sent with every 4xx response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    pub field: Option<String>,
    pub message: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingRequiredField { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidMultipart(_) => StatusCode::BAD_REQUEST,
            ApiError::UnsupportedContentType { .. } => StatusCode::BAD_REQUEST,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            ApiError::MissingRequiredField { .. } => "missing_required_field",
            ApiError::InvalidMultipart(_) => "invalid_multipart",
            ApiError::UnsupportedContentType { .. } => "unsupported_content_type",
        }
    }

    fn field(&self) -> Option<String> {
        match self {
            ApiError::MissingRequiredField { field } => Some(field.to_string()),
            ApiError::InvalidMultipart(_) => None,
            ApiError::UnsupportedContentType { field, .. } => Some(field.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.kind().to_string(),
            field: self.field(),
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_field_renders_as_422() {
        let err = ApiError::MissingRequiredField {
            field: "questions.txt",
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "missing_required_field");
        assert_eq!(json["field"], "questions.txt");
        assert_eq!(json["message"], "questions.txt is required");
    }

    #[tokio::test]
    async fn test_unsupported_content_type_renders_as_400() {
        let err = ApiError::UnsupportedContentType {
            field: "questions.txt",
            content_type: "application/json".to_string(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "unsupported_content_type");
        assert_eq!(json["field"], "questions.txt");
    }
}

use crate::config::loader::Config;
use crate::controllers::analyze::__path_analyze;
use crate::controllers::analyze::analyze;
use crate::controllers::health::__path_health;
use crate::controllers::health::health;
use crate::controllers::ping::ping;
use crate::models::ack_dto::Ack;
use crate::models::error_dto::ErrorBody;
use crate::models::health_dto::Health;
use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace;
use tower_http::trace::TraceLayer;
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        analyze,
        health
    ),
    components(
        schemas(Ack, ErrorBody, Health)
    ),
    tags(
        (name = "analyze", description = "Question upload endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
struct ApiDoc;

pub fn create_routes(config: Config) -> Router {
    Router::new()
        .route("/", get(ping))
        .route("/health", get(health))
        // FastAPI-style: the canonical path carries a trailing slash, the bare
        // path is accepted too
        .route("/api/", post(analyze))
        .route("/api", post(analyze))
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
}

use axum::{Json, http::StatusCode, response::IntoResponse, routing::get};
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running")
    )
)]
pub async fn health_checker_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(serde_json::json!({
            "status": "ok",
            "message": "Server is running"
        })),
    )
}

pub fn health_routes() -> OpenApiRouter {
    OpenApiRouter::new().route("/health", get(health_checker_handler))
}

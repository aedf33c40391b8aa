use crate::{
    abstract_trait::directions::DynDirectionsService,
    domain::{
        requests::directions::DirectionsQuery,
        response::directions::{DirectionsErrorResponse, DirectionsHttpError},
    },
    middleware::validate::ValidatedQuery,
    state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use maps::domain::RouteSummary;
use shared::domain::responses::ApiResponse;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/directions",
    tag = "Directions",
    params(DirectionsQuery),
    responses(
        (status = 200, description = "Driving route summary", body = ApiResponse<RouteSummary>),
        (status = 400, description = "Validation error"),
        (status = 422, description = "Route request returned a non-OK status", body = DirectionsErrorResponse),
        (status = 503, description = "Maps SDK unavailable", body = DirectionsErrorResponse)
    )
)]
pub async fn get_directions(
    Extension(service): Extension<DynDirectionsService>,
    ValidatedQuery(params): ValidatedQuery<DirectionsQuery>,
) -> Result<impl IntoResponse, DirectionsHttpError> {
    let response = service
        .route(params.origin(), params.destination())
        .await
        .map_err(DirectionsHttpError)?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn directions_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/directions", get(get_directions))
        .layer(Extension(app_state.di_container.directions.clone()))
}

use crate::{
    abstract_trait::geocode::DynGeocodeService,
    domain::{
        requests::geocode::GeocodeQuery,
        response::geocode::{GeocodeHttpError, GeocodeResponse},
    },
    middleware::validate::ValidatedQuery,
    state::AppState,
};
use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse, routing::get};
use shared::{domain::responses::ApiResponse, errors::ErrorResponse};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/geocode",
    tag = "Geocode",
    params(GeocodeQuery),
    responses(
        (status = 200, description = "Geocoder answer with its status literal", body = ApiResponse<GeocodeResponse>),
        (status = 400, description = "Address is required"),
        (status = 500, description = "API key not configured", body = ErrorResponse)
    )
)]
pub async fn get_geocode(
    Extension(service): Extension<DynGeocodeService>,
    ValidatedQuery(params): ValidatedQuery<GeocodeQuery>,
) -> Result<impl IntoResponse, GeocodeHttpError> {
    let response = service
        .geocode(&params.address)
        .await
        .map_err(GeocodeHttpError)?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn geocode_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/geocode", get(get_geocode))
        .layer(Extension(app_state.di_container.geocode.clone()))
}

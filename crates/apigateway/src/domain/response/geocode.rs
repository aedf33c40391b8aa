use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maps::{
    domain::{GeocodeReply, GeocodeResult},
    errors::GeocodeError,
};
use serde::{Deserialize, Serialize};
use shared::errors::ErrorResponse;
use utoipa::ToSchema;

/// Geocoder answer as-is: the status literal plus whatever results came back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeocodeResponse {
    pub status: String,
    pub results: Vec<GeocodeResult>,
}

impl From<GeocodeReply> for GeocodeResponse {
    fn from(reply: GeocodeReply) -> Self {
        Self {
            status: reply.status.to_string(),
            results: reply.results,
        }
    }
}

pub struct GeocodeHttpError(pub GeocodeError);

impl IntoResponse for GeocodeHttpError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            GeocodeError::MissingApiKey => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::error(self.0.to_string()))).into_response()
    }
}

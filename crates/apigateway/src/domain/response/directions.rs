use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maps::errors::{DirectionsError, Recovery};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error view for a failed directions request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DirectionsErrorResponse {
    pub status: Option<String>,
    pub message: String,
    pub recovery: Recovery,
}

impl From<&DirectionsError> for DirectionsErrorResponse {
    fn from(err: &DirectionsError) -> Self {
        Self {
            status: err.status().map(str::to_string),
            message: err.to_string(),
            recovery: err.recovery(),
        }
    }
}

pub struct DirectionsHttpError(pub DirectionsError);

impl IntoResponse for DirectionsHttpError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DirectionsError::MissingApiKey
            | DirectionsError::ScriptLoad(_)
            | DirectionsError::NotReady => StatusCode::SERVICE_UNAVAILABLE,
            DirectionsError::RouteStatus(_) => StatusCode::UNPROCESSABLE_ENTITY,
            DirectionsError::Discarded => StatusCode::CONFLICT,
        };

        (status, Json(DirectionsErrorResponse::from(&self.0))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maps::domain::DirectionsStatus;

    #[test]
    fn route_failure_view_names_status_and_offers_nothing() {
        let view = DirectionsErrorResponse::from(&DirectionsError::RouteStatus(
            DirectionsStatus::RequestDenied,
        ));

        assert_eq!(view.status.as_deref(), Some("REQUEST_DENIED"));
        assert_eq!(view.message, "Failed to get directions: REQUEST_DENIED");
        assert_eq!(view.recovery, Recovery::None);
    }

    #[test]
    fn script_failure_view_offers_reload() {
        let view = DirectionsErrorResponse::from(&DirectionsError::NotReady);

        assert!(view.status.is_none());
        assert_eq!(view.recovery, Recovery::Reload);
    }

    #[test]
    fn route_failure_is_unprocessable() {
        let response = DirectionsHttpError(DirectionsError::RouteStatus(
            DirectionsStatus::ZeroResults,
        ))
        .into_response();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}

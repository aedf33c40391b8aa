use async_trait::async_trait;
use maps::{
    domain::{LatLng, RouteSummary},
    errors::DirectionsError,
};
use shared::domain::responses::ApiResponse;
use std::sync::Arc;

pub type DynDirectionsService = Arc<dyn DirectionsServiceTrait + Send + Sync>;

#[async_trait]
pub trait DirectionsServiceTrait {
    async fn route(
        &self,
        origin: LatLng,
        destination: LatLng,
    ) -> Result<ApiResponse<RouteSummary>, DirectionsError>;
}

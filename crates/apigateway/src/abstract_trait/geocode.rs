use crate::domain::response::geocode::GeocodeResponse;
use async_trait::async_trait;
use maps::errors::GeocodeError;
use shared::domain::responses::ApiResponse;
use std::sync::Arc;

pub type DynGeocodeService = Arc<dyn GeocodeServiceTrait + Send + Sync>;

#[async_trait]
pub trait GeocodeServiceTrait {
    async fn geocode(&self, address: &str) -> Result<ApiResponse<GeocodeResponse>, GeocodeError>;
}

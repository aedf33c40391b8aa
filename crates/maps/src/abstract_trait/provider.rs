use crate::domain::{DirectionsRequest, GeocodeReply, LatLng, MapOptions, MapSurface, RouteReply};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynMapsProvider = Arc<dyn MapsProviderTrait + Send + Sync>;

#[async_trait]
pub trait MapsProviderTrait {
    fn api_key(&self) -> &str;
    fn sdk_url(&self) -> String;
    /// Polled after the SDK script loads; see `wait_until_ready`.
    async fn is_ready(&self) -> bool;
    fn create_map(&self, container: &str, center: LatLng, options: MapOptions) -> MapSurface;
    /// Never fails: transport problems come back as `UNKNOWN_ERROR`.
    async fn route(&self, request: &DirectionsRequest) -> RouteReply;
    /// Never fails: transport problems come back as `UNKNOWN_ERROR`.
    async fn geocode(&self, address: &str) -> GeocodeReply;
}

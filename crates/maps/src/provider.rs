use crate::{
    abstract_trait::MapsProviderTrait,
    domain::{
        DirectionsRequest, DirectionsResult, DirectionsStatus, GeocodeReply, GeocodeResult,
        LatLng, MapOptions, MapSurface, Route, RouteReply,
    },
    loader::ScriptRegistry,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{error, info, warn};

const SDK_BASE_URL: &str = "https://maps.googleapis.com/maps/api/js";
const DIRECTIONS_URL: &str = "https://maps.googleapis.com/maps/api/directions/json";
const GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

#[derive(Debug, Deserialize)]
struct DirectionsApiResponse {
    status: DirectionsStatus,
    #[serde(default)]
    routes: Vec<Route>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeApiResponse {
    status: DirectionsStatus,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Clone)]
pub struct GoogleMapsProvider {
    http: Client,
    api_key: String,
    registry: ScriptRegistry,
    directions_url: String,
    geocode_url: String,
}

impl GoogleMapsProvider {
    pub fn new(http: Client, api_key: impl Into<String>, registry: ScriptRegistry) -> Self {
        Self {
            http,
            api_key: api_key.into(),
            registry,
            directions_url: DIRECTIONS_URL.to_string(),
            geocode_url: GEOCODE_URL.to_string(),
        }
    }

    /// Points route requests somewhere other than the public endpoint.
    pub fn with_directions_url(mut self, url: impl Into<String>) -> Self {
        self.directions_url = url.into();
        self
    }

    pub fn with_geocode_url(mut self, url: impl Into<String>) -> Self {
        self.geocode_url = url.into();
        self
    }

    async fn request_route(
        &self,
        request: &DirectionsRequest,
    ) -> Result<DirectionsApiResponse, reqwest::Error> {
        let alternatives = request.provide_route_alternatives.to_string();

        self.http
            .get(&self.directions_url)
            .query(&[
                ("origin", request.origin.to_query()),
                ("destination", request.destination.to_query()),
                ("mode", request.travel_mode.as_query().to_string()),
                ("alternatives", alternatives),
                ("key", self.api_key.clone()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<DirectionsApiResponse>()
            .await
    }

    async fn request_geocode(&self, address: &str) -> Result<GeocodeApiResponse, reqwest::Error> {
        self.http
            .get(&self.geocode_url)
            .query(&[("address", address), ("key", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json::<GeocodeApiResponse>()
            .await
    }
}

#[async_trait]
impl MapsProviderTrait for GoogleMapsProvider {
    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn sdk_url(&self) -> String {
        format!("{SDK_BASE_URL}?key={}&libraries=places", self.api_key)
    }

    /// There is no browser runtime to initialize server-side, so the SDK
    /// counts as ready as soon as the registry holds it. After a successful
    /// `ensure_loaded` the first poll already passes; `NotReady` only comes
    /// from providers whose readiness can lag the load.
    async fn is_ready(&self) -> bool {
        self.registry.is_loaded(&self.sdk_url()).await
    }

    fn create_map(&self, container: &str, center: LatLng, options: MapOptions) -> MapSurface {
        info!("🗺️ Creating map in '{container}' centered on {}", center.to_query());
        MapSurface::new(container, center, options)
    }

    async fn route(&self, request: &DirectionsRequest) -> RouteReply {
        info!(
            "🧭 Requesting directions from {} to {}",
            request.origin.to_query(),
            request.destination.to_query()
        );

        let response = match self.request_route(request).await {
            Ok(response) => response,
            Err(e) => {
                error!("❌ Directions request failed: {e}");
                return RouteReply::failed(DirectionsStatus::UnknownError);
            }
        };

        if !response.status.is_ok() {
            warn!(
                "⚠️ Directions returned {}: {}",
                response.status,
                response.error_message.as_deref().unwrap_or_default()
            );
            return RouteReply::failed(response.status);
        }

        info!("✅ Directions received: {} routes", response.routes.len());

        RouteReply {
            status: response.status,
            result: Some(DirectionsResult {
                routes: response.routes,
            }),
        }
    }

    async fn geocode(&self, address: &str) -> GeocodeReply {
        info!("📍 Geocoding address: {address}");

        let response = match self.request_geocode(address).await {
            Ok(response) => response,
            Err(e) => {
                error!("❌ Geocoding request failed: {e}");
                return GeocodeReply::failed(DirectionsStatus::UnknownError);
            }
        };

        if !response.status.is_ok() {
            warn!(
                "⚠️ Geocoding returned {}: {}",
                response.status,
                response.error_message.as_deref().unwrap_or_default()
            );
        } else {
            info!("✅ Geocoding received: {} results", response.results.len());
        }

        GeocodeReply {
            status: response.status,
            results: response.results,
        }
    }
}

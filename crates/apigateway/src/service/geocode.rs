use crate::{
    abstract_trait::geocode::GeocodeServiceTrait, domain::response::geocode::GeocodeResponse,
};
use async_trait::async_trait;
use maps::{abstract_trait::DynMapsProvider, errors::GeocodeError};
use shared::{
    domain::responses::ApiResponse,
    utils::{Method, Metrics, TracingContext},
};
use tracing::{Instrument, error};

/// Address lookup. Whatever status the geocoder answers with is passed
/// through; only a missing key is an error.
#[derive(Clone)]
pub struct GeocodeService {
    provider: DynMapsProvider,
    metrics: Metrics,
}

impl GeocodeService {
    pub fn new(provider: DynMapsProvider, metrics: Metrics) -> Self {
        Self { provider, metrics }
    }
}

#[async_trait]
impl GeocodeServiceTrait for GeocodeService {
    async fn geocode(&self, address: &str) -> Result<ApiResponse<GeocodeResponse>, GeocodeError> {
        let tracing_ctx = TracingContext::start("geocode.lookup");

        if self.provider.api_key().is_empty() {
            error!("❌ GOOGLE_MAPS_API_KEY not set in environment variables");
            let err = GeocodeError::MissingApiKey;
            tracing_ctx.complete(&self.metrics, Method::Get, false, &err.to_string());
            return Err(err);
        }

        let reply = self
            .provider
            .geocode(address)
            .instrument(tracing_ctx.span.clone())
            .await;

        let message = if reply.status.is_ok() {
            format!("{} results found", reply.results.len())
        } else {
            format!("Geocoding returned {}", reply.status)
        };
        tracing_ctx.complete(&self.metrics, Method::Get, reply.status.is_ok(), &message);

        Ok(ApiResponse::success(message, GeocodeResponse::from(reply)))
    }
}

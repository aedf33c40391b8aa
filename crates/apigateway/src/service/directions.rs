use crate::abstract_trait::directions::DirectionsServiceTrait;
use async_trait::async_trait;
use maps::{
    abstract_trait::DynMapsProvider,
    domain::{LatLng, RouteSummary},
    errors::DirectionsError,
    loader::ScriptRegistry,
    session::{DirectionsSession, ReadinessPolicy},
};
use shared::{
    domain::responses::ApiResponse,
    utils::{Method, Metrics, TracingContext},
};
use tracing::{Instrument, info};

const MAP_CONTAINER: &str = "directions-map";

/// Runs one directions session per request and tears it down afterwards.
#[derive(Clone)]
pub struct DirectionsService {
    provider: DynMapsProvider,
    registry: ScriptRegistry,
    policy: ReadinessPolicy,
    metrics: Metrics,
}

impl DirectionsService {
    pub fn new(
        provider: DynMapsProvider,
        registry: ScriptRegistry,
        policy: ReadinessPolicy,
        metrics: Metrics,
    ) -> Self {
        Self {
            provider,
            registry,
            policy,
            metrics,
        }
    }
}

#[async_trait]
impl DirectionsServiceTrait for DirectionsService {
    async fn route(
        &self,
        origin: LatLng,
        destination: LatLng,
    ) -> Result<ApiResponse<RouteSummary>, DirectionsError> {
        info!(
            "🧭 Directions requested from {} to {}",
            origin.to_query(),
            destination.to_query()
        );

        let tracing_ctx = TracingContext::start("directions.route");

        let session = DirectionsSession::new(
            self.provider.clone(),
            self.registry.clone(),
            self.policy,
            MAP_CONTAINER,
        );

        let result = session
            .activate(origin, destination)
            .instrument(tracing_ctx.span.clone())
            .await;

        session.teardown();

        match result {
            Ok(summary) => {
                tracing_ctx.complete(
                    &self.metrics,
                    Method::Get,
                    true,
                    &format!("{} routes found", summary.route_count),
                );
                Ok(ApiResponse::success("Directions retrieved successfully", summary))
            }
            Err(err) => {
                tracing_ctx.complete(&self.metrics, Method::Get, false, &err.to_string());
                Err(err)
            }
        }
    }
}

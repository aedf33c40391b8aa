use crate::{
    abstract_trait::{directions::DynDirectionsService, geocode::DynGeocodeService},
    service::{DirectionsService, GeocodeService},
};
use anyhow::{Context, Result};
use maps::{
    loader::ScriptRegistry, provider::GoogleMapsProvider, session::ReadinessPolicy,
};
use order::di::{DependenciesInject as OrderDependencies, DependenciesInjectDeps};
use shared::{
    config::{Config, SupabaseClient},
    utils::Metrics,
};
use std::{fmt, sync::Arc, time::Duration};

#[derive(Clone)]
pub struct DependenciesInject {
    pub order: OrderDependencies,
    pub directions: DynDirectionsService,
    pub geocode: DynGeocodeService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("order", &self.order)
            .field("directions", &"DynDirectionsService")
            .field("geocode", &"DynGeocodeService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(config: &Config, metrics: Metrics) -> Result<Self> {
        let db = SupabaseClient::new(&config.supabase_url, &config.supabase_anon_key)
            .context("Failed to create data API client")?;

        let order = OrderDependencies::new(DependenciesInjectDeps {
            db,
            metrics: metrics.clone(),
            display_utc_offset_minutes: config.display_utc_offset_minutes,
        })
        .context("Failed to initialize order services")?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to build HTTP client for maps")?;

        let registry = ScriptRegistry::global();
        let provider = Arc::new(GoogleMapsProvider::new(
            http,
            config.maps.api_key.clone(),
            registry.clone(),
        ));

        let directions: DynDirectionsService = Arc::new(DirectionsService::new(
            provider.clone(),
            registry,
            ReadinessPolicy::from(&config.maps),
            metrics.clone(),
        ));

        let geocode: DynGeocodeService = Arc::new(GeocodeService::new(provider, metrics));

        Ok(Self {
            order,
            directions,
            geocode,
        })
    }
}

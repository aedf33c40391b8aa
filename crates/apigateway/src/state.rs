use crate::di::DependenciesInject;
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use shared::{config::Config, utils::Metrics};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let mut registry = Registry::default();
        let metrics = Metrics::new();
        metrics.register(&mut registry);

        let di_container = DependenciesInject::new(config, metrics.clone())
            .context("Failed to initialize dependency injection container")?;

        info!("✅ Application state ready");

        Ok(Self {
            di_container,
            registry: Arc::new(Mutex::new(registry)),
            metrics,
        })
    }

    /// State over caller-supplied services, for wiring the router in tests.
    pub fn from_parts(di_container: DependenciesInject, metrics: Metrics) -> Self {
        let mut registry = Registry::default();
        metrics.register(&mut registry);

        Self {
            di_container,
            registry: Arc::new(Mutex::new(registry)),
            metrics,
        }
    }
}

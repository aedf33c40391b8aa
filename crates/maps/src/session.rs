use crate::{
    abstract_trait::DynMapsProvider,
    domain::{DirectionsRequest, LatLng, MapOptions, MapSurface, PolylineOptions, RouteSummary},
    errors::DirectionsError,
    loader::{ScriptRegistry, wait_until_ready},
};
use shared::config::MapsConfig;
use std::{
    sync::{Mutex, MutexGuard, PoisonError},
    time::Duration,
};
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadinessPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for ReadinessPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(100),
            max_attempts: 20,
        }
    }
}

impl From<&MapsConfig> for ReadinessPolicy {
    fn from(config: &MapsConfig) -> Self {
        Self {
            interval: config.ready_poll_interval,
            max_attempts: config.ready_max_attempts,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Idle,
    LoadingScript,
    ScriptReady,
    RequestingRoute,
    RouteReady(RouteSummary),
    Failed(DirectionsError),
}

struct SessionInner {
    generation: u64,
    state: SessionState,
    surface: Option<MapSurface>,
}

/// One directions view: load the SDK, build a map, request one route.
///
/// Every activation bumps a generation counter. Work that finishes after a
/// newer activation or a teardown sees a stale generation and is dropped
/// without touching the state or the surface.
pub struct DirectionsSession {
    provider: DynMapsProvider,
    registry: ScriptRegistry,
    policy: ReadinessPolicy,
    container: String,
    inner: Mutex<SessionInner>,
}

impl DirectionsSession {
    pub fn new(
        provider: DynMapsProvider,
        registry: ScriptRegistry,
        policy: ReadinessPolicy,
        container: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            registry,
            policy,
            container: container.into(),
            inner: Mutex::new(SessionInner {
                generation: 0,
                state: SessionState::Idle,
                surface: None,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> SessionState {
        self.lock().state.clone()
    }

    pub fn surface(&self) -> Option<MapSurface> {
        self.lock().surface.clone()
    }

    pub fn route_drawn(&self) -> bool {
        self.lock().surface.as_ref().is_some_and(MapSurface::has_route)
    }

    /// Moves to `state` only if `generation` is still the live one.
    fn advance(&self, generation: u64, state: SessionState) -> Result<(), DirectionsError> {
        let mut inner = self.lock();
        if inner.generation != generation {
            return Err(DirectionsError::Discarded);
        }
        inner.state = state;
        Ok(())
    }

    fn fail(&self, generation: u64, err: DirectionsError) -> DirectionsError {
        error!("❌ Directions failed: {err}");
        match self.advance(generation, SessionState::Failed(err.clone())) {
            Ok(()) => err,
            Err(discarded) => discarded,
        }
    }

    pub async fn activate(
        &self,
        origin: LatLng,
        destination: LatLng,
    ) -> Result<RouteSummary, DirectionsError> {
        let generation = {
            let mut inner = self.lock();
            inner.generation += 1;
            inner.state = SessionState::LoadingScript;
            inner.generation
        };

        if self.provider.api_key().is_empty() {
            return Err(self.fail(generation, DirectionsError::MissingApiKey));
        }

        let sdk_url = self.provider.sdk_url();

        if self.registry.is_loaded(&sdk_url).await {
            info!("📦 Maps SDK already loaded");
        } else if let Err(e) = self.registry.ensure_loaded(&sdk_url).await {
            return Err(self.fail(generation, DirectionsError::ScriptLoad(e.to_string())));
        }

        if let Err(e) = wait_until_ready(
            || self.provider.is_ready(),
            self.policy.interval,
            self.policy.max_attempts,
        )
        .await
        {
            warn!("⚠️ Maps SDK readiness check failed: {e}");
            return Err(self.fail(generation, DirectionsError::NotReady));
        }

        self.advance(generation, SessionState::ScriptReady)?;

        let surface = self
            .provider
            .create_map(&self.container, origin, MapOptions::default());

        {
            let mut inner = self.lock();
            if inner.generation != generation {
                return Err(DirectionsError::Discarded);
            }
            inner.surface = Some(surface);
            inner.state = SessionState::RequestingRoute;
        }

        let request = DirectionsRequest::driving(origin, destination);
        let reply = self.provider.route(&request).await;

        let mut inner = self.lock();
        if inner.generation != generation {
            info!("🗑️ Dropping directions reply for a closed view");
            return Err(DirectionsError::Discarded);
        }

        match reply.result {
            Some(result) if reply.status.is_ok() => {
                let summary = RouteSummary::from(&result);
                if let Some(surface) = inner.surface.as_mut() {
                    surface.set_directions(result, PolylineOptions::default());
                }
                inner.state = SessionState::RouteReady(summary.clone());
                info!(
                    "✅ Route drawn: {} routes, {}",
                    summary.route_count,
                    summary.distance.as_deref().unwrap_or("unknown distance")
                );
                Ok(summary)
            }
            _ => {
                let err = DirectionsError::RouteStatus(reply.status);
                error!("❌ {err}");
                inner.state = SessionState::Failed(err.clone());
                Err(err)
            }
        }
    }

    /// Detaches any drawn route, drops the map and returns to idle.
    pub fn teardown(&self) {
        let mut inner = self.lock();
        inner.generation += 1;
        if let Some(mut surface) = inner.surface.take() {
            surface.detach_route();
        }
        inner.state = SessionState::Idle;
    }
}

use crate::{
    abstract_trait::{DynScriptFetcher, ScriptFetcherTrait},
    errors::LoaderError,
};
use async_trait::async_trait;
use reqwest::Client;
use std::{
    collections::HashMap,
    future::Future,
    sync::{Arc, OnceLock},
    time::Duration,
};
use tokio::sync::{Mutex, OnceCell};
use tracing::{error, info, warn};

static GLOBAL_REGISTRY: OnceLock<ScriptRegistry> = OnceLock::new();

/// Fetches the resource over HTTP and treats any 2xx as loaded.
#[derive(Clone, Default)]
pub struct HttpScriptFetcher {
    http: Client,
}

impl HttpScriptFetcher {
    pub fn new(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl ScriptFetcherTrait for HttpScriptFetcher {
    async fn fetch(&self, url: &str) -> Result<(), LoaderError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(LoaderError::Status(status.as_u16()));
        }

        Ok(())
    }
}

/// Process-wide record of which external resources have been loaded.
///
/// One entry per URL. Concurrent `ensure_loaded` calls for the same URL share
/// a single fetch; a failed fetch leaves the entry empty so the next caller
/// tries again. Entries are never removed.
#[derive(Clone)]
pub struct ScriptRegistry {
    fetcher: DynScriptFetcher,
    entries: Arc<Mutex<HashMap<String, Arc<OnceCell<()>>>>>,
}

impl ScriptRegistry {
    pub fn new(fetcher: DynScriptFetcher) -> Self {
        Self {
            fetcher,
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Shared registry backed by [`HttpScriptFetcher`], created on first use.
    pub fn global() -> ScriptRegistry {
        GLOBAL_REGISTRY
            .get_or_init(|| ScriptRegistry::new(Arc::new(HttpScriptFetcher::default())))
            .clone()
    }

    async fn entry(&self, url: &str) -> Arc<OnceCell<()>> {
        let mut entries = self.entries.lock().await;
        entries.entry(url.to_string()).or_default().clone()
    }

    pub async fn is_loaded(&self, url: &str) -> bool {
        let entries = self.entries.lock().await;
        entries.get(url).is_some_and(|cell| cell.initialized())
    }

    pub async fn ensure_loaded(&self, url: &str) -> Result<(), LoaderError> {
        let cell = self.entry(url).await;

        if cell.initialized() {
            info!("📦 Script already loaded: {}", redact(url));
            return Ok(());
        }

        cell.get_or_try_init(|| async {
            info!("🚀 Loading script: {}", redact(url));
            match self.fetcher.fetch(url).await {
                Ok(()) => {
                    info!("✅ Script loaded: {}", redact(url));
                    Ok(())
                }
                Err(e) => {
                    error!("❌ Failed to load script {}: {e}", redact(url));
                    Err(e)
                }
            }
        })
        .await
        .map(|_| ())
    }
}

/// Polls `is_ready` up to `max_attempts` times, `interval` apart.
pub async fn wait_until_ready<F, Fut>(
    is_ready: F,
    interval: Duration,
    max_attempts: u32,
) -> Result<(), LoaderError>
where
    F: Fn() -> Fut,
    Fut: Future<Output = bool>,
{
    for attempt in 1..=max_attempts {
        if is_ready().await {
            return Ok(());
        }
        if attempt < max_attempts {
            tokio::time::sleep(interval).await;
        }
    }

    warn!("⚠️ Resource not ready after {max_attempts} attempts");
    Err(LoaderError::NotReady {
        attempts: max_attempts,
    })
}

// keys travel in the query string
fn redact(url: &str) -> &str {
    url.split_once('?').map_or(url, |(base, _)| base)
}

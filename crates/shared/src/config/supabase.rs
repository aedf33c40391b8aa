use crate::errors::RepositoryError;
use anyhow::Context;
use reqwest::{Client, RequestBuilder, Response, header::CONTENT_RANGE};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::error;

/// Thin PostgREST client for the hosted backend.
///
/// Every request carries the public key both as `apikey` and as a bearer
/// token, which is what the hosted gateway expects for anonymous reads.
#[derive(Clone)]
pub struct SupabaseClient {
    http: Client,
    base_url: String,
    anon_key: String,
}

impl std::fmt::Debug for SupabaseClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseClient")
            .field("base_url", &self.base_url)
            .field("anon_key", &"[REDACTED]")
            .finish()
    }
}

impl SupabaseClient {
    pub fn new(base_url: &str, anon_key: &str) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to build HTTP client for the data API")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        })
    }

    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{table}", self.base_url)
    }

    pub fn get(&self, table: &str) -> RequestBuilder {
        self.authorized(self.http.get(self.table_url(table)))
    }

    pub fn patch(&self, table: &str) -> RequestBuilder {
        self.authorized(self.http.patch(self.table_url(table)))
    }

    pub fn head(&self, table: &str) -> RequestBuilder {
        self.authorized(self.http.head(self.table_url(table)))
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }

    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, RepositoryError> {
        let response = Self::checked(request).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Issues a ranged `HEAD` with `Prefer: count=exact` and reads the total
    /// from `Content-Range`.
    pub async fn count(&self, request: RequestBuilder) -> Result<i64, RepositoryError> {
        let response = Self::checked(request.header("Prefer", "count=exact")).await?;

        let header = response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| RepositoryError::Custom("Missing Content-Range header".into()))?;

        parse_content_range(header)
    }

    async fn checked(request: RequestBuilder) -> Result<Response, RepositoryError> {
        let response = request.send().await.map_err(|e| {
            error!("❌ Data API request failed: {e}");
            RepositoryError::from(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        error!("❌ Data API returned {status}: {message}");

        Err(RepositoryError::Upstream {
            status: status.as_u16(),
            message,
        })
    }
}

/// Parses the total out of a `Content-Range` value such as `0-9/42` or `*/0`.
pub fn parse_content_range(value: &str) -> Result<i64, RepositoryError> {
    let total = value
        .rsplit_once('/')
        .map(|(_, total)| total.trim())
        .ok_or_else(|| RepositoryError::Custom(format!("Malformed Content-Range: {value}")))?;

    total
        .parse::<i64>()
        .map_err(|_| RepositoryError::Custom(format!("Content-Range has no exact total: {value}")))
}

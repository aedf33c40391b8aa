use crate::errors::LoaderError;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynScriptFetcher = Arc<dyn ScriptFetcherTrait + Send + Sync>;

#[async_trait]
pub trait ScriptFetcherTrait {
    /// Retrieves the resource at `url`. Success means it is usable.
    async fn fetch(&self, url: &str) -> Result<(), LoaderError>;
}

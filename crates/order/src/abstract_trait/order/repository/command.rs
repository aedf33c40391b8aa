use anyhow::Result;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Sets `order_status` and `status_updated_at` on one order.
    async fn update_status(
        &self,
        order_id: &str,
        status: &str,
        updated_at: &str,
    ) -> Result<(), RepositoryError>;
}

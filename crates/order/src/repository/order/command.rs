use crate::abstract_trait::order::repository::OrderCommandRepositoryTrait;
use anyhow::Result;
use async_trait::async_trait;
use serde_json::{Value, json};
use shared::{config::SupabaseClient, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderCommandRepository {
    db: SupabaseClient,
}

impl OrderCommandRepository {
    pub fn new(db: SupabaseClient) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderCommandRepositoryTrait for OrderCommandRepository {
    async fn update_status(
        &self,
        order_id: &str,
        status: &str,
        updated_at: &str,
    ) -> Result<(), RepositoryError> {
        let filter = format!("eq.{order_id}");

        let request = self
            .db
            .patch("order")
            .query(&[("order_id", filter.as_str()), ("select", "order_id")])
            .header("Prefer", "return=representation")
            .json(&json!({
                "order_status": status,
                "status_updated_at": updated_at,
            }));

        let updated: Vec<Value> = self.db.fetch_json(request).await.map_err(|err| {
            error!("❌ Failed to update status of order {order_id}: {err:?}");
            err
        })?;

        if updated.is_empty() {
            error!("❌ No order matched ID {order_id}");
            return Err(RepositoryError::NotFound);
        }

        info!("✅ Order {order_id} moved to '{status}'");
        Ok(())
    }
}

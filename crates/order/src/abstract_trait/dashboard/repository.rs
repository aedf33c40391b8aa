use crate::model::dashboard::{ChartRecord, RevenueRecord};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynDashboardRepository = Arc<dyn DashboardRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait DashboardRepositoryTrait {
    async fn completed_totals(&self) -> Result<Vec<RevenueRecord>, RepositoryError>;
    async fn count_orders(&self) -> Result<i64, RepositoryError>;
    async fn count_menu(&self) -> Result<i64, RepositoryError>;
    async fn count_employees(&self) -> Result<i64, RepositoryError>;
    async fn orders_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ChartRecord>, RepositoryError>;
}

use crate::{
    abstract_trait::dashboard::DashboardRepositoryTrait,
    model::dashboard::{ChartRecord, RevenueRecord},
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use shared::{config::SupabaseClient, errors::RepositoryError};
use tracing::{error, info};

const EMPLOYEE_ROLES: &str = "in.(staff,chef,rider)";

#[derive(Clone)]
pub struct DashboardRepository {
    db: SupabaseClient,
}

impl DashboardRepository {
    pub fn new(db: SupabaseClient) -> Self {
        Self { db }
    }

    async fn count(
        &self,
        table: &str,
        column: &str,
        filter: Option<(&str, &str)>,
    ) -> Result<i64, RepositoryError> {
        let mut request = self.db.head(table).query(&[("select", column)]);
        if let Some(filter) = filter {
            request = request.query(&[filter]);
        }

        let total = self.db.count(request).await.map_err(|e| {
            error!("❌ Failed to count rows of {table}: {e:?}");
            e
        })?;

        info!("📊 {table} has {total} matching rows");
        Ok(total)
    }
}

#[async_trait]
impl DashboardRepositoryTrait for DashboardRepository {
    async fn completed_totals(&self) -> Result<Vec<RevenueRecord>, RepositoryError> {
        let request = self
            .db
            .get("order")
            .query(&[("select", "total_price"), ("order_status", "eq.Completed")]);

        self.db.fetch_json(request).await.map_err(|e| {
            error!("❌ Failed to fetch completed order totals: {e:?}");
            e
        })
    }

    async fn count_orders(&self) -> Result<i64, RepositoryError> {
        self.count("order", "order_id", None).await
    }

    async fn count_menu(&self) -> Result<i64, RepositoryError> {
        self.count("menu", "menu_id", None).await
    }

    async fn count_employees(&self) -> Result<i64, RepositoryError> {
        self.count("users", "user_uid", Some(("user_role", EMPLOYEE_ROLES)))
            .await
    }

    async fn orders_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<ChartRecord>, RepositoryError> {
        let gte = format!("gte.{}", start.to_rfc3339_opts(SecondsFormat::Millis, true));
        let lte = format!("lte.{}", end.to_rfc3339_opts(SecondsFormat::Millis, true));

        let request = self.db.get("order").query(&[
            ("select", "total_price,created_at,order_status"),
            ("created_at", gte.as_str()),
            ("created_at", lte.as_str()),
            ("order", "created_at.asc"),
        ]);

        self.db.fetch_json(request).await.map_err(|e| {
            error!("❌ Failed to fetch orders for chart window: {e:?}");
            e
        })
    }
}

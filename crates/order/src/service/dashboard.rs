use crate::{
    abstract_trait::dashboard::{DashboardServiceTrait, DynDashboardRepository},
    domain::{
        requests::dashboard::FindChartData,
        response::dashboard::{ChartDataResponse, DashboardStatsResponse},
    },
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{Months, Utc};
use shared::{
    domain::responses::ApiResponse,
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use tracing::{Instrument, info};

#[derive(Clone)]
pub struct DashboardService {
    pub repository: DynDashboardRepository,
    pub metrics: Metrics,
}

impl DashboardService {
    pub fn new(repository: DynDashboardRepository, metrics: Metrics) -> Self {
        Self {
            repository,
            metrics,
        }
    }

    async fn collect_stats(&self) -> Result<DashboardStatsResponse, ServiceError> {
        let (totals, total_orders, total_menu, total_employees) = tokio::try_join!(
            self.repository.completed_totals(),
            self.repository.count_orders(),
            self.repository.count_menu(),
            self.repository.count_employees(),
        )?;

        let total_revenue = totals
            .iter()
            .map(|row| row.total_price.unwrap_or_default())
            .sum();

        Ok(DashboardStatsResponse {
            total_revenue,
            total_orders,
            total_menu,
            total_employees,
        })
    }
}

#[async_trait]
impl DashboardServiceTrait for DashboardService {
    async fn stats(&self) -> Result<ApiResponse<DashboardStatsResponse>, ServiceError> {
        info!("📊 Computing dashboard stats");

        let tracing_ctx = TracingContext::start("dashboard.stats");

        match self.collect_stats().instrument(tracing_ctx.span.clone()).await {
            Ok(stats) => {
                let log_message = format!(
                    "Stats ready: revenue={}, orders={}",
                    stats.total_revenue, stats.total_orders
                );
                tracing_ctx.complete(&self.metrics, Method::Get, true, &log_message);
                Ok(ApiResponse::success("Dashboard stats retrieved successfully", stats))
            }
            Err(e) => {
                tracing_ctx.complete(
                    &self.metrics,
                    Method::Get,
                    false,
                    &format!("Failed to compute stats: {e}"),
                );
                Err(e)
            }
        }
    }

    async fn chart(
        &self,
        req: &FindChartData,
    ) -> Result<ApiResponse<ChartDataResponse>, ServiceError> {
        info!("📈 Building chart for the last {} months", req.months_back);

        let tracing_ctx = TracingContext::start("dashboard.chart");

        let end = Utc::now();
        let Some(start) = end.checked_sub_months(Months::new(req.months_back)) else {
            let message = format!("months_back out of range: {}", req.months_back);
            tracing_ctx.complete(&self.metrics, Method::Get, false, &message);
            return Err(ServiceError::Validation(vec![message]));
        };

        let rows = match self
            .repository
            .orders_between(start, end)
            .instrument(tracing_ctx.span.clone())
            .await
        {
            Ok(rows) => rows,
            Err(e) => {
                tracing_ctx.complete(
                    &self.metrics,
                    Method::Get,
                    false,
                    &format!("Failed to fetch chart rows: {e}"),
                );
                return Err(ServiceError::Repo(e));
            }
        };

        let chart = ChartDataResponse::build(&rows, start, end);

        tracing_ctx.complete(
            &self.metrics,
            Method::Get,
            true,
            &format!("Chart built from {} orders", rows.len()),
        );

        Ok(ApiResponse::success("Chart data retrieved successfully", chart))
    }
}

use crate::domain::{
    requests::dashboard::FindChartData,
    response::dashboard::{ChartDataResponse, DashboardStatsResponse},
};
use anyhow::Result;
use async_trait::async_trait;
use shared::{domain::responses::ApiResponse, errors::ServiceError};
use std::sync::Arc;

pub type DynDashboardService = Arc<dyn DashboardServiceTrait + Send + Sync>;

#[async_trait]
pub trait DashboardServiceTrait {
    async fn stats(&self) -> Result<ApiResponse<DashboardStatsResponse>, ServiceError>;
    async fn chart(
        &self,
        req: &FindChartData,
    ) -> Result<ApiResponse<ChartDataResponse>, ServiceError>;
}

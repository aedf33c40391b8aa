use crate::{middleware::validate::ValidatedQuery, state::AppState};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use order::{
    abstract_trait::dashboard::DynDashboardService,
    domain::{
        requests::dashboard::FindChartData,
        response::dashboard::{ChartDataResponse, DashboardStatsResponse},
    },
};
use shared::{domain::responses::ApiResponse, errors::HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Revenue and headcounts", body = ApiResponse<DashboardStatsResponse>),
        (status = 503, description = "Data source unavailable")
    )
)]
pub async fn get_dashboard_stats(
    Extension(service): Extension<DynDashboardService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.stats().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/chart",
    tag = "Dashboard",
    params(FindChartData),
    responses(
        (status = 200, description = "Monthly revenue and order counts", body = ApiResponse<ChartDataResponse>),
        (status = 400, description = "Validation error"),
        (status = 503, description = "Data source unavailable")
    )
)]
pub async fn get_dashboard_chart(
    Extension(service): Extension<DynDashboardService>,
    ValidatedQuery(params): ValidatedQuery<FindChartData>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.chart(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn dashboard_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/dashboard/stats", get(get_dashboard_stats))
        .route("/api/dashboard/chart", get(get_dashboard_chart))
        .layer(Extension(app_state.di_container.order.dashboard.clone()))
}

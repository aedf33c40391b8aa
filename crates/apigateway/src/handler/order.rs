use crate::{
    domain::requests::order::UpdateOrderStatusBody, middleware::validate::SimpleValidatedJson,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
};
use order::{
    abstract_trait::order::service::{DynOrderCommandService, DynOrderQueryService},
    domain::response::{OrderStatusResponse, order::OrderResponse},
};
use shared::{domain::responses::ApiResponse, errors::HttpError};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Order",
    responses(
        (status = 200, description = "Orders, newest first. Empty when the data source is unreachable", body = ApiResponse<Vec<OrderResponse>>)
    )
)]
pub async fn get_orders(
    Extension(service): Extension<DynOrderQueryService>,
) -> impl IntoResponse {
    let response = service.find_all().await;
    (StatusCode::OK, Json(response))
}

#[utoipa::path(
    patch,
    path = "/api/orders/{id}/status",
    tag = "Order",
    params(("id" = String, Path, description = "Order ID")),
    request_body = UpdateOrderStatusBody,
    responses(
        (status = 200, description = "Status updated", body = ApiResponse<OrderStatusResponse>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Order not found"),
        (status = 503, description = "Data source unavailable")
    )
)]
pub async fn update_order_status(
    Extension(service): Extension<DynOrderCommandService>,
    Path(id): Path<String>,
    SimpleValidatedJson(body): SimpleValidatedJson<UpdateOrderStatusBody>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_status(&body.into_request(id)).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/orders", get(get_orders))
        .route("/api/orders/{id}/status", patch(update_order_status))
        .layer(Extension(app_state.di_container.order.order_query.clone()))
        .layer(Extension(app_state.di_container.order.order_command.clone()))
}

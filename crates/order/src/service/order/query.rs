use crate::{
    abstract_trait::order::{repository::DynOrderQueryRepository, service::OrderQueryServiceTrait},
    domain::response::order::{OrderResponse, normalize_orders},
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::FixedOffset;
use shared::{
    domain::responses::ApiResponse,
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use tracing::{Instrument, info, warn};

#[derive(Clone)]
pub struct OrderQueryService {
    pub query: DynOrderQueryRepository,
    pub metrics: Metrics,
    pub offset: FixedOffset,
}

impl OrderQueryService {
    pub fn new(query: DynOrderQueryRepository, metrics: Metrics, offset: FixedOffset) -> Self {
        Self {
            query,
            metrics,
            offset,
        }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(&self) -> ApiResponse<Vec<OrderResponse>> {
        match self.try_find_all().await {
            Ok(response) => response,
            Err(e) => {
                warn!("⚠️ Order list unavailable, serving empty list: {e}");
                ApiResponse::success("Orders unavailable", Vec::new())
            }
        }
    }

    async fn try_find_all(&self) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        info!("📦 Finding all orders");

        let tracing_ctx = TracingContext::start("order.find_all");

        let records = match self
            .query
            .find_all()
            .instrument(tracing_ctx.span.clone())
            .await
        {
            Ok(records) => records,
            Err(e) => {
                let log_message = format!("Failed to fetch orders: {e}");
                tracing_ctx.complete(&self.metrics, Method::Get, false, &log_message);
                return Err(ServiceError::Repo(e));
            }
        };

        let orders = normalize_orders(records, &self.offset);

        let log_message = format!("Normalized {} orders", orders.len());
        tracing_ctx.complete(&self.metrics, Method::Get, true, &log_message);

        Ok(ApiResponse::success("Orders retrieved successfully", orders))
    }
}

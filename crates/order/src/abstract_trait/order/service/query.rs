use crate::domain::response::order::OrderResponse;
use anyhow::Result;
use async_trait::async_trait;
use shared::{domain::responses::ApiResponse, errors::ServiceError};
use std::sync::Arc;

pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryServiceTrait {
    /// Newest first. A failed fetch degrades to an empty list.
    async fn find_all(&self) -> ApiResponse<Vec<OrderResponse>>;
    /// Same query, but a failed fetch is reported instead of hidden.
    async fn try_find_all(&self) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;
}

pub mod dashboard;
pub mod order;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use self::order::OrderStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderStatusResponse {
    pub order_id: String,
    pub order_status: OrderStatus,
    pub status_updated_at: String,
}

use order::domain::requests::order::UpdateOrderStatusRequest;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Body of `PATCH /api/orders/{id}/status`. The order id comes from the path.
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderStatusBody {
    #[validate(length(min = 1))]
    pub order_status: String,
}

impl UpdateOrderStatusBody {
    pub fn into_request(self, order_id: String) -> UpdateOrderStatusRequest {
        UpdateOrderStatusRequest {
            order_id,
            order_status: self.order_status,
        }
    }
}

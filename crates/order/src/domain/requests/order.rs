use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone, ToSchema)]
pub struct UpdateOrderStatusRequest {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub order_id: String,

    #[validate(length(min = 1))]
    pub order_status: String,
}

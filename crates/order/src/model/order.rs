use crate::model::{lenient, relation::Relation};
use serde::Deserialize;

/// One row of the embedded `order` select, exactly as the data API returns it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrderRecord {
    #[serde(deserialize_with = "lenient::text")]
    pub order_id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub order_status: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub order_type: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub total_price: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub failed_delivery_reason: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub additional_information: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub order_number: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub order_cooked: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub created_at: Option<String>,
    pub users: Relation<UserRecord>,
    pub schedule: Relation<ScheduleRecord>,
    pub payment: Relation<PaymentRecord>,
    pub delivery: Relation<DeliveryRecord>,
    pub order_item: Relation<OrderItemRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    #[serde(deserialize_with = "lenient::text")]
    pub user_uid: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub middle_name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub last_name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScheduleRecord {
    #[serde(deserialize_with = "lenient::text")]
    pub schedule_id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub schedule_time: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub schedule_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PaymentRecord {
    #[serde(deserialize_with = "lenient::text")]
    pub payment_id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub payment_method: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub payment_date: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub proof_of_payment_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeliveryRecord {
    #[serde(deserialize_with = "lenient::text")]
    pub delivery_id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub delivery_fee: Option<String>,
    pub address: Relation<AddressRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AddressRecord {
    #[serde(deserialize_with = "lenient::text")]
    pub address_id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub address_type: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub region: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub city: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub barangay: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub postal_code: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub address_line: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrderItemRecord {
    #[serde(deserialize_with = "lenient::text")]
    pub order_item_id: Option<String>,
    #[serde(deserialize_with = "lenient::integer")]
    pub quantity: Option<i64>,
    #[serde(deserialize_with = "lenient::number")]
    pub subtotal_price: Option<f64>,
    #[serde(deserialize_with = "lenient::text")]
    pub order_id: Option<String>,
    pub menu: Relation<MenuRecord>,
    pub order_item_add_on: Relation<OrderItemAddOnRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct MenuRecord {
    #[serde(deserialize_with = "lenient::text")]
    pub menu_id: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub price: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub inclusion: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OrderItemAddOnRecord {
    #[serde(deserialize_with = "lenient::text")]
    pub order_item_add_on_id: Option<String>,
    #[serde(deserialize_with = "lenient::integer")]
    pub quantity: Option<i64>,
    #[serde(deserialize_with = "lenient::number")]
    pub subtotal_price: Option<f64>,
    pub add_on: Relation<AddOnRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AddOnRecord {
    #[serde(deserialize_with = "lenient::text")]
    pub add_on: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::number")]
    pub price: Option<f64>,
}

use crate::model::order::{
    AddOnRecord, AddressRecord, DeliveryRecord, MenuRecord, OrderItemAddOnRecord,
    OrderItemRecord, OrderRecord, PaymentRecord, ScheduleRecord, UserRecord,
};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use shared::utils::display_date_time;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum OrderStatus {
    #[serde(rename = "New Orders")]
    New,
    #[serde(rename = "In Process")]
    InProcess,
    Completed,
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "New Orders" => OrderStatus::New,
            "In Process" => OrderStatus::InProcess,
            "Completed" => OrderStatus::Completed,
            _ => OrderStatus::Unknown,
        }
    }

    pub fn as_label(&self) -> &'static str {
        match self {
            OrderStatus::New => "New Orders",
            OrderStatus::InProcess => "In Process",
            OrderStatus::Completed => "Completed",
            OrderStatus::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum OrderType {
    Delivery,
    #[serde(rename = "Pick-up")]
    PickUp,
    #[serde(other)]
    Unknown,
}

impl OrderType {
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Delivery" => OrderType::Delivery,
            "Pick-up" => OrderType::PickUp,
            _ => OrderType::Unknown,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub user_uid: String,
    pub customer_name: String,
    pub phone_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScheduleResponse {
    pub schedule_id: String,
    pub schedule_time: String,
    pub schedule_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PaymentResponse {
    pub payment_id: String,
    pub payment_method: Option<String>,
    pub payment_date: String,
    pub proof_of_payment_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AddressResponse {
    pub address_id: String,
    pub address_type: String,
    pub region: String,
    pub city: String,
    pub barangay: String,
    pub postal_code: String,
    pub address_line: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeliveryResponse {
    pub delivery_id: String,
    pub delivery_fee: String,
    pub address: AddressResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuResponse {
    pub menu_id: String,
    pub name: String,
    pub price: String,
    pub inclusion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AddOnResponse {
    pub add_on: String,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderItemAddOnResponse {
    pub order_item_add_on_id: String,
    pub quantity: i64,
    pub subtotal_price: f64,
    pub add_on: AddOnResponse,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderItemResponse {
    pub order_item_id: String,
    pub quantity: i64,
    pub subtotal_price: f64,
    pub order_id: String,
    pub menu: MenuResponse,
    pub order_item_add_on: Vec<OrderItemAddOnResponse>,
}

/// Flat order view model. Every field is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub order_id: String,
    pub order_status: OrderStatus,
    pub order_type: OrderType,
    pub total_price: String,
    pub failed_delivery_reason: Option<String>,
    pub additional_information: Option<String>,
    pub order_number: String,
    pub order_cooked: Option<String>,
    pub date: String,
    pub time: String,
    pub user: UserResponse,
    pub schedule: ScheduleResponse,
    pub payment: PaymentResponse,
    pub delivery: DeliveryResponse,
    pub order_item: Vec<OrderItemResponse>,
}

/// Joins first, optional middle and last name with single spaces.
pub fn customer_name(first: Option<&str>, middle: Option<&str>, last: Option<&str>) -> String {
    let middle = middle
        .filter(|m| !m.is_empty())
        .map(|m| format!("{m} "))
        .unwrap_or_default();

    format!("{} {middle}{}", first.unwrap_or_default(), last.unwrap_or_default())
        .trim()
        .to_string()
}

// record to response
impl From<Option<UserRecord>> for UserResponse {
    fn from(value: Option<UserRecord>) -> Self {
        let user = value.unwrap_or_default();
        UserResponse {
            customer_name: customer_name(
                user.first_name.as_deref(),
                user.middle_name.as_deref(),
                user.last_name.as_deref(),
            ),
            user_uid: user.user_uid.unwrap_or_default(),
            phone_number: user.phone_number.unwrap_or_default(),
        }
    }
}

impl From<Option<ScheduleRecord>> for ScheduleResponse {
    fn from(value: Option<ScheduleRecord>) -> Self {
        let schedule = value.unwrap_or_default();
        ScheduleResponse {
            schedule_id: schedule.schedule_id.unwrap_or_default(),
            schedule_time: schedule.schedule_time.unwrap_or_default(),
            schedule_date: schedule.schedule_date.unwrap_or_default(),
        }
    }
}

impl From<Option<PaymentRecord>> for PaymentResponse {
    fn from(value: Option<PaymentRecord>) -> Self {
        let payment = value.unwrap_or_default();
        PaymentResponse {
            payment_id: payment.payment_id.unwrap_or_default(),
            payment_method: payment.payment_method,
            payment_date: payment.payment_date.unwrap_or_default(),
            proof_of_payment_url: payment.proof_of_payment_url,
        }
    }
}

impl From<Option<AddressRecord>> for AddressResponse {
    fn from(value: Option<AddressRecord>) -> Self {
        let address = value.unwrap_or_default();
        AddressResponse {
            address_id: address.address_id.unwrap_or_default(),
            address_type: address.address_type.unwrap_or_default(),
            region: address.region.unwrap_or_default(),
            city: address.city.unwrap_or_default(),
            barangay: address.barangay.unwrap_or_default(),
            postal_code: address.postal_code.unwrap_or_default(),
            address_line: address.address_line.unwrap_or_default(),
        }
    }
}

impl From<Option<DeliveryRecord>> for DeliveryResponse {
    fn from(value: Option<DeliveryRecord>) -> Self {
        let delivery = value.unwrap_or_default();
        DeliveryResponse {
            delivery_id: delivery.delivery_id.unwrap_or_default(),
            delivery_fee: delivery.delivery_fee.unwrap_or_default(),
            address: AddressResponse::from(delivery.address.into_first()),
        }
    }
}

impl From<Option<MenuRecord>> for MenuResponse {
    fn from(value: Option<MenuRecord>) -> Self {
        let menu = value.unwrap_or_default();
        MenuResponse {
            menu_id: menu.menu_id.unwrap_or_default(),
            name: menu.name.unwrap_or_default(),
            price: menu.price.unwrap_or_else(|| "0".to_string()),
            inclusion: menu.inclusion.unwrap_or_default(),
        }
    }
}

impl From<Option<AddOnRecord>> for AddOnResponse {
    fn from(value: Option<AddOnRecord>) -> Self {
        let add_on = value.unwrap_or_default();
        AddOnResponse {
            add_on: add_on.add_on.unwrap_or_default(),
            name: add_on.name.unwrap_or_default(),
            price: add_on.price.unwrap_or_default(),
        }
    }
}

impl From<OrderItemAddOnRecord> for OrderItemAddOnResponse {
    fn from(value: OrderItemAddOnRecord) -> Self {
        OrderItemAddOnResponse {
            order_item_add_on_id: value.order_item_add_on_id.unwrap_or_default(),
            quantity: value.quantity.unwrap_or_default(),
            subtotal_price: value.subtotal_price.unwrap_or_default(),
            add_on: AddOnResponse::from(value.add_on.into_first()),
        }
    }
}

impl From<OrderItemRecord> for OrderItemResponse {
    fn from(value: OrderItemRecord) -> Self {
        OrderItemResponse {
            order_item_id: value.order_item_id.unwrap_or_default(),
            quantity: value.quantity.unwrap_or_default(),
            subtotal_price: value.subtotal_price.unwrap_or_default(),
            order_id: value.order_id.unwrap_or_default(),
            menu: MenuResponse::from(value.menu.into_first()),
            order_item_add_on: value
                .order_item_add_on
                .into_vec()
                .into_iter()
                .map(OrderItemAddOnResponse::from)
                .collect(),
        }
    }
}

impl OrderResponse {
    /// Flattens one raw row. `offset` is the zone `date` and `time` are shown in.
    pub fn from_record(value: OrderRecord, offset: &FixedOffset) -> Self {
        let (date, time) = display_date_time(value.created_at.as_deref(), offset);

        OrderResponse {
            order_id: value.order_id.unwrap_or_default(),
            order_status: value
                .order_status
                .as_deref()
                .map(OrderStatus::from_label)
                .unwrap_or(OrderStatus::Unknown),
            order_type: value
                .order_type
                .as_deref()
                .map(OrderType::from_label)
                .unwrap_or(OrderType::Unknown),
            total_price: value.total_price.unwrap_or_default(),
            failed_delivery_reason: value.failed_delivery_reason,
            additional_information: value.additional_information,
            order_number: value.order_number.unwrap_or_default(),
            order_cooked: value.order_cooked,
            date,
            time,
            user: UserResponse::from(value.users.into_first()),
            schedule: ScheduleResponse::from(value.schedule.into_first()),
            payment: PaymentResponse::from(value.payment.into_first()),
            delivery: DeliveryResponse::from(value.delivery.into_first()),
            order_item: value
                .order_item
                .into_vec()
                .into_iter()
                .map(OrderItemResponse::from)
                .collect(),
        }
    }
}

/// Flattens every row, keeping the data source's ordering.
pub fn normalize_orders(records: Vec<OrderRecord>, offset: &FixedOffset) -> Vec<OrderResponse> {
    records
        .into_iter()
        .map(|record| OrderResponse::from_record(record, offset))
        .collect()
}

use crate::{abstract_trait::order::repository::OrderQueryRepositoryTrait, model::order::OrderRecord};
use anyhow::Result;
use async_trait::async_trait;
use shared::{config::SupabaseClient, errors::RepositoryError};
use tracing::{error, info};

/// Embedded select for the order list. Relations are aliased to the names
/// the normalizer reads; `users!customer_uid` disambiguates the two foreign
/// keys `order` has into `users`.
pub const ORDER_SELECT: &str = concat!(
    "order_id,order_status,order_type,total_price,failed_delivery_reason,",
    "additional_information,order_number,order_cooked,created_at,",
    "users!customer_uid(user_uid,first_name,middle_name,last_name,phone_number),",
    "schedule:schedule_id(schedule_id,schedule_time,schedule_date),",
    "payment:payment_id(payment_id,payment_method,payment_date,proof_of_payment_url),",
    "delivery:delivery_id(delivery_id,delivery_fee,",
    "address:address_id(address_id,address_type,region,city,barangay,postal_code,address_line)),",
    "order_item(order_item_id,quantity,subtotal_price,order_id,",
    "menu:menu_id(menu_id,name,price,inclusion),",
    "order_item_add_on(order_item_add_on_id,quantity,subtotal_price,",
    "add_on:add_on_id(add_on,name,price)))"
);

#[derive(Clone)]
pub struct OrderQueryRepository {
    db: SupabaseClient,
}

impl OrderQueryRepository {
    pub fn new(db: SupabaseClient) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_all(&self) -> Result<Vec<OrderRecord>, RepositoryError> {
        info!("📦 Fetching orders with relations, newest first");

        let request = self
            .db
            .get("order")
            .query(&[("select", ORDER_SELECT), ("order", "created_at.desc")]);

        let records: Vec<OrderRecord> = self.db.fetch_json(request).await.map_err(|e| {
            error!("❌ Failed to fetch orders: {e:?}");
            e
        })?;

        info!("✅ Fetched {} order rows", records.len());

        Ok(records)
    }
}

use async_trait::async_trait;
use chrono::FixedOffset;
use order::{
    abstract_trait::order::{
        repository::{OrderCommandRepositoryTrait, OrderQueryRepositoryTrait},
        service::{OrderCommandServiceTrait, OrderQueryServiceTrait},
    },
    domain::{
        requests::order::UpdateOrderStatusRequest,
        response::order::{OrderStatus, OrderType},
    },
    model::order::OrderRecord,
    service::order::{OrderCommandService, OrderQueryService},
};
use shared::{errors::RepositoryError, errors::ServiceError, utils::Metrics};
use std::sync::{Arc, Mutex};

struct StubQuery {
    rows: Option<serde_json::Value>,
}

#[async_trait]
impl OrderQueryRepositoryTrait for StubQuery {
    async fn find_all(&self) -> Result<Vec<OrderRecord>, RepositoryError> {
        match &self.rows {
            Some(rows) => Ok(serde_json::from_value(rows.clone())?),
            None => Err(RepositoryError::Upstream {
                status: 503,
                message: "unavailable".into(),
            }),
        }
    }
}

#[derive(Default)]
struct RecordingCommand {
    calls: Mutex<Vec<(String, String)>>,
    missing: bool,
}

#[async_trait]
impl OrderCommandRepositoryTrait for RecordingCommand {
    async fn update_status(
        &self,
        order_id: &str,
        status: &str,
        _updated_at: &str,
    ) -> Result<(), RepositoryError> {
        if self.missing {
            return Err(RepositoryError::NotFound);
        }
        self.calls
            .lock()
            .unwrap()
            .push((order_id.to_string(), status.to_string()));
        Ok(())
    }
}

fn query_service(rows: Option<serde_json::Value>) -> OrderQueryService {
    OrderQueryService::new(
        Arc::new(StubQuery { rows }),
        Metrics::new(),
        FixedOffset::east_opt(0).unwrap(),
    )
}

fn sample_rows() -> serde_json::Value {
    serde_json::json!([
        {
            "order_id": "o-2",
            "order_status": "New Orders",
            "order_type": "Pick-up",
            "total_price": 150,
            "created_at": "2025-01-16T08:00:00+00:00",
            "users": [],
            "order_item": null
        },
        {
            "order_id": "o-1",
            "order_status": "Completed",
            "order_type": "Delivery",
            "total_price": "320.50",
            "created_at": "2025-01-15T09:30:00+00:00",
            "users": { "first_name": "Ana", "last_name": "Cruz" },
            "delivery": [{ "delivery_fee": 50, "address": { "city": "Makati" } }],
            "order_item": [
                { "quantity": 2, "subtotal_price": 270.5, "menu": { "name": "Adobo", "price": 135.25 } }
            ]
        }
    ])
}

#[tokio::test]
async fn find_all_normalizes_rows_in_fetch_order() {
    let service = query_service(Some(sample_rows()));

    let response = service.find_all().await;

    assert_eq!(response.status, "success");
    assert_eq!(response.data.len(), 2);

    let newest = &response.data[0];
    assert_eq!(newest.order_id, "o-2");
    assert_eq!(newest.order_type, OrderType::PickUp);
    assert_eq!(newest.total_price, "150");
    assert_eq!(newest.user.customer_name, "");
    assert!(newest.order_item.is_empty());

    let oldest = &response.data[1];
    assert_eq!(oldest.order_status, OrderStatus::Completed);
    assert_eq!(oldest.user.customer_name, "Ana Cruz");
    assert_eq!(oldest.delivery.address.city, "Makati");
    assert_eq!(oldest.order_item[0].menu.price, "135.25");
    assert_eq!(oldest.date, "1/15/2025");
    assert_eq!(oldest.time, "9:30:00 AM");
}

#[tokio::test]
async fn find_all_degrades_to_empty_list_on_failure() {
    let service = query_service(None);

    let response = service.find_all().await;

    assert!(response.data.is_empty());
}

#[tokio::test]
async fn try_find_all_reports_failure() {
    let service = query_service(None);

    let result = service.try_find_all().await;

    assert!(matches!(
        result,
        Err(ServiceError::Repo(RepositoryError::Upstream { status: 503, .. }))
    ));
}

#[tokio::test]
async fn update_status_writes_canonical_label() {
    let repo = Arc::new(RecordingCommand::default());
    let service = OrderCommandService::new(repo.clone(), Metrics::new());

    let response = service
        .update_status(&UpdateOrderStatusRequest {
            order_id: "o-1".into(),
            order_status: " In Process ".into(),
        })
        .await
        .unwrap();

    assert_eq!(response.data.order_status, OrderStatus::InProcess);
    assert!(!response.data.status_updated_at.is_empty());
    assert_eq!(
        repo.calls.lock().unwrap().as_slice(),
        &[("o-1".to_string(), "In Process".to_string())]
    );
}

#[tokio::test]
async fn update_status_rejects_unknown_status_without_writing() {
    let repo = Arc::new(RecordingCommand::default());
    let service = OrderCommandService::new(repo.clone(), Metrics::new());

    let result = service
        .update_status(&UpdateOrderStatusRequest {
            order_id: "o-1".into(),
            order_status: "Shipped".into(),
        })
        .await;

    assert!(matches!(result, Err(ServiceError::Validation(_))));
    assert!(repo.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn update_status_rejects_empty_order_id() {
    let repo = Arc::new(RecordingCommand::default());
    let service = OrderCommandService::new(repo, Metrics::new());

    let result = service
        .update_status(&UpdateOrderStatusRequest {
            order_id: String::new(),
            order_status: "Completed".into(),
        })
        .await;

    match result {
        Err(ServiceError::Validation(messages)) => {
            assert!(messages.iter().any(|m| m.starts_with("order_id")));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn update_status_surfaces_missing_order() {
    let repo = Arc::new(RecordingCommand {
        missing: true,
        ..Default::default()
    });
    let service = OrderCommandService::new(repo, Metrics::new());

    let result = service
        .update_status(&UpdateOrderStatusRequest {
            order_id: "ghost".into(),
            order_status: "Completed".into(),
        })
        .await;

    assert!(matches!(
        result,
        Err(ServiceError::Repo(RepositoryError::NotFound))
    ));
}

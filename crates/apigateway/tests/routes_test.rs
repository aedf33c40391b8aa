use apigateway::{
    abstract_trait::directions::DirectionsServiceTrait, di::DependenciesInject,
    handler::AppRouter, service::GeocodeService, state::AppState,
};
use async_trait::async_trait;
use maps::{
    abstract_trait::MapsProviderTrait,
    domain::{
        DirectionsRequest, DirectionsStatus, GeocodeGeometry, GeocodeReply, GeocodeResult, LatLng,
        MapOptions, MapSurface, RouteReply, RouteSummary,
    },
    errors::DirectionsError,
};
use order::{
    abstract_trait::{
        dashboard::DashboardServiceTrait,
        order::service::{OrderCommandServiceTrait, OrderQueryServiceTrait},
    },
    di::DependenciesInject as OrderDependencies,
    domain::{
        requests::{dashboard::FindChartData, order::UpdateOrderStatusRequest},
        response::{
            OrderStatusResponse,
            dashboard::{ChartDataResponse, DashboardStatsResponse},
            order::{OrderResponse, OrderStatus},
        },
    },
};
use reqwest::StatusCode;
use serde_json::Value;
use shared::{
    domain::responses::ApiResponse,
    errors::{RepositoryError, ServiceError},
    utils::Metrics,
};
use std::sync::Arc;
use tokio::net::TcpListener;

struct EmptyOrders;

#[async_trait]
impl OrderQueryServiceTrait for EmptyOrders {
    async fn find_all(&self) -> ApiResponse<Vec<OrderResponse>> {
        ApiResponse::success("Orders unavailable", Vec::new())
    }

    async fn try_find_all(&self) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        Err(ServiceError::Repo(RepositoryError::NotFound))
    }
}

struct KnownOrder;

#[async_trait]
impl OrderCommandServiceTrait for KnownOrder {
    async fn update_status(
        &self,
        req: &UpdateOrderStatusRequest,
    ) -> Result<ApiResponse<OrderStatusResponse>, ServiceError> {
        if req.order_id != "o-1" {
            return Err(ServiceError::Repo(RepositoryError::NotFound));
        }
        Ok(ApiResponse::success(
            "Order status updated successfully",
            OrderStatusResponse {
                order_id: req.order_id.clone(),
                order_status: OrderStatus::from_label(&req.order_status),
                status_updated_at: "2025-01-15T09:30:00.000Z".into(),
            },
        ))
    }
}

struct FixedDashboard;

#[async_trait]
impl DashboardServiceTrait for FixedDashboard {
    async fn stats(&self) -> Result<ApiResponse<DashboardStatsResponse>, ServiceError> {
        Ok(ApiResponse::success(
            "ok",
            DashboardStatsResponse {
                total_revenue: 1500.0,
                total_orders: 10,
                total_menu: 4,
                total_employees: 3,
            },
        ))
    }

    async fn chart(
        &self,
        _req: &FindChartData,
    ) -> Result<ApiResponse<ChartDataResponse>, ServiceError> {
        Ok(ApiResponse::success(
            "ok",
            ChartDataResponse {
                revenue_data: Vec::new(),
                orders_data: Vec::new(),
            },
        ))
    }
}

struct DeniedDirections;

#[async_trait]
impl DirectionsServiceTrait for DeniedDirections {
    async fn route(
        &self,
        _origin: LatLng,
        _destination: LatLng,
    ) -> Result<ApiResponse<RouteSummary>, DirectionsError> {
        Err(DirectionsError::RouteStatus(DirectionsStatus::RequestDenied))
    }
}

/// Answers `OK` for Makati and `ZERO_RESULTS` for anything else.
struct FakeGeocoder {
    api_key: &'static str,
}

#[async_trait]
impl MapsProviderTrait for FakeGeocoder {
    fn api_key(&self) -> &str {
        self.api_key
    }

    fn sdk_url(&self) -> String {
        String::new()
    }

    async fn is_ready(&self) -> bool {
        true
    }

    fn create_map(&self, container: &str, center: LatLng, options: MapOptions) -> MapSurface {
        MapSurface::new(container, center, options)
    }

    async fn route(&self, _request: &DirectionsRequest) -> RouteReply {
        RouteReply::failed(DirectionsStatus::UnknownError)
    }

    async fn geocode(&self, address: &str) -> GeocodeReply {
        if address != "Makati" {
            return GeocodeReply::failed(DirectionsStatus::ZeroResults);
        }
        GeocodeReply {
            status: DirectionsStatus::Ok,
            results: vec![GeocodeResult {
                formatted_address: "Makati, Metro Manila, Philippines".into(),
                geometry: GeocodeGeometry {
                    location: Some(LatLng::new(14.5547, 121.0244)),
                    ..Default::default()
                },
                ..Default::default()
            }],
        }
    }
}

async fn spawn_app() -> String {
    spawn_app_with_maps_key("maps-key").await
}

async fn spawn_app_with_maps_key(api_key: &'static str) -> String {
    let geocoder = Arc::new(FakeGeocoder { api_key });

    let di = DependenciesInject {
        order: OrderDependencies {
            order_query: Arc::new(EmptyOrders),
            order_command: Arc::new(KnownOrder),
            dashboard: Arc::new(FixedDashboard),
        },
        directions: Arc::new(DeniedDirections),
        geocode: Arc::new(GeocodeService::new(geocoder, Metrics::new())),
    };

    let app = AppRouter::build(AppState::from_parts(di, Metrics::new()));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn order_list_is_ok_even_when_empty() {
    let base = spawn_app().await;

    let response = reqwest::get(format!("{base}/api/orders")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"], Value::Array(Vec::new()));
}

#[tokio::test]
async fn status_update_takes_id_from_path() {
    let base = spawn_app().await;

    let response = reqwest::Client::new()
        .patch(format!("{base}/api/orders/o-1/status"))
        .json(&serde_json::json!({ "order_status": "In Process" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["order_id"], "o-1");
    assert_eq!(body["data"]["order_status"], "In Process");
}

#[tokio::test]
async fn status_update_for_unknown_order_is_not_found() {
    let base = spawn_app().await;

    let response = reqwest::Client::new()
        .patch(format!("{base}/api/orders/ghost/status"))
        .json(&serde_json::json!({ "order_status": "Completed" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn empty_status_is_rejected_before_the_service() {
    let base = spawn_app().await;

    let response = reqwest::Client::new()
        .patch(format!("{base}/api/orders/o-1/status"))
        .json(&serde_json::json!({ "order_status": "" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn chart_rejects_out_of_range_window() {
    let base = spawn_app().await;

    let response = reqwest::get(format!("{base}/api/dashboard/chart?months_back=0"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn stats_are_served() {
    let base = spawn_app().await;

    let response = reqwest::get(format!("{base}/api/dashboard/stats"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["total_orders"], 10);
}

#[tokio::test]
async fn failed_route_returns_error_view() {
    let base = spawn_app().await;

    let response = reqwest::get(format!(
        "{base}/api/directions?origin_lat=14.55&origin_lng=121.02&destination_lat=14.51&destination_lng=121.05"
    ))
    .await
    .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "REQUEST_DENIED");
    assert_eq!(body["recovery"], "none");
    assert_eq!(body["message"], "Failed to get directions: REQUEST_DENIED");
}

#[tokio::test]
async fn metrics_endpoint_encodes_registry() {
    let base = spawn_app().await;

    let response = reqwest::get(format!("{base}/metrics")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let text = response.text().await.unwrap();
    assert!(text.contains("operation_requests"));
}

#[tokio::test]
async fn health_reports_running() {
    let base = spawn_app().await;

    let response = reqwest::get(format!("{base}/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["message"], "Server is running");
}

#[tokio::test]
async fn geocode_returns_location_and_status() {
    let base = spawn_app().await;

    let response = reqwest::get(format!("{base}/api/geocode?address=Makati"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["status"], "OK");
    assert_eq!(body["data"]["results"][0]["geometry"]["location"]["lat"], 14.5547);
}

#[tokio::test]
async fn geocode_passes_non_ok_status_through() {
    let base = spawn_app().await;

    let response = reqwest::get(format!("{base}/api/geocode?address=Atlantis"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["data"]["status"], "ZERO_RESULTS");
    assert_eq!(body["data"]["results"], Value::Array(Vec::new()));
}

#[tokio::test]
async fn geocode_without_address_is_bad_request() {
    let base = spawn_app().await;

    for url in [format!("{base}/api/geocode"), format!("{base}/api/geocode?address=")] {
        let response = reqwest::get(url).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["details"]["address"][0], "Address is required");
    }
}

#[tokio::test]
async fn geocode_without_maps_key_is_server_error() {
    let base = spawn_app_with_maps_key("").await;

    let response = reqwest::get(format!("{base}/api/geocode?address=Makati"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "API key not configured");
}

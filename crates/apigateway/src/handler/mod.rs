mod dashboard;
mod directions;
mod geocode;
mod health;
mod order;

use crate::state::AppState;
use anyhow::Result;
use axum::Router;
use axum::body::Body;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use prometheus_client::encoding::text::encode;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::dashboard::dashboard_routes;
pub use self::directions::directions_routes;
pub use self::geocode::geocode_routes;
pub use self::health::health_routes;
pub use self::order::order_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        order::get_orders,
        order::update_order_status,

        dashboard::get_dashboard_stats,
        dashboard::get_dashboard_chart,

        directions::get_directions,

        geocode::get_geocode,

        health::health_checker_handler,
    ),
    tags(
        (name = "Order", description = "Order endpoints"),
        (name = "Dashboard", description = "Dashboard endpoints"),
        (name = "Directions", description = "Directions endpoints"),
        (name = "Geocode", description = "Geocoding endpoints"),
        (name = "Health", description = "Liveness check"),
    )
)]
struct ApiDoc;

pub async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let mut buffer = String::new();

    let registry = state.registry.lock().await;

    if let Err(e) = encode(&mut buffer, &registry) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to encode metrics: {e}"),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        [(
            CONTENT_TYPE,
            "application/openmetrics-text; version=1.0.0; charset=utf-8",
        )],
        Body::from(buffer),
    )
        .into_response()
}

pub struct AppRouter;

impl AppRouter {
    pub fn build(app_state: AppState) -> Router {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .route("/metrics", get(metrics_handler))
            .with_state(shared_state.clone())
            .merge(order_routes(shared_state.clone()))
            .merge(dashboard_routes(shared_state.clone()))
            .merge(directions_routes(shared_state.clone()))
            .merge(geocode_routes(shared_state))
            .merge(health_routes());

        let (app_router, api) = api_router.layer(TraceLayer::new_for_http()).split_for_parts();

        app_router.merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
    }

    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let app = Self::build(app_state);

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");
        info!("📊 Metrics: http://localhost:{port}/metrics");
        info!("📍 Directions API: http://localhost:{port}/api/directions");
        info!("📍 Geocoding API: http://localhost:{port}/api/geocode");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

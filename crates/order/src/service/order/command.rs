use crate::{
    abstract_trait::order::{
        repository::DynOrderCommandRepository, service::OrderCommandServiceTrait,
    },
    domain::{
        requests::order::UpdateOrderStatusRequest,
        response::{OrderStatusResponse, order::OrderStatus},
    },
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use shared::{
    domain::responses::ApiResponse,
    errors::ServiceError,
    utils::{Method, Metrics, TracingContext},
};
use tracing::{Instrument, info};
use validator::Validate;

#[derive(Clone)]
pub struct OrderCommandService {
    pub command: DynOrderCommandRepository,
    pub metrics: Metrics,
}

impl OrderCommandService {
    pub fn new(command: DynOrderCommandRepository, metrics: Metrics) -> Self {
        Self { command, metrics }
    }
}

fn validation_messages(errors: &validator::ValidationErrors) -> Vec<String> {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(message) => format!("{field}: {message}"),
                None => format!("{field}: invalid ({})", e.code),
            })
        })
        .collect()
}

#[async_trait]
impl OrderCommandServiceTrait for OrderCommandService {
    async fn update_status(
        &self,
        req: &UpdateOrderStatusRequest,
    ) -> Result<ApiResponse<OrderStatusResponse>, ServiceError> {
        info!(
            "🔄 Updating order {} to status '{}'",
            req.order_id, req.order_status
        );

        let tracing_ctx = TracingContext::start("order.update_status");

        if let Err(errors) = req.validate() {
            let messages = validation_messages(&errors);
            tracing_ctx.complete(
                &self.metrics,
                Method::Patch,
                false,
                &format!("Invalid status update: {}", messages.join(", ")),
            );
            return Err(ServiceError::Validation(messages));
        }

        let status = OrderStatus::from_label(&req.order_status);
        if status == OrderStatus::Unknown {
            let message = format!("order_status: unknown status '{}'", req.order_status);
            tracing_ctx.complete(&self.metrics, Method::Patch, false, &message);
            return Err(ServiceError::Validation(vec![message]));
        }

        let updated_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

        if let Err(e) = self
            .command
            .update_status(&req.order_id, status.as_label(), &updated_at)
            .instrument(tracing_ctx.span.clone())
            .await
        {
            let log_message = format!("Failed to update order {}: {e}", req.order_id);
            tracing_ctx.complete(&self.metrics, Method::Patch, false, &log_message);
            return Err(ServiceError::Repo(e));
        }

        let log_message = format!("Order {} is now '{}'", req.order_id, status.as_label());
        tracing_ctx.complete(&self.metrics, Method::Patch, true, &log_message);

        Ok(ApiResponse::success(
            "Order status updated successfully",
            OrderStatusResponse {
                order_id: req.order_id.clone(),
                order_status: status,
                status_updated_at: updated_at,
            },
        ))
    }
}

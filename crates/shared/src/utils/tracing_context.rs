use crate::utils::metrics::{Method, Metrics, Status};
use tokio::time::Instant;
use tracing::{Span, error, info, info_span};

/// Span plus start time for one service operation.
pub struct TracingContext {
    pub span: Span,
    pub operation: String,
    pub start_time: Instant,
}

impl TracingContext {
    pub fn start(operation: &str) -> Self {
        let span = info_span!("operation", name = operation);
        span.in_scope(|| info!("Starting operation: {operation}"));

        Self {
            span,
            operation: operation.to_string(),
            start_time: Instant::now(),
        }
    }

    pub fn complete(&self, metrics: &Metrics, method: Method, is_success: bool, message: &str) {
        let elapsed = self.start_time.elapsed().as_secs_f64();

        self.span.in_scope(|| {
            if is_success {
                info!("✅ Operation completed successfully: {message} ({elapsed:.3}s)");
            } else {
                error!("❌ Operation failed: {message} ({elapsed:.3}s)");
            }
        });

        let status = if is_success {
            Status::Success
        } else {
            Status::Error
        };

        metrics.record(&self.operation, method, status, elapsed);
    }
}

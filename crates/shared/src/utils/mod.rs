mod gracefullshutdown;
mod logs;
mod metrics;
mod parse_datetime;
mod tracing_context;

pub use self::gracefullshutdown::shutdown_signal;
pub use self::logs::init_logger;
pub use self::metrics::{Labels, Method, Metrics, Status};
pub use self::parse_datetime::{display_date_time, parse_datetime};
pub use self::tracing_context::TracingContext;

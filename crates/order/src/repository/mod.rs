pub mod dashboard;
pub mod order;

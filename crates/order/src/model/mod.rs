pub mod dashboard;
pub mod lenient;
pub mod order;
pub mod relation;

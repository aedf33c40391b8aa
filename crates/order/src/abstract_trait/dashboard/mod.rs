mod repository;
mod service;

pub use self::repository::{DashboardRepositoryTrait, DynDashboardRepository};
pub use self::service::{DashboardServiceTrait, DynDashboardService};

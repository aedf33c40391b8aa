use crate::{
    abstract_trait::{
        dashboard::DynDashboardService,
        order::service::{DynOrderCommandService, DynOrderQueryService},
    },
    repository::{
        dashboard::DashboardRepository,
        order::{OrderCommandRepository, OrderQueryRepository},
    },
    service::{
        dashboard::DashboardService,
        order::{OrderCommandService, OrderQueryService},
    },
};
use anyhow::{Context, Result};
use chrono::FixedOffset;
use shared::{config::SupabaseClient, utils::Metrics};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub order_query: DynOrderQueryService,
    pub order_command: DynOrderCommandService,
    pub dashboard: DynDashboardService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("order_query", &"OrderQueryService")
            .field("order_command", &"OrderCommandService")
            .field("dashboard", &"DashboardService")
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct DependenciesInjectDeps {
    pub db: SupabaseClient,
    pub metrics: Metrics,
    pub display_utc_offset_minutes: i32,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps) -> Result<Self> {
        let DependenciesInjectDeps {
            db,
            metrics,
            display_utc_offset_minutes,
        } = deps;

        let offset = display_utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .context("display offset must be within one day")?;

        let order_query_repo = Arc::new(OrderQueryRepository::new(db.clone()));
        let order_command_repo = Arc::new(OrderCommandRepository::new(db.clone()));
        let dashboard_repo = Arc::new(DashboardRepository::new(db));

        let order_query: DynOrderQueryService = Arc::new(OrderQueryService::new(
            order_query_repo,
            metrics.clone(),
            offset,
        ));
        let order_command: DynOrderCommandService =
            Arc::new(OrderCommandService::new(order_command_repo, metrics.clone()));
        let dashboard: DynDashboardService =
            Arc::new(DashboardService::new(dashboard_repo, metrics));

        Ok(Self {
            order_query,
            order_command,
            dashboard,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deps(display_utc_offset_minutes: i32) -> DependenciesInjectDeps {
        DependenciesInjectDeps {
            db: SupabaseClient::new("http://127.0.0.1:9", "anon").unwrap(),
            metrics: Metrics::new(),
            display_utc_offset_minutes,
        }
    }

    #[test]
    fn offset_within_a_day_is_accepted() {
        assert!(DependenciesInject::new(deps(480)).is_ok());
        assert!(DependenciesInject::new(deps(-1439)).is_ok());
    }

    #[test]
    fn offset_that_overflows_seconds_is_rejected() {
        assert!(DependenciesInject::new(deps(i32::MIN)).is_err());
        assert!(DependenciesInject::new(deps(i32::MAX)).is_err());
        assert!(DependenciesInject::new(deps(24 * 60)).is_err());
    }
}

use crate::{domain::response::order::OrderStatus, model::dashboard::ChartRecord};
use chrono::{DateTime, Datelike, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use shared::utils::parse_datetime;
use std::collections::HashMap;
use utoipa::ToSchema;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardStatsResponse {
    pub total_revenue: f64,
    pub total_orders: i64,
    pub total_menu: i64,
    pub total_employees: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MonthlyData {
    pub month: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChartDataResponse {
    pub revenue_data: Vec<MonthlyData>,
    pub orders_data: Vec<MonthlyData>,
}

impl ChartDataResponse {
    /// Buckets orders into one slot per calendar month from `start` to `end`,
    /// both months included: a twelve-month window yields thirteen slots.
    ///
    /// Every order counts toward `orders_data`; only Completed ones add to
    /// `revenue_data`. Buckets are keyed by year and month, so a window longer
    /// than a year never folds two Octobers together.
    pub fn build(rows: &[ChartRecord], start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        let slots = month_slots(start, end);

        let mut revenue: HashMap<(i32, u32), f64> = HashMap::new();
        let mut orders: HashMap<(i32, u32), i64> = HashMap::new();

        for row in rows {
            let Some(created_at) = row.created_at.as_deref().and_then(parse_datetime) else {
                continue;
            };
            let key = (created_at.year(), created_at.month());
            if !slots.contains(&key) {
                continue;
            }

            *orders.entry(key).or_default() += 1;

            let completed = row
                .order_status
                .as_deref()
                .map(OrderStatus::from_label)
                .is_some_and(|s| s == OrderStatus::Completed);
            if completed {
                *revenue.entry(key).or_default() += row.total_price.unwrap_or_default();
            }
        }

        let label = |(_, month): &(i32, u32)| MONTHS[(*month - 1) as usize].to_string();

        Self {
            revenue_data: slots
                .iter()
                .map(|key| MonthlyData {
                    month: label(key),
                    value: revenue.get(key).copied().unwrap_or_default().round() as i64,
                })
                .collect(),
            orders_data: slots
                .iter()
                .map(|key| MonthlyData {
                    month: label(key),
                    value: orders.get(key).copied().unwrap_or_default(),
                })
                .collect(),
        }
    }
}

fn month_slots(start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<(i32, u32)> {
    let mut slots = Vec::new();
    let Some(mut cursor) = NaiveDate::from_ymd_opt(start.year(), start.month(), 1) else {
        return slots;
    };
    let end = end.date_naive();

    while cursor <= end {
        slots.push((cursor.year(), cursor.month()));
        match cursor.checked_add_months(Months::new(1)) {
            Some(next) => cursor = next,
            None => break,
        }
    }

    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn row(price: f64, created_at: &str, status: &str) -> ChartRecord {
        ChartRecord {
            total_price: Some(price),
            created_at: Some(created_at.to_string()),
            order_status: Some(status.to_string()),
        }
    }

    #[test]
    fn labels_cover_every_month_in_the_window() {
        let chart = ChartDataResponse::build(&[], at(2024, 11, 20), at(2025, 2, 3));
        let labels: Vec<&str> = chart.orders_data.iter().map(|d| d.month.as_str()).collect();

        assert_eq!(labels, vec!["Nov", "Dec", "Jan", "Feb"]);
        assert!(chart.revenue_data.iter().all(|d| d.value == 0));
    }

    #[test]
    fn twelve_month_window_includes_both_end_months() {
        let chart = ChartDataResponse::build(&[], at(2025, 10, 18), at(2026, 10, 18));
        let labels: Vec<&str> = chart.orders_data.iter().map(|d| d.month.as_str()).collect();

        assert_eq!(labels.len(), 13);
        assert_eq!(labels.first(), Some(&"Oct"));
        assert_eq!(labels.last(), Some(&"Oct"));
    }

    #[test]
    fn only_completed_orders_add_revenue() {
        let rows = vec![
            row(100.4, "2025-01-05T10:00:00+00:00", "Completed"),
            row(200.0, "2025-01-06T10:00:00+00:00", "In Process"),
            row(50.2, "2025-02-01T10:00:00+00:00", "Completed"),
        ];

        let chart = ChartDataResponse::build(&rows, at(2025, 1, 1), at(2025, 2, 28));

        assert_eq!(chart.orders_data[0], MonthlyData { month: "Jan".into(), value: 2 });
        assert_eq!(chart.revenue_data[0], MonthlyData { month: "Jan".into(), value: 100 });
        assert_eq!(chart.orders_data[1].value, 1);
        assert_eq!(chart.revenue_data[1].value, 50);
    }

    #[test]
    fn same_month_in_different_years_stays_separate() {
        let rows = vec![
            row(10.0, "2024-03-10T00:00:00+00:00", "Completed"),
            row(20.0, "2025-03-10T00:00:00+00:00", "Completed"),
        ];

        let chart = ChartDataResponse::build(&rows, at(2024, 3, 1), at(2025, 3, 31));

        assert_eq!(chart.revenue_data.len(), 13);
        assert_eq!(chart.revenue_data.first().unwrap().value, 10);
        assert_eq!(chart.revenue_data.last().unwrap().value, 20);
    }

    #[test]
    fn rows_outside_window_or_undated_are_ignored() {
        let rows = vec![
            row(10.0, "2023-01-10T00:00:00+00:00", "Completed"),
            ChartRecord::default(),
        ];

        let chart = ChartDataResponse::build(&rows, at(2025, 1, 1), at(2025, 1, 31));

        assert_eq!(chart.orders_data, vec![MonthlyData { month: "Jan".into(), value: 0 }]);
    }
}

use crate::model::lenient;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RevenueRecord {
    #[serde(deserialize_with = "lenient::number")]
    pub total_price: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChartRecord {
    #[serde(deserialize_with = "lenient::number")]
    pub total_price: Option<f64>,
    #[serde(deserialize_with = "lenient::text")]
    pub created_at: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub order_status: Option<String>,
}

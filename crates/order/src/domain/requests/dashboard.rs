use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::Validate;

fn default_months_back() -> u32 {
    12
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, IntoParams)]
pub struct FindChartData {
    #[serde(default = "default_months_back")]
    #[validate(range(min = 1, max = 60))]
    pub months_back: u32,
}

impl Default for FindChartData {
    fn default() -> Self {
        Self {
            months_back: default_months_back(),
        }
    }
}

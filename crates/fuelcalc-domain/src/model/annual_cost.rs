//! Annual fuel cost projection

use serde::{Deserialize, Serialize};

/// Monthly usage projected over twelve months
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnualCost {
    pub monthly_distance: f64,
    pub monthly_cost: f64,
    pub annual_distance: f64,
    pub annual_cost: f64,
}

//! Fuel efficiency rating bands

use serde::{Deserialize, Serialize};

/// Rating band, judged on the km/l equivalent of a vehicle's consumption
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EfficiencyCategory {
    VeryPoor,
    Poor,
    Average,
    Good,
    Excellent,
}

impl EfficiencyCategory {
    /// Classify a km/l figure
    pub fn from_kmpl(kmpl: f64) -> Self {
        if kmpl >= 20.0 {
            EfficiencyCategory::Excellent
        } else if kmpl >= 15.0 {
            EfficiencyCategory::Good
        } else if kmpl >= 10.0 {
            EfficiencyCategory::Average
        } else if kmpl >= 5.0 {
            EfficiencyCategory::Poor
        } else {
            EfficiencyCategory::VeryPoor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EfficiencyCategory::Excellent => "Excellent (20+ km/l)",
            EfficiencyCategory::Good => "Good (15-20 km/l)",
            EfficiencyCategory::Average => "Average (10-15 km/l)",
            EfficiencyCategory::Poor => "Poor (5-10 km/l)",
            EfficiencyCategory::VeryPoor => "Very Poor (< 5 km/l)",
        }
    }
}

impl std::fmt::Display for EfficiencyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

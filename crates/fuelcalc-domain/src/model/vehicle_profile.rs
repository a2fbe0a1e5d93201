//! Named vehicle profile

use fuelcalc_types::FuelType;
use serde::{Deserialize, Serialize};

/// A known vehicle, loaded from a profiles file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    /// Display name, matched case-insensitively
    pub name: String,
    /// Consumption (L/100 km)
    pub fuel_efficiency: f64,
    #[serde(default)]
    pub fuel_type: Option<FuelType>,
    /// Price per litre; falls back to the configured default when absent
    #[serde(default)]
    pub fuel_price: Option<f64>,
}

impl VehicleProfile {
    /// Normalized lookup key
    pub fn key(&self) -> String {
        normalize_name(&self.name)
    }
}

pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

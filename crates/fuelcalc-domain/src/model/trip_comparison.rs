//! Trip comparison result type

use fuelcalc_types::{Error, Result};
use serde::{Deserialize, Serialize};

use super::fuel_calculation::RawFuelCalculation;
use super::FuelCalculation;

/// Which side of a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Vehicle {
    Vehicle1,
    Vehicle2,
}

/// Cost differential between two independently computed trips
///
/// `savings` is signed: `vehicle1.totalCost - vehicle2.totalCost`. A positive
/// value means vehicle 2 is cheaper by that amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTripComparison")]
pub struct TripComparison {
    vehicle1: FuelCalculation,
    vehicle2: FuelCalculation,
    savings: f64,
}

impl TripComparison {
    pub(crate) fn from_parts(vehicle1: FuelCalculation, vehicle2: FuelCalculation, savings: f64) -> Self {
        Self {
            vehicle1,
            vehicle2,
            savings,
        }
    }

    pub fn vehicle1(&self) -> &FuelCalculation {
        &self.vehicle1
    }

    pub fn vehicle2(&self) -> &FuelCalculation {
        &self.vehicle2
    }

    pub fn savings(&self) -> f64 {
        self.savings
    }

    pub fn absolute_savings(&self) -> f64 {
        self.savings.abs()
    }

    /// The vehicle with the lower total cost, `None` on a tie
    pub fn cheaper_vehicle(&self) -> Option<Vehicle> {
        if self.savings > 0.0 {
            Some(Vehicle::Vehicle2)
        } else if self.savings < 0.0 {
            Some(Vehicle::Vehicle1)
        } else {
            None
        }
    }

    /// Parse a serialized comparison, keeping typed errors with the side
    /// prefixed, e.g. `vehicle2.fuelPrice`
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawTripComparison = serde_json::from_str(json)?;
        Self::try_from(raw)
    }
}

/// Wire shape of `TripComparison` before it is checked
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTripComparison {
    vehicle1: RawFuelCalculation,
    vehicle2: RawFuelCalculation,
    savings: f64,
}

impl TryFrom<RawTripComparison> for TripComparison {
    type Error = Error;

    fn try_from(raw: RawTripComparison) -> Result<Self> {
        let vehicle1 =
            FuelCalculation::try_from(raw.vehicle1).map_err(|e| e.with_field_prefix("vehicle1"))?;
        let vehicle2 =
            FuelCalculation::try_from(raw.vehicle2).map_err(|e| e.with_field_prefix("vehicle2"))?;

        let expected = vehicle1.total_cost() - vehicle2.total_cost();
        let tolerance = 1e-9 * expected.abs().max(1.0);
        if !((raw.savings - expected).abs() <= tolerance) {
            return Err(Error::invalid_input(
                "savings",
                raw.savings,
                "does not match vehicle1.totalCost - vehicle2.totalCost",
            ));
        }
        Ok(TripComparison::from_parts(vehicle1, vehicle2, raw.savings))
    }
}

//! Fuel calculation result type

use fuelcalc_types::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::service::fuel_calculator;

/// Raw inputs for one vehicle's trip
///
/// `fuel_efficiency` is litres per 100 km, `fuel_price` is price per litre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripInputs {
    pub distance: f64,
    pub fuel_efficiency: f64,
    pub fuel_price: f64,
}

impl TripInputs {
    pub fn new(distance: f64, fuel_efficiency: f64, fuel_price: f64) -> Self {
        Self {
            distance,
            fuel_efficiency,
            fuel_price,
        }
    }
}

/// Frozen output of one fuel cost evaluation
///
/// Values come from `fuel_calculator::compute`. Deserialization goes through
/// `RawFuelCalculation` and re-runs that evaluation, so the derived fields
/// always match the inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawFuelCalculation")]
pub struct FuelCalculation {
    distance: f64,
    fuel_efficiency: f64,
    fuel_price: f64,
    fuel_needed: f64,
    total_cost: f64,
    cost_per_km: f64,
}

impl FuelCalculation {
    pub(crate) fn from_parts(
        inputs: TripInputs,
        fuel_needed: f64,
        total_cost: f64,
        cost_per_km: f64,
    ) -> Self {
        Self {
            distance: inputs.distance,
            fuel_efficiency: inputs.fuel_efficiency,
            fuel_price: inputs.fuel_price,
            fuel_needed,
            total_cost,
            cost_per_km,
        }
    }

    /// Distance travelled (km)
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Consumption rate (L/100 km)
    pub fn fuel_efficiency(&self) -> f64 {
        self.fuel_efficiency
    }

    /// Price per litre
    pub fn fuel_price(&self) -> f64 {
        self.fuel_price
    }

    /// Litres consumed over the distance
    pub fn fuel_needed(&self) -> f64 {
        self.fuel_needed
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn cost_per_km(&self) -> f64 {
        self.cost_per_km
    }

    pub fn inputs(&self) -> TripInputs {
        TripInputs::new(self.distance, self.fuel_efficiency, self.fuel_price)
    }

    /// Parse a serialized calculation, keeping the typed `InvalidInput` error
    /// that plain serde would fold into a `serde_json::Error`.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawFuelCalculation = serde_json::from_str(json)?;
        Self::try_from(raw)
    }
}

/// Wire shape of `FuelCalculation` before it is checked
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct RawFuelCalculation {
    distance: f64,
    fuel_efficiency: f64,
    fuel_price: f64,
    fuel_needed: f64,
    total_cost: f64,
    cost_per_km: f64,
}

impl TryFrom<RawFuelCalculation> for FuelCalculation {
    type Error = Error;

    fn try_from(raw: RawFuelCalculation) -> Result<Self> {
        let expected = fuel_calculator::compute(raw.distance, raw.fuel_efficiency, raw.fuel_price)?;
        let derived = [
            ("fuelNeeded", raw.fuel_needed, expected.fuel_needed),
            ("totalCost", raw.total_cost, expected.total_cost),
            ("costPerKm", raw.cost_per_km, expected.cost_per_km),
        ];
        for (field, actual, wanted) in derived {
            if !approx_eq(actual, wanted) {
                return Err(Error::invalid_input(
                    field,
                    actual,
                    "does not match distance, fuelEfficiency and fuelPrice",
                ));
            }
        }
        Ok(FuelCalculation {
            fuel_needed: raw.fuel_needed,
            total_cost: raw.total_cost,
            cost_per_km: raw.cost_per_km,
            ..expected
        })
    }
}

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::fuel_calculator::compute;

    #[test]
    fn test_serialized_field_names() {
        let calc = compute(100.0, 8.0, 1.5).unwrap();
        let value = serde_json::to_value(calc).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "costPerKm",
                "distance",
                "fuelEfficiency",
                "fuelNeeded",
                "fuelPrice",
                "totalCost"
            ]
        );
    }

    #[test]
    fn test_from_json_accepts_own_output() {
        let calc = compute(250.0, 6.4, 1.79).unwrap();
        let json = serde_json::to_string(&calc).unwrap();
        let parsed = FuelCalculation::from_json(&json).unwrap();
        assert_eq!(parsed, calc);
    }

    #[test]
    fn test_from_json_rejects_inconsistent_total() {
        let json = r#"{"distance":100,"fuelEfficiency":8,"fuelPrice":1.5,
            "fuelNeeded":8,"totalCost":99,"costPerKm":0.12}"#;
        match FuelCalculation::from_json(json) {
            Err(Error::InvalidInput { field, .. }) => assert_eq!(field, "totalCost"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_rejects_zero_distance() {
        let json = r#"{"distance":0,"fuelEfficiency":8,"fuelPrice":1.5,
            "fuelNeeded":0,"totalCost":0,"costPerKm":0}"#;
        match FuelCalculation::from_json(json) {
            Err(Error::InvalidInput { field, .. }) => assert_eq!(field, "distance"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_rejects_unknown_and_missing_fields() {
        let extra = r#"{"distance":100,"fuelEfficiency":8,"fuelPrice":1.5,
            "fuelNeeded":8,"totalCost":12,"costPerKm":0.12,"currency":"EUR"}"#;
        assert!(matches!(FuelCalculation::from_json(extra), Err(Error::Json(_))));

        let missing = r#"{"distance":100,"fuelEfficiency":8,"fuelPrice":1.5}"#;
        assert!(matches!(FuelCalculation::from_json(missing), Err(Error::Json(_))));
    }

    #[test]
    fn test_plain_serde_rejects_inconsistent_record() {
        let json = r#"{"distance":0,"fuelEfficiency":-8,"fuelPrice":1.5,
            "fuelNeeded":4,"totalCost":-5,"costPerKm":7}"#;
        assert!(serde_json::from_str::<FuelCalculation>(json).is_err());

        let json = r#"{"distance":100,"fuelEfficiency":8,"fuelPrice":1.5,
            "fuelNeeded":8,"totalCost":99,"costPerKm":0.12}"#;
        let err = serde_json::from_str::<FuelCalculation>(json).unwrap_err();
        assert!(err.to_string().contains("totalCost"));
    }

    #[test]
    fn test_plain_serde_accepts_own_output() {
        let calc = compute(120.0, 7.3, 1.64).unwrap();
        let value = serde_json::to_value(calc).unwrap();
        assert_eq!(serde_json::from_value::<FuelCalculation>(value).unwrap(), calc);
    }

    #[test]
    fn test_trip_inputs_camel_case() {
        let inputs: TripInputs =
            serde_json::from_str(r#"{"distance":42,"fuelEfficiency":5.5,"fuelPrice":1.9}"#)
                .unwrap();
        assert_eq!(inputs, TripInputs::new(42.0, 5.5, 1.9));
    }
}

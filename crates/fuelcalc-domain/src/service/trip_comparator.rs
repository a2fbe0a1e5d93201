//! Trip comparison between two vehicles

use fuelcalc_types::Result;
use tracing::debug;

use super::fuel_calculator::compute_inputs;
use crate::model::{FuelCalculation, TripComparison, TripInputs};

/// Compare two finished calculations
///
/// Savings are signed: `vehicle1.total_cost - vehicle2.total_cost`, so swapping
/// the arguments negates them. Inputs are trusted as produced by `compute`,
/// whose costs are finite and positive, so the difference is always finite.
pub fn compare(vehicle1: FuelCalculation, vehicle2: FuelCalculation) -> TripComparison {
    let savings = vehicle1.total_cost() - vehicle2.total_cost();
    debug!(
        vehicle1_cost = vehicle1.total_cost(),
        vehicle2_cost = vehicle2.total_cost(),
        savings,
        "compared trips"
    );
    TripComparison::from_parts(vehicle1, vehicle2, savings)
}

/// Compute both trips from raw inputs and compare them
///
/// An invalid input is reported with the side it came from, e.g.
/// `vehicle2.fuelPrice`.
pub fn compare_inputs(vehicle1: TripInputs, vehicle2: TripInputs) -> Result<TripComparison> {
    let calc1 = compute_inputs(vehicle1).map_err(|e| e.with_field_prefix("vehicle1"))?;
    let calc2 = compute_inputs(vehicle2).map_err(|e| e.with_field_prefix("vehicle2"))?;
    Ok(compare(calc1, calc2))
}

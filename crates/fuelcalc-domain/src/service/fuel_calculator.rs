//! Fuel cost calculation
//!
//! Fuel efficiency is always litres per 100 km (L/100 km); distance is in km
//! and fuel price is per litre.
//!
//! # Formula
//! fuel_needed = distance x (fuel_efficiency / 100)
//! total_cost  = fuel_needed x fuel_price
//! cost_per_km = total_cost / distance
//!
//! Every input must be finite and strictly positive, and so must every
//! derived value. Anything else is an `Error::InvalidInput`, so a zero
//! distance never yields a NaN cost per km and huge inputs never yield
//! an infinite cost.

use fuelcalc_types::Result;
use tracing::debug;

use super::{ensure_positive, ensure_result};
use crate::model::{AnnualCost, FuelCalculation, TripInputs};

/// Distance that `fuel_efficiency` is quoted over
pub const EFFICIENCY_BASE_KM: f64 = 100.0;

const MONTHS_PER_YEAR: f64 = 12.0;

/// Calculate fuel volume and cost for a trip
///
/// # Examples
/// ```
/// use fuelcalc_domain::service::compute;
/// let calc = compute(100.0, 8.0, 1.5).unwrap();
/// assert!((calc.fuel_needed() - 8.0).abs() < 1e-9);
/// assert!((calc.total_cost() - 12.0).abs() < 1e-9);
/// assert!((calc.cost_per_km() - 0.12).abs() < 1e-9);
/// ```
pub fn compute(distance: f64, fuel_efficiency: f64, fuel_price: f64) -> Result<FuelCalculation> {
    compute_inputs(TripInputs::new(distance, fuel_efficiency, fuel_price))
}

/// Same as [`compute`], taking the inputs as one record
pub fn compute_inputs(inputs: TripInputs) -> Result<FuelCalculation> {
    let distance = ensure_positive("distance", inputs.distance)?;
    let fuel_efficiency = ensure_positive("fuelEfficiency", inputs.fuel_efficiency)?;
    let fuel_price = ensure_positive("fuelPrice", inputs.fuel_price)?;

    let fuel_needed = ensure_result("fuelNeeded", distance * (fuel_efficiency / EFFICIENCY_BASE_KM))?;
    let total_cost = ensure_result("totalCost", fuel_needed * fuel_price)?;
    let cost_per_km = ensure_result("costPerKm", total_cost / distance)?;

    debug!(
        distance,
        fuel_efficiency, fuel_price, fuel_needed, total_cost, "computed fuel cost"
    );

    Ok(FuelCalculation::from_parts(
        inputs,
        fuel_needed,
        total_cost,
        cost_per_km,
    ))
}

/// Calculate fuel cost for going to the destination and back
pub fn compute_round_trip(distance: f64, fuel_efficiency: f64, fuel_price: f64) -> Result<FuelCalculation> {
    let distance = ensure_positive("distance", distance)?;
    let round_trip = ensure_result("distance", distance * 2.0)?;
    compute(round_trip, fuel_efficiency, fuel_price)
}

/// Litres needed to cover `distance`
pub fn fuel_needed(distance: f64, fuel_efficiency: f64) -> Result<f64> {
    let distance = ensure_positive("distance", distance)?;
    let fuel_efficiency = ensure_positive("fuelEfficiency", fuel_efficiency)?;
    ensure_result("fuelNeeded", distance * (fuel_efficiency / EFFICIENCY_BASE_KM))
}

/// Furthest distance reachable on `fuel_amount` litres
pub fn max_distance(fuel_amount: f64, fuel_efficiency: f64) -> Result<f64> {
    let fuel_amount = ensure_positive("fuelAmount", fuel_amount)?;
    let fuel_efficiency = ensure_positive("fuelEfficiency", fuel_efficiency)?;
    ensure_result("maxDistance", fuel_amount * EFFICIENCY_BASE_KM / fuel_efficiency)
}

/// Project a month of driving over a year
pub fn annual_cost(monthly_distance: f64, fuel_efficiency: f64, fuel_price: f64) -> Result<AnnualCost> {
    let monthly = compute(monthly_distance, fuel_efficiency, fuel_price)?;
    Ok(AnnualCost {
        monthly_distance: monthly.distance(),
        monthly_cost: monthly.total_cost(),
        annual_distance: ensure_result("annualDistance", monthly.distance() * MONTHS_PER_YEAR)?,
        annual_cost: ensure_result("annualCost", monthly.total_cost() * MONTHS_PER_YEAR)?,
    })
}

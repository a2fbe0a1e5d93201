//! Domain services
//!
//! Pure calculation functions. None of them perform I/O or keep state.

pub mod efficiency;
pub mod fuel_calculator;
pub mod route_estimator;
pub mod trip_comparator;

pub use efficiency::{categorize, kmpl_to_l_per_100km, kmpl_to_mpg, l_per_100km_to_kmpl, mpg_to_kmpl};
pub use fuel_calculator::{annual_cost, compute, compute_inputs, compute_round_trip, fuel_needed, max_distance};
pub use route_estimator::{estimate_route, format_duration, haversine_km};
pub use trip_comparator::{compare, compare_inputs};

use fuelcalc_types::{Error, Result};

/// Reject NaN, infinities, zero and negatives
pub(crate) fn ensure_positive(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::invalid_input(field, value, "must be a finite number"));
    }
    if value <= 0.0 {
        return Err(Error::invalid_input(field, value, "must be greater than zero"));
    }
    Ok(value)
}

/// Reject derived values that left the representable positive range
pub(crate) fn ensure_result(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(Error::invalid_input(field, value, "result overflows"));
    }
    if value <= 0.0 {
        return Err(Error::invalid_input(field, value, "result underflows to zero"));
    }
    Ok(value)
}

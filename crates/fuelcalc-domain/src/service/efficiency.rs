//! Fuel efficiency conversions and rating
//!
//! Point conversions for callers that know their vehicle in km/l or MPG.
//! Everything else in the crate works in L/100 km.

use fuelcalc_types::Result;

use super::{ensure_positive, ensure_result};
use super::fuel_calculator::EFFICIENCY_BASE_KM;
use crate::model::EfficiencyCategory;

/// km/l per US mile-per-gallon
pub const KMPL_PER_MPG: f64 = 0.425144;
/// US mile-per-gallon per km/l
pub const MPG_PER_KMPL: f64 = 2.35214;

pub fn kmpl_to_l_per_100km(kmpl: f64) -> Result<f64> {
    let kmpl = ensure_positive("kmpl", kmpl)?;
    ensure_result("fuelEfficiency", EFFICIENCY_BASE_KM / kmpl)
}

pub fn l_per_100km_to_kmpl(l_per_100km: f64) -> Result<f64> {
    let l_per_100km = ensure_positive("fuelEfficiency", l_per_100km)?;
    ensure_result("kmpl", EFFICIENCY_BASE_KM / l_per_100km)
}

pub fn mpg_to_kmpl(mpg: f64) -> Result<f64> {
    let mpg = ensure_positive("mpg", mpg)?;
    ensure_result("kmpl", mpg * KMPL_PER_MPG)
}

pub fn kmpl_to_mpg(kmpl: f64) -> Result<f64> {
    let kmpl = ensure_positive("kmpl", kmpl)?;
    ensure_result("mpg", kmpl * MPG_PER_KMPL)
}

/// Rate a consumption figure given in L/100 km
pub fn categorize(l_per_100km: f64) -> Result<EfficiencyCategory> {
    l_per_100km_to_kmpl(l_per_100km).map(EfficiencyCategory::from_kmpl)
}

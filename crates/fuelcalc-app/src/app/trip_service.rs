//! Trip planning and profile comparison use cases

use fuelcalc_domain::repository::VehicleProfileRepository;
use fuelcalc_domain::service::{compare_inputs, compute, estimate_route};
use fuelcalc_domain::{Coordinates, FuelCalculation, RouteEstimate, TripComparison, TripInputs, VehicleProfile};
use fuelcalc_types::{Error, FuelType, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::{regional_price, RegionalFuelPrice};

/// Route, price and cost for one planned trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlan {
    pub route: RouteEstimate,
    pub fuel_price: RegionalFuelPrice,
    pub fuel_type: FuelType,
    pub calculation: FuelCalculation,
}

/// Plan a trip between two points using the region's price for `fuel_type`
pub fn plan_trip(
    origin: Coordinates,
    destination: Coordinates,
    region: &str,
    fuel_type: FuelType,
    fuel_efficiency: f64,
) -> Result<TripPlan> {
    let route = estimate_route(origin, destination)?;
    let prices = regional_price(region);
    let calculation = compute(route.distance_km, fuel_efficiency, prices.price_for(fuel_type))?;

    info!(
        distance_km = route.distance_km,
        region = %prices.region,
        %fuel_type,
        total_cost = calculation.total_cost(),
        "planned trip"
    );

    Ok(TripPlan {
        route,
        fuel_price: prices,
        fuel_type,
        calculation,
    })
}

/// Where to get a price for a profile that does not carry its own
#[derive(Debug, Clone, Default)]
pub struct PriceDefaults {
    /// Flat price per litre, tried first
    pub fuel_price: Option<f64>,
    /// Region for a table lookup by the profile's fuel type
    pub region: Option<String>,
}

impl PriceDefaults {
    fn resolve(&self, profile: &VehicleProfile) -> Option<f64> {
        profile.fuel_price.or(self.fuel_price).or_else(|| {
            self.region
                .as_deref()
                .map(|region| regional_price(region).price_for(profile.fuel_type.unwrap_or_default()))
        })
    }
}

/// Comparison of two named profiles over the same distance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileComparison {
    pub profile1: VehicleProfile,
    pub profile2: VehicleProfile,
    pub comparison: TripComparison,
}

/// Compare two profiles from `repo` over `distance` km
pub fn compare_profiles<R: VehicleProfileRepository>(
    repo: &R,
    name1: &str,
    name2: &str,
    distance: f64,
    defaults: &PriceDefaults,
) -> Result<ProfileComparison> {
    let profile1 = find_profile(repo, name1)?;
    let profile2 = find_profile(repo, name2)?;

    let inputs = |profile: &VehicleProfile, side: &str| -> Result<TripInputs> {
        let price = defaults.resolve(profile).ok_or_else(|| {
            Error::invalid_input(
                format!("{}.fuelPrice", side),
                f64::NAN,
                "no price on the profile and no default price or region configured",
            )
        })?;
        Ok(TripInputs::new(distance, profile.fuel_efficiency, price))
    };

    let comparison = compare_inputs(inputs(&profile1, "vehicle1")?, inputs(&profile2, "vehicle2")?)?;

    Ok(ProfileComparison {
        profile1,
        profile2,
        comparison,
    })
}

fn find_profile<R: VehicleProfileRepository>(repo: &R, name: &str) -> Result<VehicleProfile> {
    repo.find_by_name(name)?
        .ok_or_else(|| Error::ProfileNotFound(name.to_string()))
}

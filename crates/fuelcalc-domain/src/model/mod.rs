//! Domain model types

pub mod annual_cost;
pub mod efficiency_category;
pub mod fuel_calculation;
pub mod route;
pub mod trip_comparison;
pub mod vehicle_profile;

pub use annual_cost::AnnualCost;
pub use efficiency_category::EfficiencyCategory;
pub use fuel_calculation::{FuelCalculation, TripInputs};
pub use route::{Coordinates, RouteEstimate};
pub use trip_comparison::{TripComparison, Vehicle};
pub use vehicle_profile::VehicleProfile;

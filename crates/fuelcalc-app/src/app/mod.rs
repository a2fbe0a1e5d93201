//! Application use cases

pub mod trip_service;

pub use trip_service::{compare_profiles, plan_trip, PriceDefaults, ProfileComparison, TripPlan};

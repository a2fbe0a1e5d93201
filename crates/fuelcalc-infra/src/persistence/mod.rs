//! Persistence implementations
//!
//! File-based implementations of the domain repository traits.

mod file_vehicle_profile_repo;

pub use file_vehicle_profile_repo::FileVehicleProfileRepository;

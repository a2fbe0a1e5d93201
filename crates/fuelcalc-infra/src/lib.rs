//! Infrastructure layer - file-backed repository implementations

pub mod persistence;
pub mod vehicle_profile_loader;

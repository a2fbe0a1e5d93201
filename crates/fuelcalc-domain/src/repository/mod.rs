//! Repository trait definitions

use crate::model::VehicleProfile;
use fuelcalc_types::Error;

/// Source of named vehicle profiles
pub trait VehicleProfileRepository {
    /// Load all profiles
    fn find_all(&self) -> Result<Vec<VehicleProfile>, Error>;

    /// Find a profile by name (case-insensitive)
    fn find_by_name(&self, name: &str) -> Result<Option<VehicleProfile>, Error>;
}

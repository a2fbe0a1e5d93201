//! Repository adapters for the infrastructure layer

use std::path::Path;

use fuelcalc_infra::persistence::FileVehicleProfileRepository;
use fuelcalc_types::Result;

use crate::config::Config;

/// Open the vehicle profile repository named by the config
pub fn open_profile_repo(config: &Config) -> Result<FileVehicleProfileRepository> {
    let path = config.profiles_path()?;
    FileVehicleProfileRepository::new(&path)
}

/// Open a vehicle profile repository at a custom path
pub fn open_profile_repo_at(path: &Path) -> Result<FileVehicleProfileRepository> {
    FileVehicleProfileRepository::new(path)
}

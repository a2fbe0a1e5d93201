//! File-based implementation of VehicleProfileRepository

use std::path::Path;

use fuelcalc_domain::repository::VehicleProfileRepository;
use fuelcalc_domain::VehicleProfile;
use fuelcalc_types::Error;

use crate::vehicle_profile_loader::VehicleProfileLoader;

/// File-based vehicle profile repository (TOML)
pub struct FileVehicleProfileRepository {
    loader: VehicleProfileLoader,
}

impl FileVehicleProfileRepository {
    /// Create a new repository from a TOML file path
    pub fn new(toml_path: &Path) -> Result<Self, Error> {
        let loader = VehicleProfileLoader::load_from_file(toml_path)?;
        Ok(Self { loader })
    }
}

impl VehicleProfileRepository for FileVehicleProfileRepository {
    fn find_all(&self) -> Result<Vec<VehicleProfile>, Error> {
        Ok(self.loader.all_profiles().into_iter().cloned().collect())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<VehicleProfile>, Error> {
        Ok(self.loader.get_profile(name).cloned())
    }
}

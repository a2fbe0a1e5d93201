//! Vehicle profile loader from TOML
//!
//! ```toml
//! [[vehicles]]
//! name = "Hatchback"
//! fuel_efficiency = 5.2
//! fuel_type = "petrol"
//! fuel_price = 1.79
//! ```

use fuelcalc_domain::model::vehicle_profile::normalize_name;
use fuelcalc_domain::VehicleProfile;
use fuelcalc_types::{ConfigError, Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Container for parsing vehicles.toml
#[derive(Debug, Deserialize)]
struct VehicleProfileFile {
    #[serde(default)]
    vehicles: Vec<VehicleProfile>,
}

/// Vehicle profiles keyed by normalized name
#[derive(Debug)]
pub struct VehicleProfileLoader {
    profiles: HashMap<String, VehicleProfile>,
}

impl VehicleProfileLoader {
    /// Load profiles from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound(format!(
                "Vehicle profiles file not found: {}",
                path.display()
            )));
        }
        let content = fs::read_to_string(path)?;
        let loader = Self::load_from_str(&content)?;
        debug!(path = %path.display(), count = loader.count(), "loaded vehicle profiles");
        Ok(loader)
    }

    /// Load profiles from a TOML string
    pub fn load_from_str(toml_content: &str) -> Result<Self> {
        let file: VehicleProfileFile = toml::from_str(toml_content).map_err(|e| {
            Error::Config(ConfigError::ParseError(format!(
                "Failed to parse vehicle profiles TOML: {}",
                e
            )))
        })?;

        let mut profiles = HashMap::with_capacity(file.vehicles.len());
        for profile in file.vehicles {
            validate_profile(&profile)?;
            let key = profile.key();
            if profiles.contains_key(&key) {
                return Err(Error::Config(ConfigError::ParseError(format!(
                    "Duplicate vehicle profile: {}",
                    profile.name
                ))));
            }
            profiles.insert(key, profile);
        }

        Ok(Self { profiles })
    }

    /// Look up a profile by name, ignoring case and surrounding whitespace
    pub fn get_profile(&self, name: &str) -> Option<&VehicleProfile> {
        self.profiles.get(&normalize_name(name))
    }

    /// All profiles, sorted by name
    pub fn all_profiles(&self) -> Vec<&VehicleProfile> {
        let mut all: Vec<&VehicleProfile> = self.profiles.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    pub fn count(&self) -> usize {
        self.profiles.len()
    }
}

fn validate_profile(profile: &VehicleProfile) -> Result<()> {
    if profile.name.trim().is_empty() {
        return Err(Error::Config(ConfigError::ParseError(
            "Vehicle profile with empty name".to_string(),
        )));
    }
    let invalid = |field: &str, value: f64| {
        Error::Config(ConfigError::ParseError(format!(
            "Vehicle profile {}: {} must be a positive number, got {}",
            profile.name, field, value
        )))
    };
    if !(profile.fuel_efficiency.is_finite() && profile.fuel_efficiency > 0.0) {
        return Err(invalid("fuel_efficiency", profile.fuel_efficiency));
    }
    if let Some(price) = profile.fuel_price {
        if !(price.is_finite() && price > 0.0) {
            return Err(invalid("fuel_price", price));
        }
    }
    Ok(())
}

//! Configuration management for fuel-calc
//!
//! Config stored at: ~/.config/fuel-calc/config.json

use fuelcalc_types::{ConfigError, FuelType, OutputFormat, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Price per litre used when a command gets no explicit price
    #[serde(default)]
    pub default_fuel_price: Option<f64>,

    /// Region for price lookups when neither a price nor a region is given
    #[serde(default)]
    pub default_region: Option<String>,

    /// Fuel grade for regional price lookups
    #[serde(default)]
    pub default_fuel_type: FuelType,

    /// Vehicle profiles file override
    #[serde(default)]
    pub profiles_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Table,
            default_fuel_price: None,
            default_region: None,
            default_fuel_type: FuelType::Petrol,
            profiles_path: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("fuel-calc");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Vehicle profiles file: the override, or vehicles.toml next to the config
    pub fn profiles_path(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.profiles_path {
            return Ok(path.clone());
        }
        Ok(Self::config_dir()?.join("vehicles.toml"))
    }

    /// Load config from `path`, or default if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
            debug!(path = %path.display(), "loaded config");
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to `path`, creating the parent directory
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), "saved config");
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Fuel Calc Configuration")?;
        writeln!(f, "=======================")?;
        writeln!(f)?;
        writeln!(f, "Output format:  {}", self.output_format)?;
        match self.default_fuel_price {
            Some(price) => writeln!(f, "Fuel price:     {:.2} /L", price)?,
            None => writeln!(f, "Fuel price:     (not set)")?,
        }
        writeln!(
            f,
            "Region:         {}",
            self.default_region.as_deref().unwrap_or("(not set)")
        )?;
        writeln!(f, "Fuel type:      {}", self.default_fuel_type)?;
        writeln!(
            f,
            "Profiles file:  {}",
            self.profiles_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:    {}", path.display())?;
        }

        Ok(())
    }
}

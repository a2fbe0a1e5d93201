//! CLI definition using clap

use clap::{Args, Parser, Subcommand};
use fuelcalc_types::{FuelType, OutputFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fuel-calc")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Trip fuel cost calculation and vehicle comparison")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Fuel efficiency in one of the accepted units
#[derive(Args, Debug, Clone, Copy)]
#[group(required = true, multiple = false)]
pub struct EfficiencyArg {
    /// Consumption in litres per 100 km
    #[arg(long, short = 'e')]
    pub efficiency: Option<f64>,

    /// Efficiency in kilometres per litre
    #[arg(long)]
    pub kmpl: Option<f64>,

    /// Efficiency in US miles per gallon
    #[arg(long)]
    pub mpg: Option<f64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate fuel needed and cost for a trip
    Calc {
        /// Trip distance in km
        #[arg(long, short = 'd')]
        distance: f64,

        #[command(flatten)]
        efficiency: EfficiencyArg,

        /// Price per litre. Uses config default or regional price if not specified.
        #[arg(long, short = 'p')]
        price: Option<f64>,

        /// Calculate for the trip out and back
        #[arg(long)]
        round_trip: bool,
    },

    /// Compare the fuel cost of two vehicles
    Compare {
        /// Trip distance in km for vehicle 1 (and vehicle 2 unless --distance2 is given)
        #[arg(long, short = 'd')]
        distance: f64,

        /// Trip distance in km for vehicle 2
        #[arg(long)]
        distance2: Option<f64>,

        /// Vehicle 1 consumption (L/100 km)
        #[arg(long)]
        efficiency1: f64,

        /// Vehicle 2 consumption (L/100 km)
        #[arg(long)]
        efficiency2: f64,

        /// Vehicle 1 price per litre. Uses config default if not specified.
        #[arg(long)]
        price1: Option<f64>,

        /// Vehicle 2 price per litre. Uses vehicle 1 price if not specified.
        #[arg(long)]
        price2: Option<f64>,
    },

    /// Compare two vehicles from the profiles file
    CompareProfiles {
        /// First profile name
        vehicle1: String,

        /// Second profile name
        vehicle2: String,

        /// Trip distance in km
        #[arg(long, short = 'd')]
        distance: f64,

        /// Profiles TOML file (overrides config)
        #[arg(long)]
        profiles: Option<PathBuf>,
    },

    /// List vehicles in the profiles file
    Profiles {
        /// Profiles TOML file (overrides config)
        #[arg(long)]
        profiles: Option<PathBuf>,
    },

    /// Litres needed to cover a distance
    FuelNeeded {
        /// Distance in km
        #[arg(long, short = 'd')]
        distance: f64,

        #[command(flatten)]
        efficiency: EfficiencyArg,
    },

    /// Maximum distance reachable on a given amount of fuel
    MaxDistance {
        /// Fuel amount in litres
        #[arg(long)]
        fuel: f64,

        #[command(flatten)]
        efficiency: EfficiencyArg,
    },

    /// Convert an efficiency figure between L/100 km, km/l and MPG
    Convert {
        #[command(flatten)]
        efficiency: EfficiencyArg,
    },

    /// Rate a vehicle's fuel efficiency
    Category {
        #[command(flatten)]
        efficiency: EfficiencyArg,
    },

    /// Project monthly driving cost over a year
    Annual {
        /// Distance driven per month in km
        #[arg(long)]
        monthly_distance: f64,

        #[command(flatten)]
        efficiency: EfficiencyArg,

        /// Price per litre. Uses config default or regional price if not specified.
        #[arg(long, short = 'p')]
        price: Option<f64>,
    },

    /// Show regional fuel prices
    Prices {
        /// Region name. Lists all regions if not specified.
        region: Option<String>,
    },

    /// Estimate route and fuel cost between two coordinates
    Trip {
        /// Origin as "lat,lon"
        #[arg(long)]
        from: String,

        /// Destination as "lat,lon"
        #[arg(long)]
        to: String,

        #[command(flatten)]
        efficiency: EfficiencyArg,

        /// Region for fuel prices. Uses config value if not specified.
        #[arg(long, short = 'r')]
        region: Option<String>,

        /// Fuel type. Uses config value if not specified.
        #[arg(long)]
        fuel_type: Option<FuelType>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default price per litre
        #[arg(long)]
        set_price: Option<f64>,

        /// Set default region for price lookups
        #[arg(long)]
        set_region: Option<String>,

        /// Set default fuel type
        #[arg(long)]
        set_fuel_type: Option<FuelType>,

        /// Set vehicle profiles file
        #[arg(long)]
        set_profiles: Option<PathBuf>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

//! Command handlers

use crate::cli::{Cli, Commands, EfficiencyArg};
use crate::output::{
    output_annual, output_calculation, output_category, output_comparison, output_conversion,
    output_prices, output_profile_comparison, output_profiles, output_quantity, output_trip,
    EfficiencyConversion,
};
use fuelcalc_app::app::{compare_profiles, plan_trip, PriceDefaults};
use fuelcalc_app::config::Config;
use fuelcalc_app::constants::{all_prices, regional_price};
use fuelcalc_app::repository::{open_profile_repo, open_profile_repo_at};
use fuelcalc_domain::repository::VehicleProfileRepository;
use fuelcalc_domain::service::{
    annual_cost, categorize, compare_inputs, compute, compute_round_trip, fuel_needed,
    kmpl_to_l_per_100km, kmpl_to_mpg, l_per_100km_to_kmpl, max_distance, mpg_to_kmpl,
};
use fuelcalc_domain::{Coordinates, TripInputs};
use fuelcalc_infra::persistence::FileVehicleProfileRepository;
use fuelcalc_types::{Error, FuelType, OutputFormat, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

pub fn execute(cli: Cli) -> Result<()> {
    let config_path = Config::config_path()?;
    let stdout = std::io::stdout();
    run(cli, &config_path, &mut stdout.lock())
}

/// Run one command against the config file at `config_path`, writing results to `out`
pub fn run<W: Write>(cli: Cli, config_path: &Path, out: &mut W) -> Result<()> {
    let config = Config::load_from(config_path)?;
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Calc {
            distance,
            efficiency,
            price,
            round_trip,
        } => {
            let efficiency = resolve_efficiency(&efficiency)?;
            let price = resolve_price(&config, price)?;
            let calc = if round_trip {
                compute_round_trip(distance, efficiency, price)?
            } else {
                compute(distance, efficiency, price)?
            };
            output_calculation(out, output_format, &calc)
        }

        Commands::Compare {
            distance,
            distance2,
            efficiency1,
            efficiency2,
            price1,
            price2,
        } => {
            let price1 = resolve_price(&config, price1)?;
            let price2 = price2.unwrap_or(price1);
            let comparison = compare_inputs(
                TripInputs::new(distance, efficiency1, price1),
                TripInputs::new(distance2.unwrap_or(distance), efficiency2, price2),
            )?;
            output_comparison(out, output_format, &comparison, None)
        }

        Commands::CompareProfiles {
            vehicle1,
            vehicle2,
            distance,
            profiles,
        } => {
            let repo = open_profiles(&config, profiles)?;
            let defaults = PriceDefaults {
                fuel_price: config.default_fuel_price,
                region: config.default_region.clone(),
            };
            let result = compare_profiles(&repo, &vehicle1, &vehicle2, distance, &defaults)?;
            output_profile_comparison(out, output_format, &result)
        }

        Commands::Profiles { profiles } => {
            let repo = open_profiles(&config, profiles)?;
            output_profiles(out, output_format, &repo.find_all()?)
        }

        Commands::FuelNeeded {
            distance,
            efficiency,
        } => {
            let litres = fuel_needed(distance, resolve_efficiency(&efficiency)?)?;
            output_quantity(out, output_format, "fuelNeeded", "Fuel needed", litres, "L")
        }

        Commands::MaxDistance { fuel, efficiency } => {
            let km = max_distance(fuel, resolve_efficiency(&efficiency)?)?;
            output_quantity(out, output_format, "maxDistance", "Max distance", km, "km")
        }

        Commands::Convert { efficiency } => {
            let l_per_100km = resolve_efficiency(&efficiency)?;
            let kmpl = l_per_100km_to_kmpl(l_per_100km)?;
            let conversion = EfficiencyConversion {
                l_per_100km,
                kmpl,
                mpg: kmpl_to_mpg(kmpl)?,
            };
            output_conversion(out, output_format, &conversion)
        }

        Commands::Category { efficiency } => {
            let category = categorize(resolve_efficiency(&efficiency)?)?;
            output_category(out, output_format, category)
        }

        Commands::Annual {
            monthly_distance,
            efficiency,
            price,
        } => {
            let efficiency = resolve_efficiency(&efficiency)?;
            let price = resolve_price(&config, price)?;
            let annual = annual_cost(monthly_distance, efficiency, price)?;
            output_annual(out, output_format, &annual)
        }

        Commands::Prices { region } => {
            let prices = match region {
                Some(region) => vec![regional_price(&region)],
                None => all_prices(),
            };
            output_prices(out, output_format, &prices)
        }

        Commands::Trip {
            from,
            to,
            efficiency,
            region,
            fuel_type,
        } => {
            let origin = parse_coordinates(&from)?;
            let destination = parse_coordinates(&to)?;
            let region = region.or_else(|| config.default_region.clone()).unwrap_or_default();
            let fuel_type = fuel_type.unwrap_or(config.default_fuel_type);
            let plan = plan_trip(
                origin,
                destination,
                &region,
                fuel_type,
                resolve_efficiency(&efficiency)?,
            )?;
            output_trip(out, output_format, &plan)
        }

        Commands::Config {
            show,
            set_output,
            set_price,
            set_region,
            set_fuel_type,
            set_profiles,
            reset,
        } => cmd_config(
            out,
            config_path,
            config,
            show,
            set_output,
            set_price,
            set_region,
            set_fuel_type,
            set_profiles,
            reset,
        ),
    }
}

/// Turn whichever efficiency flag was given into L/100 km
fn resolve_efficiency(arg: &EfficiencyArg) -> Result<f64> {
    match (arg.efficiency, arg.kmpl, arg.mpg) {
        (Some(l_per_100km), _, _) => Ok(l_per_100km),
        (None, Some(kmpl), _) => kmpl_to_l_per_100km(kmpl),
        (None, None, Some(mpg)) => kmpl_to_l_per_100km(mpg_to_kmpl(mpg)?),
        (None, None, None) => Err(Error::invalid_input(
            "fuelEfficiency",
            f64::NAN,
            "one of --efficiency, --kmpl or --mpg is required",
        )),
    }
}

/// Explicit price, else the configured default, else the configured region's price
fn resolve_price(config: &Config, price: Option<f64>) -> Result<f64> {
    if let Some(price) = price.or(config.default_fuel_price) {
        return Ok(price);
    }
    if let Some(ref region) = config.default_region {
        let prices = regional_price(region);
        debug!(region = %prices.region, fuel_type = %config.default_fuel_type, "using regional price");
        return Ok(prices.price_for(config.default_fuel_type));
    }
    Err(Error::invalid_input(
        "fuelPrice",
        f64::NAN,
        "pass --price or set a default with: fuel-calc config --set-price <PRICE>",
    ))
}

fn open_profiles(config: &Config, path: Option<PathBuf>) -> Result<FileVehicleProfileRepository> {
    match path {
        Some(path) => open_profile_repo_at(&path),
        None => open_profile_repo(config),
    }
}

/// Parse "lat,lon"
fn parse_coordinates(text: &str) -> Result<Coordinates> {
    let invalid = || Error::InvalidCoordinates(format!("expected \"lat,lon\", got \"{}\"", text));
    let (lat, lon) = text.split_once(',').ok_or_else(invalid)?;
    let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let lon: f64 = lon.trim().parse().map_err(|_| invalid())?;
    Ok(Coordinates::new(lat, lon))
}

#[allow(clippy::too_many_arguments)]
fn cmd_config<W: Write>(
    out: &mut W,
    config_path: &Path,
    config: Config,
    show: bool,
    set_output: Option<OutputFormat>,
    set_price: Option<f64>,
    set_region: Option<String>,
    set_fuel_type: Option<FuelType>,
    set_profiles: Option<PathBuf>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save_to(config_path)?;
        writeln!(out, "Configuration reset to defaults")?;
        writeln!(out, "\n{}", config)?;
        return Ok(());
    }

    let mut config = config;
    let mut modified = false;

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(price) = set_price {
        if !(price.is_finite() && price > 0.0) {
            return Err(Error::invalid_input("fuelPrice", price, "must be greater than zero"));
        }
        config.default_fuel_price = Some(price);
        modified = true;
    }

    if let Some(region) = set_region {
        config.default_region = Some(region);
        modified = true;
    }

    if let Some(fuel_type) = set_fuel_type {
        config.default_fuel_type = fuel_type;
        modified = true;
    }

    if let Some(path) = set_profiles {
        config.profiles_path = Some(path);
        modified = true;
    }

    if modified {
        config.save_to(config_path)?;
        writeln!(out, "Configuration updated")?;
    }

    if show || !modified {
        writeln!(out, "{}", config)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use fuelcalc_domain::TripComparison;
    use tempfile::TempDir;

    fn run_args(config_path: &Path, args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(std::iter::once("fuel-calc").chain(args.iter().copied()))
            .expect("arguments should parse");
        let mut buf = Vec::new();
        run(cli, config_path, &mut buf)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    fn efficiency(e: Option<f64>, kmpl: Option<f64>, mpg: Option<f64>) -> EfficiencyArg {
        EfficiencyArg {
            efficiency: e,
            kmpl,
            mpg,
        }
    }

    #[test]
    fn test_resolve_efficiency_units() {
        assert_eq!(resolve_efficiency(&efficiency(Some(7.5), None, None)).unwrap(), 7.5);
        assert!((resolve_efficiency(&efficiency(None, Some(20.0), None)).unwrap() - 5.0).abs() < 1e-9);
        // 30 MPG = 12.75432 km/l = 7.8405 L/100km
        let from_mpg = resolve_efficiency(&efficiency(None, None, Some(30.0))).unwrap();
        assert!((from_mpg - 7.8405).abs() < 1e-3);
    }

    #[test]
    fn test_resolve_price_order() {
        let mut config = Config::default();
        assert!(matches!(resolve_price(&config, None), Err(Error::InvalidInput { .. })));

        config.default_region = Some("Punjab".to_string());
        config.default_fuel_type = FuelType::Diesel;
        assert_eq!(resolve_price(&config, None).unwrap(), 94.61);

        config.default_fuel_price = Some(1.7);
        assert_eq!(resolve_price(&config, None).unwrap(), 1.7);
        assert_eq!(resolve_price(&config, Some(2.2)).unwrap(), 2.2);
    }

    #[test]
    fn test_parse_coordinates() {
        let c = parse_coordinates(" 9.93, 76.27 ").unwrap();
        assert_eq!(c, Coordinates::new(9.93, 76.27));
        assert!(matches!(parse_coordinates("9.93"), Err(Error::InvalidCoordinates(_))));
        assert!(matches!(parse_coordinates("north,east"), Err(Error::InvalidCoordinates(_))));
    }

    #[test]
    fn test_compare_json_keeps_wire_field_names() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.json");
        let text = run_args(
            &config_path,
            &[
                "compare", "--format", "json", "-d", "100",
                "--efficiency1", "8", "--efficiency2", "6", "--price1", "1.5",
            ],
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["savings", "vehicle1", "vehicle2"]);
        for side in ["vehicle1", "vehicle2"] {
            let mut keys: Vec<&str> = value[side].as_object().unwrap().keys().map(String::as_str).collect();
            keys.sort_unstable();
            assert_eq!(
                keys,
                ["costPerKm", "distance", "fuelEfficiency", "fuelNeeded", "fuelPrice", "totalCost"]
            );
        }
        assert!((value["savings"].as_f64().unwrap() - 3.0).abs() < 1e-9);
        assert!((value["vehicle1"]["totalCost"].as_f64().unwrap() - 12.0).abs() < 1e-9);

        let parsed: TripComparison = serde_json::from_str(&text).unwrap();
        assert!((parsed.savings() - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_saved_price_is_used_by_calc() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("fuel-calc").join("config.json");

        let text = run_args(&config_path, &["config", "--set-price", "2", "--set-output", "json"]).unwrap();
        assert!(text.contains("Configuration updated"));
        assert!(config_path.exists());

        let text = run_args(&config_path, &["calc", "-d", "50", "-e", "10"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!((value["fuelPrice"].as_f64().unwrap() - 2.0).abs() < 1e-9);
        assert!((value["totalCost"].as_f64().unwrap() - 10.0).abs() < 1e-9);

        run_args(&config_path, &["config", "--reset"]).unwrap();
        let err = run_args(&config_path, &["calc", "-d", "50", "-e", "10"]).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { ref field, .. } if field == "fuelPrice"));
    }

    #[test]
    fn test_compare_reports_side_of_invalid_input() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.json");
        let err = run_args(
            &config_path,
            &["compare", "-d", "100", "--efficiency1", "8", "--efficiency2", "0", "--price1", "1.5"],
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidInput { ref field, .. } if field == "vehicle2.fuelEfficiency"));
        assert!(!config_path.exists());
    }

    #[test]
    fn test_compare_profiles_from_explicit_file() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.json");
        let profiles_path = dir.path().join("vehicles.toml");
        std::fs::write(
            &profiles_path,
            "[[vehicles]]\nname = \"Hatchback\"\nfuel_efficiency = 5.0\nfuel_price = 2.0\n\n\
             [[vehicles]]\nname = \"Van\"\nfuel_efficiency = 10.0\nfuel_price = 2.0\n",
        )
        .unwrap();

        let text = run_args(
            &config_path,
            &[
                "compare-profiles", "van", "hatchback", "-d", "100", "--format", "table",
                "--profiles", profiles_path.to_str().unwrap(),
            ],
        )
        .unwrap();
        assert!(text.contains("Hatchback is cheaper by 10.00"));
    }
}

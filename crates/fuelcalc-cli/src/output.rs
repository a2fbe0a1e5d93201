//! Output formatting module

use fuelcalc_app::app::{ProfileComparison, TripPlan};
use fuelcalc_app::constants::RegionalFuelPrice;
use fuelcalc_domain::{AnnualCost, EfficiencyCategory, FuelCalculation, TripComparison, Vehicle, VehicleProfile};
use fuelcalc_types::{OutputFormat, Result};
use serde::Serialize;
use std::io::Write;

/// One efficiency figure in every supported unit
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EfficiencyConversion {
    pub l_per_100km: f64,
    pub kmpl: f64,
    pub mpg: f64,
}

fn print_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

fn print_calculation_rows<W: Write>(out: &mut W, calc: &FuelCalculation) -> Result<()> {
    writeln!(out, "Distance:        {:.2} km", calc.distance())?;
    writeln!(out, "Efficiency:      {:.2} L/100km", calc.fuel_efficiency())?;
    writeln!(out, "Fuel price:      {:.2} /L", calc.fuel_price())?;
    writeln!(out, "Fuel needed:     {:.2} L", calc.fuel_needed())?;
    writeln!(out, "Total cost:      {:.2}", calc.total_cost())?;
    writeln!(out, "Cost per km:     {:.2}", calc.cost_per_km())?;
    Ok(())
}

pub fn output_calculation<W: Write>(
    out: &mut W,
    output_format: OutputFormat,
    calc: &FuelCalculation,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(out, calc);
    }

    writeln!(out, "\nFuel Cost")?;
    writeln!(out, "=========")?;
    print_calculation_rows(out, calc)?;
    Ok(())
}

pub fn output_comparison<W: Write>(
    out: &mut W,
    output_format: OutputFormat,
    comparison: &TripComparison,
    names: Option<(&str, &str)>,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(out, comparison);
    }

    let (name1, name2) = names.unwrap_or(("Vehicle 1", "Vehicle 2"));
    let v1 = comparison.vehicle1();
    let v2 = comparison.vehicle2();

    writeln!(out, "\nTrip Comparison")?;
    writeln!(out, "===============")?;
    writeln!(out, "{:<16} {:>14} {:>14}", "", truncate_str(name1, 14), truncate_str(name2, 14))?;
    writeln!(out, "{}", "-".repeat(46))?;
    writeln!(out, "{:<16} {:>14.2} {:>14.2}", "Distance (km)", v1.distance(), v2.distance())?;
    writeln!(out, "{:<16} {:>14.2} {:>14.2}", "L/100km", v1.fuel_efficiency(), v2.fuel_efficiency())?;
    writeln!(out, "{:<16} {:>14.2} {:>14.2}", "Price /L", v1.fuel_price(), v2.fuel_price())?;
    writeln!(out, "{:<16} {:>14.2} {:>14.2}", "Fuel (L)", v1.fuel_needed(), v2.fuel_needed())?;
    writeln!(out, "{:<16} {:>14.2} {:>14.2}", "Total cost", v1.total_cost(), v2.total_cost())?;
    writeln!(out, "{:<16} {:>14.2} {:>14.2}", "Cost per km", v1.cost_per_km(), v2.cost_per_km())?;
    writeln!(out, "{}", "-".repeat(46))?;

    writeln!(out, "Savings:         {:+.2}", comparison.savings())?;
    match comparison.cheaper_vehicle() {
        Some(Vehicle::Vehicle1) => writeln!(out, "{} is cheaper by {:.2}", name1, comparison.absolute_savings())?,
        Some(Vehicle::Vehicle2) => writeln!(out, "{} is cheaper by {:.2}", name2, comparison.absolute_savings())?,
        None => writeln!(out, "Both trips cost the same")?,
    }
    Ok(())
}

pub fn output_profile_comparison<W: Write>(
    out: &mut W,
    output_format: OutputFormat,
    result: &ProfileComparison,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(out, result);
    }
    output_comparison(
        out,
        output_format,
        &result.comparison,
        Some((&result.profile1.name, &result.profile2.name)),
    )
}

pub fn output_profiles<W: Write>(
    out: &mut W,
    output_format: OutputFormat,
    profiles: &[VehicleProfile],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(out, profiles);
    }

    if profiles.is_empty() {
        writeln!(out, "No vehicle profiles found")?;
        return Ok(());
    }

    writeln!(out, "{:<20} {:>10} {:>8} {:>10}", "Name", "L/100km", "Fuel", "Price /L")?;
    writeln!(out, "{}", "-".repeat(51))?;
    for profile in profiles {
        let fuel = profile
            .fuel_type
            .map(|f| f.to_string())
            .unwrap_or_else(|| "-".to_string());
        let price = profile
            .fuel_price
            .map(|p| format!("{:.2}", p))
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "{:<20} {:>10.2} {:>8} {:>10}",
            truncate_str(&profile.name, 20),
            profile.fuel_efficiency,
            fuel,
            price
        )?;
    }
    Ok(())
}

pub fn output_quantity<W: Write>(
    out: &mut W,
    output_format: OutputFormat,
    key: &str,
    label: &str,
    value: f64,
    unit: &str,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let mut record = std::collections::BTreeMap::new();
        record.insert(key, value);
        return print_json(out, &record);
    }
    writeln!(out, "{}: {:.2} {}", label, value, unit)?;
    Ok(())
}

pub fn output_conversion<W: Write>(
    out: &mut W,
    output_format: OutputFormat,
    conversion: &EfficiencyConversion,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(out, conversion);
    }
    writeln!(out, "L/100km:  {:.2}", conversion.l_per_100km)?;
    writeln!(out, "km/l:     {:.2}", conversion.kmpl)?;
    writeln!(out, "MPG (US): {:.2}", conversion.mpg)?;
    Ok(())
}

pub fn output_category<W: Write>(
    out: &mut W,
    output_format: OutputFormat,
    category: EfficiencyCategory,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(out, &serde_json::json!({ "category": category, "label": category.label() }));
    }
    writeln!(out, "{}", category.label())?;
    Ok(())
}

pub fn output_annual<W: Write>(out: &mut W, output_format: OutputFormat, annual: &AnnualCost) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(out, annual);
    }

    writeln!(out, "\nAnnual Fuel Cost")?;
    writeln!(out, "================")?;
    writeln!(out, "{:<10} {:>14} {:>14}", "", "Distance (km)", "Cost")?;
    writeln!(out, "{:<10} {:>14.2} {:>14.2}", "Monthly", annual.monthly_distance, annual.monthly_cost)?;
    writeln!(out, "{:<10} {:>14.2} {:>14.2}", "Annual", annual.annual_distance, annual.annual_cost)?;
    Ok(())
}

pub fn output_prices<W: Write>(out: &mut W, output_format: OutputFormat, prices: &[RegionalFuelPrice]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(out, prices);
    }

    writeln!(out, "{:<20} {:>10} {:>10}", "Region", "Petrol", "Diesel")?;
    writeln!(out, "{}", "-".repeat(42))?;
    for price in prices {
        writeln!(out, "{:<20} {:>10.2} {:>10.2}", price.region, price.petrol, price.diesel)?;
    }
    Ok(())
}

pub fn output_trip<W: Write>(out: &mut W, output_format: OutputFormat, plan: &TripPlan) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(out, plan);
    }

    writeln!(out, "\nTrip Estimate")?;
    writeln!(out, "=============")?;
    writeln!(out, "Road distance:   {:.1} km", plan.route.distance_km)?;
    writeln!(out, "Duration:        {}", plan.route.duration)?;
    writeln!(out, "Region:          {}", plan.fuel_price.region)?;
    writeln!(out, "Fuel type:       {}", plan.fuel_type)?;
    writeln!(out, "-------------------------")?;
    print_calculation_rows(out, &plan.calculation)?;
    Ok(())
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Sedan", 14), "Sedan");
        assert_eq!(truncate_str("Long Wheelbase Van", 10), "Long Whe..");
    }

    #[test]
    fn test_comparison_table_names_cheaper_vehicle() {
        let comparison = fuelcalc_domain::service::compare(
            fuelcalc_domain::service::compute(100.0, 8.0, 1.5).unwrap(),
            fuelcalc_domain::service::compute(100.0, 6.0, 1.5).unwrap(),
        );
        let mut buf = Vec::new();
        output_comparison(&mut buf, OutputFormat::Table, &comparison, Some(("Van", "Hatchback"))).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Savings:         +3.00"));
        assert!(text.contains("Hatchback is cheaper by 3.00"));
    }

    #[test]
    fn test_conversion_json_keys() {
        let value = serde_json::to_value(EfficiencyConversion {
            l_per_100km: 8.0,
            kmpl: 12.5,
            mpg: 29.4,
        })
        .unwrap();
        assert!(value.get("lPer100km").is_some());
        assert!(value.get("kmpl").is_some());
        assert!(value.get("mpg").is_some());
    }
}

//! Regional fuel price table
//!
//! Reference retail prices per litre (INR). Lookup is by lowercase trimmed
//! region name; unknown regions get the national average.

use fuelcalc_types::FuelType;
use serde::{Deserialize, Serialize};

/// Petrol and diesel prices for one region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalFuelPrice {
    pub region: String,
    pub petrol: f64,
    pub diesel: f64,
}

impl RegionalFuelPrice {
    pub fn price_for(&self, fuel_type: FuelType) -> f64 {
        match fuel_type {
            FuelType::Petrol => self.petrol,
            FuelType::Diesel => self.diesel,
        }
    }
}

const NATIONAL_AVERAGE: (&str, f64, f64) = ("India (Average)", 102.50, 90.25);

const REGIONAL_PRICES: &[(&str, f64, f64)] = &[
    ("Delhi", 96.72, 89.62),
    ("Gujarat", 96.77, 92.91),
    ("Karnataka", 102.86, 88.94),
    ("Kerala", 102.85, 89.15),
    ("Maharashtra", 106.31, 94.27),
    ("Punjab", 108.53, 94.61),
    ("Rajasthan", 107.49, 92.91),
    ("Tamil Nadu", 101.50, 88.75),
    ("Uttar Pradesh", 96.57, 89.76),
    ("West Bengal", 106.03, 92.76),
];

fn to_record(&(region, petrol, diesel): &(&str, f64, f64)) -> RegionalFuelPrice {
    RegionalFuelPrice {
        region: region.to_string(),
        petrol,
        diesel,
    }
}

/// Look up prices for a region, falling back to the national average
pub fn regional_price(region: &str) -> RegionalFuelPrice {
    let key = region.trim().to_lowercase();
    REGIONAL_PRICES
        .iter()
        .find(|(name, _, _)| name.to_lowercase() == key)
        .map(to_record)
        .unwrap_or_else(|| {
            tracing::debug!(region, "region not in price table, using national average");
            to_record(&NATIONAL_AVERAGE)
        })
}

/// Every entry in the table, national average last
pub fn all_prices() -> Vec<RegionalFuelPrice> {
    REGIONAL_PRICES
        .iter()
        .chain(std::iter::once(&NATIONAL_AVERAGE))
        .map(to_record)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_ignores_case_and_whitespace() {
        let kerala = regional_price("  KERALA ");
        assert_eq!(kerala.region, "Kerala");
        assert_eq!(kerala.petrol, 102.85);
        assert_eq!(kerala.price_for(FuelType::Diesel), 89.15);
    }

    #[test]
    fn test_unknown_region_falls_back() {
        let price = regional_price("Atlantis");
        assert_eq!(price.region, "India (Average)");
        assert_eq!(price.price_for(FuelType::Petrol), 102.50);
    }

    #[test]
    fn test_table_listing() {
        let all = all_prices();
        assert_eq!(all.len(), 11);
        assert_eq!(all.last().unwrap().region, "India (Average)");
        assert!(all.iter().all(|p| p.petrol > 0.0 && p.diesel > 0.0));
    }
}

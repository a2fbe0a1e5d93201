//! Built-in reference data

pub mod fuel_prices;

pub use fuel_prices::{all_prices, regional_price, RegionalFuelPrice};

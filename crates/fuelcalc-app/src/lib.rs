//! Application service layer - config, fuel prices, trip planning

pub mod app;
pub mod config;
pub mod constants;
pub mod repository;

//! Straight-line route estimation
//!
//! Road distance is approximated from the great-circle distance and a fixed
//! detour factor; no routing service is involved.

use fuelcalc_types::{Error, Result};
use tracing::debug;

use crate::model::{Coordinates, RouteEstimate};

/// Mean Earth radius (km)
pub const EARTH_RADIUS_KM: f64 = 6371.0;
/// Roads are typically 1.2-1.4x the straight line
pub const ROAD_DETOUR_FACTOR: f64 = 1.3;
/// Average driving speed used for duration estimates (km/h)
pub const AVERAGE_SPEED_KMH: f64 = 50.0;

/// Great-circle distance between two points (km)
pub fn haversine_km(from: Coordinates, to: Coordinates) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lon = (to.lon - from.lon).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Estimate road distance and driving time
pub fn estimate_route(from: Coordinates, to: Coordinates) -> Result<RouteEstimate> {
    validate_coordinates("origin", from)?;
    validate_coordinates("destination", to)?;

    let straight = haversine_km(from, to);
    let distance_km = straight * ROAD_DETOUR_FACTOR;
    let hours = distance_km / AVERAGE_SPEED_KMH;
    debug!(straight, distance_km, hours, "estimated route");

    Ok(RouteEstimate {
        distance_km,
        duration: format_duration(hours),
    })
}

/// Render hours as "45 mins", "2 hour" or "2 hours 30 mins"
pub fn format_duration(hours: f64) -> String {
    if hours < 1.0 {
        let minutes = (hours * 60.0) as u64;
        return format!("{} mins", minutes);
    }

    let h = hours.trunc() as u64;
    let m = ((hours - hours.trunc()) * 60.0) as u64;

    if m == 0 {
        format!("{} hour", h)
    } else {
        format!("{} hours {} mins", h, m)
    }
}

fn validate_coordinates(label: &str, point: Coordinates) -> Result<()> {
    if !point.lat.is_finite() || !point.lon.is_finite() {
        return Err(Error::InvalidCoordinates(format!(
            "{} ({}, {}) is not finite",
            label, point.lat, point.lon
        )));
    }
    if point.lat.abs() > 90.0 || point.lon.abs() > 180.0 {
        return Err(Error::InvalidCoordinates(format!(
            "{} ({}, {}) is out of range",
            label, point.lat, point.lon
        )));
    }
    Ok(())
}

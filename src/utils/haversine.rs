//! Great-circle distance on a spherical Earth.

use crate::types::location::Coordinate;

/// Mean Earth radius used by every distance in this crate.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Returns the haversine distance between two coordinates in
/// kilometers.
///
/// Coordinates are not range checked. A non-finite component yields a
/// NaN distance.
///
/// # Arguments
/// * `from` - The first coordinate, usually the user.
/// * `to` - The second coordinate, usually a drop-off point.
pub fn distance(from: &Coordinate, to: &Coordinate) -> f64 {
    let lat_1 = from.latitude.to_radians();
    let lat_2 = to.latitude.to_radians();
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat_1.cos() * lat_2.cos() * (d_lon / 2.0).sin().powi(2);
    // rounding can push antipodal pairs past 1.0; NaN stays NaN
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

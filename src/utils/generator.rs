//! Generates synthetic drop-off points for tests and demos.

use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::types::{location::Coordinate, point::Point, waste::WasteType};
use crate::utils::haversine::EARTH_RADIUS_KM;

/// Scatters `capacity` points at random within `radius_km` of
/// `location`.
///
/// Offsets use a flat-earth approximation, which keeps points inside
/// the radius for the small radii a city map deals with.
///
/// # Arguments
/// * `location` - The center of the scatter.
/// * `radius_km` - Upper bound of the distance from the center.
/// * `capacity` - Number of points to generate.
pub fn generate_points_near(location: &Coordinate, radius_km: f64, capacity: usize) -> Vec<Point> {
    let mut rng = rand::thread_rng();
    let km_per_degree = EARTH_RADIUS_KM.to_radians();
    let mut points = Vec::with_capacity(capacity);

    for i in 0..capacity {
        // stay strictly inside the radius
        let range = if radius_km > 0.0 {
            rng.gen_range(0.0..radius_km * 0.95)
        } else {
            0.0
        };
        let bearing = rng.gen_range(0.0..std::f64::consts::TAU);
        let d_lat = range * bearing.cos() / km_per_degree;
        let d_lon = range * bearing.sin() / (km_per_degree * location.latitude.to_radians().cos());
        let waste_type = *WasteType::KNOWN
            .choose(&mut rng)
            .unwrap_or(&WasteType::Unspecified);

        points.push(Point {
            id: Uuid::new_v4().to_string(),
            name: format!("Ecoponto {}", i + 1),
            waste_type,
            location: Coordinate::new(location.latitude + d_lat, location.longitude + d_lon),
            street: String::new(),
            neighborhood: String::new(),
            created_at: None,
            opening_hours: None,
            photo_url: None,
        });
    }
    debug!("Generated {} points within {} km", points.len(), radius_km);
    points
}

#[cfg(test)]
mod generator_tests {
    use super::*;
    use crate::utils::haversine;

    #[test]
    fn test_capacity_and_radius() {
        let center = Coordinate::new(-1.359, -48.488);
        let points = generate_points_near(&center, 10.0, 200);
        assert_eq!(points.len(), 200);
        for point in &points {
            assert!(haversine::distance(&center, &point.location) <= 10.0);
            assert_ne!(point.waste_type, WasteType::Unspecified);
        }
    }

    #[test]
    fn test_unique_ids() {
        let center = Coordinate::new(37.7749, -122.4194);
        let points = generate_points_near(&center, 5.0, 50);
        let mut ids: Vec<&str> = points.iter().map(|p| p.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }
}

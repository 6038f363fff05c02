//! Definition of the [`RankedPoint`] type.
use serde::Serialize;

use super::point::Point;

/// A [`Point`] together with its distance from the user.
///
/// Only ever produced by [`crate::ranking::rank`]. It has no lifecycle
/// of its own and is rebuilt whenever the user location or the point
/// list changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPoint {
    /// Great-circle distance from the user, in kilometers. NaN when
    /// either coordinate was not a number.
    pub distance_km: f64,

    #[serde(flatten)]
    pub point: Point,
}

impl RankedPoint {
    pub fn new(distance_km: f64, point: Point) -> Self {
        RankedPoint { distance_km, point }
    }

    /// Distance rounded to one decimal, e.g. `"111.2 km"`.
    pub fn distance_label(&self) -> String {
        format!("{:.1} km", self.distance_km)
    }
}

#[cfg(test)]
mod ranked_tests {
    use super::*;
    use crate::types::{location::Coordinate, waste::WasteType};

    fn point() -> Point {
        Point {
            id: "p1".to_string(),
            name: "Ecoponto Nazaré".to_string(),
            waste_type: WasteType::Oil,
            location: Coordinate::new(-1.4531, -48.4866),
            street: "Av. Nazaré".to_string(),
            neighborhood: "Nazaré".to_string(),
            created_at: None,
            opening_hours: None,
            photo_url: None,
        }
    }

    #[test]
    fn test_distance_label() {
        assert_eq!(
            RankedPoint::new(111.19, point()).distance_label(),
            "111.2 km"
        );
        assert_eq!(RankedPoint::new(0.0, point()).distance_label(), "0.0 km");
    }

    #[test]
    fn test_serialize_flattens_point() {
        let ranked = RankedPoint::new(2.5, point());
        let value = serde_json::to_value(ranked).unwrap();
        assert_eq!(value["distance_km"], 2.5);
        assert_eq!(value["id"], "p1");
        assert_eq!(value["tipo_residuo"], "oleo");
        assert_eq!(value["longitude"], -48.4866);
    }
}

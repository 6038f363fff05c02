//! Struct definitions and implementations for [`Coordinate`].
//!
//! A coordinate is either where a drop-off point sits or where the user
//! is. The user's coordinate comes from a location fix, or from a
//! fallback when no fix is available.

use serde::{Deserialize, Serialize};

/// A [`Coordinate`] is an interface type that represents a geographic
/// position in decimal degrees. Typically, this type is used in tandem
/// with the [`Point`](`super::point::Point`) type.
///
/// Double precision is used since distances down to a few meters are
/// shown to the user.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// Where the user is assumed to be when no location fix is available.
pub const FALLBACK_LOCATION: Coordinate = Coordinate {
    latitude: -1.359,
    longitude: -48.488,
};

impl Coordinate {
    /// Creates a coordinate from a latitude and longitude pair.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }

    /// Whether both components are finite and inside the geographic
    /// range.
    ///
    /// Nothing in the ranking path calls this; an invalid coordinate
    /// simply produces a NaN distance.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Coordinate::new(latitude, longitude)
    }
}

/// Resolves the coordinate the user is ranked against.
pub struct UserLocation;

impl UserLocation {
    /// Returns the location fix, or the process-wide default center
    /// when the location capability was unavailable or denied.
    pub fn resolve(fix: Option<Coordinate>) -> Coordinate {
        UserLocation::resolve_or(fix, crate::config::settings().default_center())
    }

    /// Returns the location fix, or `fallback` when there is none.
    pub fn resolve_or(fix: Option<Coordinate>, fallback: Coordinate) -> Coordinate {
        match fix {
            Some(coordinate) => coordinate,
            None => {
                warn!("No location fix, using fallback {:?}", fallback);
                fallback
            }
        }
    }
}

//! The core of the library.
//!
//! Ranking turns the points returned by the API into a list ordered by
//! distance from the user. It is a pure function over its inputs: the
//! caller ranks again whenever the user location or the point list
//! changes and replaces its previous list wholesale.
//!
//! Distances are compared through [`OrderedFloat`], which gives the
//! sort a total order. A NaN distance compares greater than every other
//! value, infinity included, and equal to any other NaN. Such points
//! therefore end up last, in input order.

use ordered_float::OrderedFloat;

use crate::types::{location::Coordinate, point::Point, ranked::RankedPoint, waste::WasteFilter};
use crate::utils::haversine;

/// Ranks points by distance from the user, nearest first.
///
/// The sort is stable, so points at the same distance keep their input
/// order and ranking the same input twice gives the same output. The
/// output has exactly one entry per input point; duplicates are kept.
///
/// # Arguments
/// * `points` - The points to rank. Not modified.
/// * `user` - The coordinate distances are measured from.
///
/// # Time Complexity
/// *O*(*n* log *n*) for the sort after one distance per point.
pub fn rank(points: &[Point], user: &Coordinate) -> Vec<RankedPoint> {
    debug!("Ranking {} points around {:?}", points.len(), user);
    let mut ranked: Vec<RankedPoint> = points
        .iter()
        .map(|point| RankedPoint::new(haversine::distance(user, &point.location), point.clone()))
        .collect();
    ranked.sort_by_key(|ranked_point| OrderedFloat(ranked_point.distance_km));
    ranked
}

/// Returns the point nearest to the user, if there is any.
pub fn nearest(points: &[Point], user: &Coordinate) -> Option<RankedPoint> {
    rank(points, user).into_iter().next()
}

/// Ranks only the points within `radius_km` of the user.
///
/// Points with a NaN distance are never within any radius.
pub fn rank_within(points: &[Point], user: &Coordinate, radius_km: f64) -> Vec<RankedPoint> {
    let ranked: Vec<RankedPoint> = rank(points, user)
        .into_iter()
        .take_while(|ranked_point| ranked_point.distance_km <= radius_km)
        .collect();
    debug!(
        "{} of {} points within {} km",
        ranked.len(),
        points.len(),
        radius_km
    );
    ranked
}

/// Keeps the points matching `filter`, in their original order.
pub fn filter_by_waste(points: &[Point], filter: WasteFilter) -> Vec<Point> {
    points
        .iter()
        .filter(|point| filter.matches(&point.waste_type))
        .cloned()
        .collect()
}

/// Finds a ranked point by its identifier.
pub fn find_ranked<'a>(ranked: &'a [RankedPoint], id: &str) -> Option<&'a RankedPoint> {
    ranked
        .iter()
        .find(|ranked_point| ranked_point.point.id == id)
}

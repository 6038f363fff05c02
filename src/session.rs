//! Stores the state behind the map page and keeps the ranked list in
//! step with its inputs.
//!
//! The host application drives a [`MapSession`] by calling its setters
//! as inputs arrive: a location fix (or the lack of one), a freshly
//! fetched point list, a different waste filter. Each setter ranks the
//! points again and replaces the ranked list as a whole.

use crate::config::Settings;
use crate::payload::NearbyQuery;
use crate::ranking::rank;
use crate::state::{MapState, Viewport};
use crate::types::{
    location::{Coordinate, UserLocation},
    point::Point,
    ranked::RankedPoint,
    waste::WasteFilter,
};

#[derive(Debug, Clone)]
pub struct MapSession {
    settings: Settings,
    user_location: Option<Coordinate>,
    filter: WasteFilter,
    points: Vec<Point>,
    ranked: Vec<RankedPoint>,

    /// Selection and panel state.
    pub state: MapState,
    pub viewport: Viewport,
}

impl MapSession {
    /// Creates a session with no location and no points yet.
    pub fn new(settings: Settings) -> Self {
        let viewport = Viewport::initial(&settings);
        MapSession {
            settings,
            user_location: None,
            filter: WasteFilter::All,
            points: Vec::new(),
            ranked: Vec::new(),
            state: MapState::default(),
            viewport,
        }
    }

    /// Records the outcome of asking for the user location.
    ///
    /// `None` means the location was unavailable or denied; the
    /// configured default center is used instead and the viewport stays
    /// on the default view.
    pub fn set_user_fix(&mut self, fix: Option<Coordinate>) {
        self.viewport = match fix {
            Some(coordinate) => {
                info!("User location fix at {:?}", coordinate);
                Viewport::around(coordinate)
            }
            None => Viewport::initial(&self.settings),
        };
        let location = UserLocation::resolve_or(fix, self.settings.default_center());
        self.user_location = Some(location);
        self.refresh();
    }

    /// Replaces the point list, typically with a fetch result.
    pub fn set_points(&mut self, points: Vec<Point>) {
        self.points = points;
        self.refresh();
    }

    /// Switches the waste filter.
    ///
    /// The current points were fetched for the old filter and are
    /// dropped; fetch [`MapSession::nearby_query`] again to refill.
    pub fn set_filter(&mut self, filter: WasteFilter) {
        if self.filter == filter {
            return;
        }
        debug!("Filter changed from {:?} to {:?}", self.filter, filter);
        self.filter = filter;
        self.points.clear();
        self.refresh();
    }

    /// Marks a point active and focuses the map on it.
    ///
    /// Returns false and changes nothing when the point is not in the
    /// ranked list.
    pub fn activate(&mut self, id: &str) -> bool {
        match Viewport::focused(&self.ranked, id) {
            Some(viewport) => {
                self.viewport = viewport;
                self.state.set_active(Some(id.to_string()));
                true
            }
            None => {
                debug!("Point {} is not in the ranked list", id);
                false
            }
        }
    }

    /// The fetch the host should perform next, once a location is known.
    pub fn nearby_query(&self) -> Option<NearbyQuery> {
        self.user_location.map(|location| NearbyQuery {
            location,
            radius_meters: self.settings.search_radius_meters,
            filter: self.filter,
        })
    }

    pub fn user_location(&self) -> Option<Coordinate> {
        self.user_location
    }

    pub fn filter(&self) -> WasteFilter {
        self.filter
    }

    /// The points ordered nearest first. Empty until a location is known.
    pub fn ranked(&self) -> &[RankedPoint] {
        &self.ranked
    }

    fn refresh(&mut self) {
        self.ranked = match &self.user_location {
            Some(location) => rank(&self.points, location),
            None => Vec::new(),
        };
    }
}

//! Presentation state of the map page: which point is selected, which
//! panels are open and where the map looks.
//!
//! Nothing here ranks or fetches. [`crate::session::MapSession`] owns
//! one [`MapState`] and one [`Viewport`] next to the ranked list.

use crate::config::Settings;
use crate::ranking::find_ranked;
use crate::types::{location::Coordinate, point::Point, ranked::RankedPoint};

/// Zoom used once the user location is known.
pub const USER_ZOOM: f64 = 14.0;
/// Zoom used when a single point is focused.
pub const FOCUS_ZOOM: f64 = 16.0;

/// Selection and panel visibility.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapState {
    /// The point whose details are shown in the sidebar.
    pub selected: Option<Point>,
    pub sidebar_open: bool,
    /// Whether the nearest-points list is expanded.
    pub list_open: bool,
    /// The point highlighted in the list and on the map.
    pub active_point_id: Option<String>,
}

impl MapState {
    /// Selects a point, or clears the selection with `None`.
    ///
    /// The sidebar is open exactly when a point is selected.
    pub fn select(&mut self, point: Option<Point>) {
        self.sidebar_open = point.is_some();
        self.selected = point;
    }

    pub fn open_sidebar(&mut self) {
        self.sidebar_open = true;
    }

    /// Closes the sidebar and drops the selection with it.
    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
        self.selected = None;
    }

    pub fn set_list_open(&mut self, open: bool) {
        self.list_open = open;
    }

    pub fn set_active(&mut self, id: Option<String>) {
        self.active_point_id = id;
    }

    /// Whether `point` is the active one.
    pub fn is_active(&self, point: &Point) -> bool {
        self.active_point_id.as_deref() == Some(point.id.as_str())
    }
}

/// Center and zoom of the map.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
}

impl Viewport {
    /// The configured default view.
    pub fn initial(settings: &Settings) -> Self {
        Viewport {
            latitude: settings.default_map_lat,
            longitude: settings.default_map_lon,
            zoom: settings.default_map_zoom,
        }
    }

    /// A view centered on the user location.
    pub fn around(coordinate: Coordinate) -> Self {
        Viewport {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
            zoom: USER_ZOOM,
        }
    }

    /// A close view of the ranked point with the given id, if it is in
    /// the list.
    pub fn focused(ranked: &[RankedPoint], id: &str) -> Option<Self> {
        find_ranked(ranked, id).map(|ranked_point| Viewport {
            latitude: ranked_point.point.location.latitude,
            longitude: ranked_point.point.location.longitude,
            zoom: FOCUS_ZOOM,
        })
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

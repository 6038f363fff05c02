//! Settings read from the environment.
//!
//! Every setting has a default, so an empty environment is valid.

use once_cell::sync::OnceCell;
use std::str::FromStr;

use crate::error::Error;
use crate::types::location::{Coordinate, FALLBACK_LOCATION};

/// Root of the points API during local development.
pub const DEFAULT_API_ROOT: &str = "http://localhost:8080";
pub const DEFAULT_APP_TITLE: &str = "EcoPonto";
/// Zoom of the map before the user location is known.
pub const DEFAULT_MAP_ZOOM: f64 = 12.0;
/// Search radius sent with every nearby query (10 km).
pub const DEFAULT_SEARCH_RADIUS_METERS: u32 = 10_000;

const API_URL_KEY: &str = "ECOPONTO_API_URL";
const APP_TITLE_KEY: &str = "ECOPONTO_APP_TITLE";
const MAP_LAT_KEY: &str = "ECOPONTO_DEFAULT_MAP_LAT";
const MAP_LON_KEY: &str = "ECOPONTO_DEFAULT_MAP_LON";
const MAP_ZOOM_KEY: &str = "ECOPONTO_DEFAULT_MAP_ZOOM";
const SEARCH_RADIUS_KEY: &str = "ECOPONTO_SEARCH_RADIUS_METERS";

static SETTINGS: OnceCell<Settings> = OnceCell::new();

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Root of the points API, without the `/api` suffix.
    pub api_root: String,
    pub app_title: String,
    pub default_map_lat: f64,
    pub default_map_lon: f64,
    pub default_map_zoom: f64,
    pub search_radius_meters: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            api_root: DEFAULT_API_ROOT.to_string(),
            app_title: DEFAULT_APP_TITLE.to_string(),
            default_map_lat: FALLBACK_LOCATION.latitude,
            default_map_lon: FALLBACK_LOCATION.longitude,
            default_map_zoom: DEFAULT_MAP_ZOOM,
            search_radius_meters: DEFAULT_SEARCH_RADIUS_METERS,
        }
    }
}

impl Settings {
    /// Reads the settings from the process environment.
    pub fn from_env() -> Result<Settings, Error> {
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the settings through `lookup`, falling back to the default
    /// of every key it has no value for. Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Settings, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Settings::default();
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Ok(Settings {
            api_root: lookup(API_URL_KEY)
                .map(|root| root.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_root),
            app_title: lookup(APP_TITLE_KEY).unwrap_or(defaults.app_title),
            default_map_lat: parse_or(lookup(MAP_LAT_KEY), MAP_LAT_KEY, defaults.default_map_lat)?,
            default_map_lon: parse_or(lookup(MAP_LON_KEY), MAP_LON_KEY, defaults.default_map_lon)?,
            default_map_zoom: parse_or(
                lookup(MAP_ZOOM_KEY),
                MAP_ZOOM_KEY,
                defaults.default_map_zoom,
            )?,
            search_radius_meters: parse_or(
                lookup(SEARCH_RADIUS_KEY),
                SEARCH_RADIUS_KEY,
                defaults.search_radius_meters,
            )?,
        })
    }

    /// Base URL every API path is relative to.
    pub fn api_base(&self) -> String {
        format!("{}/api", self.api_root)
    }

    /// Map center used when the user location is unknown.
    pub fn default_center(&self) -> Coordinate {
        Coordinate::new(self.default_map_lat, self.default_map_lon)
    }

    /// Search radius in kilometers.
    pub fn search_radius_km(&self) -> f64 {
        f64::from(self.search_radius_meters) / 1000.0
    }
}

/// Returns the process-wide settings, reading the environment on first
/// use.
///
/// An environment that fails to parse is logged and replaced by the
/// defaults.
pub fn settings() -> &'static Settings {
    SETTINGS.get_or_init(|| match Settings::from_env() {
        Ok(settings) => {
            info!("Settings loaded, API at {}", settings.api_base());
            settings
        }
        Err(e) => {
            warn!("{}, using default settings", e);
            Settings::default()
        }
    })
}

fn parse_or<T: FromStr>(value: Option<String>, key: &str, default: T) -> Result<T, Error> {
    match value {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| Error::InvalidSetting {
            key: key.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        let settings = Settings::from_lookup(|_| None).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.api_base(), "http://localhost:8080/api");
        assert_eq!(settings.default_center(), FALLBACK_LOCATION);
        assert_eq!(settings.search_radius_km(), 10.0);
    }

    #[test]
    fn test_values_override_defaults() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("ECOPONTO_API_URL", "https://ecoponto.example.org/"),
            ("ECOPONTO_APP_TITLE", "EcoPonto Belém"),
            ("ECOPONTO_DEFAULT_MAP_LAT", " -1.4558 "),
            ("ECOPONTO_DEFAULT_MAP_LON", "-48.4902"),
            ("ECOPONTO_DEFAULT_MAP_ZOOM", "13"),
            ("ECOPONTO_SEARCH_RADIUS_METERS", "2500"),
        ]))
        .unwrap();

        assert_eq!(settings.api_base(), "https://ecoponto.example.org/api");
        assert_eq!(settings.app_title, "EcoPonto Belém");
        assert_eq!(
            settings.default_center(),
            Coordinate::new(-1.4558, -48.4902)
        );
        assert_eq!(settings.default_map_zoom, 13.0);
        assert_eq!(settings.search_radius_km(), 2.5);
    }

    #[test]
    fn test_blank_value_is_missing() {
        let lookup = lookup_from(&[("ECOPONTO_DEFAULT_MAP_LAT", "  ")]);
        let settings = Settings::from_lookup(lookup).unwrap();
        assert_eq!(settings.default_map_lat, FALLBACK_LOCATION.latitude);
    }

    #[test]
    fn test_invalid_value_is_error() {
        let lookup = lookup_from(&[("ECOPONTO_SEARCH_RADIUS_METERS", "ten")]);
        match Settings::from_lookup(lookup) {
            Err(Error::InvalidSetting { key, value }) => {
                assert_eq!(key, "ECOPONTO_SEARCH_RADIUS_METERS");
                assert_eq!(value, "ten");
            }
            other => panic!("expected InvalidSetting, got {:?}", other),
        }
    }
}

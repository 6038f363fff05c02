//! Error type shared by the fallible parts of the crate.
//!
//! Ranking never fails. Errors come from configuration, point list
//! parsing and admin form validation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// An environment setting could not be parsed.
    #[error("invalid value {value:?} for setting {key}")]
    InvalidSetting { key: String, value: String },

    /// A new point was submitted without a position on the map.
    #[error("no location set: search an address or click on the map")]
    MissingLocation,

    /// A new point was submitted with blank name or address fields.
    #[error("incomplete address: name, street, neighborhood, city and state are required")]
    IncompleteAddress,

    /// A response body was not a valid point list.
    #[error("malformed point list: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = Error::InvalidSetting {
            key: "ECOPONTO_DEFAULT_MAP_ZOOM".to_string(),
            value: "far".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid value \"far\" for setting ECOPONTO_DEFAULT_MAP_ZOOM"
        );
        let message = Error::MissingLocation.to_string();
        assert!(message.starts_with("no location set"));
    }

    #[test]
    fn test_json_error_converts_and_keeps_source() {
        let err: Error = serde_json::from_str::<Vec<u8>>("{").unwrap_err().into();
        assert!(matches!(err, Error::Json(_)));
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("malformed point list: "));
    }
}

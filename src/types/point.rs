//! Struct definitions and implementations for [`Point`], a recycling
//! drop-off point as the points API returns it.
//!
//! The API owns the lifecycle of a point. This crate only reads points,
//! ranks them and prepares the payloads an administrator submits (see
//! [`crate::payload`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::location::Coordinate;
use super::waste::WasteType;
use crate::error::Error;

/// A physical collection site for one category of waste.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Identifier assigned by the API. Treated as opaque.
    pub id: String,

    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "tipo_residuo", default)]
    pub waste_type: WasteType,

    /// Sent as flat `latitude` and `longitude` fields.
    #[serde(flatten)]
    pub location: Coordinate,

    /// Street address line.
    #[serde(rename = "logradouro", default)]
    pub street: String,

    #[serde(rename = "bairro", default)]
    pub neighborhood: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(
        rename = "horario_funcionamento",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub opening_hours: Option<String>,

    /// Reference to the photo held by the image host.
    #[serde(rename = "foto_url", default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl Point {
    /// Parses the body of a point list response.
    ///
    /// The API answers `null` instead of `[]` when nothing matches; both
    /// yield an empty list.
    pub fn list_from_json(body: &str) -> Result<Vec<Point>, Error> {
        let points: Option<Vec<Point>> = serde_json::from_str(body)?;
        let points = points.unwrap_or_default();
        debug!("Parsed {} points", points.len());
        Ok(points)
    }

    /// The address as one line, skipping empty parts.
    pub fn address_line(&self) -> String {
        [self.street.as_str(), self.neighborhood.as_str()]
            .iter()
            .filter(|part| !part.trim().is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

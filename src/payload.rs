//! Requests sent to the points API.
//!
//! This module only shapes requests. Sending them, and authenticating
//! the admin ones, is up to the host application.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Error;
use crate::types::{location::Coordinate, point::Point, waste::WasteFilter};

/// Path of the point collection, relative to the API base.
pub const POINTS_PATH: &str = "/ecopontos";
/// Path of the unfiltered admin listing.
pub const ALL_POINTS_PATH: &str = "/ecopontos/all";

/// Path of a single point.
pub fn point_path(id: &str) -> String {
    format!("{}/{}", POINTS_PATH, id)
}

/// Query for the points around a location.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct NearbyQuery {
    pub location: Coordinate,
    pub radius_meters: u32,
    pub filter: WasteFilter,
}

impl NearbyQuery {
    /// Query parameters in the order the API documents them.
    ///
    /// `tipo` is left out when every category is wanted. The trailing
    /// `_` parameter carries `now` in epoch milliseconds so that no
    /// cache in between answers with a stale list.
    pub fn to_query_pairs(&self, now: DateTime<Utc>) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("lat", self.location.latitude.to_string()),
            ("lon", self.location.longitude.to_string()),
            ("dist", self.radius_meters.to_string()),
        ];
        if let Some(tag) = self.filter.query_value() {
            pairs.push(("tipo", tag.to_string()));
        }
        pairs.push(("_", now.timestamp_millis().to_string()));
        pairs
    }
}

/// Body of a point creation request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePointRequest {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "tipo_residuo")]
    pub waste_type: String,
    #[serde(rename = "logradouro")]
    pub street: String,
    #[serde(rename = "bairro")]
    pub neighborhood: String,
    #[serde(rename = "cidade")]
    pub city: String,
    #[serde(rename = "estado")]
    pub state: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(
        rename = "horario_funcionamento",
        skip_serializing_if = "Option::is_none"
    )]
    pub opening_hours: Option<String>,
    #[serde(rename = "foto_url", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// Body of a point update request. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdatePointRequest {
    #[serde(rename = "nome", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "tipo_residuo", skip_serializing_if = "Option::is_none")]
    pub waste_type: Option<String>,
    #[serde(rename = "logradouro", skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(rename = "bairro", skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    #[serde(
        rename = "horario_funcionamento",
        skip_serializing_if = "Option::is_none"
    )]
    pub opening_hours: Option<String>,
    #[serde(rename = "foto_url", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// The admin form for creating or editing a point.
///
/// Address fields are usually filled by reverse geocoding the marker
/// the admin places on the map; the form itself does not geocode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointForm {
    pub name: String,
    /// Waste tag as picked in the form, e.g. `"pilha"`.
    pub waste_type: String,
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub opening_hours: String,
    pub photo_url: String,
    /// Where the point was placed on the map.
    pub marker: Option<Coordinate>,
}

impl PointForm {
    /// Fills the form to edit an existing point.
    ///
    /// Points do not carry city and state, so those stay blank.
    pub fn from_point(point: &Point) -> Self {
        PointForm {
            name: point.name.clone(),
            waste_type: point.waste_type.tag().to_string(),
            street: point.street.clone(),
            neighborhood: point.neighborhood.clone(),
            city: String::new(),
            state: String::new(),
            opening_hours: point.opening_hours.clone().unwrap_or_default(),
            photo_url: point.photo_url.clone().unwrap_or_default(),
            marker: Some(point.location),
        }
    }

    /// Validates the form for creating a new point.
    pub fn to_create_request(&self) -> Result<CreatePointRequest, Error> {
        let marker = self.marker.ok_or(Error::MissingLocation)?;
        let required = [
            &self.name,
            &self.street,
            &self.neighborhood,
            &self.city,
            &self.state,
        ];
        if required.iter().any(|field| field.trim().is_empty()) {
            debug!("Rejecting incomplete point form: {:?}", self);
            return Err(Error::IncompleteAddress);
        }

        Ok(CreatePointRequest {
            name: self.name.trim().to_string(),
            waste_type: self.waste_type.clone(),
            street: self.street.trim().to_string(),
            neighborhood: self.neighborhood.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            latitude: marker.latitude,
            longitude: marker.longitude,
            opening_hours: non_empty(&self.opening_hours),
            photo_url: non_empty(&self.photo_url),
        })
    }

    /// Builds the update for an existing point. Never fails: the API
    /// keeps whatever an update leaves out.
    pub fn to_update_request(&self) -> UpdatePointRequest {
        UpdatePointRequest {
            name: Some(self.name.clone()),
            waste_type: Some(self.waste_type.clone()),
            street: Some(self.street.clone()),
            neighborhood: Some(self.neighborhood.clone()),
            opening_hours: non_empty(&self.opening_hours),
            photo_url: non_empty(&self.photo_url),
            latitude: self.marker.map(|marker| marker.latitude),
            longitude: self.marker.map(|marker| marker.longitude),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

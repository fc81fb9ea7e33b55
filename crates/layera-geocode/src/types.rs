//! Nominatim API response types for `/search` and `/reverse`.
//!
//! ## Observed shape from the public instance
//!
//! ### Coordinates
//! `lat` and `lon` are **strings**, not numbers (`"40.6403167"`). The same
//! goes for `boundingbox`, a 4-element string array in
//! `[south, north, west, east]` order. We keep them as strings and parse on
//! demand so a malformed record fails softly instead of rejecting the whole
//! response array.
//!
//! ### `osm_id` / `osm_type`
//! Present on virtually every record but absent from some third-party mirrors
//! and from certain interpolated house-number results. Modelled as `Option`.
//!
//! ### `geojson`
//! Only present when the request asked for `polygon_geojson=1` AND the object
//! has polygon geometry. Point-accuracy results come back with a `Point`
//! geometry instead of a polygon, and some administrative relations return
//! `MultiPolygon`. Kept as raw `serde_json::Value` and passed through.
//!
//! ### `address`
//! Only present with `addressdetails=1`. Which keys appear depends on the
//! object: a street address carries `road` + `house_number`, a city-level hit
//! may carry only `city`/`state`/`country`. Smaller localities use `town` or
//! `village` instead of `city`, and pedestrian streets use `pedestrian`
//! instead of `road`.

use serde::Deserialize;

/// A single record from `/search` (also the shape of a `/reverse` hit).
#[derive(Debug, Clone, Deserialize)]
pub struct NominatimPlace {
    pub place_id: i64,

    #[serde(default)]
    pub osm_id: Option<i64>,

    /// `"node"`, `"way"`, or `"relation"`.
    #[serde(default)]
    pub osm_type: Option<String>,

    /// Latitude as a decimal string.
    pub lat: String,

    /// Longitude as a decimal string.
    pub lon: String,

    pub display_name: String,

    /// Top-level OSM class, e.g. `"place"`, `"highway"`, `"boundary"`.
    #[serde(default)]
    pub class: Option<String>,

    /// OSM type within the class, e.g. `"city"`, `"residential"`,
    /// `"administrative"`.
    #[serde(default, rename = "type")]
    pub place_type: Option<String>,

    #[serde(default)]
    pub importance: Option<f64>,

    #[serde(default)]
    pub address: Option<NominatimAddress>,

    /// `[south, north, west, east]` as decimal strings.
    #[serde(default)]
    pub boundingbox: Option<Vec<String>>,

    /// Raw GeoJSON geometry, present only with `polygon_geojson=1`.
    #[serde(default)]
    pub geojson: Option<serde_json::Value>,

    #[serde(default)]
    pub extratags: Option<serde_json::Value>,

    #[serde(default)]
    pub namedetails: Option<serde_json::Value>,
}

impl NominatimPlace {
    /// Parsed latitude, `None` when the provider string is malformed.
    #[must_use]
    pub fn latitude(&self) -> Option<f64> {
        self.lat.parse().ok()
    }

    /// Parsed longitude, `None` when the provider string is malformed.
    #[must_use]
    pub fn longitude(&self) -> Option<f64> {
        self.lon.parse().ok()
    }
}

/// Structured address keys from `addressdetails=1`.
///
/// Every field is optional; which ones appear depends on the object type.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NominatimAddress {
    #[serde(default)]
    pub house_number: Option<String>,
    #[serde(default)]
    pub road: Option<String>,
    /// Used instead of `road` for pedestrianised streets.
    #[serde(default)]
    pub pedestrian: Option<String>,
    #[serde(default)]
    pub neighbourhood: Option<String>,
    #[serde(default)]
    pub suburb: Option<String>,
    #[serde(default)]
    pub village: Option<String>,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub municipality: Option<String>,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
}

//! Normalized geocoding model.
//!
//! [`GeocodeResult`] is the provider-independent shape the rest of the
//! pipeline works with: parsed coordinates, an accuracy tier, and the subset
//! of structured address fields the address-breakdown parser cares about.

use serde::{Deserialize, Serialize};

use crate::types::{NominatimAddress, NominatimPlace};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// How precisely the geocoder pinned the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accuracy {
    Exact,
    Street,
    City,
    Region,
}

/// Structured address fields, partially populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredAddress {
    pub street: Option<String>,
    pub house_number: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

/// Normalized output of one geocoding search, immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodeResult {
    pub display_name: String,
    pub coordinates: Coordinates,
    pub accuracy: Accuracy,
    pub address: StructuredAddress,
}

impl GeocodeResult {
    /// Normalize a raw provider record.
    ///
    /// Returns `None` when the record's coordinate strings do not parse —
    /// such a record cannot be placed on a map and is dropped rather than
    /// failing the whole response.
    #[must_use]
    pub fn from_place(place: &NominatimPlace) -> Option<Self> {
        let coordinates = Coordinates {
            latitude: place.latitude()?,
            longitude: place.longitude()?,
        };

        let address = place
            .address
            .as_ref()
            .map(structured_address)
            .unwrap_or_default();

        Some(Self {
            display_name: place.display_name.clone(),
            coordinates,
            accuracy: accuracy_for(place, &address),
            address,
        })
    }
}

fn structured_address(addr: &NominatimAddress) -> StructuredAddress {
    StructuredAddress {
        street: addr.road.clone().or_else(|| addr.pedestrian.clone()),
        house_number: addr.house_number.clone(),
        postal_code: addr.postcode.clone(),
        city: addr
            .city
            .clone()
            .or_else(|| addr.town.clone())
            .or_else(|| addr.village.clone())
            .or_else(|| addr.municipality.clone()),
        region: addr
            .state
            .clone()
            .or_else(|| addr.region.clone())
            .or_else(|| addr.county.clone()),
        country: addr.country.clone(),
    }
}

/// Derive the accuracy tier from the provider classification, falling back to
/// whichever structured fields are populated when the class is unhelpful.
fn accuracy_for(place: &NominatimPlace, address: &StructuredAddress) -> Accuracy {
    match (place.class.as_deref(), place.place_type.as_deref()) {
        (Some("building"), _) | (Some("place"), Some("house" | "house_number")) => {
            return Accuracy::Exact
        }
        (Some("highway"), _) => return Accuracy::Street,
        (Some("place"), Some("city" | "town" | "village" | "municipality" | "suburb")) => {
            return Accuracy::City
        }
        (Some("boundary"), _) | (Some("place"), Some("state" | "region" | "county")) => {
            return Accuracy::Region
        }
        _ => {}
    }

    if address.house_number.is_some() {
        Accuracy::Exact
    } else if address.street.is_some() {
        Accuracy::Street
    } else if address.city.is_some() {
        Accuracy::City
    } else {
        Accuracy::Region
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(json: serde_json::Value) -> NominatimPlace {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn from_place_parses_coordinates_and_address() {
        let p = place(serde_json::json!({
            "place_id": 1,
            "osm_id": 99,
            "osm_type": "way",
            "lat": "40.6403167",
            "lon": "22.9432828",
            "display_name": "Εγνατία 25, 54625, Θεσσαλονίκη, Ελλάδα",
            "class": "highway",
            "type": "primary",
            "address": {
                "road": "Εγνατία",
                "house_number": "25",
                "postcode": "54625",
                "city": "Θεσσαλονίκη",
                "state": "Κεντρική Μακεδονία",
                "country": "Ελλάδα"
            }
        }));

        let result = GeocodeResult::from_place(&p).unwrap();
        assert!((result.coordinates.latitude - 40.640_316_7).abs() < 1e-9);
        assert!((result.coordinates.longitude - 22.943_282_8).abs() < 1e-9);
        assert_eq!(result.address.street.as_deref(), Some("Εγνατία"));
        assert_eq!(result.address.house_number.as_deref(), Some("25"));
        assert_eq!(result.address.city.as_deref(), Some("Θεσσαλονίκη"));
        assert_eq!(result.address.region.as_deref(), Some("Κεντρική Μακεδονία"));
        assert_eq!(result.accuracy, Accuracy::Street);
    }

    #[test]
    fn from_place_rejects_malformed_coordinates() {
        let p = place(serde_json::json!({
            "place_id": 1,
            "lat": "not-a-number",
            "lon": "22.9",
            "display_name": "x"
        }));
        assert!(GeocodeResult::from_place(&p).is_none());
    }

    #[test]
    fn town_and_pedestrian_fall_back_into_city_and_street() {
        let p = place(serde_json::json!({
            "place_id": 2,
            "lat": "38.0",
            "lon": "23.7",
            "display_name": "x",
            "address": {
                "pedestrian": "Ερμού",
                "town": "Ναύπλιο"
            }
        }));
        let result = GeocodeResult::from_place(&p).unwrap();
        assert_eq!(result.address.street.as_deref(), Some("Ερμού"));
        assert_eq!(result.address.city.as_deref(), Some("Ναύπλιο"));
    }

    #[test]
    fn accuracy_from_provider_class_wins_over_fields() {
        let p = place(serde_json::json!({
            "place_id": 3,
            "lat": "40.64",
            "lon": "22.94",
            "display_name": "Θεσσαλονίκη",
            "class": "place",
            "type": "city",
            "address": { "road": "ignored", "city": "Θεσσαλονίκη" }
        }));
        assert_eq!(GeocodeResult::from_place(&p).unwrap().accuracy, Accuracy::City);
    }

    #[test]
    fn accuracy_falls_back_to_populated_fields() {
        let p = place(serde_json::json!({
            "place_id": 4,
            "lat": "40.64",
            "lon": "22.94",
            "display_name": "x",
            "address": { "house_number": "25", "road": "Εγνατία" }
        }));
        assert_eq!(GeocodeResult::from_place(&p).unwrap().accuracy, Accuracy::Exact);
    }

    #[test]
    fn accuracy_defaults_to_region_when_nothing_is_known() {
        let p = place(serde_json::json!({
            "place_id": 5,
            "lat": "40.0",
            "lon": "22.0",
            "display_name": "somewhere"
        }));
        assert_eq!(GeocodeResult::from_place(&p).unwrap().accuracy, Accuracy::Region);
    }
}

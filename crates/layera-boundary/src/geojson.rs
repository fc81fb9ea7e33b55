//! GeoJSON output types for resolved boundaries.
//!
//! Deliberately minimal: the resolver only ever emits a `FeatureCollection`
//! with zero or one feature, and geometry is passed through as raw JSON from
//! the provider (which may answer with `Polygon` or `MultiPolygon`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryCollection {
    #[serde(rename = "type")]
    pub collection_type: String,
    pub features: Vec<BoundaryFeature>,
}

impl BoundaryCollection {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            collection_type: "FeatureCollection".to_owned(),
            features: Vec::new(),
        }
    }

    #[must_use]
    pub fn single(feature: BoundaryFeature) -> Self {
        Self {
            collection_type: "FeatureCollection".to_owned(),
            features: vec![feature],
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryFeature {
    #[serde(rename = "type")]
    pub feature_type: String,
    pub properties: BoundaryProperties,
    /// Raw GeoJSON geometry object.
    pub geometry: serde_json::Value,
}

impl BoundaryFeature {
    #[must_use]
    pub fn new(properties: BoundaryProperties, geometry: serde_json::Value) -> Self {
        Self {
            feature_type: "Feature".to_owned(),
            properties,
            geometry,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryProperties {
    pub name: String,
    /// Always `"8"`: the level is asserted, not computed from the data.
    pub admin_level: String,
    pub boundary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osm_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub osm_type: Option<String>,
}

impl BoundaryProperties {
    #[must_use]
    pub fn administrative(name: impl Into<String>, osm_id: Option<i64>, osm_type: Option<String>) -> Self {
        Self {
            name: name.into(),
            admin_level: "8".to_owned(),
            boundary: "administrative".to_owned(),
            osm_id,
            osm_type,
        }
    }
}

/// Synthesize a rectangular polygon from a Nominatim bounding box.
///
/// Input order is the provider's `[south, north, west, east]`, each a decimal
/// string. The ring starts at the north-west corner and runs clockwise,
/// closed by repeating the first point:
/// `[w,n], [e,n], [e,s], [w,s], [w,n]`.
///
/// Returns `None` when the box has fewer than 4 entries or any entry does
/// not parse.
#[must_use]
pub fn polygon_from_bbox(boundingbox: &[String]) -> Option<serde_json::Value> {
    if boundingbox.len() < 4 {
        return None;
    }
    let south: f64 = boundingbox[0].parse().ok()?;
    let north: f64 = boundingbox[1].parse().ok()?;
    let west: f64 = boundingbox[2].parse().ok()?;
    let east: f64 = boundingbox[3].parse().ok()?;

    Some(serde_json::json!({
        "type": "Polygon",
        "coordinates": [[
            [west, north],
            [east, north],
            [east, south],
            [west, south],
            [west, north],
        ]]
    }))
}

/// Build a polygon geometry from an already-closed ring of `[lon, lat]`
/// points (the local fallback table's format).
#[must_use]
pub(crate) fn polygon_from_ring(ring: &[[f64; 2]]) -> serde_json::Value {
    serde_json::json!({
        "type": "Polygon",
        "coordinates": [ring],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bbox(values: [&str; 4]) -> Vec<String> {
        values.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn bbox_polygon_matches_expected_ring() {
        let geometry = polygon_from_bbox(&bbox(["40.0", "40.1", "22.9", "23.0"])).unwrap();
        assert_eq!(
            geometry,
            serde_json::json!({
                "type": "Polygon",
                "coordinates": [[
                    [22.9, 40.1],
                    [23.0, 40.1],
                    [23.0, 40.0],
                    [22.9, 40.0],
                    [22.9, 40.1],
                ]]
            })
        );
    }

    #[test]
    fn bbox_polygon_ring_is_closed_with_five_points() {
        let geometry = polygon_from_bbox(&bbox(["34.8", "41.75", "19.37", "29.65"])).unwrap();
        let ring = geometry["coordinates"][0].as_array().unwrap();
        assert_eq!(ring.len(), 5);
        assert_eq!(ring.first(), ring.last());
    }

    #[test]
    fn bbox_polygon_rejects_short_or_malformed_input() {
        assert!(polygon_from_bbox(&bbox(["40.0", "40.1", "22.9", "oops"])).is_none());
        assert!(polygon_from_bbox(&["40.0".to_string()]).is_none());
        assert!(polygon_from_bbox(&[]).is_none());
    }

    #[test]
    fn properties_assert_admin_level_eight() {
        let props = BoundaryProperties::administrative("Δήμος Θεσσαλονίκης", Some(1), None);
        assert_eq!(props.admin_level, "8");
        assert_eq!(props.boundary, "administrative");
    }

    #[test]
    fn collection_serializes_with_geojson_type_tags() {
        let feature = BoundaryFeature::new(
            BoundaryProperties::administrative("x", None, None),
            serde_json::json!({"type": "Polygon", "coordinates": []}),
        );
        let value = serde_json::to_value(BoundaryCollection::single(feature)).unwrap();
        assert_eq!(value["type"], "FeatureCollection");
        assert_eq!(value["features"][0]["type"], "Feature");
        assert!(value["features"][0]["properties"].get("osm_id").is_none());
    }
}

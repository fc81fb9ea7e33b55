//! Primary tier: Nominatim `/search` with `polygon_geojson=1`.
//!
//! When the provider ships real polygon geometry it is passed through
//! untouched. When it only ships a bounding box, a rectangular polygon is
//! synthesized from it — coarse, but enough to highlight the area on a map.

use serde_json::Value;

use crate::error::ResolveError;
use crate::geojson::{polygon_from_bbox, BoundaryFeature, BoundaryProperties};

use super::BoundaryResolver;

impl BoundaryResolver {
    /// Queries the polygon search service for one label.
    ///
    /// Returns `Ok(None)` when the service answers cleanly but without a
    /// usable record (empty result list, or a record with neither geometry
    /// nor bounding box). A body that is not JSON at all is an error, as is
    /// any non-2xx status — those funnel the resolver into the next tier.
    pub(super) async fn polygon_search(
        &self,
        label: &str,
    ) -> Result<Option<BoundaryFeature>, ResolveError> {
        let url = self.polygon_search_url(label)?;
        let url_str = url.to_string();

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::Status {
                status: status.as_u16(),
                url: url_str,
            });
        }

        let body = response.text().await?;
        let value: Value = serde_json::from_str(&body)?;

        let Some(first) = value.as_array().and_then(|records| records.first()) else {
            return Ok(None);
        };

        let Some(geometry) = extract_geometry(first) else {
            tracing::debug!(label, host = %self.host, "record has no usable geometry");
            return Ok(None);
        };

        let name = first
            .get("display_name")
            .and_then(Value::as_str)
            .and_then(|d| d.split(',').next())
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map_or_else(|| label.to_owned(), str::to_owned);
        let osm_id = first.get("osm_id").and_then(Value::as_i64);
        let osm_type = first
            .get("osm_type")
            .and_then(Value::as_str)
            .map(str::to_owned);

        Ok(Some(BoundaryFeature::new(
            BoundaryProperties::administrative(name, osm_id, osm_type),
            geometry,
        )))
    }

    fn polygon_search_url(&self, label: &str) -> Result<reqwest::Url, ResolveError> {
        let mut url = reqwest::Url::parse(&format!("{}/search", self.nominatim_base)).map_err(
            |e| ResolveError::InvalidUrl {
                url: self.nominatim_base.clone(),
                reason: e.to_string(),
            },
        )?;
        url.query_pairs_mut()
            .append_pair("q", label)
            .append_pair("format", "json")
            .append_pair("polygon_geojson", "1")
            .append_pair("limit", "1")
            .append_pair("accept-language", &self.accept_language);
        Ok(url)
    }
}

/// Real polygon geometry when present, otherwise a rectangle synthesized
/// from the bounding box.
fn extract_geometry(record: &Value) -> Option<Value> {
    if let Some(geojson) = record.get("geojson") {
        if geojson.is_object() {
            return Some(geojson.clone());
        }
    }
    let bbox: Vec<String> = record
        .get("boundingbox")?
        .as_array()?
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_owned)
        .collect();
    polygon_from_bbox(&bbox)
}

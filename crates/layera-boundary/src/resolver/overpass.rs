//! Secondary tier: Overpass relation lookup.
//!
//! Finds the OSM administrative relation whose name matches the label. The
//! query asks for ids only, and relation ids alone carry no geometry, so
//! this tier currently confirms existence without producing a drawable
//! boundary — it always returns an empty collection on success. It still
//! matters for control flow: a clean empty answer here keeps the local
//! table out of the picture, while a failure lets it in.
//
// TODO: request full geometry (`out geom;`) and assemble the relation's
// ways into a polygon, then this tier can produce real features.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde_json::Value;

use crate::error::ResolveError;
use crate::geojson::BoundaryCollection;

use super::BoundaryResolver;

impl BoundaryResolver {
    pub(super) async fn relation_search(
        &self,
        label: &str,
    ) -> Result<BoundaryCollection, ResolveError> {
        let query = format!(
            "[out:json][timeout:10];\
             relation[\"boundary\"=\"administrative\"][\"name\"~\"^{}$\",i];\
             out ids;",
            regex::escape(label)
        );
        let body = format!("data={}", utf8_percent_encode(&query, NON_ALPHANUMERIC));

        let response = self
            .client
            .post(&self.overpass_url)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::Status {
                status: status.as_u16(),
                url: self.overpass_url.clone(),
            });
        }

        let text = response.text().await?;
        let value: Value = serde_json::from_str(&text)?;
        let matches = value
            .get("elements")
            .and_then(Value::as_array)
            .map_or(0, Vec::len);
        tracing::debug!(label, matches, "relation lookup completed");

        Ok(BoundaryCollection::empty())
    }
}

//! Tiered administrative boundary resolution.
//!
//! Tiers are tried in order: the polygon search service, then an OSM
//! relation lookup, then a bundled local table of well-known Greek
//! boundaries. The local table is consulted only when a remote tier
//! *failed* — a clean "nothing found" answer from the remote services is
//! respected and returned as an empty collection. Resolution never errors:
//! the caller always gets a (possibly empty) GeoJSON collection.

mod fallback;
mod nominatim;
mod overpass;

use std::time::Duration;

use reqwest::Client;

use layera_core::{AppConfig, BoundaryTable};

use crate::cache::OsmResponseCache;
use crate::error::ResolveError;
use crate::geojson::BoundaryCollection;

pub struct BoundaryResolver {
    client: Client,
    nominatim_base: String,
    overpass_url: String,
    /// Hostname of the polygon provider, for log and error messages.
    host: String,
    accept_language: String,
    table: BoundaryTable,
    cache: OsmResponseCache,
}

impl BoundaryResolver {
    /// Creates a resolver with configured timeout and `User-Agent`.
    ///
    /// `table` is the local fallback table; pass [`BoundaryTable::bundled`]
    /// for the built-in set of Greek boundaries.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::InvalidUrl`] if `nominatim_base_url` does not
    /// parse, or [`ResolveError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(
        nominatim_base_url: &str,
        overpass_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        accept_language: &str,
        table: BoundaryTable,
        cache: OsmResponseCache,
    ) -> Result<Self, ResolveError> {
        let parsed =
            reqwest::Url::parse(nominatim_base_url).map_err(|e| ResolveError::InvalidUrl {
                url: nominatim_base_url.to_owned(),
                reason: e.to_string(),
            })?;
        let host = parsed
            .host_str()
            .ok_or_else(|| ResolveError::InvalidUrl {
                url: nominatim_base_url.to_owned(),
                reason: "URL has no host".to_owned(),
            })?
            .to_owned();

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            nominatim_base: nominatim_base_url.trim_end_matches('/').to_owned(),
            overpass_url: overpass_url.trim_end_matches('/').to_owned(),
            host,
            accept_language: accept_language.to_owned(),
            table,
            cache,
        })
    }

    /// Builds a resolver from the application configuration.
    ///
    /// # Errors
    ///
    /// Same as [`BoundaryResolver::new`].
    pub fn from_config(
        config: &AppConfig,
        table: BoundaryTable,
        cache: OsmResponseCache,
    ) -> Result<Self, ResolveError> {
        Self::new(
            &config.nominatim_base_url,
            &config.overpass_api_url,
            config.request_timeout_secs,
            &config.user_agent,
            &config.accept_language,
            table,
            cache,
        )
    }

    /// Resolves the boundary for one administrative component label.
    ///
    /// Never errors: every failure path degrades to the next tier and the
    /// worst case is an empty collection. Non-empty resolutions are cached
    /// so repeated clicks on the same component skip the network.
    pub async fn resolve(&self, label: &str) -> BoundaryCollection {
        if let Some(hit) = self.cache.get(label) {
            tracing::debug!(label, "boundary cache hit");
            return hit;
        }

        let collection = self.resolve_uncached(label).await;
        if !collection.is_empty() {
            self.cache.insert(label, collection.clone());
        }
        collection
    }

    pub fn cache(&self) -> &OsmResponseCache {
        &self.cache
    }

    async fn resolve_uncached(&self, label: &str) -> BoundaryCollection {
        match self.polygon_search(label).await {
            Ok(Some(feature)) => {
                tracing::debug!(label, "polygon search resolved boundary");
                BoundaryCollection::single(feature)
            }
            Ok(None) => {
                tracing::debug!(label, "polygon search found nothing, trying relation lookup");
                match self.relation_search(label).await {
                    // A clean empty answer from both remote tiers is an
                    // honest miss; the local table does not override it.
                    Ok(collection) => collection,
                    Err(err) => {
                        tracing::warn!(label, error = %err, "relation lookup failed, using local table");
                        self.local_fallback(label)
                    }
                }
            }
            Err(err) => {
                tracing::warn!(label, error = %err, "polygon search failed, trying relation lookup");
                match self.relation_search(label).await {
                    Ok(collection) if !collection.is_empty() => collection,
                    Ok(_) => self.local_fallback(label),
                    Err(err) => {
                        tracing::warn!(label, error = %err, "relation lookup failed, using local table");
                        self.local_fallback(label)
                    }
                }
            }
        }
    }
}

//! Query builder for the Nominatim `/search` endpoint.

/// Either a free-text query (`q=`) or the structured field set. Nominatim
/// rejects requests mixing the two, so the variants are exclusive by
/// construction.
#[derive(Debug, Clone)]
enum Query {
    FreeText(String),
    Structured {
        street: Option<String>,
        city: Option<String>,
        postalcode: Option<String>,
        state: Option<String>,
        country: Option<String>,
        amenity: Option<String>,
    },
}

/// Parameters for one `/search` request.
///
/// `format=json` and `addressdetails=1` are always sent; everything else is
/// opt-in through the builder methods.
#[derive(Debug, Clone)]
pub struct SearchParams {
    query: Query,
    limit: Option<u32>,
    polygon_geojson: bool,
    accept_language: Option<String>,
    /// `[west, south, east, north]` in degrees.
    viewbox: Option<[f64; 4]>,
    bounded: bool,
    extratags: bool,
    namedetails: bool,
    exclude_place_ids: Vec<i64>,
}

impl SearchParams {
    #[must_use]
    pub fn free_text(query: impl Into<String>) -> Self {
        Self::with_query(Query::FreeText(query.into()))
    }

    #[must_use]
    pub fn structured() -> Self {
        Self::with_query(Query::Structured {
            street: None,
            city: None,
            postalcode: None,
            state: None,
            country: None,
            amenity: None,
        })
    }

    fn with_query(query: Query) -> Self {
        Self {
            query,
            limit: None,
            polygon_geojson: false,
            accept_language: None,
            viewbox: None,
            bounded: false,
            extratags: false,
            namedetails: false,
            exclude_place_ids: Vec::new(),
        }
    }

    /// Set a structured field. No-op on a free-text query.
    #[must_use]
    pub fn street(mut self, value: impl Into<String>) -> Self {
        if let Query::Structured { ref mut street, .. } = self.query {
            *street = Some(value.into());
        }
        self
    }

    #[must_use]
    pub fn city(mut self, value: impl Into<String>) -> Self {
        if let Query::Structured { ref mut city, .. } = self.query {
            *city = Some(value.into());
        }
        self
    }

    #[must_use]
    pub fn postalcode(mut self, value: impl Into<String>) -> Self {
        if let Query::Structured {
            ref mut postalcode, ..
        } = self.query
        {
            *postalcode = Some(value.into());
        }
        self
    }

    #[must_use]
    pub fn state(mut self, value: impl Into<String>) -> Self {
        if let Query::Structured { ref mut state, .. } = self.query {
            *state = Some(value.into());
        }
        self
    }

    #[must_use]
    pub fn country(mut self, value: impl Into<String>) -> Self {
        if let Query::Structured { ref mut country, .. } = self.query {
            *country = Some(value.into());
        }
        self
    }

    #[must_use]
    pub fn amenity(mut self, value: impl Into<String>) -> Self {
        if let Query::Structured { ref mut amenity, .. } = self.query {
            *amenity = Some(value.into());
        }
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Request polygon geometry on the results.
    #[must_use]
    pub fn polygon_geojson(mut self, enabled: bool) -> Self {
        self.polygon_geojson = enabled;
        self
    }

    /// Override the client-level `accept-language` for this request.
    #[must_use]
    pub fn accept_language(mut self, value: impl Into<String>) -> Self {
        self.accept_language = Some(value.into());
        self
    }

    /// Prefer results inside `[west, south, east, north]`.
    #[must_use]
    pub fn viewbox(mut self, west: f64, south: f64, east: f64, north: f64) -> Self {
        self.viewbox = Some([west, south, east, north]);
        self
    }

    /// Restrict results to the viewbox instead of merely boosting them.
    #[must_use]
    pub fn bounded(mut self, enabled: bool) -> Self {
        self.bounded = enabled;
        self
    }

    #[must_use]
    pub fn extratags(mut self, enabled: bool) -> Self {
        self.extratags = enabled;
        self
    }

    #[must_use]
    pub fn namedetails(mut self, enabled: bool) -> Self {
        self.namedetails = enabled;
        self
    }

    /// Skip previously seen results (used for "more results" paging).
    #[must_use]
    pub fn exclude_place_ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.exclude_place_ids.extend(ids);
        self
    }

    /// Append this request's query pairs to `url`.
    ///
    /// `default_accept_language` is the client-level language, used unless the
    /// request overrides it.
    pub(crate) fn apply(&self, url: &mut reqwest::Url, default_accept_language: &str) {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("format", "json");

        match &self.query {
            Query::FreeText(q) => {
                pairs.append_pair("q", q);
            }
            Query::Structured {
                street,
                city,
                postalcode,
                state,
                country,
                amenity,
            } => {
                for (key, value) in [
                    ("street", street),
                    ("city", city),
                    ("postalcode", postalcode),
                    ("state", state),
                    ("country", country),
                    ("amenity", amenity),
                ] {
                    if let Some(value) = value {
                        pairs.append_pair(key, value);
                    }
                }
            }
        }

        pairs.append_pair("addressdetails", "1");

        let language = self
            .accept_language
            .as_deref()
            .unwrap_or(default_accept_language);
        pairs.append_pair("accept-language", language);

        if let Some(limit) = self.limit {
            pairs.append_pair("limit", &limit.to_string());
        }
        if self.polygon_geojson {
            pairs.append_pair("polygon_geojson", "1");
        }
        if let Some([west, south, east, north]) = self.viewbox {
            pairs.append_pair("viewbox", &format!("{west},{south},{east},{north}"));
            if self.bounded {
                pairs.append_pair("bounded", "1");
            }
        }
        if self.extratags {
            pairs.append_pair("extratags", "1");
        }
        if self.namedetails {
            pairs.append_pair("namedetails", "1");
        }
        if !self.exclude_place_ids.is_empty() {
            let ids = self
                .exclude_place_ids
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            pairs.append_pair("exclude_place_ids", &ids);
        }
    }
}

use std::time::Duration;

use reqwest::Client;

use layera_core::AppConfig;

use crate::error::GeocodeError;
use crate::model::GeocodeResult;
use crate::retry::retry_with_backoff;
use crate::search::SearchParams;
use crate::types::NominatimPlace;

/// HTTP client for a Nominatim-compatible `/search` + `/reverse` API.
///
/// Handles rate limiting (429), not-found (404), and other non-2xx responses
/// as typed errors. Transient errors (429, network failures) are automatically
/// retried with exponential backoff up to `max_retries` additional attempts.
///
/// The `User-Agent` is mandatory: the public Nominatim instance's usage policy
/// requires callers to identify themselves.
pub struct GeocodeClient {
    client: Client,
    base_url: String,
    /// Hostname of the provider, used in rate-limit error messages.
    host: String,
    accept_language: String,
    max_retries: u32,
    backoff_base_secs: u64,
}

impl GeocodeClient {
    /// Creates a `GeocodeClient` with configured timeout, `User-Agent`, and
    /// retry policy.
    ///
    /// `max_retries` is the number of additional attempts after the first
    /// failure for retriable errors (429, network errors). Set to `0` to
    /// disable retries.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodeError::InvalidBaseUrl`] if `base_url` does not parse,
    /// or [`GeocodeError::Http`] if the underlying `reqwest::Client` cannot be
    /// constructed.
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        accept_language: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, GeocodeError> {
        let parsed = reqwest::Url::parse(base_url).map_err(|e| GeocodeError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        let host = parsed
            .host_str()
            .ok_or_else(|| GeocodeError::InvalidBaseUrl {
                url: base_url.to_owned(),
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
            base_url: base_url.trim_end_matches('/').to_owned(),
            host,
            accept_language: accept_language.to_owned(),
            max_retries,
            backoff_base_secs,
        })
    }

    /// Builds a client from the application configuration.
    ///
    /// # Errors
    ///
    /// Same as [`GeocodeClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, GeocodeError> {
        Self::new(
            &config.nominatim_base_url,
            config.request_timeout_secs,
            &config.user_agent,
            &config.accept_language,
            config.max_retries,
            config.retry_backoff_base_secs,
        )
    }

    /// Runs a `/search` request and returns the raw provider records.
    ///
    /// # Errors
    ///
    /// - [`GeocodeError::RateLimited`] — HTTP 429 after all retries exhausted.
    /// - [`GeocodeError::NotFound`] — HTTP 404 (not retried).
    /// - [`GeocodeError::UnexpectedStatus`] — any other non-2xx status (not retried).
    /// - [`GeocodeError::Http`] — network or TLS failure after all retries exhausted.
    /// - [`GeocodeError::Deserialize`] — response body is not valid JSON or
    ///   does not match the expected shape (not retried).
    pub async fn search(&self, params: &SearchParams) -> Result<Vec<NominatimPlace>, GeocodeError> {
        let url = self.search_url(params)?;

        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.clone();
            async move {
                let body = self.fetch(url).await?;
                serde_json::from_str::<Vec<NominatimPlace>>(&body).map_err(|e| {
                    GeocodeError::Deserialize {
                        context: format!("search results from {}", self.host),
                        source: e,
                    }
                })
            }
        })
        .await
    }

    /// Runs a `/search` request and normalizes the records into
    /// [`GeocodeResult`]s, dropping any with unparseable coordinates.
    ///
    /// # Errors
    ///
    /// Same as [`GeocodeClient::search`].
    pub async fn geocode(&self, params: &SearchParams) -> Result<Vec<GeocodeResult>, GeocodeError> {
        let places = self.search(params).await?;
        Ok(places.iter().filter_map(GeocodeResult::from_place).collect())
    }

    /// Runs a `/reverse` lookup for a coordinate pair.
    ///
    /// Returns `Ok(None)` when the provider reports no object at the location
    /// (Nominatim answers with an `{"error": …}` body, still HTTP 200).
    ///
    /// # Errors
    ///
    /// Same as [`GeocodeClient::search`].
    pub async fn reverse(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Option<NominatimPlace>, GeocodeError> {
        let url = self.reverse_url(latitude, longitude)?;

        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.clone();
            async move {
                let body = self.fetch(url).await?;
                let value: serde_json::Value =
                    serde_json::from_str(&body).map_err(|e| GeocodeError::Deserialize {
                        context: format!("reverse result from {}", self.host),
                        source: e,
                    })?;
                if value.get("error").is_some() {
                    return Ok(None);
                }
                let place: NominatimPlace =
                    serde_json::from_value(value).map_err(|e| GeocodeError::Deserialize {
                        context: format!("reverse result from {}", self.host),
                        source: e,
                    })?;
                Ok(Some(place))
            }
        })
        .await
    }

    /// Performs one GET and maps the status to a typed error, returning the
    /// body text on success.
    async fn fetch(&self, url: reqwest::Url) -> Result<String, GeocodeError> {
        let url_str = url.to_string();
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(60);
            return Err(GeocodeError::RateLimited {
                host: self.host.clone(),
                retry_after_secs,
            });
        }

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(GeocodeError::NotFound { url: url_str });
        }

        if !status.is_success() {
            return Err(GeocodeError::UnexpectedStatus {
                status: status.as_u16(),
                url: url_str,
            });
        }

        Ok(response.text().await?)
    }

    fn search_url(&self, params: &SearchParams) -> Result<reqwest::Url, GeocodeError> {
        let mut url = reqwest::Url::parse(&format!("{}/search", self.base_url)).map_err(|e| {
            GeocodeError::InvalidBaseUrl {
                url: self.base_url.clone(),
                reason: e.to_string(),
            }
        })?;
        params.apply(&mut url, &self.accept_language);
        Ok(url)
    }

    fn reverse_url(&self, latitude: f64, longitude: f64) -> Result<reqwest::Url, GeocodeError> {
        let mut url = reqwest::Url::parse(&format!("{}/reverse", self.base_url)).map_err(|e| {
            GeocodeError::InvalidBaseUrl {
                url: self.base_url.clone(),
                reason: e.to_string(),
            }
        })?;
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("lat", &latitude.to_string())
            .append_pair("lon", &longitude.to_string())
            .append_pair("addressdetails", "1")
            .append_pair("accept-language", &self.accept_language);
        Ok(url)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;

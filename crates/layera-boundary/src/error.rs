use thiserror::Error;

/// Errors internal to the boundary resolution tiers.
///
/// These never escape [`crate::BoundaryResolver::resolve`]: a tier error is
/// logged and funnels the resolution into the next tier, ultimately the
/// local table or an empty collection.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("invalid service URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
}

//! Nominatim-compatible geocoding client.
//!
//! Raw provider records ([`NominatimPlace`]) are normalized into the
//! [`GeocodeResult`] model consumed by the address-breakdown pipeline.
//! Interactive callers drive searches through [`SearchSession`], which
//! debounces keystrokes and discards superseded results.

mod client;
mod error;
mod model;
mod retry;
mod search;
mod session;
mod types;

pub use client::GeocodeClient;
pub use error::GeocodeError;
pub use model::{Accuracy, Coordinates, GeocodeResult, StructuredAddress};
pub use search::SearchParams;
pub use session::SearchSession;
pub use types::{NominatimAddress, NominatimPlace};

//! Address breakdown and administrative boundary resolution.
//!
//! A normalized geocoding result is broken into an ordered list of
//! administrative components ([`parse_full_address`]), each flagged as
//! clickable when it plausibly has a boundary polygon. Clickable components
//! feed the [`BoundaryResolver`], which tries the polygon service, then a
//! relation lookup, then a bundled local table, and always produces a
//! (possibly empty) GeoJSON collection — never an error.
//!
//! Resolved boundaries are broadcast over the [`EventBus`] for a map layer
//! to consume.

mod cache;
mod component;
mod error;
mod events;
mod geojson;
mod hierarchy;
mod parse;
mod resolver;
mod session;

pub use cache::OsmResponseCache;
pub use component::{AddressComponent, ComponentKind};
pub use error::ResolveError;
pub use events::{EventBus, MapEvent};
pub use geojson::{polygon_from_bbox, BoundaryCollection, BoundaryFeature, BoundaryProperties};
pub use hierarchy::{GreekAdministrativeClassifier, HierarchyClassifier};
pub use parse::{parse_full_address, parse_full_address_with};
pub use resolver::BoundaryResolver;
pub use session::ResolveSession;

//! Map event bus.
//!
//! Components that resolve boundaries or run searches never touch the map
//! directly; they publish [`MapEvent`]s here and any number of map layers
//! subscribe. Publishing with no subscribers is not an error — events are
//! simply dropped, same as a browser event nobody listens to.

use serde::Serialize;
use tokio::sync::broadcast;

use layera_geocode::{Accuracy, GeocodeResult};

use crate::component::AddressComponent;
use crate::geojson::BoundaryCollection;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event")]
pub enum MapEvent {
    /// Draw an administrative boundary for a clicked address component.
    #[serde(rename = "showAdministrativeBoundary", rename_all = "camelCase")]
    AdministrativeBoundary {
        component: AddressComponent,
        #[serde(rename = "geocodeResult")]
        result: GeocodeResult,
        boundary: BoundaryCollection,
    },
    /// Pan and zoom the map to a search result.
    #[serde(rename = "showSearchResult", rename_all = "camelCase")]
    SearchResult {
        latitude: f64,
        longitude: f64,
        zoom: u8,
        display_name: String,
    },
}

#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<MapEvent>,
}

impl EventBus {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<MapEvent> {
        self.sender.subscribe()
    }

    /// Publishes an event, returning the number of subscribers it reached.
    pub fn publish(&self, event: MapEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }

    /// Publishes a boundary event for a resolved component.
    ///
    /// Returns `false` without publishing when the collection is empty, so
    /// the caller can surface "no boundary found" instead of drawing
    /// nothing.
    pub fn publish_boundary(
        &self,
        component: &AddressComponent,
        result: &GeocodeResult,
        boundary: BoundaryCollection,
    ) -> bool {
        if boundary.is_empty() {
            return false;
        }
        self.publish(MapEvent::AdministrativeBoundary {
            component: component.clone(),
            result: result.clone(),
            boundary,
        });
        true
    }

    /// Publishes a pan-and-zoom event for a search result, with the zoom
    /// level derived from the result's accuracy.
    pub fn publish_search_result(&self, result: &GeocodeResult) {
        self.publish(MapEvent::SearchResult {
            latitude: result.coordinates.latitude,
            longitude: result.coordinates.longitude,
            zoom: zoom_for(result.accuracy),
            display_name: result.display_name.clone(),
        });
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(32)
    }
}

fn zoom_for(accuracy: Accuracy) -> u8 {
    match accuracy {
        Accuracy::Exact => 18,
        Accuracy::Street => 16,
        Accuracy::City => 12,
        Accuracy::Region => 8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layera_geocode::{Coordinates, StructuredAddress};

    use crate::component::ComponentKind;
    use crate::geojson::{BoundaryFeature, BoundaryProperties};

    fn result() -> GeocodeResult {
        GeocodeResult {
            display_name: "Θεσσαλονίκη, Ελλάδα".to_owned(),
            coordinates: Coordinates {
                latitude: 40.6403,
                longitude: 22.9433,
            },
            accuracy: Accuracy::City,
            address: StructuredAddress::default(),
        }
    }

    fn component() -> AddressComponent {
        AddressComponent::new(0, "Θεσσαλονίκη", ComponentKind::City, true)
    }

    fn collection() -> BoundaryCollection {
        BoundaryCollection::single(BoundaryFeature::new(
            BoundaryProperties::administrative("Δήμος Θεσσαλονίκης", None, None),
            serde_json::json!({"type": "Polygon", "coordinates": []}),
        ))
    }

    #[tokio::test]
    async fn boundary_event_reaches_subscriber() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();

        assert!(bus.publish_boundary(&component(), &result(), collection()));

        match rx.recv().await.unwrap() {
            MapEvent::AdministrativeBoundary { boundary, .. } => {
                assert_eq!(boundary.features.len(), 1);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_boundary_is_not_published() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();

        assert!(!bus.publish_boundary(&component(), &result(), BoundaryCollection::empty()));
        assert!(matches!(
            rx.try_recv(),
            Err(broadcast::error::TryRecvError::Empty)
        ));
    }

    #[tokio::test]
    async fn search_result_event_carries_accuracy_zoom() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();

        bus.publish_search_result(&result());

        match rx.recv().await.unwrap() {
            MapEvent::SearchResult { zoom, display_name, .. } => {
                assert_eq!(zoom, 12);
                assert_eq!(display_name, "Θεσσαλονίκη, Ελλάδα");
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn publish_without_subscribers_is_a_no_op() {
        let bus = EventBus::default();
        bus.publish_search_result(&result());
        assert_eq!(bus.publish(MapEvent::SearchResult {
            latitude: 0.0,
            longitude: 0.0,
            zoom: 8,
            display_name: String::new(),
        }), 0);
        // The boundary still counts as shown even with nobody listening.
        assert!(bus.publish_boundary(&component(), &result(), collection()));
    }

    #[test]
    fn boundary_event_serializes_with_event_tag() {
        let event = MapEvent::AdministrativeBoundary {
            component: component(),
            result: result(),
            boundary: collection(),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["event"], "showAdministrativeBoundary");
        assert_eq!(value["boundary"]["type"], "FeatureCollection");
    }
}

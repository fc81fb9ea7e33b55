//! Click-to-boundary session for interactive callers.
//!
//! A user clicking through address components fires overlapping
//! resolutions; only the most recent click should end up on the map. A
//! generation counter closes the race: each resolution task records the
//! generation it was spawned under and publishes only if no newer click
//! has happened by the time it completes.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::task::JoinHandle;

use layera_geocode::GeocodeResult;

use crate::component::AddressComponent;
use crate::events::EventBus;
use crate::resolver::BoundaryResolver;

pub struct ResolveSession {
    resolver: Arc<BoundaryResolver>,
    bus: EventBus,
    generation: Arc<AtomicU64>,
    in_flight: Mutex<Option<JoinHandle<()>>>,
}

impl ResolveSession {
    #[must_use]
    pub fn new(resolver: Arc<BoundaryResolver>, bus: EventBus) -> Self {
        Self {
            resolver,
            bus,
            generation: Arc::new(AtomicU64::new(0)),
            in_flight: Mutex::new(None),
        }
    }

    /// Resolve a clicked component's boundary and publish it, superseding
    /// any resolution still in flight.
    ///
    /// A resolution that completes after a newer click is discarded without
    /// publishing. An empty resolution publishes nothing either way.
    ///
    /// Must be called from within a tokio runtime.
    pub fn resolve_and_publish(&self, component: AddressComponent, result: GeocodeResult) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let latest = Arc::clone(&self.generation);
        let resolver = Arc::clone(&self.resolver);
        let bus = self.bus.clone();

        let handle = tokio::spawn(async move {
            let boundary = resolver.resolve(&component.label).await;

            if latest.load(Ordering::SeqCst) != generation {
                tracing::debug!(generation, label = %component.label, "discarding superseded boundary");
                return;
            }
            if !bus.publish_boundary(&component, &result, boundary) {
                tracing::debug!(label = %component.label, "no boundary found");
            }
        });

        let mut slot = self
            .in_flight
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(previous) = slot.replace(handle) {
            previous.abort();
        }
    }

    /// Drop any in-flight resolution without starting a new one.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        let mut slot = self
            .in_flight
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(previous) = slot.take() {
            previous.abort();
        }
    }
}

impl Drop for ResolveSession {
    fn drop(&mut self) {
        self.cancel();
    }
}

//! Debounced search session for interactive callers.
//!
//! Each submitted query waits out a debounce window before hitting the
//! network; submitting again within the window aborts the pending request.
//! A generation counter additionally discards responses that arrive after a
//! newer query has been submitted, so a slow early response can never
//! overwrite the result of a later one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::client::GeocodeClient;
use crate::error::GeocodeError;
use crate::model::GeocodeResult;
use crate::search::SearchParams;

pub struct SearchSession {
    client: Arc<GeocodeClient>,
    debounce: Duration,
    generation: Arc<AtomicU64>,
    in_flight: Mutex<Option<JoinHandle<()>>>,
}

impl SearchSession {
    #[must_use]
    pub fn new(client: Arc<GeocodeClient>, debounce_ms: u64) -> Self {
        Self {
            client,
            debounce: Duration::from_millis(debounce_ms),
            generation: Arc::new(AtomicU64::new(0)),
            in_flight: Mutex::new(None),
        }
    }

    /// Submit a query, superseding any pending or in-flight one.
    ///
    /// `deliver` is invoked with the outcome unless a newer query is submitted
    /// first, in which case this query's task is aborted (if still debouncing)
    /// or its result discarded (if the response raced the supersession).
    ///
    /// Must be called from within a tokio runtime.
    pub fn submit<F>(&self, params: SearchParams, deliver: F)
    where
        F: FnOnce(Result<Vec<GeocodeResult>, GeocodeError>) + Send + 'static,
    {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let latest = Arc::clone(&self.generation);
        let client = Arc::clone(&self.client);
        let debounce = self.debounce;

        let handle = tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            if latest.load(Ordering::SeqCst) != generation {
                return;
            }

            let result = client.geocode(&params).await;

            if latest.load(Ordering::SeqCst) != generation {
                tracing::debug!(generation, "discarding superseded search result");
                return;
            }
            deliver(result);
        });

        let mut slot = self
            .in_flight
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(previous) = slot.replace(handle) {
            previous.abort();
        }
    }

    /// Abort any pending query without submitting a new one.
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

impl Drop for SearchSession {
    fn drop(&mut self) {
        self.cancel();
    }
}

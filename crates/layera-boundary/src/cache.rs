//! Explicit in-memory cache for resolved boundary responses.
//!
//! Constructed and owned by whoever owns the resolver; lifetime is the
//! owner's, not the process's. Keys are lowercased component labels.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::geojson::BoundaryCollection;

#[derive(Debug, Default)]
pub struct OsmResponseCache {
    entries: Mutex<HashMap<String, BoundaryCollection>>,
}

impl OsmResponseCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<BoundaryCollection> {
        self.lock().get(&Self::key(label)).cloned()
    }

    pub fn insert(&self, label: &str, collection: BoundaryCollection) {
        self.lock().insert(Self::key(label), collection);
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.lock().contains_key(&Self::key(label))
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn key(label: &str) -> String {
        label.trim().to_lowercase()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, BoundaryCollection>> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_get_is_case_insensitive() {
        let cache = OsmResponseCache::new();
        cache.insert("Θεσσαλονίκη", BoundaryCollection::empty());
        assert!(cache.contains("θεσσαλονίκη"));
        assert!(cache.get("  Θεσσαλονίκη ").is_some());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn clear_empties_the_cache() {
        let cache = OsmResponseCache::new();
        cache.insert("a", BoundaryCollection::empty());
        cache.insert("b", BoundaryCollection::empty());
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
        assert!(!cache.contains("a"));
    }
}

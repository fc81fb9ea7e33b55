use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One statically known administrative boundary.
///
/// `ring` is a closed polygon ring in GeoJSON coordinate order
/// (`[longitude, latitude]`, first point repeated last).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundaryEntry {
    /// Canonical display name, e.g. `"Δήμος Θεσσαλονίκης"`.
    pub name: String,
    /// Alternative labels this entry answers to, matched case-insensitively.
    pub search_terms: Vec<String>,
    pub osm_id: i64,
    /// `"relation"` for every curated entry; kept as data so the table can
    /// carry ways if one ever needs to.
    pub osm_type: String,
    pub ring: Vec<[f64; 2]>,
}

#[derive(Debug, Deserialize)]
pub struct BoundaryFile {
    pub boundaries: Vec<BoundaryEntry>,
}

/// The local boundary fallback table: last resort of the resolution chain.
///
/// Lookups are case-insensitive over both canonical names and search terms.
#[derive(Debug, Clone)]
pub struct BoundaryTable {
    entries: Vec<BoundaryEntry>,
    index: HashMap<String, usize>,
}

const BUNDLED_BOUNDARIES: &str = include_str!("../config/boundaries.yaml");

impl BoundaryTable {
    /// The boundary table compiled into the binary.
    ///
    /// # Panics
    ///
    /// Panics if the bundled YAML is malformed — a build-time defect, caught
    /// by `bundled_table_is_valid` in this module's tests.
    #[must_use]
    pub fn bundled() -> Self {
        Self::from_yaml(BUNDLED_BOUNDARIES).expect("bundled boundaries.yaml is valid")
    }

    /// Load and validate a boundary table from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::BoundaryFileIo {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_yaml(&content)
    }

    /// Parse and validate a boundary table from YAML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` on parse or validation failure.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let file: BoundaryFile = serde_yaml::from_str(content)?;
        validate_boundaries(&file)?;

        let mut index = HashMap::new();
        for (i, entry) in file.boundaries.iter().enumerate() {
            index.insert(entry.name.to_lowercase(), i);
            for term in &entry.search_terms {
                index.insert(term.to_lowercase(), i);
            }
        }

        Ok(Self {
            entries: file.boundaries,
            index,
        })
    }

    /// Case-insensitive lookup by canonical name or search term.
    #[must_use]
    pub fn lookup(&self, term: &str) -> Option<&BoundaryEntry> {
        self.index
            .get(&term.trim().to_lowercase())
            .map(|&i| &self.entries[i])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_boundaries(file: &BoundaryFile) -> Result<(), ConfigError> {
    let mut seen_terms = HashMap::new();

    for entry in &file.boundaries {
        if entry.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "boundary name must be non-empty".to_string(),
            ));
        }

        if entry.ring.len() < 4 {
            return Err(ConfigError::Validation(format!(
                "boundary '{}' has a ring with {} points; a closed ring needs at least 4",
                entry.name,
                entry.ring.len()
            )));
        }

        if entry.ring.first() != entry.ring.last() {
            return Err(ConfigError::Validation(format!(
                "boundary '{}' has an unclosed ring (first and last point differ)",
                entry.name
            )));
        }

        for term in entry
            .search_terms
            .iter()
            .chain(std::iter::once(&entry.name))
        {
            let lower = term.to_lowercase();
            if let Some(previous) = seen_terms.insert(lower, entry.name.clone()) {
                if previous != entry.name {
                    return Err(ConfigError::Validation(format!(
                        "search term '{term}' is claimed by both '{previous}' and '{}'",
                        entry.name
                    )));
                }
            }
        }
    }

    Ok(())
}

//! Last tier: the curated local boundary table.
//!
//! Consulted only when a remote tier failed outright. Labels are tried as
//! given, then with Greek (and transliterated) administrative prefixes
//! stripped, so "Δήμος Θεσσαλονίκης" and "Municipality of Thessaloniki"
//! both land on the Thessaloniki entry.

use layera_core::BoundaryEntry;

use crate::geojson::{polygon_from_ring, BoundaryCollection, BoundaryFeature, BoundaryProperties};

use super::BoundaryResolver;

/// Administrative prefixes to strip, longest first so "Δημοτική Ενότητα"
/// is not half-matched by "Δήμος".
const PREFIXES: &[&str] = &[
    "Δημοτική Ενότητα",
    "Περιφερειακή Ενότητα",
    "Περιφέρεια",
    "Δήμος",
    "Municipal Unit of",
    "Municipal Unit",
    "Regional Unit of",
    "Regional Unit",
    "Municipality of",
    "Municipality",
    "Region of",
    "Region",
];

impl BoundaryResolver {
    pub(super) fn local_fallback(&self, label: &str) -> BoundaryCollection {
        let normalized = normalize_label(label);
        let entry = self
            .table
            .lookup(label)
            .or_else(|| self.table.lookup(&normalized));

        match entry {
            Some(entry) => {
                tracing::debug!(label, name = %entry.name, "local table resolved boundary");
                BoundaryCollection::single(feature_from_entry(entry))
            }
            None => {
                tracing::debug!(label, "label not in local table, giving up");
                BoundaryCollection::empty()
            }
        }
    }
}

fn feature_from_entry(entry: &BoundaryEntry) -> BoundaryFeature {
    BoundaryFeature::new(
        BoundaryProperties::administrative(
            entry.name.clone(),
            Some(entry.osm_id),
            Some(entry.osm_type.clone()),
        ),
        polygon_from_ring(&entry.ring),
    )
}

/// Strip administrative prefixes and trailing qualifiers from a component
/// label so it matches the table's plain place names.
fn normalize_label(label: &str) -> String {
    let mut stripped = label.trim();
    for prefix in PREFIXES {
        if let Some(rest) = strip_prefix_ignore_case(stripped, prefix) {
            stripped = rest.trim_start();
            break;
        }
    }
    let mut result = stripped;
    if let Some(paren) = result.find('(') {
        result = &result[..paren];
    }
    if let Some(dash) = result.find(" - ") {
        result = &result[..dash];
    }
    result.trim().to_owned()
}

/// ASCII-case-insensitive prefix strip; Greek prefixes compare byte-exact.
fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    if s.len() < prefix.len() || !s.is_char_boundary(prefix.len()) {
        return None;
    }
    let (head, rest) = s.split_at(prefix.len());
    head.eq_ignore_ascii_case(prefix).then_some(rest)
}

#[cfg(test)]
mod tests {
    use super::normalize_label;

    #[test]
    fn strips_greek_administrative_prefixes() {
        assert_eq!(normalize_label("Δήμος Θεσσαλονίκης"), "Θεσσαλονίκης");
        assert_eq!(
            normalize_label("Περιφέρεια Κεντρικής Μακεδονίας"),
            "Κεντρικής Μακεδονίας"
        );
        assert_eq!(normalize_label("Δημοτική Ενότητα Καλαμαριάς"), "Καλαμαριάς");
    }

    #[test]
    fn strips_english_prefixes_case_insensitively() {
        assert_eq!(normalize_label("Municipality of Thessaloniki"), "Thessaloniki");
        assert_eq!(normalize_label("municipality of Patras"), "Patras");
        assert_eq!(normalize_label("Regional Unit of Achaia"), "Achaia");
    }

    #[test]
    fn truncates_parentheticals_and_dash_qualifiers() {
        assert_eq!(normalize_label("Θεσσαλονίκη (Κέντρο)"), "Θεσσαλονίκη");
        assert_eq!(normalize_label("Καλαμαριά - Ανατολικά"), "Καλαμαριά");
    }

    #[test]
    fn leaves_plain_labels_untouched() {
        assert_eq!(normalize_label("Αθήνα"), "Αθήνα");
        assert_eq!(normalize_label("  Ελλάδα "), "Ελλάδα");
    }
}

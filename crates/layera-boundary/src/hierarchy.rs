//! Administrative hierarchy ranking.
//!
//! Ranks order clickable components from most local (1, street) to least
//! local (7, country). Classification is keyword-driven over the component
//! label; labels that match nothing sit at the city/prefecture midpoint.

use crate::component::AddressComponent;

/// Assigns a hierarchy rank to an address component label.
///
/// Lower is more local. Implementations must be pure: the same label always
/// gets the same rank.
pub trait HierarchyClassifier {
    fn rank(&self, label: &str) -> u8;
}

/// Keyword classifier for Greek administrative naming, with English
/// fallbacks for transliterated input.
///
/// First matching tier wins, checked from most local to least local, so a
/// label like "Οδός Μακεδονίας" ranks as a street, not a region.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreekAdministrativeClassifier;

/// Keyword tiers, most local first. Matching is lowercased substring.
const TIERS: &[(u8, &[&str])] = &[
    (1, &["οδός", "λεωφόρος", "street", "avenue", "boulevard"]),
    (2, &["συνοικία", "γειτονιά", "neighborhood", "neighbourhood"]),
    (3, &["χωριό", "κωμόπολη", "village", "town"]),
    (4, &["πόλη", "δήμος", "city", "municipality"]),
    (5, &["νομός", "επαρχία", "prefecture", "province"]),
    (
        6,
        &[
            "περιφέρεια",
            "region",
            "μακεδονία",
            "θράκη",
            "κρήτη",
            "ήπειρος",
            "θεσσαλία",
            "πελοπόννησος",
            "αττική",
            "macedonia",
            "thrace",
            "crete",
        ],
    ),
    (7, &["ελλάδα", "ελλάς", "greece", "hellas"]),
];

const DEFAULT_RANK: u8 = 5;

impl HierarchyClassifier for GreekAdministrativeClassifier {
    fn rank(&self, label: &str) -> u8 {
        let label = label.to_lowercase();
        for (rank, keywords) in TIERS {
            if keywords.iter().any(|kw| label.contains(kw)) {
                return *rank;
            }
        }
        DEFAULT_RANK
    }
}

/// Order components for display: non-clickable components first in the fixed
/// kind order, then clickable components from most local to least local.
///
/// The sort is stable, so components with equal rank keep their parse order.
pub(crate) fn sort_components<C: HierarchyClassifier>(
    components: &mut [AddressComponent],
    classifier: &C,
) {
    components.sort_by_key(|c| {
        if c.clickable {
            (1, classifier.rank(&c.label))
        } else {
            (0, c.kind.priority())
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentKind;

    #[test]
    fn ranks_greek_keywords() {
        let c = GreekAdministrativeClassifier;
        assert_eq!(c.rank("Οδός Εγνατία"), 1);
        assert_eq!(c.rank("Συνοικία Άνω Πόλη"), 2);
        assert_eq!(c.rank("χωριό Λιτόχωρο"), 3);
        assert_eq!(c.rank("Δήμος Θεσσαλονίκης"), 4);
        assert_eq!(c.rank("Νομός Χαλκιδικής"), 5);
        assert_eq!(c.rank("Περιφέρεια Κεντρικής Μακεδονίας"), 6);
        assert_eq!(c.rank("Ελλάδα"), 7);
    }

    #[test]
    fn english_fallbacks_match() {
        let c = GreekAdministrativeClassifier;
        assert_eq!(c.rank("Egnatia Street"), 1);
        assert_eq!(c.rank("Municipality of Thessaloniki"), 4);
        assert_eq!(c.rank("Central Macedonia"), 6);
        assert_eq!(c.rank("Greece"), 7);
    }

    #[test]
    fn most_local_tier_wins_on_mixed_labels() {
        let c = GreekAdministrativeClassifier;
        // Mentions a region name, but it's a street.
        assert_eq!(c.rank("Οδός Μακεδονίας"), 1);
    }

    #[test]
    fn unknown_labels_default_to_midpoint() {
        let c = GreekAdministrativeClassifier;
        assert_eq!(c.rank("Καλαμαριά"), 5);
        assert_eq!(c.rank(""), 5);
    }

    #[test]
    fn sort_puts_non_clickable_first_then_by_rank() {
        let mut components = vec![
            AddressComponent::new(0, "Ελλάδα", ComponentKind::Country, true),
            AddressComponent::new(1, "Εγνατία 25", ComponentKind::Street, false),
            AddressComponent::new(2, "Δήμος Θεσσαλονίκης", ComponentKind::City, true),
            AddressComponent::new(3, "54625", ComponentKind::PostalCode, false),
        ];
        sort_components(&mut components, &GreekAdministrativeClassifier);
        let labels: Vec<&str> = components.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Εγνατία 25", "54625", "Δήμος Θεσσαλονίκης", "Ελλάδα"]
        );
    }
}

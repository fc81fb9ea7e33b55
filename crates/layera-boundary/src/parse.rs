//! Address breakdown: turn one geocoding result into an ordered list of
//! address components.
//!
//! Two phases. Phase one reads the structured address fields and emits the
//! well-typed components (street with its house number folded in, postal
//! code, city, region, country). Phase two mines the provider display name
//! for administrative units the structured fields missed: comma-separated
//! segments that are not numbers, not postal codes, not trivially short and
//! not already claimed become clickable `Custom` components.
//!
//! Output ordering: non-clickable components first in a fixed kind order,
//! then clickable components from most local to least local.

use regex::Regex;

use layera_geocode::GeocodeResult;

use crate::component::{AddressComponent, ComponentKind};
use crate::hierarchy::{sort_components, GreekAdministrativeClassifier, HierarchyClassifier};

/// Break a geocoding result into display components, ordered for Greek
/// administrative naming.
#[must_use]
pub fn parse_full_address(result: &GeocodeResult) -> Vec<AddressComponent> {
    parse_full_address_with(result, &GreekAdministrativeClassifier)
}

/// Break a geocoding result into display components with a caller-supplied
/// hierarchy classifier.
#[must_use]
pub fn parse_full_address_with<C: HierarchyClassifier>(
    result: &GeocodeResult,
    classifier: &C,
) -> Vec<AddressComponent> {
    let mut components = Vec::new();
    let mut index = 0usize;

    let mut push = |components: &mut Vec<AddressComponent>,
                    label: String,
                    kind: ComponentKind,
                    clickable: bool| {
        components.push(AddressComponent::new(index, label, kind, clickable));
        index += 1;
    };

    let address = &result.address;

    if let Some(street) = &address.street {
        let label = match &address.house_number {
            Some(number) => format!("{street} {number}"),
            None => street.clone(),
        };
        push(&mut components, label, ComponentKind::Street, false);
    }
    if let Some(postal) = &address.postal_code {
        push(&mut components, postal.clone(), ComponentKind::PostalCode, false);
    }
    if let Some(city) = &address.city {
        push(&mut components, city.clone(), ComponentKind::City, true);
    }
    if let Some(region) = &address.region {
        push(&mut components, region.clone(), ComponentKind::Region, true);
    }
    if let Some(country) = &address.country {
        push(&mut components, country.clone(), ComponentKind::Country, true);
    }

    mine_display_name(&result.display_name, &mut components, &mut index);

    sort_components(&mut components, classifier);
    components
}

/// Phase two: pick up administrative units present only in the display name.
fn mine_display_name(
    display_name: &str,
    components: &mut Vec<AddressComponent>,
    index: &mut usize,
) {
    let house_number = Regex::new(r"^\d+$").expect("valid regex");
    let postal_code = Regex::new(r"^\d{3,5}(-\d{4})?$").expect("valid regex");

    for segment in display_name.split(',') {
        let segment = segment.trim();
        if segment.chars().count() <= 2 {
            continue;
        }
        if house_number.is_match(segment) || postal_code.is_match(segment) {
            continue;
        }
        if is_claimed(components, segment) {
            continue;
        }
        components.push(AddressComponent::new(
            *index,
            segment,
            ComponentKind::Custom,
            true,
        ));
        *index += 1;
    }
}

/// A segment is claimed when an existing component's value matches it
/// case-insensitively, or when the street component starts with it (the
/// street label carries the house number appended).
fn is_claimed(components: &[AddressComponent], segment: &str) -> bool {
    let lowered = segment.to_lowercase();
    components.iter().any(|c| {
        let value = c.value.to_lowercase();
        value == lowered
            || (c.kind == ComponentKind::Street && value.starts_with(&lowered))
    })
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;

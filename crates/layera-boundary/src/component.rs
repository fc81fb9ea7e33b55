//! Domain types for address breakdown.

use serde::{Deserialize, Serialize};

/// What kind of administrative unit a component denotes.
///
/// `HouseNumber` never appears in parser output (house numbers are folded
/// into the street label) but participates in the fixed ordering table so a
/// caller emitting one slots in predictably.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    Street,
    HouseNumber,
    PostalCode,
    City,
    Region,
    Custom,
    Country,
}

impl ComponentKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentKind::Street => "street",
            ComponentKind::HouseNumber => "house-number",
            ComponentKind::PostalCode => "postal-code",
            ComponentKind::City => "city",
            ComponentKind::Region => "region",
            ComponentKind::Custom => "custom",
            ComponentKind::Country => "country",
        }
    }

    /// Fixed tiebreak order for non-clickable components.
    pub(crate) fn priority(self) -> u8 {
        match self {
            ComponentKind::Street => 0,
            ComponentKind::HouseNumber => 1,
            ComponentKind::PostalCode => 2,
            ComponentKind::City => 3,
            ComponentKind::Region => 4,
            ComponentKind::Custom => 5,
            ComponentKind::Country => 6,
        }
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One clickable-or-not piece of a parsed address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressComponent {
    /// Unique within one parse: `"<kind>-<index>"`, index assigned
    /// sequentially at parse time.
    pub id: String,
    /// Display text.
    pub label: String,
    pub kind: ComponentKind,
    /// True iff the component denotes an administrative area plausibly
    /// having a boundary polygon.
    pub clickable: bool,
    /// Raw matched text, used for case-insensitive de-duplication.
    pub value: String,
    /// Presentation hint; not semantically load-bearing.
    pub class_name: String,
}

impl AddressComponent {
    pub(crate) fn new(
        index: usize,
        label: impl Into<String>,
        kind: ComponentKind,
        clickable: bool,
    ) -> Self {
        let label = label.into();
        Self {
            id: format!("{}-{index}", kind.as_str()),
            value: label.clone(),
            label,
            kind,
            clickable,
            class_name: format!("address-component address-component--{kind}"),
        }
    }
}

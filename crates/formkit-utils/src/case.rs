//! Word formatting for property names.

pub use convert_case::{Case, Casing};

///
/// humanize
///
/// Turn a property name into a readable label: `postal_code` and
/// `postalCode` both become `Postal Code`. Dotted paths are humanized per
/// segment and joined with a space.
///
#[must_use]
pub fn humanize(property: &str) -> String {
    property
        .split('.')
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.to_case(Case::Title))
        .collect::<Vec<_>>()
        .join(" ")
}

///
/// TESTS
///

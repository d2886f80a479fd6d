//! Built-in catalog of trade-document headings.

use crate::error::Result;
use crate::vocabulary::{HeadingDefinition, Vocabulary};

const DEFAULT_HEADINGS: &[(&str, &[&str])] = &[
    (
        "Self Declaration Cum Undertaking Certificate",
        &[
            "Self Declaration Cum Undertaking Certificate",
            "Declaration Cum Undertaking Certificate",
            "Self Declaration Certificate",
            "Declaration Certificate",
        ],
    ),
    (
        "Certificate of Origin",
        &["Certificate of Origin", "Origin Certificate"],
    ),
    (
        "Certificate of Chemical Analysis Report",
        &[
            "Certificate of Chemical Analysis Report",
            "Chemical Analysis Report",
            "Chemical Analysis Certificate",
        ],
    ),
    ("Form 6", &["Form 6"]),
    ("Form 9", &["Form 9"]),
    ("Bill of Exchange", &["Bill of Exchange"]),
    ("Commercial Invoice", &["Commercial Invoice"]),
    ("Packing List", &["Packing List"]),
    (
        "Pre-Shipment Inspection Certificate",
        &["Pre-Shipment Inspection Certificate"],
    ),
    ("Insurance Policy", &["Insurance Policy"]),
    (
        "Transboundary Movement Document",
        &["Transboundary Movement Document"],
    ),
    ("Bill of Lading", &["Bill of Lading"]),
];

/// The default heading definitions, in matching order.
pub fn default_definitions() -> Vec<HeadingDefinition> {
    DEFAULT_HEADINGS
        .iter()
        .map(|(name, variations)| HeadingDefinition::new(*name, variations.iter().copied()))
        .collect()
}

/// Builds the default vocabulary.
///
/// # Errors
///
/// Only fails if the built-in table itself is malformed.
pub fn default_vocabulary() -> Result<Vocabulary> {
    Vocabulary::from_definitions(default_definitions())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_builds() {
        let vocabulary = default_vocabulary().expect("default vocabulary");
        assert_eq!(vocabulary.len(), 12);
        assert_eq!(
            vocabulary.names().next(),
            Some("Self Declaration Cum Undertaking Certificate")
        );
        assert_eq!(vocabulary.names().last(), Some("Bill of Lading"));
    }

    #[test]
    fn hyphenated_heading_matches_its_literal() {
        let vocabulary = default_vocabulary().expect("default vocabulary");
        let entry = vocabulary
            .get("Pre-Shipment Inspection Certificate")
            .expect("entry");
        assert!(entry.matches_pattern("PRE-SHIPMENT INSPECTION CERTIFICATE No. 12"));
    }
}

//! Documentation-row filtering
//!
//! In the source system a designation like `АБВГ.123456.001 ТУ` denotes a
//! document (here: technical conditions) attached to the article rather
//! than a physical component. The document kind is always the second
//! whitespace-delimited token of the designation.

use std::collections::HashSet;

/// Document-kind markers recognized in a designation's second token.
pub const DOCUMENT_MARKERS: &[&str] = &[
    "ТУ", "Э3", "ГЧ", "ТО", "МЭ", "СБ", "ЗИ", "ЗИ1", "ТО-ЛУ", "ПС-ЛУ", "ЗИ1-ЛУ", "ЗИ-ЛУ", "ПС",
    "ПЭЗ", "ВС",
];

/// Classifies designations as documentation by their second token.
pub struct DocumentFilter {
    markers: HashSet<&'static str>,
}

impl DocumentFilter {
    /// Filter over a custom marker set.
    pub fn with_markers(markers: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            markers: markers.into_iter().collect(),
        }
    }

    /// True when the designation's second whitespace-delimited token is one
    /// of the markers, matched case-sensitively and exactly. Designations
    /// with fewer than two tokens cannot be classified and return false.
    pub fn is_documentation(&self, designation: &str) -> bool {
        designation
            .split_whitespace()
            .nth(1)
            .is_some_and(|token| self.markers.contains(token))
    }
}

impl Default for DocumentFilter {
    fn default() -> Self {
        Self::with_markers(DOCUMENT_MARKERS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_in_second_position_matches() {
        let filter = DocumentFilter::default();
        assert!(filter.is_documentation("АБВГ.123456.001 ТУ"));
        assert!(filter.is_documentation("АБВГ.123456.001 СБ"));
        assert!(filter.is_documentation("АБВГ.123456.001 ЗИ1-ЛУ"));
    }

    #[test]
    fn single_token_is_never_documentation() {
        let filter = DocumentFilter::default();
        assert!(!filter.is_documentation("АБВГ.123456.001"));
        assert!(!filter.is_documentation("ТУ"));
        assert!(!filter.is_documentation(""));
        assert!(!filter.is_documentation("   "));
    }

    #[test]
    fn only_the_second_token_is_inspected() {
        let filter = DocumentFilter::default();
        // Marker in third position does not classify.
        assert!(!filter.is_documentation("АБВГ.123456.001 исп.01 ТУ"));
        // Marker in second position still matches with trailing tokens.
        assert!(filter.is_documentation("АБВГ.123456.001 ТУ исп.01"));
    }

    #[test]
    fn matching_is_exact_and_case_sensitive() {
        let filter = DocumentFilter::default();
        assert!(!filter.is_documentation("АБВГ.123456.001 ту"));
        assert!(!filter.is_documentation("АБВГ.123456.001 ТУ1"));
        assert!(!filter.is_documentation("АБВГ.123456.001 -ТУ"));
    }

    #[test]
    fn custom_marker_set() {
        let filter = DocumentFilter::with_markers(["РЭ"]);
        assert!(filter.is_documentation("АБВГ.123456.001 РЭ"));
        assert!(!filter.is_documentation("АБВГ.123456.001 ТУ"));
    }
}

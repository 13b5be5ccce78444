//! Position labels for each spread.
//!
//! Labels are indexed by draw order. A table with fewer labels than cards
//! is allowed; the missing positions read as an empty string.

use std::collections::HashMap;

use crate::error::CoreResult;
use crate::spread::SpreadKind;

/// Default label for the single-card spread.
pub const SINGLE_POSITIONS: &[&str] = &["Card of the moment"];

/// Default labels for the three-card spread.
pub const THREE_POSITIONS: &[&str] = &["Past", "Present", "Future"];

/// Default labels for the Celtic Cross.
pub const CELTIC_POSITIONS: &[&str] = &[
    "The present situation",
    "The challenge",
    "The foundation",
    "The recent past",
    "The crown: what may come to be",
    "The near future",
    "Yourself",
    "Your surroundings",
    "Hopes and fears",
    "The outcome",
];

/// Ordered position labels for every spread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionTable {
    labels: HashMap<SpreadKind, Vec<String>>,
}

impl Default for PositionTable {
    fn default() -> Self {
        let mut labels = HashMap::new();
        for (kind, list) in [
            (SpreadKind::Single, SINGLE_POSITIONS),
            (SpreadKind::Three, THREE_POSITIONS),
            (SpreadKind::Celtic, CELTIC_POSITIONS),
        ] {
            labels.insert(kind, list.iter().map(|s| (*s).to_string()).collect());
        }
        Self { labels }
    }
}

impl PositionTable {
    /// A table with no labels at all.
    pub fn empty() -> Self {
        Self {
            labels: HashMap::new(),
        }
    }

    /// Parse a table from JSON: `{ "single": [...], "three": [...], "celtic": [...] }`.
    ///
    /// Spreads missing from the input have no labels.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let labels: HashMap<SpreadKind, Vec<String>> = serde_json::from_str(json)?;
        Ok(Self { labels })
    }

    /// Replace the labels of one spread.
    pub fn with_labels(mut self, kind: SpreadKind, labels: Vec<String>) -> Self {
        self.labels.insert(kind, labels);
        self
    }

    /// All labels of a spread.
    pub fn labels(&self, kind: SpreadKind) -> &[String] {
        self.labels.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The label for a card position, or `""` if the table has none.
    pub fn label(&self, kind: SpreadKind, index: usize) -> &str {
        self.labels(kind).get(index).map_or("", String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_position() {
        let table = PositionTable::default();
        for &kind in SpreadKind::all() {
            assert_eq!(table.labels(kind).len(), kind.card_count());
        }
        assert_eq!(table.label(SpreadKind::Three, 2), "Future");
    }

    #[test]
    fn missing_label_is_empty() {
        let table = PositionTable::default();
        assert_eq!(table.label(SpreadKind::Three, 3), "");
        assert_eq!(PositionTable::empty().label(SpreadKind::Single, 0), "");
    }

    #[test]
    fn from_json_partial() {
        let table = PositionTable::from_json(r#"{ "three": ["Then", "Now"] }"#).unwrap();
        assert_eq!(table.label(SpreadKind::Three, 1), "Now");
        assert_eq!(table.label(SpreadKind::Three, 2), "");
        assert!(table.labels(SpreadKind::Celtic).is_empty());
    }

    #[test]
    fn from_json_rejects_unknown_spread() {
        assert!(PositionTable::from_json(r#"{ "horseshoe": ["A"] }"#).is_err());
    }

    #[test]
    fn with_labels_overrides() {
        let table =
            PositionTable::default().with_labels(SpreadKind::Single, vec!["Today".to_string()]);
        assert_eq!(table.label(SpreadKind::Single, 0), "Today");
    }
}

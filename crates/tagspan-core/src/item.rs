//! # Sequence Items
//!
//! A [`SequenceItem`] is either the tag of a single unit (`begin == end`) or a
//! decoded span covering the inclusive unit range `begin..=end`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TagspanError};

/// A labeled, inclusive range of unit indices.
///
/// Items never reference the unit sequence itself; indices are plain integers
/// interpreted relative to the codec offset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawItem")]
pub struct SequenceItem {
    begin: usize,
    end: usize,
    label: String,
}

/// Unchecked wire form, validated on the way into [`SequenceItem`].
#[derive(Deserialize)]
struct RawItem {
    begin: usize,
    end: usize,
    label: String,
}

impl TryFrom<RawItem> for SequenceItem {
    type Error = TagspanError;

    fn try_from(raw: RawItem) -> Result<Self> {
        Self::new(raw.begin, raw.end, raw.label)
    }
}

impl SequenceItem {
    /// Creates an item covering `begin..=end`.
    ///
    /// # Errors
    /// Returns [`TagspanError::IllegalSpan`] if `end < begin`.
    pub fn new(begin: usize, end: usize, label: impl Into<String>) -> Result<Self> {
        if end < begin {
            return Err(TagspanError::IllegalSpan { begin, end });
        }

        Ok(Self {
            begin,
            end,
            label: label.into(),
        })
    }

    /// Creates the tag of a single unit.
    #[must_use]
    pub fn unit(index: usize, label: impl Into<String>) -> Self {
        Self {
            begin: index,
            end: index,
            label: label.into(),
        }
    }

    /// First covered unit.
    #[must_use]
    pub fn begin(&self) -> usize {
        self.begin
    }

    /// Last covered unit (inclusive).
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of covered units; always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.begin + 1
    }

    /// Returns `true` if the item covers exactly one unit.
    #[must_use]
    pub fn is_unit(&self) -> bool {
        self.begin == self.end
    }

    /// Consumes the item and returns its label.
    #[must_use]
    pub fn into_label(self) -> String {
        self.label
    }
}

impl fmt::Display for SequenceItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unit() {
            write!(f, "{}:{}", self.begin, self.label)
        } else {
            write!(f, "{}-{}:{}", self.begin, self.end, self.label)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_inverted_span() {
        let err = SequenceItem::new(1, 0, "O").unwrap_err();
        assert_eq!(err, TagspanError::IllegalSpan { begin: 1, end: 0 });
        assert_eq!(err.to_string(), "Illegal sequence item span: 1-0");
    }

    #[test]
    fn unit_item() {
        let item = SequenceItem::unit(3, "B-PER");
        assert!(item.is_unit());
        assert_eq!(item.begin(), 3);
        assert_eq!(item.end(), 3);
        assert_eq!(item.len(), 1);
        assert_eq!(item.label(), "B-PER");
    }

    #[test]
    fn span_len() {
        let item = SequenceItem::new(2, 5, "ORG").unwrap();
        assert!(!item.is_unit());
        assert_eq!(item.len(), 4);
    }

    #[test]
    fn display() {
        assert_eq!(SequenceItem::unit(0, "O").to_string(), "0:O");
        assert_eq!(
            SequenceItem::new(1, 2, "PER").unwrap().to_string(),
            "1-2:PER"
        );
    }

    #[test]
    fn serialization_roundtrip() {
        let item = SequenceItem::new(1, 2, "PER").unwrap();
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"begin":1,"end":2,"label":"PER"}"#);

        let back: SequenceItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item, back);
    }

    #[test]
    fn deserialization_checks_span() {
        let result: std::result::Result<SequenceItem, _> =
            serde_json::from_str(r#"{"begin":4,"end":2,"label":"PER"}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Illegal sequence item span"));
    }
}

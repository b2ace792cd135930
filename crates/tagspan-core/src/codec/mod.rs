//! # Sequence Codecs
//!
//! Converts between labeled spans and dense per-unit tag sequences.
//!
//! Two schemes are supported and enumerated by [`Scheme`]:
//! - [`BioCodec`]: `B-<label>` / `I-<label>` / `O` tags with explicit span starts.
//! - [`AdjacentLabelCodec`]: bare labels, where adjacency alone continues a span.
//!
//! [`SequenceCodec`] selects one of them at construction time.

pub mod adjacent;
pub mod bio;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TagspanError};
use crate::item::SequenceItem;
use crate::validation;

pub use adjacent::AdjacentLabelCodec;
pub use bio::{BioCodec, BioTag};

/// Tag used for units covered by no span.
pub const OUTSIDE_TAG: &str = "O";

/// Conversion between spans and per-unit tags.
pub trait Codec {
    /// Which scheme this codec implements.
    fn scheme(&self) -> Scheme;

    /// Index of the first unit in the sequence.
    fn offset(&self) -> usize;

    /// Tag emitted for units covered by no span.
    fn outside_tag(&self) -> &str;

    /// Decode per-unit tags into maximal labeled spans.
    ///
    /// Every input item must cover a single unit and items must be strictly
    /// ascending. Outside units produce no output.
    fn decode(&self, tags: &[SequenceItem]) -> Result<Vec<SequenceItem>>;

    /// Encode ordered, disjoint spans into exactly `length` per-unit tags,
    /// indexed `offset..offset + length`.
    fn encode(&self, spans: &[SequenceItem], length: usize) -> Result<Vec<SequenceItem>>;

    /// Ordered tag vocabulary for the given span labels, outside tag first.
    fn tag_set(&self, labels: &[&str]) -> Vec<String>;

    /// Decode plain tag strings, numbering units from the codec offset.
    fn decode_tags<S: AsRef<str>>(&self, tags: &[S]) -> Result<Vec<SequenceItem>>
    where
        Self: Sized,
    {
        let offset = self.offset();
        let limit = validation::unit_limit(offset, tags.len())?;
        let items: Vec<SequenceItem> = (offset..limit)
            .zip(tags)
            .map(|(index, tag)| SequenceItem::unit(index, tag.as_ref()))
            .collect();
        self.decode(&items)
    }

    /// Encode spans and keep only the tag strings.
    fn encode_tags(&self, spans: &[SequenceItem], length: usize) -> Result<Vec<String>>
    where
        Self: Sized,
    {
        Ok(self
            .encode(spans, length)?
            .into_iter()
            .map(SequenceItem::into_label)
            .collect())
    }
}

/// Supported tagging schemes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scheme {
    /// `B-`/`I-`/`O` prefixed tags.
    #[default]
    Bio,
    /// Bare labels; adjacency continues a span.
    AdjacentLabel,
}

impl Scheme {
    /// All supported schemes.
    pub fn all() -> &'static [Scheme] {
        &[Scheme::Bio, Scheme::AdjacentLabel]
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bio => write!(f, "bio"),
            Self::AdjacentLabel => write!(f, "adjacent-label"),
        }
    }
}

impl FromStr for Scheme {
    type Err = TagspanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bio" | "iob" => Ok(Self::Bio),
            "adjacent" | "adjacent-label" | "adjacent_label" => Ok(Self::AdjacentLabel),
            _ => Err(TagspanError::UnknownScheme(s.to_string())),
        }
    }
}

/// A codec of either scheme, chosen at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceCodec {
    Bio(BioCodec),
    AdjacentLabel(AdjacentLabelCodec),
}

impl SequenceCodec {
    /// Create a codec for `scheme` with the default outside tag.
    pub fn new(scheme: Scheme, offset: usize) -> Self {
        match scheme {
            Scheme::Bio => Self::Bio(BioCodec::new(offset)),
            Scheme::AdjacentLabel => Self::AdjacentLabel(AdjacentLabelCodec::new(offset)),
        }
    }
}

impl From<BioCodec> for SequenceCodec {
    fn from(codec: BioCodec) -> Self {
        Self::Bio(codec)
    }
}

impl From<AdjacentLabelCodec> for SequenceCodec {
    fn from(codec: AdjacentLabelCodec) -> Self {
        Self::AdjacentLabel(codec)
    }
}

impl Codec for SequenceCodec {
    fn scheme(&self) -> Scheme {
        match self {
            Self::Bio(codec) => codec.scheme(),
            Self::AdjacentLabel(codec) => codec.scheme(),
        }
    }

    fn offset(&self) -> usize {
        match self {
            Self::Bio(codec) => codec.offset(),
            Self::AdjacentLabel(codec) => codec.offset(),
        }
    }

    fn outside_tag(&self) -> &str {
        match self {
            Self::Bio(codec) => codec.outside_tag(),
            Self::AdjacentLabel(codec) => codec.outside_tag(),
        }
    }

    fn decode(&self, tags: &[SequenceItem]) -> Result<Vec<SequenceItem>> {
        match self {
            Self::Bio(codec) => codec.decode(tags),
            Self::AdjacentLabel(codec) => codec.decode(tags),
        }
    }

    fn encode(&self, spans: &[SequenceItem], length: usize) -> Result<Vec<SequenceItem>> {
        match self {
            Self::Bio(codec) => codec.encode(spans, length),
            Self::AdjacentLabel(codec) => codec.encode(spans, length),
        }
    }

    fn tag_set(&self, labels: &[&str]) -> Vec<String> {
        match self {
            Self::Bio(codec) => codec.tag_set(labels),
            Self::AdjacentLabel(codec) => codec.tag_set(labels),
        }
    }
}

/// Checks shared by every decoder: single-unit items in strictly ascending order.
pub(crate) fn check_tags(tags: &[SequenceItem]) -> Result<()> {
    validation::check_order(tags)?;
    if let Some(item) = tags.iter().find(|item| !item.is_unit()) {
        return Err(TagspanError::IllegalSpan {
            begin: item.begin(),
            end: item.end(),
        });
    }
    Ok(())
}

/// Dense encoding shared by every scheme.
///
/// `tag_for` receives each span and the position of a unit inside it and
/// returns the tag for that unit. Uncovered units receive `outside`.
pub(crate) fn encode_dense<F>(
    spans: &[SequenceItem],
    offset: usize,
    length: usize,
    outside: &str,
    mut tag_for: F,
) -> Result<Vec<SequenceItem>>
where
    F: FnMut(&SequenceItem, usize) -> String,
{
    let limit = validation::unit_limit(offset, length)?;
    validation::check_disjoint(spans)?;
    validation::check_bounds(spans, offset, length)?;
    if let Some(span) = spans
        .iter()
        .find(|span| span.label().is_empty() || span.label() == outside)
    {
        return Err(TagspanError::MalformedTag {
            index: span.begin(),
            tag: span.label().to_string(),
        });
    }

    let mut tags = Vec::with_capacity(length);
    let mut pending = spans.iter().peekable();

    for index in offset..limit {
        while pending.next_if(|span| span.end() < index).is_some() {}

        let tag = match pending.peek() {
            Some(&span) if span.begin() <= index => tag_for(span, index - span.begin()),
            _ => outside.to_string(),
        };
        tags.push(SequenceItem::unit(index, tag));
    }

    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[SequenceItem]) -> Vec<&str> {
        items.iter().map(SequenceItem::label).collect()
    }

    #[test]
    fn scheme_from_str() {
        assert_eq!("bio".parse::<Scheme>().unwrap(), Scheme::Bio);
        assert_eq!("IOB".parse::<Scheme>().unwrap(), Scheme::Bio);
        assert_eq!(
            "adjacent".parse::<Scheme>().unwrap(),
            Scheme::AdjacentLabel
        );
        assert_eq!(
            "adjacent-label".parse::<Scheme>().unwrap(),
            Scheme::AdjacentLabel
        );
        assert_eq!(
            "bilou".parse::<Scheme>(),
            Err(TagspanError::UnknownScheme("bilou".into()))
        );
    }

    #[test]
    fn scheme_display_parses_back() {
        for scheme in Scheme::all() {
            assert_eq!(scheme.to_string().parse::<Scheme>().unwrap(), *scheme);
        }
    }

    #[test]
    fn scheme_serde_names() {
        assert_eq!(serde_json::to_string(&Scheme::Bio).unwrap(), "\"bio\"");
        assert_eq!(
            serde_json::to_string(&Scheme::AdjacentLabel).unwrap(),
            "\"adjacent-label\""
        );
    }

    #[test]
    fn sequence_codec_dispatch() {
        let spans = vec![SequenceItem::new(0, 1, "PER").unwrap()];

        let bio = SequenceCodec::new(Scheme::Bio, 0);
        assert_eq!(bio.scheme(), Scheme::Bio);
        assert_eq!(
            bio.encode_tags(&spans, 3).unwrap(),
            vec!["B-PER", "I-PER", "O"]
        );

        let adjacent = SequenceCodec::new(Scheme::AdjacentLabel, 1);
        assert_eq!(adjacent.scheme(), Scheme::AdjacentLabel);
        assert_eq!(adjacent.offset(), 1);
        let spans = vec![SequenceItem::new(1, 2, "PER").unwrap()];
        assert_eq!(
            adjacent.encode_tags(&spans, 3).unwrap(),
            vec!["PER", "PER", "O"]
        );
    }

    #[test]
    fn decode_tags_numbers_from_offset() {
        let codec = SequenceCodec::new(Scheme::Bio, 1);
        let spans = codec.decode_tags(&["B-PER", "I-PER", "O"]).unwrap();
        assert_eq!(spans, vec![SequenceItem::new(1, 2, "PER").unwrap()]);
    }

    #[test]
    fn huge_offset_is_an_error() {
        let codec = SequenceCodec::new(Scheme::Bio, usize::MAX);
        assert_eq!(
            codec.encode_tags(&[], 1),
            Err(TagspanError::IndexOverflow {
                first: usize::MAX,
                length: 1
            })
        );
        assert!(matches!(
            codec.decode_tags(&["O", "B-PER"]),
            Err(TagspanError::IndexOverflow { length: 2, .. })
        ));

        assert!(codec.encode_tags(&[], 0).unwrap().is_empty());
        assert!(codec.decode_tags::<&str>(&[]).unwrap().is_empty());

        let codec = SequenceCodec::new(Scheme::AdjacentLabel, usize::MAX - 1);
        let spans = vec![SequenceItem::unit(usize::MAX - 1, "PER")];
        assert_eq!(codec.encode_tags(&spans, 1).unwrap(), vec!["PER"]);
        assert!(matches!(
            codec.encode_tags(&spans, 2),
            Err(TagspanError::IndexOverflow { .. })
        ));
    }

    #[test]
    fn check_tags_rejects_multi_unit_items() {
        let tags = vec![SequenceItem::new(0, 2, "O").unwrap()];
        assert_eq!(
            check_tags(&tags),
            Err(TagspanError::IllegalSpan { begin: 0, end: 2 })
        );
    }

    #[test]
    fn encode_dense_fills_gaps() {
        let spans = vec![
            SequenceItem::new(1, 1, "A").unwrap(),
            SequenceItem::new(3, 4, "B").unwrap(),
        ];
        let tags = encode_dense(&spans, 0, 6, "O", |span, pos| {
            format!("{}{}", span.label(), pos)
        })
        .unwrap();
        assert_eq!(labels(&tags), vec!["O", "A0", "O", "B0", "B1", "O"]);
    }

    #[test]
    fn encode_dense_rejects_outside_label() {
        let spans = vec![SequenceItem::new(0, 0, "O").unwrap()];
        let err = encode_dense(&spans, 0, 1, "O", |span, _| span.label().to_string()).unwrap_err();
        assert!(matches!(err, TagspanError::MalformedTag { index: 0, .. }));
    }

    #[test]
    fn codecs_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SequenceCodec>();
        assert_send_sync::<BioCodec>();
        assert_send_sync::<AdjacentLabelCodec>();
    }
}

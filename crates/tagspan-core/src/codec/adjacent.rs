//! # Adjacent-Label Codec
//!
//! Bare labels without prefixes. Consecutive units carrying the same label form
//! one span, so two touching spans with an identical label cannot be told
//! apart after encoding and decode as a single merged span.

use tracing::{debug, trace};

use super::{Codec, OUTSIDE_TAG, Scheme, check_tags, encode_dense};
use crate::error::{Result, TagspanError};
use crate::item::SequenceItem;

/// Codec for the adjacent-label tagging scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacentLabelCodec {
    offset: usize,
    outside: String,
}

impl Default for AdjacentLabelCodec {
    fn default() -> Self {
        Self::new(0)
    }
}

impl AdjacentLabelCodec {
    /// Create a codec whose units are numbered from `offset`.
    pub fn new(offset: usize) -> Self {
        Self {
            offset,
            outside: OUTSIDE_TAG.to_string(),
        }
    }

    /// Use `outside` instead of `O` for uncovered units. Set through
    /// [`CodecConfig::build`](crate::config::CodecConfig::build).
    pub(crate) fn with_outside_tag(mut self, outside: impl Into<String>) -> Self {
        self.outside = outside.into();
        self
    }

    fn decode_checked(&self, tags: &[SequenceItem]) -> Result<Vec<SequenceItem>> {
        check_tags(tags)?;

        let mut spans = Vec::new();
        // (start, last, label) of the run being merged
        let mut open: Option<(usize, usize, &str)> = None;

        for item in tags {
            let index = item.begin();
            let label = item.label();
            if label.is_empty() {
                return Err(TagspanError::MalformedTag {
                    index,
                    tag: label.to_string(),
                });
            }

            match open {
                Some((start, last, current)) if current == label && last + 1 == index => {
                    open = Some((start, index, current));
                    continue;
                }
                Some((start, last, current)) => {
                    spans.push(SequenceItem::new(start, last, current)?);
                    open = None;
                }
                None => {}
            }

            if label != self.outside {
                open = Some((index, index, label));
            }
        }

        if let Some((start, last, label)) = open {
            spans.push(SequenceItem::new(start, last, label)?);
        }

        Ok(spans)
    }
}

impl Codec for AdjacentLabelCodec {
    fn scheme(&self) -> Scheme {
        Scheme::AdjacentLabel
    }

    fn offset(&self) -> usize {
        self.offset
    }

    fn outside_tag(&self) -> &str {
        &self.outside
    }

    fn decode(&self, tags: &[SequenceItem]) -> Result<Vec<SequenceItem>> {
        trace!(scheme = %Scheme::AdjacentLabel, tags = tags.len(), "decoding");
        let spans = self.decode_checked(tags).inspect_err(|e| {
            debug!(scheme = %Scheme::AdjacentLabel, error = %e, "rejected tag sequence")
        })?;
        trace!(scheme = %Scheme::AdjacentLabel, spans = spans.len(), "decoded");
        Ok(spans)
    }

    fn encode(&self, spans: &[SequenceItem], length: usize) -> Result<Vec<SequenceItem>> {
        trace!(scheme = %Scheme::AdjacentLabel, spans = spans.len(), length, "encoding");
        encode_dense(spans, self.offset, length, &self.outside, |span, _| {
            span.label().to_string()
        })
        .inspect_err(|e| {
            debug!(scheme = %Scheme::AdjacentLabel, error = %e, "rejected span sequence")
        })
    }

    fn tag_set(&self, labels: &[&str]) -> Vec<String> {
        std::iter::once(self.outside.clone())
            .chain(labels.iter().map(|label| label.to_string()))
            .collect()
    }
}

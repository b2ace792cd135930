//! # BIO Codec
//!
//! Begin-Inside-Outside tagging. `B-<label>` always starts a new span, so
//! two adjacent spans with the same label stay distinct.

use std::fmt;

use tracing::{debug, trace};

use super::{Codec, OUTSIDE_TAG, Scheme, check_tags, encode_dense};
use crate::error::{Result, TagspanError};
use crate::item::SequenceItem;

const BEGIN_PREFIX: &str = "B-";
const INSIDE_PREFIX: &str = "I-";

/// A parsed BIO tag borrowing its label from the tag string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BioTag<'a> {
    /// `B-<label>`
    Begin(&'a str),
    /// `I-<label>`
    Inside(&'a str),
    /// `O`
    Outside,
}

impl<'a> BioTag<'a> {
    /// Parse a tag string. Returns `None` for anything outside the alphabet,
    /// including prefixes with an empty label.
    pub fn parse(tag: &'a str) -> Option<Self> {
        if tag == OUTSIDE_TAG {
            return Some(BioTag::Outside);
        }
        if let Some(label) = tag.strip_prefix(BEGIN_PREFIX) {
            return (!label.is_empty()).then_some(BioTag::Begin(label));
        }
        if let Some(label) = tag.strip_prefix(INSIDE_PREFIX) {
            return (!label.is_empty()).then_some(BioTag::Inside(label));
        }
        None
    }

    /// Check if this is a "Begin" tag.
    pub fn is_begin(&self) -> bool {
        matches!(self, BioTag::Begin(_))
    }

    /// Check if this is an "Inside" tag.
    pub fn is_inside(&self) -> bool {
        matches!(self, BioTag::Inside(_))
    }

    /// Get the span label carried by this tag.
    pub fn label(&self) -> Option<&'a str> {
        match *self {
            BioTag::Begin(label) | BioTag::Inside(label) => Some(label),
            BioTag::Outside => None,
        }
    }

    /// Check if transitioning from `from` tag to `to` tag is valid.
    ///
    /// `I-x` may only follow `B-x` or `I-x`; every other transition is allowed.
    pub fn is_valid_transition(from: BioTag<'_>, to: BioTag<'_>) -> bool {
        match to {
            BioTag::Inside(label) => from.label() == Some(label),
            BioTag::Begin(_) | BioTag::Outside => true,
        }
    }
}

impl fmt::Display for BioTag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BioTag::Begin(label) => write!(f, "{BEGIN_PREFIX}{label}"),
            BioTag::Inside(label) => write!(f, "{INSIDE_PREFIX}{label}"),
            BioTag::Outside => write!(f, "{OUTSIDE_TAG}"),
        }
    }
}

/// Decoder state between two units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State<'t> {
    Closed,
    Open {
        start: usize,
        last: usize,
        label: &'t str,
    },
}

impl<'t> State<'t> {
    /// Emit the open span, if any.
    fn close(self, spans: &mut Vec<SequenceItem>) -> Result<()> {
        if let State::Open { start, last, label } = self {
            spans.push(SequenceItem::new(start, last, label)?);
        }
        Ok(())
    }

    /// Advance by one unit.
    fn step(
        self,
        index: usize,
        raw: &str,
        tag: BioTag<'t>,
        spans: &mut Vec<SequenceItem>,
    ) -> Result<Self> {
        match (self, tag) {
            (state, BioTag::Outside) => {
                state.close(spans)?;
                Ok(State::Closed)
            }
            (state, BioTag::Begin(label)) => {
                state.close(spans)?;
                Ok(State::Open {
                    start: index,
                    last: index,
                    label,
                })
            }
            (State::Open { start, last, label }, BioTag::Inside(found)) if last + 1 == index => {
                if label == found {
                    Ok(State::Open {
                        start,
                        last: index,
                        label,
                    })
                } else {
                    Err(TagspanError::LabelMismatch {
                        index,
                        open: label.to_string(),
                        found: found.to_string(),
                    })
                }
            }
            (_, BioTag::Inside(_)) => Err(TagspanError::IllegalContinuation {
                index,
                tag: raw.to_string(),
            }),
        }
    }
}

/// Codec for the BIO tagging scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BioCodec {
    offset: usize,
    outside: String,
}

impl Default for BioCodec {
    fn default() -> Self {
        Self::new(0)
    }
}

impl BioCodec {
    /// Create a codec whose units are numbered from `offset`.
    pub fn new(offset: usize) -> Self {
        Self {
            offset,
            outside: OUTSIDE_TAG.to_string(),
        }
    }

    /// Use `outside` instead of `O` for uncovered units.
    ///
    /// Only reachable through [`CodecConfig::build`](crate::config::CodecConfig::build),
    /// which rejects empty tags and tags that look like `B-`/`I-` tags.
    pub(crate) fn with_outside_tag(mut self, outside: impl Into<String>) -> Self {
        self.outside = outside.into();
        self
    }

    fn classify<'t>(&self, tag: &'t str) -> Option<BioTag<'t>> {
        if tag == self.outside {
            return Some(BioTag::Outside);
        }
        match BioTag::parse(tag)? {
            BioTag::Outside => None,
            parsed => Some(parsed),
        }
    }

    fn decode_checked(&self, tags: &[SequenceItem]) -> Result<Vec<SequenceItem>> {
        check_tags(tags)?;

        let mut spans = Vec::new();
        let mut state = State::Closed;

        for item in tags {
            let index = item.begin();
            let tag = self
                .classify(item.label())
                .ok_or_else(|| TagspanError::MalformedTag {
                    index,
                    tag: item.label().to_string(),
                })?;

            // A gap in unit numbering ends the open span.
            if let State::Open { last, .. } = state {
                if last + 1 != index && !tag.is_inside() {
                    state.close(&mut spans)?;
                    state = State::Closed;
                }
            }

            state = state.step(index, item.label(), tag, &mut spans)?;
        }

        state.close(&mut spans)?;
        Ok(spans)
    }
}

impl Codec for BioCodec {
    fn scheme(&self) -> Scheme {
        Scheme::Bio
    }

    fn offset(&self) -> usize {
        self.offset
    }

    fn outside_tag(&self) -> &str {
        &self.outside
    }

    fn decode(&self, tags: &[SequenceItem]) -> Result<Vec<SequenceItem>> {
        trace!(scheme = %Scheme::Bio, tags = tags.len(), "decoding");
        let spans = self
            .decode_checked(tags)
            .inspect_err(|e| debug!(scheme = %Scheme::Bio, error = %e, "rejected tag sequence"))?;
        trace!(scheme = %Scheme::Bio, spans = spans.len(), "decoded");
        Ok(spans)
    }

    fn encode(&self, spans: &[SequenceItem], length: usize) -> Result<Vec<SequenceItem>> {
        trace!(scheme = %Scheme::Bio, spans = spans.len(), length, "encoding");
        encode_dense(spans, self.offset, length, &self.outside, |span, position| {
            if position == 0 {
                BioTag::Begin(span.label()).to_string()
            } else {
                BioTag::Inside(span.label()).to_string()
            }
        })
        .inspect_err(|e| debug!(scheme = %Scheme::Bio, error = %e, "rejected span sequence"))
    }

    fn tag_set(&self, labels: &[&str]) -> Vec<String> {
        let mut tags = Vec::with_capacity(labels.len() * 2 + 1);
        tags.push(self.outside.clone());
        for &label in labels {
            tags.push(BioTag::Begin(label).to_string());
            tags.push(BioTag::Inside(label).to_string());
        }
        tags
    }
}

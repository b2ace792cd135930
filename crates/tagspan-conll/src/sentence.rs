//! Sentences as parallel token and tag columns, and their span form.

use serde::{Deserialize, Serialize};

use tagspan_core::{Codec, SequenceItem, validation};

use crate::error::{ConllError, Result};

/// One sentence: a token column and a tag column of equal length.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sentence {
    tokens: Vec<String>,
    tags: Vec<String>,
}

impl Sentence {
    /// Pair tokens with their tags.
    ///
    /// # Errors
    /// Returns [`ConllError::LengthMismatch`] if the columns differ in length.
    pub fn new(tokens: Vec<String>, tags: Vec<String>) -> Result<Self> {
        if tokens.len() != tags.len() {
            return Err(ConllError::LengthMismatch {
                tokens: tokens.len(),
                tags: tags.len(),
            });
        }
        Ok(Self { tokens, tags })
    }

    /// Encode `spans` over `tokens` with `codec`.
    pub fn from_spans<C: Codec>(tokens: Vec<String>, spans: &[SequenceItem], codec: &C) -> Result<Self> {
        let tags = codec.encode_tags(spans, tokens.len())?;
        Ok(Self { tokens, tags })
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate over `(token, tag)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tokens
            .iter()
            .zip(&self.tags)
            .map(|(token, tag)| (token.as_str(), tag.as_str()))
    }

    /// Decode the tag column into spans, numbered from the codec offset.
    pub fn spans<C: Codec>(&self, codec: &C) -> Result<Vec<SequenceItem>> {
        Ok(codec.decode_tags(&self.tags)?)
    }

    /// Re-tag the sentence from one scheme into another.
    pub fn recode<F: Codec, T: Codec>(&self, from: &F, to: &T) -> Result<Self> {
        let spans = self.spans(from)?;
        let shifted = shift(&spans, from.offset(), to.offset(), self.len())?;
        Self::from_spans(self.tokens.clone(), &shifted, to)
    }
}

/// Move spans of a `length`-unit sentence from one offset base to another.
fn shift(spans: &[SequenceItem], from: usize, to: usize, length: usize) -> Result<Vec<SequenceItem>> {
    if from == to {
        return Ok(spans.to_vec());
    }
    validation::unit_limit(to, length)?;
    spans
        .iter()
        .map(|span| {
            let begin = span.begin() - from + to;
            let end = span.end() - from + to;
            Ok(SequenceItem::new(begin, end, span.label())?)
        })
        .collect()
}

/// A sentence in span form, as exchanged in JSON lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanRecord {
    pub tokens: Vec<String>,
    pub spans: Vec<SequenceItem>,
}

impl SpanRecord {
    /// Decode a sentence's tag column with `codec`.
    pub fn from_sentence<C: Codec>(sentence: &Sentence, codec: &C) -> Result<Self> {
        Ok(Self {
            tokens: sentence.tokens.clone(),
            spans: sentence.spans(codec)?,
        })
    }

    /// Encode the spans back into a tagged sentence.
    pub fn into_sentence<C: Codec>(self, codec: &C) -> Result<Sentence> {
        Sentence::from_spans(self.tokens, &self.spans, codec)
    }

    /// Tokens covered by `span`, joined by spaces.
    ///
    /// Returns `None` if the span falls outside the tokens for the given offset.
    pub fn span_text(&self, span: &SequenceItem, offset: usize) -> Option<String> {
        let start = span.begin().checked_sub(offset)?;
        let end = span.end().checked_sub(offset)?;
        let covered = self.tokens.get(start..=end)?;
        Some(covered.join(" "))
    }
}

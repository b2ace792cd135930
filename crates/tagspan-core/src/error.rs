use thiserror::Error;

/// Errors that can occur while encoding or decoding tag sequences.
///
/// Every variant is a deterministic validation failure of the input; retrying
/// the same call always yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagspanError {
    /// A sequence item ends before it begins.
    #[error("Illegal sequence item span: {begin}-{end}")]
    IllegalSpan {
        /// First unit of the item.
        begin: usize,
        /// Last unit of the item.
        end: usize,
    },

    /// Sequence items are not strictly ascending by `begin`.
    #[error("Illegal sequence item order: {current} follows {previous}")]
    IllegalOrder {
        /// `begin` of the preceding item.
        previous: usize,
        /// `begin` of the offending item.
        current: usize,
    },

    /// A span starts inside the preceding span.
    #[error("Overlapping sequence items: span starting at {begin} overlaps span ending at {previous_end}")]
    OverlappingSpans {
        /// `end` of the preceding span.
        previous_end: usize,
        /// `begin` of the offending span.
        begin: usize,
    },

    /// A span covers units outside the encoded sequence.
    #[error("Sequence item span {begin}-{end} outside {length} units starting at {first}")]
    SpanOutOfBounds {
        begin: usize,
        end: usize,
        /// First valid unit (the codec offset).
        first: usize,
        /// Number of units in the sequence.
        length: usize,
    },

    /// The unit indices of a sequence do not fit in `usize`.
    #[error("Sequence of {length} units starting at {first} exceeds the index range")]
    IndexOverflow { first: usize, length: usize },

    /// An inside tag without an open span.
    #[error("Illegal sequence continuation at {index}: {tag}")]
    IllegalContinuation {
        /// Unit index of the offending tag.
        index: usize,
        /// The offending tag.
        tag: String,
    },

    /// An inside tag whose label differs from the open span's label.
    #[error("Illegal sequence continuation at {index}: I-{found} inside span of {open}")]
    LabelMismatch {
        /// Unit index of the offending tag.
        index: usize,
        /// Label of the open span.
        open: String,
        /// Label carried by the inside tag.
        found: String,
    },

    /// A tag that does not belong to the scheme's alphabet.
    #[error("Malformed tag at {index}: {tag:?}")]
    MalformedTag {
        /// Unit index of the offending tag.
        index: usize,
        /// The offending tag.
        tag: String,
    },

    /// A scheme name that is not recognised.
    #[error("unknown tagging scheme: {0}")]
    UnknownScheme(String),

    /// A codec configuration that cannot be built.
    #[error("invalid codec configuration: {0}")]
    InvalidConfig(String),
}

impl TagspanError {
    /// Returns `true` for errors about item spans, ordering, overlap or bounds.
    #[must_use]
    pub fn is_span_order(&self) -> bool {
        matches!(
            self,
            Self::IllegalSpan { .. }
                | Self::IllegalOrder { .. }
                | Self::OverlappingSpans { .. }
                | Self::SpanOutOfBounds { .. }
                | Self::IndexOverflow { .. }
        )
    }

    /// Returns `true` for illegal BIO continuations, including label mismatches.
    #[must_use]
    pub fn is_continuation(&self) -> bool {
        matches!(
            self,
            Self::IllegalContinuation { .. } | Self::LabelMismatch { .. }
        )
    }
}

/// Result type alias for tagspan operations.
pub type Result<T> = std::result::Result<T, TagspanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = TagspanError::IllegalSpan { begin: 1, end: 0 };
        assert_eq!(err.to_string(), "Illegal sequence item span: 1-0");

        let err = TagspanError::IllegalContinuation {
            index: 0,
            tag: "I-PER".into(),
        };
        assert!(err.to_string().starts_with("Illegal sequence continuation"));

        let err = TagspanError::LabelMismatch {
            index: 2,
            open: "PER".into(),
            found: "ORG".into(),
        };
        assert!(err.to_string().starts_with("Illegal sequence continuation"));
        assert!(err.to_string().contains("I-ORG"));

        let err = TagspanError::IndexOverflow {
            first: usize::MAX,
            length: 2,
        };
        assert!(err.to_string().ends_with("exceeds the index range"));
    }

    #[test]
    fn error_families() {
        assert!(TagspanError::IllegalOrder {
            previous: 1,
            current: 0
        }
        .is_span_order());
        assert!(!TagspanError::UnknownScheme("x".into()).is_span_order());
        assert!(TagspanError::LabelMismatch {
            index: 0,
            open: "A".into(),
            found: "B".into()
        }
        .is_continuation());
        assert!(!TagspanError::IllegalSpan { begin: 1, end: 0 }.is_continuation());
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TagspanError>();
    }
}

use thiserror::Error;

use tagspan_core::TagspanError;

/// Errors raised while reading, writing or converting CoNLL data.
#[derive(Debug, Error)]
pub enum ConllError {
    /// The underlying reader or writer failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A line does not follow the column format.
    #[error("line {line}: {message}")]
    Format {
        /// 1-based line number.
        line: usize,
        message: String,
    },

    /// A sentence has a different number of tokens and tags.
    #[error("sentence has {tokens} tokens but {tags} tags")]
    LengthMismatch { tokens: usize, tags: usize },

    /// A sentence's tags or spans were rejected by the codec.
    #[error(transparent)]
    Codec(#[from] TagspanError),
}

/// Result type alias for CoNLL operations.
pub type Result<T> = std::result::Result<T, ConllError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = ConllError::Format {
            line: 3,
            message: "missing tag column".into(),
        };
        assert_eq!(err.to_string(), "line 3: missing tag column");

        let err = ConllError::from(TagspanError::IllegalSpan { begin: 1, end: 0 });
        assert_eq!(err.to_string(), "Illegal sequence item span: 1-0");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConllError>();
    }
}

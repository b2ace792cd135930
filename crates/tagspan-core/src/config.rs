//! # Codec Configuration
//!
//! Serializable settings that select a scheme and fix the offset and outside
//! tag of the codec they build.

use serde::{Deserialize, Serialize};

use crate::codec::{AdjacentLabelCodec, BioCodec, OUTSIDE_TAG, Scheme, SequenceCodec};
use crate::error::{Result, TagspanError};

/// Configuration for building a [`SequenceCodec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Which tagging scheme to use
    pub scheme: Scheme,
    /// Index of the first unit (usually 0 or 1)
    pub offset: usize,
    /// Tag for units covered by no span
    pub outside_tag: String,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            scheme: Scheme::Bio,
            offset: 0,
            outside_tag: OUTSIDE_TAG.to_string(),
        }
    }
}

impl CodecConfig {
    /// Create a new codec configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tagging scheme.
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Set the index of the first unit.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Set the tag used for uncovered units.
    pub fn with_outside_tag(mut self, outside_tag: impl Into<String>) -> Self {
        self.outside_tag = outside_tag.into();
        self
    }

    /// Check that the configuration describes a usable codec.
    pub fn validate(&self) -> Result<()> {
        if self.outside_tag.is_empty() {
            return Err(TagspanError::InvalidConfig(
                "outside tag must not be empty".into(),
            ));
        }
        if self.scheme == Scheme::Bio
            && (self.outside_tag.starts_with("B-") || self.outside_tag.starts_with("I-"))
        {
            return Err(TagspanError::InvalidConfig(format!(
                "outside tag {:?} collides with BIO prefixes",
                self.outside_tag
            )));
        }
        Ok(())
    }

    /// Build the configured codec.
    ///
    /// # Examples
    /// ```
    /// use tagspan_core::{Codec, CodecConfig, Scheme};
    ///
    /// let codec = CodecConfig::new()
    ///     .with_scheme(Scheme::Bio)
    ///     .with_offset(1)
    ///     .build()
    ///     .unwrap();
    ///
    /// let spans = codec.decode_tags(&["O", "B-PER", "I-PER"]).unwrap();
    /// assert_eq!(spans[0].begin(), 2);
    /// assert_eq!(spans[0].end(), 3);
    /// ```
    pub fn build(&self) -> Result<SequenceCodec> {
        self.validate()?;

        let codec = match self.scheme {
            Scheme::Bio => SequenceCodec::Bio(
                BioCodec::new(self.offset).with_outside_tag(self.outside_tag.as_str()),
            ),
            Scheme::AdjacentLabel => SequenceCodec::AdjacentLabel(
                AdjacentLabelCodec::new(self.offset).with_outside_tag(self.outside_tag.as_str()),
            ),
        };
        Ok(codec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Codec;

    #[test]
    fn test_default_config() {
        let config = CodecConfig::default();
        assert_eq!(config.scheme, Scheme::Bio);
        assert_eq!(config.offset, 0);
        assert_eq!(config.outside_tag, "O");
    }

    #[test]
    fn test_config_builder() {
        let config = CodecConfig::new()
            .with_scheme(Scheme::AdjacentLabel)
            .with_offset(1)
            .with_outside_tag("_");

        assert_eq!(config.scheme, Scheme::AdjacentLabel);
        assert_eq!(config.offset, 1);
        assert_eq!(config.outside_tag, "_");

        let codec = config.build().unwrap();
        assert_eq!(codec.scheme(), Scheme::AdjacentLabel);
        assert_eq!(codec.offset(), 1);
        assert_eq!(codec.outside_tag(), "_");
    }

    #[test]
    fn test_invalid_outside_tag() {
        let err = CodecConfig::new().with_outside_tag("").build().unwrap_err();
        assert!(matches!(err, TagspanError::InvalidConfig(_)));

        let err = CodecConfig::new().with_outside_tag("B-X").build().unwrap_err();
        assert!(matches!(err, TagspanError::InvalidConfig(_)));

        // Only BIO reserves the prefixes.
        assert!(CodecConfig::new()
            .with_scheme(Scheme::AdjacentLabel)
            .with_outside_tag("B-X")
            .build()
            .is_ok());
    }

    #[test]
    fn test_built_outside_tag_roundtrips() {
        let err = CodecConfig::new().with_outside_tag("I-PER").build().unwrap_err();
        assert!(matches!(err, TagspanError::InvalidConfig(_)));

        let codec = CodecConfig::new().with_outside_tag("_").build().unwrap();
        let spans = vec![crate::SequenceItem::new(1, 2, "PER").unwrap()];
        let tags = codec.encode_tags(&spans, 4).unwrap();
        assert_eq!(tags, vec!["_", "B-PER", "I-PER", "_"]);
        assert_eq!(codec.decode_tags(&tags).unwrap(), spans);
    }

    #[test]
    fn test_config_from_json() {
        let config: CodecConfig =
            serde_json::from_str(r#"{"scheme":"adjacent-label","offset":1}"#).unwrap();
        assert_eq!(config.scheme, Scheme::AdjacentLabel);
        assert_eq!(config.offset, 1);
        assert_eq!(config.outside_tag, "O");

        let config: CodecConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CodecConfig::default());
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = CodecConfig::new()
            .with_scheme(Scheme::AdjacentLabel)
            .with_offset(1);
        let json = serde_json::to_string(&config).unwrap();
        let back: CodecConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}

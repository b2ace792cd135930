//! # Tagspan Core
//!
//! Converts between labeled, non-overlapping token spans and flat per-token
//! tag sequences as consumed by sequence-labeling models and CoNLL-style files.
//! Two schemes are provided: BIO (`B-`/`I-`/`O`) and adjacent-label (bare labels).
//!
//! ## Quick Start
//!
//! ```rust
//! use tagspan_core::{BioCodec, Codec, SequenceItem};
//!
//! let codec = BioCodec::new(0);
//! let spans = codec.decode_tags(&["O", "B-PER", "I-PER", "O"]).unwrap();
//! assert_eq!(spans, vec![SequenceItem::new(1, 2, "PER").unwrap()]);
//!
//! let tags = codec.encode_tags(&spans, 4).unwrap();
//! assert_eq!(tags, vec!["O", "B-PER", "I-PER", "O"]);
//! ```
pub mod codec;
pub mod config;
pub mod error;
pub mod item;
pub mod validation;

// Re-export primary API
pub use codec::{
    AdjacentLabelCodec, BioCodec, BioTag, Codec, OUTSIDE_TAG, Scheme, SequenceCodec,
};
pub use config::CodecConfig;
pub use error::{Result, TagspanError};
pub use item::SequenceItem;

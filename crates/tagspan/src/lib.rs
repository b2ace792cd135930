//! # Tagspan
//!
//! Convert between labeled token spans and the per-token tag sequences used by
//! sequence-labeling models, in the BIO or adjacent-label scheme, and move them
//! in and out of CoNLL-style column files.
//!
//! ```rust
//! use tagspan::{Codec, CodecConfig, Scheme};
//!
//! let codec = CodecConfig::new().with_scheme(Scheme::AdjacentLabel).build().unwrap();
//! let spans = codec.decode_tags(&["O", "PER", "PER", "O"]).unwrap();
//! assert_eq!(spans.len(), 1);
//! assert_eq!((spans[0].begin(), spans[0].end()), (1, 2));
//! ```
pub use tagspan_conll as conll;
pub use tagspan_core::*;

//! # Tagspan CoNLL
//!
//! Reads and writes CoNLL-style column files (one `token<TAB>tag` line per
//! unit, blank lines between sentences) and converts their tag columns to and
//! from labeled spans with any [`tagspan_core::Codec`].

pub mod error;
pub mod reader;
pub mod sentence;
pub mod writer;

pub use error::{ConllError, Result};
pub use reader::read_sentences;
pub use sentence::{Sentence, SpanRecord};
pub use writer::write_sentences;

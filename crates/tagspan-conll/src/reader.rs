//! Reading CoNLL-style column files.

use std::io::BufRead;

use tracing::{debug, trace};

use crate::error::{ConllError, Result};
use crate::sentence::Sentence;

/// Read all sentences from CoNLL-style input.
///
/// Each non-blank line holds one unit: the first column is the token and the
/// last column is its tag. Columns are tab-separated, falling back to any
/// whitespace when a line has no tab. Blank lines end a sentence.
///
/// A line starting with `#` is a comment only before the first unit of a
/// sentence and only when it has no tab, so tab-separated tokens such as
/// `#Rust` are kept wherever they appear.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use tagspan_conll::read_sentences;
///
/// let input = "Lula\tB-PER\nfalou\tO\n\nBrasil\tB-LOC\n";
/// let sentences = read_sentences(Cursor::new(input)).unwrap();
/// assert_eq!(sentences.len(), 2);
/// assert_eq!(sentences[0].tags(), ["B-PER", "O"]);
/// ```
pub fn read_sentences<R: BufRead>(reader: R) -> Result<Vec<Sentence>> {
    let mut sentences = Vec::new();
    let mut tokens = Vec::new();
    let mut tags = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim_end_matches(['\r', '\n']);

        if line.trim().is_empty() {
            if !tokens.is_empty() {
                sentences.push(Sentence::new(
                    std::mem::take(&mut tokens),
                    std::mem::take(&mut tags),
                )?);
            }
            continue;
        }

        if is_comment(line, tokens.is_empty()) {
            trace!(line = number + 1, "skipping comment");
            continue;
        }

        let (token, tag) = split_columns(line).ok_or_else(|| ConllError::Format {
            line: number + 1,
            message: format!("expected token and tag columns, got {line:?}"),
        })?;

        tokens.push(token.to_string());
        tags.push(tag.to_string());
    }

    // Don't forget the last sentence
    if !tokens.is_empty() {
        sentences.push(Sentence::new(tokens, tags)?);
    }

    debug!(sentences = sentences.len(), "read CoNLL input");
    Ok(sentences)
}

/// Comment lines precede a sentence's units and carry no tab.
fn is_comment(line: &str, at_sentence_start: bool) -> bool {
    at_sentence_start && line.starts_with('#') && !line.contains('\t')
}

/// First and last column of a line.
fn split_columns(line: &str) -> Option<(&str, &str)> {
    let columns: Vec<&str> = if line.contains('\t') {
        line.split('\t').map(str::trim).collect()
    } else {
        line.split_whitespace().collect()
    };

    match columns.as_slice() {
        [token, .., tag] if !token.is_empty() && !tag.is_empty() => Some((*token, *tag)),
        _ => None,
    }
}

//! Writing CoNLL-style column files.

use std::io::Write;

use crate::error::Result;
use crate::sentence::Sentence;

/// Write sentences as `token<TAB>tag` lines, each sentence followed by a blank line.
pub fn write_sentences<W: Write>(mut writer: W, sentences: &[Sentence]) -> Result<()> {
    for sentence in sentences {
        write_sentence(&mut writer, sentence)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a single sentence followed by a blank line.
pub fn write_sentence<W: Write>(writer: &mut W, sentence: &Sentence) -> Result<()> {
    for (token, tag) in sentence.iter() {
        writeln!(writer, "{token}\t{tag}")?;
    }
    writeln!(writer)?;
    Ok(())
}

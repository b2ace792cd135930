//! Tagspan Convert
//!
//! Converts CoNLL-style tag files into JSON-lines span records and back, or
//! re-tags them from one scheme into another.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tagspan_conll::writer::write_sentence;
use tagspan_conll::{SpanRecord, read_sentences};
use tagspan_core::{Codec, CodecConfig, Scheme, SequenceCodec};

/// CLI arguments
#[derive(Parser)]
#[command(name = "tagspan-convert")]
#[command(about = "Convert between CoNLL tag files and labeled span records")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Tagging scheme of the tag columns (bio, adjacent-label)
    #[arg(short, long, env = "TAGSPAN_SCHEME")]
    scheme: Option<Scheme>,

    /// Index of the first token
    #[arg(short, long, env = "TAGSPAN_OFFSET")]
    offset: Option<usize>,

    /// JSON file with a codec configuration; flags override its values
    #[arg(short, long, env = "TAGSPAN_CONFIG")]
    config: Option<PathBuf>,

    /// Abort on the first sentence the codec rejects instead of skipping it
    #[arg(long)]
    strict: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Read CoNLL and print one span record per sentence as JSON lines
    Decode {
        /// Input file (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Read JSON-lines span records and print CoNLL
    Encode {
        /// Input file (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Read CoNLL and print it re-tagged in another scheme
    Recode {
        /// Target scheme
        #[arg(short, long)]
        to: Scheme,

        /// Input file (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

impl Cli {
    /// Merge the optional config file with command-line overrides.
    fn codec_config(&self) -> Result<CodecConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => CodecConfig::default(),
        };
        if let Some(scheme) = self.scheme {
            config = config.with_scheme(scheme);
        }
        if let Some(offset) = self.offset {
            config = config.with_offset(offset);
        }
        Ok(config)
    }
}

fn load_config(path: &Path) -> Result<CodecConfig> {
    let file =
        File::open(path).with_context(|| format!("failed to open config {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse config {}", path.display()))
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Counts of converted and skipped sentences.
#[derive(Debug, Default)]
struct Summary {
    converted: usize,
    skipped: usize,
}

impl Summary {
    /// Record a failed sentence; returns the error in strict mode.
    fn reject(&mut self, strict: bool, sentence: usize, err: impl Into<anyhow::Error>) -> Result<()> {
        let err = err.into();
        if strict {
            return Err(err.context(format!("sentence {sentence} rejected")));
        }
        warn!(sentence, error = %err, "skipping sentence");
        self.skipped += 1;
        Ok(())
    }
}

fn decode(
    codec: &SequenceCodec,
    input: Option<&Path>,
    strict: bool,
    out: &mut impl Write,
) -> Result<Summary> {
    let sentences = read_sentences(open_input(input)?).context("failed to read CoNLL input")?;
    let mut summary = Summary::default();

    for (i, sentence) in sentences.iter().enumerate() {
        match SpanRecord::from_sentence(sentence, codec) {
            Ok(record) => {
                serde_json::to_writer(&mut *out, &record)?;
                writeln!(out)?;
                summary.converted += 1;
            }
            Err(e) => summary.reject(strict, i + 1, e)?,
        }
    }

    Ok(summary)
}

fn encode(
    codec: &SequenceCodec,
    input: Option<&Path>,
    strict: bool,
    out: &mut impl Write,
) -> Result<Summary> {
    let mut summary = Summary::default();

    for (i, line) in open_input(input)?.lines().enumerate() {
        let line = line.context("failed to read span records")?;
        if line.trim().is_empty() {
            continue;
        }

        let record: SpanRecord = match serde_json::from_str(&line) {
            Ok(record) => record,
            Err(e) => {
                summary.reject(strict, i + 1, e)?;
                continue;
            }
        };

        match record.into_sentence(codec) {
            Ok(sentence) => {
                write_sentence(out, &sentence)?;
                summary.converted += 1;
            }
            Err(e) => summary.reject(strict, i + 1, e)?,
        }
    }

    Ok(summary)
}

fn recode(
    from: &SequenceCodec,
    to: &SequenceCodec,
    input: Option<&Path>,
    strict: bool,
    out: &mut impl Write,
) -> Result<Summary> {
    let sentences = read_sentences(open_input(input)?).context("failed to read CoNLL input")?;
    let mut summary = Summary::default();

    for (i, sentence) in sentences.iter().enumerate() {
        match sentence.recode(from, to) {
            Ok(recoded) => {
                write_sentence(out, &recoded)?;
                summary.converted += 1;
            }
            Err(e) => summary.reject(strict, i + 1, e)?,
        }
    }

    Ok(summary)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.codec_config()?;
    let codec = config.build().context("invalid codec configuration")?;
    info!(scheme = %codec.scheme(), offset = codec.offset(), "codec ready");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let summary = match &cli.command {
        Commands::Decode { input } => decode(&codec, input.as_deref(), cli.strict, &mut out)?,
        Commands::Encode { input } => encode(&codec, input.as_deref(), cli.strict, &mut out)?,
        Commands::Recode { to, input } => {
            let target = config.clone().with_scheme(*to).build().with_context(|| {
                format!("invalid configuration for target scheme {to}")
            })?;
            recode(&codec, &target, input.as_deref(), cli.strict, &mut out)?
        }
    };
    out.flush()?;

    info!(
        converted = summary.converted,
        skipped = summary.skipped,
        "conversion finished"
    );
    Ok(())
}

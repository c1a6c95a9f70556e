//! Print the first paragraphs of an HTML document, or a JSON digest of them.
//!
//! Reads the whole document from a file (default `test.html`) or stdin (`-`).

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use para_digest::{
    Digest, Options, SentenceSplitter, SplitterPreference, DEFAULT_MAX_PARAGRAPHS,
    DEFAULT_SENTENCES,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "para-digest", version, about)]
struct Cli {
    /// HTML file to read, or `-` for stdin
    #[arg(default_value = "test.html")]
    input: PathBuf,

    /// Do not print paragraph text
    #[arg(short, long)]
    quiet: bool,

    /// Number of non-empty paragraphs to collect
    #[arg(short, long, default_value_t = DEFAULT_MAX_PARAGRAPHS)]
    max: usize,

    /// Sentences kept in each summary
    #[arg(short, long, default_value_t = DEFAULT_SENTENCES)]
    sentences: usize,

    /// Leave comment nodes in the document
    #[arg(long)]
    keep_comments: bool,

    /// Trim every text fragment before printing
    #[arg(long)]
    strip: bool,

    /// Always split sentences on punctuation instead of UAX #29
    #[arg(long)]
    regex_splitter: bool,

    /// Print the digest report as JSON instead of paragraph text
    #[arg(long)]
    json: bool,

    /// Log debug information to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> Options {
        Options {
            max_paragraphs: self.max,
            sentences: self.sentences,
            suppress_output: self.quiet,
            strip_comments: !self.keep_comments,
            strip_whitespace: self.strip,
            splitter: if self.regex_splitter {
                SplitterPreference::Regex
            } else {
                SplitterPreference::Auto
            },
        }
    }

    fn load(&self, options: &Options, splitter: SentenceSplitter) -> Result<Digest> {
        if self.input.as_os_str() == "-" {
            Digest::from_reader_with_splitter(io::stdin().lock(), options, splitter)
                .context("failed to load stdin")
        } else {
            Digest::from_path_with_splitter(&self.input, options, splitter)
                .with_context(|| format!("failed to load {}", self.input.display()))
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "para_digest=debug" } else { "para_digest=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = cli.options();
    let splitter = SentenceSplitter::resolve(options.splitter);
    tracing::debug!(splitter = splitter.name(), "sentence splitter resolved");

    let digest = cli.load(&options, splitter)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        serde_json::to_writer_pretty(&mut out, &digest.report())?;
        writeln!(out)?;
    } else {
        let written = digest.write_paragraphs(&mut out)?;
        tracing::debug!(written, "paragraphs printed");
    }
    out.flush()?;

    Ok(())
}

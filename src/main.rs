//! `chordline` - segment ChordPro-style lyric lines from stdin.

use std::io::{self, BufWriter};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use chordline::config::{Config, OutputFormat};
use chordline::constants;
use chordline::convert::convert_lines;

/// Read ChordPro-style lines on stdin and write their chord/text segments.
#[derive(Debug, Parser)]
#[command(name = "chordline", version, about)]
struct Cli {
    /// Output format; overrides CHORDLINE_FORMAT
    #[arg(long, short, value_enum)]
    format: Option<OutputFormat>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(constants::logging::DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = Config::load()
        .context("Failed to load configuration")?
        .with_format(cli.format);
    tracing::info!("{} {} writing {} output", config.app_name(), config.app_version(), config.format);

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());
    let count = convert_lines(stdin, stdout, config.format).context("Failed to convert input")?;

    tracing::info!("Processed {count} lines");
    Ok(())
}

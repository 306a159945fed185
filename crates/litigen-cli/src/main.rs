use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use litigen_core::{FactoryOptions, GenerationError, LawsuitFactory};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Thin driver: generates lawsuit folders and writes them out as JSON.
#[derive(Parser, Debug)]
#[command(name = "litigen", version, about = "Fictitious lawsuit fixture generator")]
struct Cli {
    /// Number of folders to generate.
    #[arg(long, default_value_t = 2)]
    total: usize,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Output file; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Emit one pretty-printed JSON array instead of JSON lines.
    #[arg(long, default_value_t = false)]
    pretty: bool,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let factory = LawsuitFactory::with_options(FactoryOptions {
        seed: cli.seed,
        today: None,
    })?;

    let mut writer: Box<dyn Write> = match &cli.out {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    if cli.pretty {
        let folders = factory
            .folders(cli.total)
            .collect::<Result<Vec<_>, GenerationError>>()?;
        serde_json::to_writer_pretty(&mut writer, &folders)?;
        writeln!(writer)?;
    } else {
        for folder in factory.folders(cli.total) {
            serde_json::to_writer(&mut writer, &folder?)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;

    info!(total = cli.total, "generation finished");
    Ok(())
}

//! # serial2parquet
//!
//! A command-line tool that reads newline-delimited integer serials from
//! standard input and writes a single-column Parquet stream.
//!
//! ## Usage
//!
//! ```bash
//! # Encode a range of serials, uncompressed, to a file
//! seq 1 100000 | serial2parquet -o serials.parquet
//!
//! # Compress with a preset, writing to standard output
//! seq 1 100000 | serial2parquet --compression zstd-fast > serials.parquet
//!
//! # The environment variable works too
//! SERIAL2PARQUET_COMPRESSION=snappy seq 1 100000 | serial2parquet > serials.parquet
//! ```

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use serial2parquet::pipeline::{self, CancelToken};

/// serial2parquet - stream integer serials into a Parquet column
#[derive(Parser)]
#[command(name = "serial2parquet")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Compression preset: gzip-fast, gzip-best, lz4-fast, snappy,
    /// zstd-fast, zstd-best (overrides SERIAL2PARQUET_COMPRESSION;
    /// anything else means uncompressed)
    #[arg(short = 'c', long, value_name = "PRESET")]
    compression: Option<String>,

    /// Output file path (defaults to standard output)
    #[arg(short = 'o', long, value_name = "PATH")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = pipeline::config_from_env();
    if let Some(name) = cli.compression.as_deref() {
        config = config.with_compression_name(name);
    }
    info!("compression preset: {:?}", config.compression);

    let cancel = CancelToken::new();
    let stdin = io::stdin();

    let stats = match cli.output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            info!("writing to {}", path.display());
            pipeline::run(stdin.lock(), BufWriter::new(file), config, &cancel)
        }
        None => pipeline::run(stdin.lock(), BufWriter::new(io::stdout()), config, &cancel),
    }
    .context("pipeline failed")?;

    info!("{stats}");
    Ok(())
}

use anyhow::{Context, Result};
use clap::Parser;
use csv2tsv::convert::convert_file;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "csv2tsv",
    about = "Convert a CSV file to TSV, replacing embedded newlines with spaces"
)]
struct Args {
    /// Input CSV path
    #[arg(long, default_value = "./public/latest.csv")]
    input: PathBuf,

    /// Output TSV path
    #[arg(long, default_value = "./public/latest.tsv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // ─── 2) convert ──────────────────────────────────────────────────
    let args = Args::parse();
    info!("converting {} → {}", args.input.display(), args.output.display());

    let start = Instant::now();
    let records = convert_file(&args.input, &args.output).with_context(|| {
        format!(
            "converting {} to {}",
            args.input.display(),
            args.output.display()
        )
    })?;

    info!(records, elapsed = ?start.elapsed(), "done");
    Ok(())
}

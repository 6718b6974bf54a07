//! CLI entry point for seqcalc.
//!
//! Provides one subcommand per calculation. Each reads count-prefixed test
//! cases from a file or standard input and prints one result line per case.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use seqcalc::{
    calculators::{Calculator, MaxProfit, TrimmedMean},
    output::{OutputFormat, ReportWriter},
    runner::run,
};
use std::ffi::OsStr;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter};
use std::path::Path;
use tracing::error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "seqcalc")]
#[command(about = "Per-case statistics over count-prefixed integer streams", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Average of each case after removing every minimum and maximum value
    TrimmedMean(IoArgs),
    /// Best single buy/sell profit for each case of prices
    MaxProfit(IoArgs),
}

#[derive(Args)]
struct IoArgs {
    /// File to read test cases from ("-" for standard input)
    #[arg(short, long, value_name = "FILE", default_value = "-")]
    input: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let _file_guard = init_logging()?;

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::TrimmedMean(args) => execute(&TrimmedMean, &args),
        Commands::MaxProfit(args) => execute(&MaxProfit, &args),
    };

    if let Err(e) = &result {
        error!("Run aborted: {e:#}");
    }
    result
}

/// Colored stderr logging, plus a JSON rolling log file when `LOG_FILE_PATH` is set.
fn init_logging() -> Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let (json_layer, guard) = match std::env::var("LOG_FILE_PATH") {
        Ok(log_file_path) => {
            let log_dir = Path::new(&log_file_path)
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("logs"));
            let log_file_name = Path::new(&log_file_path)
                .file_name()
                .unwrap_or(OsStr::new("seqcalc.log"));

            let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(non_blocking_file)
                .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(guard)
}

fn execute<C: Calculator>(calculator: &C, args: &IoArgs) -> Result<()> {
    let reader = open_input(&args.input)?;
    let mut out = ReportWriter::new(args.format, BufWriter::new(io::stdout().lock()));

    run(calculator, reader, &mut out)?;
    Ok(())
}

/// Opens a local file, or standard input for `-`.
#[tracing::instrument]
fn open_input(source: &str) -> Result<Box<dyn BufRead>> {
    if source == "-" {
        return Ok(Box::new(io::stdin().lock()));
    }
    let file = File::open(source).with_context(|| format!("failed to open {source}"))?;
    Ok(Box::new(BufReader::new(file)))
}

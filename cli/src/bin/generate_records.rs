//! generate-records
//!
//! Write a sample Header + N Data + Trailer stream of 120-byte records.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use record_cli::exit::{self, UsageError};
use record_cli::logging;
use record_cli::sample::{self, DEFAULT_COUNT, DEFAULT_FILE_NAME, LARGE_COUNT};
use record_core::constants::DEFAULT_VERSION;
use record_core::io::{open_output, write_record_set, OutputSink};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "generate-records",
    about = "Write sample fixed-length (120-byte) records to stdout or a file"
)]
struct Args {
    /// Number of data records to generate
    #[arg(short = 'n', long = "num-records", default_value_t = DEFAULT_COUNT, allow_negative_numbers = true)]
    num_records: i64,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// File name stored in the header record
    #[arg(long, default_value = DEFAULT_FILE_NAME)]
    file_name: String,

    /// Version string stored in the header record
    #[arg(long = "version", default_value = DEFAULT_VERSION)]
    record_version: String,

    /// Log level or filter directive (trace, debug, info, warn, error)
    #[arg(short = 'l', long, default_value = logging::DEFAULT_LOG_LEVEL, env = "RUST_LOG")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => return exit::clap_exit(e),
    };
    logging::init(&args.log_level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => exit::report(&e),
    }
}

fn run(args: &Args) -> Result<()> {
    if args.num_records < 1 {
        return Err(UsageError::new("number of data records must be at least 1").into());
    }
    if args.num_records > LARGE_COUNT {
        warn!(count = args.num_records, "generating a large number of records");
    }
    let count = usize::try_from(args.num_records)
        .map_err(|_| UsageError::new(format!("{} data records is too many", args.num_records)))?;

    let set = sample::sample_record_set(&args.file_name, &args.record_version, count, Local::now().naive_local())
        .context("failed to assemble sample records")?;
    let total = set.len();

    let sink = match &args.output {
        Some(path) => OutputSink::File(path.clone()),
        None => OutputSink::Writer(Box::new(io::stdout())),
    };
    let mut out = open_output(sink).context("failed to open output")?;
    let bytes = write_record_set(&mut out, set).context("failed to write records")?;

    info!(records = total, bytes, "records written");
    Ok(())
}

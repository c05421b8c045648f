//! parse-records
//!
//! Decode a stream of 120-byte records and print them.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use record_cli::{display, exit, logging};
use record_core::constants::RECORD_SIZE;
use record_core::io::{open_input, InputSource};
use record_core::reader::{FrameReader, ReaderConfig, Termination};
use record_core::telemetry::RecordCounters;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(
    name = "parse-records",
    version,
    about = "Parse fixed-length (120-byte) records from stdin or a file"
)]
struct Args {
    /// Input file (defaults to stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Also print data record descriptions
    #[arg(short, long)]
    verbose: bool,

    /// Print only the record counts by kind
    #[arg(short, long, conflicts_with = "json")]
    summary: bool,

    /// Print one JSON object per record
    #[arg(long)]
    json: bool,

    /// Treat a short final frame as an error
    #[arg(long)]
    strict: bool,

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
    let source = match &args.input {
        Some(path) => InputSource::File(path.clone()),
        None => InputSource::Reader(Box::new(io::stdin())),
    };
    let input = open_input(source).context("failed to open input")?;

    let config = ReaderConfig { strict_length: args.strict };
    // whole stream first: nothing is printed for a stream that fails
    let outcome = FrameReader::with_config(input, config)
        .read_all()
        .context("failed to parse record stream")?;

    if let Termination::Truncated { bytes_read } = outcome.termination {
        info!(
            records = outcome.records.len(),
            bytes_read, "printing the records before the short frame"
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.summary {
        let counters = RecordCounters::from_records(outcome.records.iter().map(|p| &p.record), RECORD_SIZE);
        display::print_summary(&mut out, &counters)?;
    } else if args.json {
        for positioned in &outcome.records {
            display::print_json(&mut out, positioned)?;
        }
    } else {
        for positioned in &outcome.records {
            display::print_record(&mut out, positioned, args.verbose)?;
        }
    }
    if !args.json {
        writeln!(out)?;
    }
    out.flush()?;

    debug!(records = outcome.records.len(), "parse finished");
    Ok(())
}

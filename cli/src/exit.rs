//! exit.rs
//! Process exit codes and error reporting.
//!
//! | code | meaning                                           |
//! | ---- | ------------------------------------------------- |
//! | 0    | success                                           |
//! | 1    | bad arguments, malformed records, invalid values  |
//! | 2    | I/O failures and anything unexpected              |

use std::process::ExitCode;

use record_core::builder::BuildError;
use record_core::reader::ReaderError;
use record_core::records::RecordError;
use record_core::types::StreamError;
use thiserror::Error;

pub const EXIT_OK: u8 = 0;
pub const EXIT_VALIDATION: u8 = 1;
pub const EXIT_UNEXPECTED: u8 = 2;

/// A command line value the tools refuse to act on.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct UsageError(pub String);

impl UsageError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Walk the error chain and pick the exit code of the first error we know.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    for cause in err.chain() {
        if cause.is::<UsageError>() {
            return EXIT_VALIDATION;
        }
        if let Some(e) = cause.downcast_ref::<StreamError>() {
            return code(e.is_validation());
        }
        if let Some(e) = cause.downcast_ref::<ReaderError>() {
            return code(e.record_error().is_some());
        }
        if cause.is::<RecordError>() || cause.is::<BuildError>() {
            return EXIT_VALIDATION;
        }
        if cause.is::<std::io::Error>() {
            return EXIT_UNEXPECTED;
        }
    }
    EXIT_UNEXPECTED
}

fn code(validation: bool) -> u8 {
    if validation {
        EXIT_VALIDATION
    } else {
        EXIT_UNEXPECTED
    }
}

/// Print the full error chain to stderr and turn it into an exit code.
pub fn report(err: &anyhow::Error) -> ExitCode {
    eprintln!("error: {:#}", err);
    ExitCode::from(exit_code_for(err))
}

/// Argument errors exit with 1. `--help` and `--version` exit with 0.
pub fn clap_exit(err: clap::Error) -> ExitCode {
    let _ = err.print();
    if err.use_stderr() {
        ExitCode::from(EXIT_VALIDATION)
    } else {
        ExitCode::from(EXIT_OK)
    }
}

use std::io;

use thiserror::Error;

use crate::builder::BuildError;
use crate::reader::ReaderError;
use crate::records::RecordError;

/// Unified error for stream-level helpers.
/// - `From<T>` impls enable `?` across builder, codec, reader and IO.
/// - `is_validation` separates bad input from environmental failures.
#[derive(Debug, Error)]
pub enum StreamError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Reader(#[from] ReaderError),

    #[error(transparent)]
    Build(#[from] BuildError),
}

impl StreamError {
    /// True when the input (records, frames, parameters) was at fault rather
    /// than the byte source or sink.
    pub fn is_validation(&self) -> bool {
        match self {
            StreamError::Io(_) => false,
            StreamError::Reader(e) => e.record_error().is_some(),
            StreamError::Record(_) | StreamError::Build(_) => true,
        }
    }
}

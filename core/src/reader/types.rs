//! reader/types.rs
//! Reader states, outcomes and errors.

use std::io;

use serde::Serialize;
use thiserror::Error;

use crate::records::{Record, RecordError};

/// Reader settings fixed at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Treat a short final frame as a `FrameLength` failure instead of
    /// ending in `Truncated`.
    pub strict_length: bool,
}

impl ReaderConfig {
    pub fn strict() -> Self {
        Self { strict_length: true }
    }
}

/// `Reading` is the only non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderState {
    Reading,
    /// Clean end of stream on a frame boundary.
    Done,
    /// Final read returned fewer bytes than one frame.
    Truncated { bytes_read: usize },
    /// A frame or the source failed; nothing more is read.
    Failed,
}

impl ReaderState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ReaderState::Reading)
    }
}

/// A decoded record and its 1-based position in the stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionedRecord {
    pub position: u64,
    #[serde(flatten)]
    pub record: Record,
}

/// How a fully consumed stream ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Complete,
    Truncated { bytes_read: usize },
}

/// Everything a successful read produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOutcome {
    pub records: Vec<PositionedRecord>,
    pub termination: Termination,
}

impl ReadOutcome {
    pub fn is_truncated(&self) -> bool {
        matches!(self.termination, Termination::Truncated { .. })
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records.into_iter().map(|p| p.record).collect()
    }
}

#[derive(Debug, Error)]
pub enum ReaderError {
    #[error("record #{position} is invalid")]
    Record {
        position: u64,
        #[source]
        source: RecordError,
    },

    #[error("I/O error while reading record #{position}")]
    Io {
        position: u64,
        #[source]
        source: io::Error,
    },
}

impl ReaderError {
    /// Position of the frame being read when the error occurred.
    pub fn position(&self) -> u64 {
        match self {
            ReaderError::Record { position, .. } | ReaderError::Io { position, .. } => *position,
        }
    }

    pub fn record_error(&self) -> Option<&RecordError> {
        match self {
            ReaderError::Record { source, .. } => Some(source),
            ReaderError::Io { .. } => None,
        }
    }
}

//! reader/frame_reader.rs
//!
//! State machine over a byte source:
//!
//! ```text
//! Reading --(full frame, decoded)--> Reading
//! Reading --(0 bytes)-------------> Done
//! Reading --(1..len-1 bytes)------> Truncated   (Failed when strict)
//! Reading --(bad frame / io)------> Failed
//! ```
//!
//! There is no skipping and no resynchronisation: the first bad frame ends
//! the stream.

use std::io::{self, Read};

use tracing::{debug, warn};

use crate::reader::types::{
    PositionedRecord, ReadOutcome, ReaderConfig, ReaderError, ReaderState, Termination,
};
use crate::records::{RecordCodecs, RecordError};
use crate::telemetry::RecordCounters;

/// Forward-only reader of fixed-size record frames.
#[derive(Debug)]
pub struct FrameReader<R: Read> {
    inner: R,
    config: ReaderConfig,
    codecs: &'static RecordCodecs,
    frame: Vec<u8>,
    next_position: u64,
    state: ReaderState,
    counters: RecordCounters,
}

impl<R: Read> FrameReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_config(inner, ReaderConfig::default())
    }

    pub fn with_config(inner: R, config: ReaderConfig) -> Self {
        let codecs = RecordCodecs::standard();
        Self {
            inner,
            config,
            codecs,
            frame: vec![0u8; codecs.record_len()],
            next_position: 1,
            state: ReaderState::Reading,
            counters: RecordCounters::default(),
        }
    }

    pub fn state(&self) -> ReaderState {
        self.state
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Counts of records decoded so far.
    pub fn counters(&self) -> &RecordCounters {
        &self.counters
    }

    /// Advance by one frame.
    ///
    /// Returns `Ok(None)` once a terminal state is reached, and keeps doing so.
    pub fn next_record(&mut self) -> Result<Option<PositionedRecord>, ReaderError> {
        if self.state.is_terminal() {
            return Ok(None);
        }
        let position = self.next_position;
        let frame_len = self.frame.len();

        let filled = match fill_frame(&mut self.inner, &mut self.frame) {
            Ok(n) => n,
            Err(source) => {
                self.state = ReaderState::Failed;
                return Err(ReaderError::Io { position, source });
            }
        };

        if filled == 0 {
            debug!(records = position - 1, "record stream complete");
            self.state = ReaderState::Done;
            return Ok(None);
        }

        if filled < frame_len {
            if self.config.strict_length {
                self.state = ReaderState::Failed;
                return Err(ReaderError::Record {
                    position,
                    source: RecordError::FrameLength { expected: frame_len, actual: filled },
                });
            }
            warn!(
                position,
                bytes_read = filled,
                expected = frame_len,
                "record stream ends with a short frame; stopping"
            );
            self.state = ReaderState::Truncated { bytes_read: filled };
            return Ok(None);
        }

        match self.codecs.decode(&self.frame) {
            Ok(record) => {
                debug!(position, kind = %record.kind(), "decoded record");
                self.counters.add(record.kind(), frame_len);
                self.next_position += 1;
                Ok(Some(PositionedRecord { position, record }))
            }
            Err(source) => {
                self.state = ReaderState::Failed;
                Err(ReaderError::Record { position, source })
            }
        }
    }

    /// Drain the source.
    pub fn read_all(mut self) -> Result<ReadOutcome, ReaderError> {
        let mut records = Vec::new();
        while let Some(record) = self.next_record()? {
            records.push(record);
        }

        let termination = match self.state {
            ReaderState::Truncated { bytes_read } => Termination::Truncated { bytes_read },
            _ => Termination::Complete,
        };
        Ok(ReadOutcome { records, termination })
    }
}

impl<R: Read> Iterator for FrameReader<R> {
    type Item = Result<PositionedRecord, ReaderError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

/// Read every frame from `reader` with the default config.
pub fn read_records<R: Read>(reader: R) -> Result<ReadOutcome, ReaderError> {
    FrameReader::new(reader).read_all()
}

/// Fill `buf` unless the source ends first. Returns the bytes read.
fn fill_frame<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

//! io.rs
//! Normalised byte sources/sinks and frame writers.

use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Read, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::builder::RecordSet;
use crate::records::{encode_records, Record, RecordCodecs};
use crate::types::StreamError;

/// Canonical input abstraction
pub enum InputSource {
    Reader(Box<dyn Read + Send>),
    File(PathBuf),
    Memory(Vec<u8>),
}

/// Canonical output abstraction
pub enum OutputSink {
    Writer(Box<dyn Write + Send>),
    File(PathBuf),
}

/// Normalize input source into a boxed reader
pub fn open_input(src: InputSource) -> Result<Box<dyn Read + Send>, StreamError> {
    let reader: Box<dyn Read + Send> = match src {
        InputSource::Reader(r) => r,
        InputSource::File(p) => Box::new(BufReader::new(File::open(p)?)),
        InputSource::Memory(b) => Box::new(Cursor::new(b)),
    };
    Ok(reader)
}

/// Normalize output sink into a boxed writer
pub fn open_output(sink: OutputSink) -> Result<Box<dyn Write + Send>, StreamError> {
    let writer: Box<dyn Write + Send> = match sink {
        OutputSink::Writer(w) => w,
        OutputSink::File(p) => Box::new(BufWriter::new(File::create(p)?)),
    };
    Ok(writer)
}

// ================= Writers =================

/// Encode and write one frame. Returns the bytes written.
pub fn write_record<W: Write>(w: &mut W, record: &Record) -> Result<usize, StreamError> {
    let frame = RecordCodecs::standard().encode(record)?;
    w.write_all(&frame)?;
    Ok(frame.len())
}

/// Encode every record first, then write them in one go.
///
/// A record that fails to encode aborts before anything reaches `w`.
pub fn write_records<'a, W, I>(w: &mut W, records: I) -> Result<usize, StreamError>
where
    W: Write,
    I: IntoIterator<Item = &'a Record>,
{
    let buf = encode_records(records)?;
    w.write_all(&buf)?;
    w.flush()?;
    debug!(bytes = buf.len(), "wrote record frames");
    Ok(buf.len())
}

/// Write a full Header + Data… + Trailer set.
pub fn write_record_set<W: Write>(w: &mut W, set: RecordSet) -> Result<usize, StreamError> {
    let records = set.into_records();
    write_records(w, &records)
}

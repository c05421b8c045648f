//! records/encode.rs
//!
//! Convenience encoders over the built-in codec set.

use crate::records::codec::RecordCodecs;
use crate::records::types::{Record, RecordError};

/// Encode any record into one `RECORD_SIZE`-byte frame.
#[inline]
pub fn encode_record(record: &Record) -> Result<Vec<u8>, RecordError> {
    RecordCodecs::standard().encode(record)
}

/// Encode a sequence of records into one contiguous buffer.
///
/// Fails on the first record that does not encode; no partial buffer is returned.
pub fn encode_records<'a, I>(records: I) -> Result<Vec<u8>, RecordError>
where
    I: IntoIterator<Item = &'a Record>,
{
    let codecs = RecordCodecs::standard();
    let mut out = Vec::new();
    for record in records {
        out.extend_from_slice(&codecs.encode(record)?);
    }
    Ok(out)
}

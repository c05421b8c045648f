//! records/decode.rs
//!
//! Frame-level decoding over the built-in codec set.
//! The codec is always chosen from byte 0 before any field is read.

use crate::records::codec::RecordCodecs;
use crate::records::types::{Record, RecordError, RecordKind};

/// Record kind named by byte 0 of `frame`.
#[inline]
pub fn peek_kind(frame: &[u8]) -> Result<RecordKind, RecordError> {
    match frame.first() {
        Some(&raw) => RecordKind::from_discriminant(raw),
        None => Err(RecordError::FrameLength {
            expected: RecordCodecs::standard().record_len(),
            actual: 0,
        }),
    }
}

/// Decode one full frame, dispatching on its discriminant.
#[inline]
pub fn decode_record(frame: &[u8]) -> Result<Record, RecordError> {
    RecordCodecs::standard().decode(frame)
}

/// Decode `frame` with the codec for `kind`; fails if byte 0 names another kind.
#[inline]
pub fn decode_as(kind: RecordKind, frame: &[u8]) -> Result<Record, RecordError> {
    RecordCodecs::standard().get(kind).decode(frame)
}

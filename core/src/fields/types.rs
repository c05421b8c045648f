//! fields/types.rs
//! Field values, the field codec capability and field-level errors.

use std::fmt;

use thiserror::Error;

use crate::constants::TEXT_PAD;
use crate::utils::fmt_bytes;

/// A single decoded (or to-be-encoded) field value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    U8(u8),
    U32(u32),
    U64(u64),
    Text(String),
}

impl FieldValue {
    /// Short type name used in mismatch errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::U8(_) => "u8",
            FieldValue::U32(_) => "u32",
            FieldValue::U64(_) => "u64",
            FieldValue::Text(_) => "text",
        }
    }
}

impl From<u8> for FieldValue {
    fn from(v: u8) -> Self {
        FieldValue::U8(v)
    }
}

impl From<u32> for FieldValue {
    fn from(v: u32) -> Self {
        FieldValue::U32(v)
    }
}

impl From<u64> for FieldValue {
    fn from(v: u64) -> Self {
        FieldValue::U64(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

/// Capability implemented once per field kind.
///
/// Record codecs hold an ordered list of these and hand each one the exact
/// slice of the frame it owns.
pub trait FieldCodec: fmt::Debug + Send + Sync {
    /// Bytes occupied on the wire.
    fn width(&self) -> usize;

    /// Value type this codec accepts and produces.
    fn value_type(&self) -> &'static str;

    /// Write `value` into `out`, which is exactly `width()` bytes long.
    /// Every byte of `out` is written, padding included.
    fn encode_into(&self, value: &FieldValue, out: &mut [u8]) -> Result<(), FieldError>;

    /// Read a value back from exactly `width()` bytes.
    fn decode(&self, bytes: &[u8]) -> Result<FieldValue, FieldError>;

    /// Allocate a fresh buffer and encode into it.
    fn encode(&self, value: &FieldValue) -> Result<Vec<u8>, FieldError> {
        let mut out = vec![0u8; self.width()];
        self.encode_into(value, &mut out)?;
        Ok(out)
    }

    /// Build the error returned when a value of the wrong type is offered.
    fn type_mismatch(&self, found: &FieldValue) -> FieldError {
        FieldError::TypeMismatch {
            expected: self.value_type(),
            found: found.type_name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// Encoded text is longer than the field capacity.
    #[error("text needs {len} bytes but the field holds {capacity}")]
    TextOverflow { len: usize, capacity: usize },

    /// Text contains characters the legacy encoding cannot represent.
    #[error("text contains characters with no Shift_JIS mapping: {text:?}")]
    UnmappableText { text: String },

    /// ASCII field carries bytes outside 7-bit ASCII.
    #[error("non-ASCII content in ASCII field: {}", fmt_bytes(.bytes))]
    NonAscii { bytes: Vec<u8> },

    /// Integer does not fit the declared width.
    #[error("value {value} does not fit in {width} byte(s)")]
    ValueOutOfRange { value: u64, width: usize },

    /// Integer widths other than 1, 4 and 8.
    #[error("unsupported integer width: {width}")]
    UnsupportedWidth { width: usize },

    /// Input or output slice differs from the field width.
    #[error("field is {expected} bytes wide, got {actual}")]
    WidthMismatch { expected: usize, actual: usize },

    /// A value of the wrong type was offered to a field codec.
    #[error("expected a {expected} value, got {found}")]
    TypeMismatch { expected: &'static str, found: &'static str },
}

#[inline]
pub(crate) fn check_width(expected: usize, actual: usize) -> Result<(), FieldError> {
    if expected != actual {
        return Err(FieldError::WidthMismatch { expected, actual });
    }
    Ok(())
}

/// Strip trailing pad bytes.
#[inline]
pub(crate) fn trim_pad(bytes: &[u8]) -> &[u8] {
    let end = bytes
        .iter()
        .rposition(|&b| b != TEXT_PAD)
        .map_or(0, |i| i + 1);
    &bytes[..end]
}

/// Copy `content` to the front of `out` and pad the rest.
#[inline]
pub(crate) fn put_padded(content: &[u8], out: &mut [u8]) -> Result<(), FieldError> {
    if content.len() > out.len() {
        return Err(FieldError::TextOverflow {
            len: content.len(),
            capacity: out.len(),
        });
    }
    let (head, tail) = out.split_at_mut(content.len());
    head.copy_from_slice(content);
    tail.fill(TEXT_PAD);
    Ok(())
}

//! fields/ascii.rs
//! Fixed-width ASCII text, right-padded with `TEXT_PAD`.

use crate::fields::types::{check_width, put_padded, trim_pad, FieldCodec, FieldError, FieldValue};
use crate::constants::TEXT_PAD;

/// Encode `text` into exactly `width` bytes.
///
/// Fails with `NonAscii` for characters outside 7-bit ASCII and with
/// `TextOverflow` when the text is longer than `width`.
pub fn encode_ascii(width: usize, text: &str) -> Result<Vec<u8>, FieldError> {
    let mut out = vec![TEXT_PAD; width];
    put_ascii(text, &mut out)?;
    Ok(out)
}

/// Decode a `width`-byte ASCII field, dropping trailing pad bytes.
pub fn decode_ascii(width: usize, bytes: &[u8]) -> Result<String, FieldError> {
    check_width(width, bytes.len())?;
    let content = trim_pad(bytes);

    if !content.is_ascii() {
        return Err(FieldError::NonAscii { bytes: content.to_vec() });
    }
    Ok(content.iter().map(|&b| b as char).collect())
}

pub(crate) fn put_ascii(text: &str, out: &mut [u8]) -> Result<(), FieldError> {
    if !text.is_ascii() {
        return Err(FieldError::NonAscii { bytes: text.as_bytes().to_vec() });
    }
    put_padded(text.as_bytes(), out)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsciiField {
    width: usize,
}

impl AsciiField {
    pub const fn new(width: usize) -> Self {
        Self { width }
    }
}

impl FieldCodec for AsciiField {
    fn width(&self) -> usize {
        self.width
    }

    fn value_type(&self) -> &'static str {
        "text"
    }

    fn encode_into(&self, value: &FieldValue, out: &mut [u8]) -> Result<(), FieldError> {
        let FieldValue::Text(text) = value else {
            return Err(self.type_mismatch(value));
        };
        check_width(self.width, out.len())?;
        put_ascii(text, out)
    }

    fn decode(&self, bytes: &[u8]) -> Result<FieldValue, FieldError> {
        decode_ascii(self.width, bytes).map(FieldValue::Text)
    }
}

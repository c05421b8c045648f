//! fields/legacy.rs
//! Fixed-capacity Shift_JIS text fields.
//!
//! Capacity is counted in encoded bytes: ASCII and half-width katakana take
//! one byte, kanji and full-width kana take two.
//!
//! `encoding_rs::SHIFT_JIS` follows the Windows-31J table, which maps six JIS
//! X 0208 cells to different code points. Those are folded on the way in and
//! out so text uses the JIS X 0208 code points (`〜`, `‖`, `−`, `¢`, `£`, `¬`).
//! Text that would not decode back to itself is refused.

use encoding_rs::SHIFT_JIS;

use crate::fields::types::{check_width, put_padded, trim_pad, FieldCodec, FieldError, FieldValue};
use crate::constants::TEXT_PAD;

/// Encode `text` as Shift_JIS, zero-padded to exactly `capacity` bytes.
///
/// Nothing is produced on failure; there is no truncated write.
pub fn encode_legacy(capacity: usize, text: &str) -> Result<Vec<u8>, FieldError> {
    let mut out = vec![TEXT_PAD; capacity];
    put_legacy(text, &mut out)?;
    Ok(out)
}

/// Decode at most `capacity` bytes of Shift_JIS text.
///
/// Trailing zeros are stripped first. Byte sequences that do not form a
/// Shift_JIS character are dropped, so this never fails.
pub fn decode_legacy(capacity: usize, bytes: &[u8]) -> String {
    let field = &bytes[..capacity.min(bytes.len())];
    decode_sjis(trim_pad(field))
}

pub(crate) fn put_legacy(text: &str, out: &mut [u8]) -> Result<(), FieldError> {
    let folded: String = text.chars().map(to_windows_31j).collect();
    let (encoded, _, had_errors) = SHIFT_JIS.encode(&folded);
    // e.g. `～` and `¥` encode, but come back as `〜` and `\`
    if had_errors || decode_sjis(&encoded) != text {
        return Err(FieldError::UnmappableText { text: text.to_owned() });
    }
    put_padded(&encoded, out)
}

/// (JIS X 0208, Windows-31J) code points sharing one Shift_JIS cell.
const JIS_VARIANTS: [(char, char); 6] = [
    ('\u{301C}', '\u{FF5E}'), // 〜 wave dash
    ('\u{2016}', '\u{2225}'), // ‖ double vertical line
    ('\u{2212}', '\u{FF0D}'), // − minus sign
    ('\u{00A2}', '\u{FFE0}'), // ¢
    ('\u{00A3}', '\u{FFE1}'), // £
    ('\u{00AC}', '\u{FFE2}'), // ¬
];

fn to_windows_31j(c: char) -> char {
    JIS_VARIANTS.iter().find(|(jis, _)| *jis == c).map_or(c, |&(_, win)| win)
}

fn to_jis(c: char) -> char {
    JIS_VARIANTS.iter().find(|(_, win)| *win == c).map_or(c, |&(jis, _)| jis)
}

fn decode_sjis(bytes: &[u8]) -> String {
    let (text, _had_errors) = SHIFT_JIS.decode_without_bom_handling(bytes);
    text.chars()
        .filter(|&c| c != char::REPLACEMENT_CHARACTER)
        .map(to_jis)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyTextField {
    capacity: usize,
}

impl LegacyTextField {
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }
}

impl FieldCodec for LegacyTextField {
    fn width(&self) -> usize {
        self.capacity
    }

    fn value_type(&self) -> &'static str {
        "text"
    }

    fn encode_into(&self, value: &FieldValue, out: &mut [u8]) -> Result<(), FieldError> {
        let FieldValue::Text(text) = value else {
            return Err(self.type_mismatch(value));
        };
        check_width(self.capacity, out.len())?;
        put_legacy(text, out)
    }

    fn decode(&self, bytes: &[u8]) -> Result<FieldValue, FieldError> {
        check_width(self.capacity, bytes.len())?;
        Ok(FieldValue::Text(decode_legacy(self.capacity, bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kanji_take_two_bytes() {
        let wire = encode_legacy(10, "田中").unwrap();
        assert_eq!(&wire[..4], &[0x93, 0x63, 0x92, 0x86]);
        assert!(wire[4..].iter().all(|&b| b == 0));
    }

    #[test]
    fn variants_fold_to_jis_cells() {
        assert_eq!(to_windows_31j('〜'), '～');
        assert_eq!(to_jis('～'), '〜');
        assert_eq!(to_jis('田'), '田');
    }

    #[test]
    fn decode_ignores_bytes_past_capacity() {
        let mut wire = encode_legacy(4, "AB").unwrap();
        wire.extend_from_slice(b"CD");
        assert_eq!(decode_legacy(4, &wire), "AB");
    }
}

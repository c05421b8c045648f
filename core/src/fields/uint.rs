//! fields/uint.rs
//! Little-endian unsigned integer fields.

use byteorder::{ByteOrder, LittleEndian};
use num_enum::TryFromPrimitive;

use crate::fields::types::{check_width, FieldCodec, FieldError, FieldValue};

/// Supported integer widths (in bytes).
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum UintWidth {
    U8  = 1,
    U32 = 4,
    U64 = 8,
}

impl UintWidth {
    pub fn from_len(width: usize) -> Result<Self, FieldError> {
        u8::try_from(width)
            .ok()
            .and_then(|w| UintWidth::try_from(w).ok())
            .ok_or(FieldError::UnsupportedWidth { width })
    }

    #[inline(always)]
    pub const fn len(self) -> usize {
        self as usize
    }

    #[inline(always)]
    pub const fn max_value(self) -> u64 {
        match self {
            UintWidth::U8 => u8::MAX as u64,
            UintWidth::U32 => u32::MAX as u64,
            UintWidth::U64 => u64::MAX,
        }
    }
}

/// Encode `value` as a `width`-byte little-endian integer.
pub fn encode_uint(width: usize, value: u64) -> Result<Vec<u8>, FieldError> {
    let w = UintWidth::from_len(width)?;
    let mut out = vec![0u8; w.len()];
    put_uint(w, value, &mut out)?;
    Ok(out)
}

/// Decode a `width`-byte little-endian integer.
pub fn decode_uint(width: usize, bytes: &[u8]) -> Result<u64, FieldError> {
    let w = UintWidth::from_len(width)?;
    check_width(w.len(), bytes.len())?;

    let v = match w {
        UintWidth::U8 => bytes[0] as u64,
        UintWidth::U32 => LittleEndian::read_u32(bytes) as u64,
        UintWidth::U64 => LittleEndian::read_u64(bytes),
    };
    Ok(v)
}

pub(crate) fn put_uint(width: UintWidth, value: u64, out: &mut [u8]) -> Result<(), FieldError> {
    if value > width.max_value() {
        return Err(FieldError::ValueOutOfRange { value, width: width.len() });
    }
    check_width(width.len(), out.len())?;

    match width {
        UintWidth::U8 => out[0] = value as u8,
        UintWidth::U32 => LittleEndian::write_u32(out, value as u32),
        UintWidth::U64 => LittleEndian::write_u64(out, value),
    }
    Ok(())
}

/// Integer field codec. The value variant must match the width
/// (`U8` ↔ 1 byte, `U32` ↔ 4 bytes, `U64` ↔ 8 bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UintField {
    width: UintWidth,
}

impl UintField {
    pub const fn new(width: UintWidth) -> Self {
        Self { width }
    }

    pub const fn u8() -> Self {
        Self::new(UintWidth::U8)
    }

    pub const fn u32() -> Self {
        Self::new(UintWidth::U32)
    }

    pub const fn u64() -> Self {
        Self::new(UintWidth::U64)
    }
}

impl FieldCodec for UintField {
    fn width(&self) -> usize {
        self.width.len()
    }

    fn value_type(&self) -> &'static str {
        match self.width {
            UintWidth::U8 => "u8",
            UintWidth::U32 => "u32",
            UintWidth::U64 => "u64",
        }
    }

    fn encode_into(&self, value: &FieldValue, out: &mut [u8]) -> Result<(), FieldError> {
        let raw = match (self.width, value) {
            (UintWidth::U8, FieldValue::U8(v)) => *v as u64,
            (UintWidth::U32, FieldValue::U32(v)) => *v as u64,
            (UintWidth::U64, FieldValue::U64(v)) => *v,
            _ => return Err(self.type_mismatch(value)),
        };
        put_uint(self.width, raw, out)
    }

    fn decode(&self, bytes: &[u8]) -> Result<FieldValue, FieldError> {
        let raw = decode_uint(self.width.len(), bytes)?;
        // decode_uint never yields more than the width allows
        let value = match self.width {
            UintWidth::U8 => FieldValue::U8(raw as u8),
            UintWidth::U32 => FieldValue::U32(raw as u32),
            UintWidth::U64 => FieldValue::U64(raw),
        };
        Ok(value)
    }
}

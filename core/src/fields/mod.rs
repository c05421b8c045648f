//! Fixed-width field codecs.
//!
//! Responsibilities:
//! - Little-endian unsigned integers (1, 4 and 8 bytes)
//! - Fixed-width ASCII text, right-padded with `TEXT_PAD`
//! - Fixed-capacity Shift_JIS text, right-padded with zeros
//!
//! Non-responsibilities:
//! - Record layout and discriminants
//! - IO

pub mod types;
pub mod uint;
pub mod ascii;
pub mod legacy;

pub use types::{FieldCodec, FieldError, FieldValue};
pub use uint::{UintField, UintWidth, encode_uint, decode_uint};
pub use ascii::{AsciiField, encode_ascii, decode_ascii};
pub use legacy::{LegacyTextField, encode_legacy, decode_legacy};

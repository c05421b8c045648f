//! Fixed-length record codecs.
//!
//! Responsibilities:
//! - Define Header / Data / Trailer logical values
//! - Encode records into exactly `RECORD_SIZE` bytes
//! - Decode frames with strict discriminant checks
//!
//! Non-responsibilities:
//! - IO
//! - Stream-level truncation handling (see `reader`)

pub mod types;
pub mod codec;
pub mod encode;
pub mod decode;

pub use types::{
    DataRecord,
    HeaderRecord,
    Record,
    RecordError,
    RecordKind,
    Status,
    TrailerRecord,
};
pub use codec::{FieldSpec, RecordCodec, RecordCodecs};
pub use encode::*;
pub use decode::*;

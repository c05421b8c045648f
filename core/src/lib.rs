//! record-core
//!
//! Fixed-length (120-byte) Header / Data / Trailer record codec and
//! streaming frame reader.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Codec layers
pub mod fields;
pub mod records;

// Stream layers
pub mod builder;
pub mod io;
pub mod reader;
pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::builder::{DataEntry, RecordBuilder, RecordSet};
    pub use crate::constants::RECORD_SIZE;
    pub use crate::reader::{FrameReader, PositionedRecord, ReadOutcome, ReaderConfig, ReaderError, Termination};
    pub use crate::records::{
        decode_record, encode_record, DataRecord, HeaderRecord, Record, RecordCodec, RecordCodecs,
        RecordError, RecordKind, TrailerRecord,
    };
    pub use crate::types::StreamError;
}

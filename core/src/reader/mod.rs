//! Streaming frame reader.
//!
//! Responsibilities:
//! - Pull fixed-size frames from a byte source
//! - Dispatch each frame by discriminant and decode it
//! - Report how the stream ended (complete, truncated, failed)
//!
//! Non-responsibilities:
//! - Field layout (see `records`)
//! - Opening files or pipes (see `io`)

pub mod types;
pub mod frame_reader;

pub use types::{
    PositionedRecord,
    ReadOutcome,
    ReaderConfig,
    ReaderError,
    ReaderState,
    Termination,
};
pub use frame_reader::{FrameReader, read_records};

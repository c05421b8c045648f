//! telemetry/mod.rs
//! Per-kind record counters collected while a stream is read.
//!
//! Counters are plain values owned by one reader; merge them to combine
//! independent streams.

pub mod counters;

pub use counters::*;

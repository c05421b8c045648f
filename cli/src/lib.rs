//! record-cli
//!
//! Shared plumbing for the `generate-records` and `parse-records` binaries.

pub mod display;
pub mod exit;
pub mod logging;
pub mod sample;

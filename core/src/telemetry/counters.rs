//! telemetry/counters.rs
//! Mutable counters used while reading a record stream.

use std::ops::AddAssign;

use serde::Serialize;

use crate::records::{Record, RecordKind};

/// Deterministic counters collected during stream processing.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RecordCounters {
    pub header: u64,
    pub data: u64,
    pub trailer: u64,
    /// Bytes of fully decoded frames.
    pub bytes: u64,
}

impl RecordCounters {
    /// Count one frame of `kind` that was `frame_len` bytes long.
    pub fn add(&mut self, kind: RecordKind, frame_len: usize) {
        match kind {
            RecordKind::Header => self.header += 1,
            RecordKind::Data => self.data += 1,
            RecordKind::Trailer => self.trailer += 1,
        }
        self.bytes += frame_len as u64;
    }

    pub fn get(&self, kind: RecordKind) -> u64 {
        match kind {
            RecordKind::Header => self.header,
            RecordKind::Data => self.data,
            RecordKind::Trailer => self.trailer,
        }
    }

    /// Total records of every kind.
    pub fn total(&self) -> u64 {
        self.header + self.data + self.trailer
    }

    /// Count an already-decoded sequence.
    pub fn from_records<'a, I>(records: I, frame_len: usize) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut counters = Self::default();
        for record in records {
            counters.add(record.kind(), frame_len);
        }
        counters
    }

    pub fn merge(&mut self, other: &RecordCounters) {
        self.header += other.header;
        self.data += other.data;
        self.trailer += other.trailer;
        self.bytes += other.bytes;
    }
}

impl AddAssign for RecordCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_by_kind() {
        let mut c = RecordCounters::default();
        c.add(RecordKind::Header, 120);
        c.add(RecordKind::Data, 120);
        c.add(RecordKind::Data, 120);
        c.add(RecordKind::Trailer, 120);

        assert_eq!(c.get(RecordKind::Data), 2);
        assert_eq!(c.total(), 4);
        assert_eq!(c.bytes, 480);

        let mut sum = RecordCounters::default();
        sum += c;
        sum += c;
        assert_eq!(sum.header, 2);
        assert_eq!(sum.total(), 8);
    }
}

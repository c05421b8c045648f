//! builder.rs
//! Assemble a Header + Data… + Trailer record set from business values.
//!
//! The trailer checksum is the sum of the data record ids 1..=N. It carries
//! no integrity guarantee over the encoded bytes.

use thiserror::Error;

use crate::constants::DEFAULT_VERSION;
use crate::records::{DataRecord, HeaderRecord, Record, TrailerRecord};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("{count} does not fit in the 32-bit {field} field")]
    CountOverflow { field: &'static str, count: u64 },

    #[error("checksum over {count} data records does not fit in 32 bits")]
    ChecksumOverflow { count: u64 },
}

/// One data record before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataEntry {
    pub name: String,
    pub value: u32,
    pub status: u8,
    pub timestamp: String,
    pub description: String,
}

impl DataEntry {
    pub fn new(name: impl Into<String>, value: u32, status: u8, timestamp: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value,
            status,
            timestamp: timestamp.into(),
            description: String::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A complete stream worth of records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSet {
    pub header: HeaderRecord,
    pub data: Vec<DataRecord>,
    pub trailer: TrailerRecord,
}

impl RecordSet {
    /// Header + data + trailer.
    pub fn len(&self) -> usize {
        self.data.len() + 2
    }

    /// Records in stream order.
    pub fn into_records(self) -> Vec<Record> {
        let mut out = Vec::with_capacity(self.len());
        out.push(Record::Header(self.header));
        out.extend(self.data.into_iter().map(Record::Data));
        out.push(Record::Trailer(self.trailer));
        out
    }
}

#[derive(Debug, Clone)]
pub struct RecordBuilder {
    file_name: String,
    version: String,
    creation_date: String,
    creation_time: String,
    entries: Vec<DataEntry>,
}

impl RecordBuilder {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            version: DEFAULT_VERSION.to_owned(),
            creation_date: String::new(),
            creation_time: String::new(),
            entries: Vec::new(),
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// `date` is YYYYMMDD, `time` is HHMMSS.
    pub fn created_at(mut self, date: impl Into<String>, time: impl Into<String>) -> Self {
        self.creation_date = date.into();
        self.creation_time = time.into();
        self
    }

    pub fn entry(mut self, entry: DataEntry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn entries<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = DataEntry>,
    {
        self.entries.extend(entries);
        self
    }

    /// Assign ids 1..=N, total the values, and derive header and trailer.
    pub fn build(self) -> Result<RecordSet, BuildError> {
        let count = self.entries.len() as u64;
        let data_record_count = to_u32("data_record_count", count)?;
        let total_records = to_u32("total_records", count + 2)?;
        let checksum = sequence_checksum(count)?;

        let mut total_value_sum = 0u64;
        let mut data = Vec::with_capacity(self.entries.len());
        for (record_id, entry) in (1u32..).zip(self.entries) {
            total_value_sum += u64::from(entry.value);
            data.push(DataRecord {
                record_id,
                name: entry.name,
                value: entry.value,
                status: entry.status,
                timestamp: entry.timestamp,
                description: entry.description,
            });
        }

        Ok(RecordSet {
            header: HeaderRecord {
                file_name: self.file_name,
                creation_date: self.creation_date,
                creation_time: self.creation_time,
                total_records,
                version: self.version,
            },
            data,
            trailer: TrailerRecord {
                data_record_count,
                total_value_sum,
                checksum,
            },
        })
    }
}

/// Sum of 1..=count, as stored in the trailer.
pub fn sequence_checksum(count: u64) -> Result<u32, BuildError> {
    count
        .checked_mul(count + 1)
        .map(|n| n / 2)
        .and_then(|sum| u32::try_from(sum).ok())
        .ok_or(BuildError::ChecksumOverflow { count })
}

fn to_u32(field: &'static str, count: u64) -> Result<u32, BuildError> {
    u32::try_from(count).map_err(|_| BuildError::CountOverflow { field, count })
}

//! records/types.rs
//! Logical record values, record kinds and record-level errors.
//!
//! Notes:
//! - One struct per record kind; `Record` tags them by discriminant.
//! - Text fields hold decoded Unicode; byte capacities are enforced at encode time.
//! - `DataRecord::status` keeps the raw byte so unknown values survive a round trip.

use std::fmt;

use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::discriminants;
use crate::fields::{FieldError, FieldValue};
use crate::utils::enum_name_or_hex;

/// Record kinds, valued by their discriminant byte.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Header  = discriminants::HEADER,
    Data    = discriminants::DATA,
    Trailer = discriminants::TRAILER,
}

impl RecordKind {
    pub const ALL: [RecordKind; 3] = [RecordKind::Header, RecordKind::Data, RecordKind::Trailer];

    #[inline(always)]
    pub const fn discriminant(self) -> u8 {
        self as u8
    }

    pub fn from_discriminant(raw: u8) -> Result<Self, RecordError> {
        RecordKind::try_from(raw).map_err(|_| RecordError::UnknownDiscriminant { raw })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            RecordKind::Header => "HEADER",
            RecordKind::Data => "DATA",
            RecordKind::Trailer => "TRAILER",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed view of `DataRecord::status`.
#[repr(u8)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum Status {
    Invalid = 0,
    Valid   = 1,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderRecord {
    pub file_name: String,
    /// YYYYMMDD
    pub creation_date: String,
    /// HHMMSS
    pub creation_time: String,
    pub total_records: u32,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataRecord {
    pub record_id: u32,
    pub name: String,
    pub value: u32,
    pub status: u8,
    /// YYYYMMDDHHmmss
    pub timestamp: String,
    pub description: String,
}

impl DataRecord {
    /// `None` when the raw status byte is neither 0 nor 1.
    pub fn status_kind(&self) -> Option<Status> {
        Status::try_from(self.status).ok()
    }

    pub fn is_valid(&self) -> bool {
        self.status_kind() == Some(Status::Valid)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailerRecord {
    pub data_record_count: u32,
    pub total_value_sum: u64,
    pub checksum: u32,
}

/// One decoded frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Record {
    Header(HeaderRecord),
    Data(DataRecord),
    Trailer(TrailerRecord),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Header(_) => RecordKind::Header,
            Record::Data(_) => RecordKind::Data,
            Record::Trailer(_) => RecordKind::Trailer,
        }
    }

    pub fn as_header(&self) -> Option<&HeaderRecord> {
        match self {
            Record::Header(h) => Some(h),
            _ => None,
        }
    }

    pub fn as_data(&self) -> Option<&DataRecord> {
        match self {
            Record::Data(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_trailer(&self) -> Option<&TrailerRecord> {
        match self {
            Record::Trailer(t) => Some(t),
            _ => None,
        }
    }

    /// Payload values in wire order (discriminant and reserved tail excluded).
    pub fn field_values(&self) -> Vec<FieldValue> {
        match self {
            Record::Header(h) => vec![
                h.file_name.as_str().into(),
                h.creation_date.as_str().into(),
                h.creation_time.as_str().into(),
                h.total_records.into(),
                h.version.as_str().into(),
            ],
            Record::Data(d) => vec![
                d.record_id.into(),
                d.name.as_str().into(),
                d.value.into(),
                d.status.into(),
                d.timestamp.as_str().into(),
                d.description.as_str().into(),
            ],
            Record::Trailer(t) => vec![
                t.data_record_count.into(),
                t.total_value_sum.into(),
                t.checksum.into(),
            ],
        }
    }

    /// Rebuild a record from decoded `(field name, value)` pairs in wire order.
    pub fn from_fields(
        kind: RecordKind,
        fields: Vec<(&'static str, FieldValue)>,
    ) -> Result<Self, RecordError> {
        let record = match kind {
            RecordKind::Header => {
                let mut c = FieldCursor::new(kind, fields, 5)?;
                Record::Header(HeaderRecord {
                    file_name: c.text()?,
                    creation_date: c.text()?,
                    creation_time: c.text()?,
                    total_records: c.u32()?,
                    version: c.text()?,
                })
            }
            RecordKind::Data => {
                let mut c = FieldCursor::new(kind, fields, 6)?;
                Record::Data(DataRecord {
                    record_id: c.u32()?,
                    name: c.text()?,
                    value: c.u32()?,
                    status: c.u8()?,
                    timestamp: c.text()?,
                    description: c.text()?,
                })
            }
            RecordKind::Trailer => {
                let mut c = FieldCursor::new(kind, fields, 3)?;
                Record::Trailer(TrailerRecord {
                    data_record_count: c.u32()?,
                    total_value_sum: c.u64()?,
                    checksum: c.u32()?,
                })
            }
        };
        Ok(record)
    }
}

impl From<HeaderRecord> for Record {
    fn from(h: HeaderRecord) -> Self {
        Record::Header(h)
    }
}

impl From<DataRecord> for Record {
    fn from(d: DataRecord) -> Self {
        Record::Data(d)
    }
}

impl From<TrailerRecord> for Record {
    fn from(t: TrailerRecord) -> Self {
        Record::Trailer(t)
    }
}

/// Pulls typed values out of decoded field pairs, in order.
struct FieldCursor {
    kind: RecordKind,
    expected: usize,
    fields: std::vec::IntoIter<(&'static str, FieldValue)>,
}

impl FieldCursor {
    fn new(
        kind: RecordKind,
        fields: Vec<(&'static str, FieldValue)>,
        expected: usize,
    ) -> Result<Self, RecordError> {
        if fields.len() != expected {
            return Err(RecordError::FieldCount { kind, expected, actual: fields.len() });
        }
        Ok(Self { kind, expected, fields: fields.into_iter() })
    }

    fn next(&mut self) -> Result<(&'static str, FieldValue), RecordError> {
        let (kind, expected) = (self.kind, self.expected);
        self.fields.next().ok_or_else(|| RecordError::FieldCount {
            kind,
            expected,
            actual: expected - 1,
        })
    }

    fn mismatch(&self, field: &'static str, expected: &'static str, found: &FieldValue) -> RecordError {
        RecordError::FieldDecode {
            kind: self.kind,
            field,
            source: FieldError::TypeMismatch { expected, found: found.type_name() },
        }
    }

    fn u8(&mut self) -> Result<u8, RecordError> {
        match self.next()? {
            (_, FieldValue::U8(v)) => Ok(v),
            (field, other) => Err(self.mismatch(field, "u8", &other)),
        }
    }

    fn u32(&mut self) -> Result<u32, RecordError> {
        match self.next()? {
            (_, FieldValue::U32(v)) => Ok(v),
            (field, other) => Err(self.mismatch(field, "u32", &other)),
        }
    }

    fn u64(&mut self) -> Result<u64, RecordError> {
        match self.next()? {
            (_, FieldValue::U64(v)) => Ok(v),
            (field, other) => Err(self.mismatch(field, "u64", &other)),
        }
    }

    fn text(&mut self) -> Result<String, RecordError> {
        match self.next()? {
            (_, FieldValue::Text(v)) => Ok(v),
            (field, other) => Err(self.mismatch(field, "text", &other)),
        }
    }
}

#[derive(Debug, Error)]
pub enum RecordError {
    /// Frame is not exactly one record long.
    #[error("frame length mismatch: expected {expected} bytes, got {actual}")]
    FrameLength { expected: usize, actual: usize },

    /// Byte 0 names no known record kind.
    #[error("unknown record discriminant: 0x{raw:02x}")]
    UnknownDiscriminant { raw: u8 },

    /// Codec applied to a frame of another kind.
    #[error("{kind} codec expects discriminant {expected}, frame starts with {}",
        describe_discriminant(.actual))]
    MismatchedDiscriminant { kind: RecordKind, expected: u8, actual: u8 },

    /// Codec asked to encode a record of another kind.
    #[error("{codec} codec cannot encode a {record} record")]
    MismatchedKind { codec: RecordKind, record: RecordKind },

    #[error("failed to encode {kind}.{field}")]
    FieldEncode {
        kind: RecordKind,
        field: &'static str,
        #[source]
        source: FieldError,
    },

    #[error("failed to decode {kind}.{field}")]
    FieldDecode {
        kind: RecordKind,
        field: &'static str,
        #[source]
        source: FieldError,
    },

    /// Value list does not line up with the codec's field list.
    #[error("{kind} record has {expected} fields, got {actual}")]
    FieldCount { kind: RecordKind, expected: usize, actual: usize },

    /// Field widths do not fit in the record length.
    #[error("{kind} layout needs {needed} bytes but records are {record_len} bytes")]
    LayoutOverflow { kind: RecordKind, needed: usize, record_len: usize },
}

fn describe_discriminant(raw: &u8) -> String {
    enum_name_or_hex::<RecordKind>(*raw)
}

impl RecordError {
    /// Field-level cause, when there is one.
    pub fn field_error(&self) -> Option<&FieldError> {
        match self {
            RecordError::FieldEncode { source, .. } | RecordError::FieldDecode { source, .. } => Some(source),
            _ => None,
        }
    }

    /// Name of the failing field, when there is one.
    pub fn field_name(&self) -> Option<&'static str> {
        match self {
            RecordError::FieldEncode { field, .. } | RecordError::FieldDecode { field, .. } => Some(field),
            _ => None,
        }
    }
}

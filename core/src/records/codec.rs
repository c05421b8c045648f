//! records/codec.rs
//! Per-kind record codecs and the codec set used for dispatch.
//!
//! Layout of every frame:
//!
//! ```text
//! [ discriminant (1) ]
//! [ fields, in declared order ]
//! [ reserved, zero-filled up to record_len ]
//! ```

use std::sync::OnceLock;

use crate::constants::{data_layout, header_layout, RECORD_SIZE, RESERVED_FILL};
use crate::fields::{AsciiField, FieldCodec, FieldValue, LegacyTextField, UintField};
use crate::records::types::{Record, RecordError, RecordKind};

/// A named field slot in a record layout.
#[derive(Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub codec: Box<dyn FieldCodec>,
}

impl FieldSpec {
    pub fn new(name: &'static str, codec: impl FieldCodec + 'static) -> Self {
        Self { name, codec: Box::new(codec) }
    }
}

/// Codec for one record kind.
#[derive(Debug)]
pub struct RecordCodec {
    kind: RecordKind,
    record_len: usize,
    fields: Vec<FieldSpec>,
}

impl RecordCodec {
    /// Build a codec, checking that the discriminant and fields fit in `record_len`.
    pub fn new(kind: RecordKind, record_len: usize, fields: Vec<FieldSpec>) -> Result<Self, RecordError> {
        let needed = 1 + fields.iter().map(|f| f.codec.width()).sum::<usize>();
        if needed > record_len {
            return Err(RecordError::LayoutOverflow { kind, needed, record_len });
        }
        Ok(Self { kind, record_len, fields })
    }

    /// Built-in layouts always fit; see `constants` tests.
    fn fixed(kind: RecordKind, fields: Vec<FieldSpec>) -> Self {
        let codec = Self { kind, record_len: RECORD_SIZE, fields };
        debug_assert!(codec.payload_len() <= RECORD_SIZE);
        codec
    }

    pub fn header() -> Self {
        use header_layout as l;
        Self::fixed(RecordKind::Header, vec![
            FieldSpec::new("file_name", LegacyTextField::new(l::FILE_NAME)),
            FieldSpec::new("creation_date", AsciiField::new(l::CREATION_DATE)),
            FieldSpec::new("creation_time", AsciiField::new(l::CREATION_TIME)),
            FieldSpec::new("total_records", UintField::u32()),
            FieldSpec::new("version", AsciiField::new(l::VERSION)),
        ])
    }

    pub fn data() -> Self {
        use data_layout as l;
        Self::fixed(RecordKind::Data, vec![
            FieldSpec::new("record_id", UintField::u32()),
            FieldSpec::new("name", LegacyTextField::new(l::NAME)),
            FieldSpec::new("value", UintField::u32()),
            FieldSpec::new("status", UintField::u8()),
            FieldSpec::new("timestamp", AsciiField::new(l::TIMESTAMP)),
            FieldSpec::new("description", LegacyTextField::new(l::DESCRIPTION)),
        ])
    }

    pub fn trailer() -> Self {
        Self::fixed(RecordKind::Trailer, vec![
            FieldSpec::new("data_record_count", UintField::u32()),
            FieldSpec::new("total_value_sum", UintField::u64()),
            FieldSpec::new("checksum", UintField::u32()),
        ])
    }

    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    pub fn discriminant(&self) -> u8 {
        self.kind.discriminant()
    }

    pub fn record_len(&self) -> usize {
        self.record_len
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Discriminant plus declared fields.
    pub fn payload_len(&self) -> usize {
        1 + self.fields.iter().map(|f| f.codec.width()).sum::<usize>()
    }

    /// Bytes left for the reserved tail.
    pub fn reserved_len(&self) -> usize {
        self.record_len - self.payload_len()
    }

    /// Encode a record of this codec's kind into exactly `record_len` bytes.
    pub fn encode(&self, record: &Record) -> Result<Vec<u8>, RecordError> {
        if record.kind() != self.kind {
            return Err(RecordError::MismatchedKind { codec: self.kind, record: record.kind() });
        }
        self.encode_values(&record.field_values())
    }

    /// Encode raw field values in declared order.
    ///
    /// The whole frame is built in a local buffer; nothing is returned unless
    /// every field encodes.
    pub fn encode_values(&self, values: &[FieldValue]) -> Result<Vec<u8>, RecordError> {
        if values.len() != self.fields.len() {
            return Err(RecordError::FieldCount {
                kind: self.kind,
                expected: self.fields.len(),
                actual: values.len(),
            });
        }

        let mut out = vec![RESERVED_FILL; self.record_len];
        out[0] = self.discriminant();

        let mut off = 1usize;
        for (spec, value) in self.fields.iter().zip(values) {
            let end = off + spec.codec.width();
            spec.codec
                .encode_into(value, &mut out[off..end])
                .map_err(|source| RecordError::FieldEncode { kind: self.kind, field: spec.name, source })?;
            off = end;
        }

        debug_assert_eq!(off, self.payload_len());
        Ok(out)
    }

    /// Decode one frame of this codec's kind.
    pub fn decode(&self, frame: &[u8]) -> Result<Record, RecordError> {
        let fields = self.decode_values(frame)?;
        Record::from_fields(self.kind, fields)
    }

    /// Decode a frame into `(field name, value)` pairs. The reserved tail is not read.
    pub fn decode_values(&self, frame: &[u8]) -> Result<Vec<(&'static str, FieldValue)>, RecordError> {
        if frame.len() != self.record_len {
            return Err(RecordError::FrameLength { expected: self.record_len, actual: frame.len() });
        }
        if frame[0] != self.discriminant() {
            return Err(RecordError::MismatchedDiscriminant {
                kind: self.kind,
                expected: self.discriminant(),
                actual: frame[0],
            });
        }

        let mut values = Vec::with_capacity(self.fields.len());
        let mut off = 1usize;
        for spec in &self.fields {
            let end = off + spec.codec.width();
            let value = spec.codec
                .decode(&frame[off..end])
                .map_err(|source| RecordError::FieldDecode { kind: self.kind, field: spec.name, source })?;
            values.push((spec.name, value));
            off = end;
        }
        Ok(values)
    }
}

/// Header, Data and Trailer codecs, selected by discriminant.
#[derive(Debug)]
pub struct RecordCodecs {
    header: RecordCodec,
    data: RecordCodec,
    trailer: RecordCodec,
}

impl Default for RecordCodecs {
    fn default() -> Self {
        Self {
            header: RecordCodec::header(),
            data: RecordCodec::data(),
            trailer: RecordCodec::trailer(),
        }
    }
}

impl RecordCodecs {
    /// Shared, immutable instance of the built-in layouts.
    pub fn standard() -> &'static RecordCodecs {
        static CODECS: OnceLock<RecordCodecs> = OnceLock::new();
        CODECS.get_or_init(RecordCodecs::default)
    }

    /// Frame length shared by all three codecs.
    pub fn record_len(&self) -> usize {
        self.header.record_len()
    }

    pub fn get(&self, kind: RecordKind) -> &RecordCodec {
        match kind {
            RecordKind::Header => &self.header,
            RecordKind::Data => &self.data,
            RecordKind::Trailer => &self.trailer,
        }
    }

    pub fn for_discriminant(&self, raw: u8) -> Result<&RecordCodec, RecordError> {
        RecordKind::from_discriminant(raw).map(|kind| self.get(kind))
    }

    pub fn encode(&self, record: &Record) -> Result<Vec<u8>, RecordError> {
        self.get(record.kind()).encode(record)
    }

    /// Select the codec from byte 0, then decode.
    pub fn decode(&self, frame: &[u8]) -> Result<Record, RecordError> {
        let Some(&first) = frame.first() else {
            return Err(RecordError::FrameLength { expected: self.record_len(), actual: 0 });
        };
        self.for_discriminant(first)?.decode(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::trailer_layout;

    #[test]
    fn reserved_tails_match_wire_table() {
        assert_eq!(RecordCodec::header().reserved_len(), header_layout::RESERVED);
        assert_eq!(RecordCodec::data().reserved_len(), data_layout::RESERVED);
        assert_eq!(RecordCodec::trailer().reserved_len(), trailer_layout::RESERVED);
    }

    #[test]
    fn layout_overflow_is_rejected() {
        let err = RecordCodec::new(
            RecordKind::Trailer,
            8,
            vec![FieldSpec::new("a", UintField::u64())],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            RecordError::LayoutOverflow { kind: RecordKind::Trailer, needed: 9, record_len: 8 }
        ));
    }

    #[test]
    fn field_count_is_checked_on_encode() {
        let err = RecordCodec::trailer().encode_values(&[FieldValue::U32(1)]).unwrap_err();
        assert!(matches!(err, RecordError::FieldCount { expected: 3, actual: 1, .. }));
    }
}

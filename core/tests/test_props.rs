// Property-based tests: round trip and fixed length over generated records.

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use proptest::prelude::*;
    use record_core::constants::RECORD_SIZE;
    use record_core::reader::{read_records, Termination};
    use record_core::records::{
        decode_record, encode_record, encode_records, DataRecord, HeaderRecord, Record, TrailerRecord,
    };

    const LEGACY_CHARS: &[char] = &[
        'a', 'b', 'z', 'A', 'Z', '0', '9', ' ', '-', '_', '.',
        '田', '中', '太', '郎', '佐', '藤', '花', '子', '通', '常', '処', '理',
        'ア', 'イ', 'あ', 'い', 'ー',
        '〜', '‖', '−', '¢', '£', '¬',
    ];

    /// At most `max_chars` characters; every one is at most 2 bytes in Shift_JIS.
    fn legacy_text(max_chars: usize) -> impl Strategy<Value = String> {
        proptest::collection::vec(proptest::sample::select(LEGACY_CHARS), 0..=max_chars)
            .prop_map(|chars| chars.into_iter().collect())
    }

    fn header() -> impl Strategy<Value = HeaderRecord> {
        (legacy_text(15), "[0-9]{8}", "[0-9]{6}", any::<u32>(), "[0-9a-z.]{0,10}").prop_map(
            |(file_name, creation_date, creation_time, total_records, version)| HeaderRecord {
                file_name,
                creation_date,
                creation_time,
                total_records,
                version,
            },
        )
    }

    fn data() -> impl Strategy<Value = DataRecord> {
        (any::<u32>(), legacy_text(25), any::<u32>(), 0u8..=1, "[0-9]{14}", legacy_text(20)).prop_map(
            |(record_id, name, value, status, timestamp, description)| DataRecord {
                record_id,
                name,
                value,
                status,
                timestamp,
                description,
            },
        )
    }

    fn trailer() -> impl Strategy<Value = TrailerRecord> {
        (any::<u32>(), any::<u64>(), any::<u32>()).prop_map(
            |(data_record_count, total_value_sum, checksum)| TrailerRecord {
                data_record_count,
                total_value_sum,
                checksum,
            },
        )
    }

    fn record() -> impl Strategy<Value = Record> {
        prop_oneof![
            header().prop_map(Record::Header),
            data().prop_map(Record::Data),
            trailer().prop_map(Record::Trailer),
        ]
    }

    proptest! {
        #[test]
        fn encoded_records_round_trip(record in record()) {
            let wire = encode_record(&record).unwrap();
            prop_assert_eq!(wire.len(), RECORD_SIZE);
            prop_assert_eq!(wire[0], record.kind().discriminant());
            prop_assert_eq!(decode_record(&wire).unwrap(), record);
        }

        #[test]
        fn streams_decode_in_order(
            header in header(),
            body in proptest::collection::vec(data(), 0..8),
            trailer in trailer(),
        ) {
            let mut records = vec![Record::Header(header)];
            records.extend(body.into_iter().map(Record::Data));
            records.push(Record::Trailer(trailer));

            let wire = encode_records(&records).unwrap();
            prop_assert_eq!(wire.len(), RECORD_SIZE * records.len());

            let outcome = read_records(Cursor::new(wire)).unwrap();
            prop_assert_eq!(outcome.termination, Termination::Complete);
            prop_assert_eq!(outcome.into_records(), records);
        }

        #[test]
        fn any_short_tail_truncates(cut in 1usize..RECORD_SIZE, body in proptest::collection::vec(data(), 1..4)) {
            let records: Vec<Record> = body.into_iter().map(Record::Data).collect();
            let mut wire = encode_records(&records).unwrap();
            wire.truncate(wire.len() - cut);

            let outcome = read_records(Cursor::new(wire)).unwrap();
            prop_assert_eq!(outcome.termination, Termination::Truncated { bytes_read: RECORD_SIZE - cut });
            prop_assert_eq!(outcome.records.len(), records.len() - 1);
        }
    }
}

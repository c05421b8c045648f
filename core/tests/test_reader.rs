// Frame reader tests:
// * stream composition and 1-based positions
// * clean end, truncation, strict length
// * fail-fast on unknown discriminants and bad fields
// * short reads, interrupted reads and source errors

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor, Read};

    use record_core::builder::{DataEntry, RecordBuilder};
    use record_core::constants::RECORD_SIZE;
    use record_core::reader::{
        read_records, FrameReader, ReaderConfig, ReaderError, ReaderState, Termination,
    };
    use record_core::records::{encode_records, Record, RecordError, RecordKind};

    fn sample_stream(n: usize) -> (Vec<Record>, Vec<u8>) {
        let entries = (1..=n).map(|i| {
            DataEntry::new(format!("利用者{i}"), i as u32 * 1000, (i % 2) as u8, "20240101120000")
                .description("通常処理")
        });
        let records = RecordBuilder::new("sample_data.bin")
            .created_at("20240101", "120000")
            .entries(entries)
            .build()
            .unwrap()
            .into_records();
        let wire = encode_records(&records).unwrap();
        (records, wire)
    }

    /// Hands out at most `chunk` bytes per read call.
    struct ChunkedReader {
        inner: Cursor<Vec<u8>>,
        chunk: usize,
    }

    impl Read for ChunkedReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = buf.len().min(self.chunk);
            self.inner.read(&mut buf[..n])
        }
    }

    /// Fails every other call with `Interrupted`.
    struct InterruptingReader {
        inner: Cursor<Vec<u8>>,
        interrupt_next: bool,
    }

    impl Read for InterruptingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt_next = !self.interrupt_next;
            if self.interrupt_next {
                return Err(io::Error::new(io::ErrorKind::Interrupted, "again"));
            }
            self.inner.read(buf)
        }
    }

    /// Serves `good` bytes, then fails.
    struct FailingReader {
        inner: Cursor<Vec<u8>>,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.inner.read(buf)? {
                0 => Err(io::Error::new(io::ErrorKind::BrokenPipe, "source closed")),
                n => Ok(n),
            }
        }
    }

// # ✅ 1. Header + N data + trailer decode in order

    #[test]
    fn stream_composition_preserves_order_and_positions() {
        let (records, wire) = sample_stream(5);
        assert_eq!(wire.len(), RECORD_SIZE * 7);

        let outcome = read_records(Cursor::new(wire)).unwrap();
        assert_eq!(outcome.termination, Termination::Complete);
        assert_eq!(outcome.records.len(), 7);

        for (i, positioned) in outcome.records.iter().enumerate() {
            assert_eq!(positioned.position, i as u64 + 1);
            assert_eq!(positioned.record, records[i]);
        }
        assert_eq!(outcome.records[0].record.kind(), RecordKind::Header);
        assert_eq!(outcome.records[6].record.kind(), RecordKind::Trailer);
    }

    #[test]
    fn empty_source_is_done_immediately() {
        let mut reader = FrameReader::new(Cursor::new(Vec::new()));
        assert!(reader.next_record().unwrap().is_none());
        assert_eq!(reader.state(), ReaderState::Done);
        assert_eq!(reader.counters().total(), 0);
    }

// # ✅ 2. Short final frame ends in Truncated

    #[test]
    fn one_byte_short_yields_truncated() {
        let n = 4;
        let (records, mut wire) = sample_stream(n);
        wire.pop();
        assert_eq!(wire.len(), RECORD_SIZE * (n + 2) - 1);

        let outcome = read_records(Cursor::new(wire)).unwrap();
        assert!(outcome.is_truncated());
        assert_eq!(outcome.termination, Termination::Truncated { bytes_read: RECORD_SIZE - 1 });
        assert_eq!(outcome.records.len(), n + 1);
        assert_eq!(outcome.into_records(), records[..n + 1].to_vec());
    }

    #[test]
    fn truncated_state_is_sticky() {
        let mut reader = FrameReader::new(Cursor::new(vec![1u8; 10]));
        assert!(reader.next_record().unwrap().is_none());
        assert_eq!(reader.state(), ReaderState::Truncated { bytes_read: 10 });
        assert!(reader.next_record().unwrap().is_none());
        assert_eq!(reader.state(), ReaderState::Truncated { bytes_read: 10 });
    }

    #[test]
    fn strict_mode_turns_truncation_into_an_error() {
        let (_, mut wire) = sample_stream(1);
        wire.truncate(RECORD_SIZE + 50);

        let mut reader = FrameReader::with_config(Cursor::new(wire), ReaderConfig::strict());
        assert!(reader.next_record().unwrap().is_some());

        let err = reader.next_record().unwrap_err();
        assert_eq!(err.position(), 2);
        assert!(matches!(
            err.record_error(),
            Some(RecordError::FrameLength { expected: 120, actual: 50 })
        ));
        assert_eq!(reader.state(), ReaderState::Failed);
    }

// # ❌ 3. Unknown discriminant fails fast

    #[test]
    fn unknown_discriminant_stops_the_stream() {
        let (_, mut wire) = sample_stream(3);
        wire[RECORD_SIZE * 2] = 5; // third frame

        let mut reader = FrameReader::new(Cursor::new(wire));
        assert!(reader.next_record().unwrap().is_some());
        assert!(reader.next_record().unwrap().is_some());

        let err = reader.next_record().unwrap_err();
        assert_eq!(err.position(), 3);
        assert!(matches!(
            err,
            ReaderError::Record { position: 3, source: RecordError::UnknownDiscriminant { raw: 5 } }
        ));

        // no skipping past the bad frame
        assert_eq!(reader.state(), ReaderState::Failed);
        assert!(reader.next_record().unwrap().is_none());
        assert_eq!(reader.counters().total(), 2);
    }

    #[test]
    fn read_all_propagates_the_first_failure() {
        let (_, mut wire) = sample_stream(2);
        wire[0] = 5;

        let err = read_records(Cursor::new(wire)).unwrap_err();
        assert_eq!(err.position(), 1);
    }

    #[test]
    fn field_failure_is_fatal() {
        let (_, mut wire) = sample_stream(2);
        // timestamp of the first data record (frame 2) gets a non-ASCII byte
        wire[RECORD_SIZE + 60] = 0x99;

        let err = read_records(Cursor::new(wire)).unwrap_err();
        assert_eq!(err.position(), 2);
        assert!(matches!(
            err.record_error(),
            Some(RecordError::FieldDecode { kind: RecordKind::Data, field: "timestamp", .. })
        ));
    }

// # ✅ 4. Short and interrupted reads still assemble whole frames

    #[test]
    fn short_reads_are_reassembled() {
        let (records, wire) = sample_stream(3);
        for chunk in [1, 7, 119, 121] {
            let source = ChunkedReader { inner: Cursor::new(wire.clone()), chunk };
            let outcome = FrameReader::new(source).read_all().unwrap();
            assert_eq!(outcome.termination, Termination::Complete);
            assert_eq!(outcome.into_records(), records);
        }
    }

    #[test]
    fn interrupted_reads_are_retried() {
        let (records, wire) = sample_stream(2);
        let source = InterruptingReader { inner: Cursor::new(wire), interrupt_next: false };
        let outcome = FrameReader::new(source).read_all().unwrap();
        assert_eq!(outcome.into_records(), records);
    }

// # ❌ 5. Source errors are reported as I/O failures

    #[test]
    fn source_errors_fail_the_reader() {
        let (_, wire) = sample_stream(1);
        let source = FailingReader { inner: Cursor::new(wire[..RECORD_SIZE].to_vec()) };

        let mut reader = FrameReader::new(source);
        assert!(reader.next_record().unwrap().is_some());

        let err = reader.next_record().unwrap_err();
        match err {
            ReaderError::Io { position, source } => {
                assert_eq!(position, 2);
                assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(reader.state(), ReaderState::Failed);
    }

// # ✅ 6. Iterator view and counters

    #[test]
    fn iterator_yields_records_then_stops() {
        let (_, wire) = sample_stream(4);
        let mut reader = FrameReader::new(Cursor::new(wire));

        let positions: Vec<u64> = reader
            .by_ref()
            .map(|r| r.unwrap().position)
            .collect();
        assert_eq!(positions, vec![1, 2, 3, 4, 5, 6]);

        let counters = reader.counters();
        assert_eq!(counters.header, 1);
        assert_eq!(counters.data, 4);
        assert_eq!(counters.trailer, 1);
        assert_eq!(counters.bytes, 6 * RECORD_SIZE as u64);
        assert_eq!(reader.state(), ReaderState::Done);
    }

    #[test]
    fn iterator_surfaces_errors_once() {
        let (_, mut wire) = sample_stream(1);
        wire[RECORD_SIZE] = 0x7F;

        let results: Vec<_> = FrameReader::new(Cursor::new(wire)).collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }

// # ✅ 7. Independent readers share nothing

    #[test]
    fn readers_run_on_separate_threads() {
        let handles: Vec<_> = (1..=4)
            .map(|n| {
                std::thread::spawn(move || {
                    let (_, wire) = sample_stream(n);
                    read_records(Cursor::new(wire)).unwrap().records.len()
                })
            })
            .collect();

        let lens: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(lens, vec![3, 4, 5, 6]);
    }
}

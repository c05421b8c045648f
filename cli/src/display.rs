//! display.rs
//! Human-readable and JSON renderings of decoded records.

use std::io::{self, Write};

use record_core::reader::PositionedRecord;
use record_core::records::{DataRecord, HeaderRecord, Record, Status, TrailerRecord};
use record_core::telemetry::RecordCounters;

const RULE_WIDTH: usize = 60;

/// One record as a framed block of `label: value` lines.
pub fn print_record<W: Write>(w: &mut W, positioned: &PositionedRecord, verbose: bool) -> io::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(w)?;
    writeln!(w, "{rule}")?;
    writeln!(w, "Record #{} [{}]", positioned.position, positioned.record.kind())?;
    writeln!(w, "{rule}")?;

    match &positioned.record {
        Record::Header(h) => print_header(w, h),
        Record::Data(d) => print_data(w, d, verbose),
        Record::Trailer(t) => print_trailer(w, t),
    }
}

fn print_header<W: Write>(w: &mut W, h: &HeaderRecord) -> io::Result<()> {
    writeln!(w, "  File name: {}", h.file_name)?;
    writeln!(w, "  Created: {} {}", h.creation_date, h.creation_time)?;
    writeln!(w, "  Total records: {}", h.total_records)?;
    writeln!(w, "  Version: {}", h.version)
}

fn print_data<W: Write>(w: &mut W, d: &DataRecord, verbose: bool) -> io::Result<()> {
    writeln!(w, "  Record ID: {}", d.record_id)?;
    writeln!(w, "  Name: {}", d.name)?;
    writeln!(w, "  Value: {}", d.value)?;
    writeln!(w, "  Status: {}", status_label(d))?;
    writeln!(w, "  Timestamp: {}", d.timestamp)?;
    if verbose {
        writeln!(w, "  Description: {}", d.description)?;
    }
    Ok(())
}

fn print_trailer<W: Write>(w: &mut W, t: &TrailerRecord) -> io::Result<()> {
    writeln!(w, "  Data records: {}", t.data_record_count)?;
    writeln!(w, "  Value sum: {}", t.total_value_sum)?;
    writeln!(w, "  Checksum: {}", t.checksum)
}

fn status_label(d: &DataRecord) -> String {
    match d.status_kind() {
        Some(Status::Valid) => "valid".to_owned(),
        Some(Status::Invalid) => "invalid".to_owned(),
        None => format!("invalid (raw {})", d.status),
    }
}

/// Record counts by kind.
pub fn print_summary<W: Write>(w: &mut W, counters: &RecordCounters) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "Total records: {}", counters.total())?;
    writeln!(w, "  Header records: {}", counters.header)?;
    writeln!(w, "  Data records: {}", counters.data)?;
    writeln!(w, "  Trailer records: {}", counters.trailer)
}

/// One JSON object per line: `{"position":1,"kind":"header",...}`.
pub fn print_json<W: Write>(w: &mut W, positioned: &PositionedRecord) -> io::Result<()> {
    serde_json::to_writer(&mut *w, positioned)?;
    writeln!(w)
}

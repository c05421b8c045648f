//! sample.rs
//! Deterministic sample content for `generate-records`.

use chrono::NaiveDateTime;
use record_core::builder::{BuildError, DataEntry, RecordBuilder, RecordSet};

pub const SAMPLE_NAMES: [&str; 15] = [
    "田中太郎", "佐藤花子", "鈴木一郎", "高橋次郎", "伊藤美咲",
    "渡辺健太", "山本由美", "中村陽子", "小林大輔", "加藤愛",
    "吉田智子", "山田孝之", "佐々木真", "松本優子", "井上誠",
];

pub const SAMPLE_DESCRIPTIONS: [&str; 5] = ["通常処理", "特別処理", "優先処理", "定期処理", "緊急処理"];

pub const DEFAULT_FILE_NAME: &str = "sample_data.bin";
pub const DEFAULT_COUNT: i64 = 10;
/// Above this many data records the generator warns before writing.
pub const LARGE_COUNT: i64 = 1000;

const DATE_FORMAT: &str = "%Y%m%d";
const TIME_FORMAT: &str = "%H%M%S";
const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Data entry `i` (0-based). Every third entry, starting with the first, is invalid.
pub fn sample_entry(i: usize, timestamp: &str) -> DataEntry {
    let value = (i as u32 + 1).wrapping_mul(1000);
    let status = if i % 3 != 0 { 1 } else { 0 };
    DataEntry::new(SAMPLE_NAMES[i % SAMPLE_NAMES.len()], value, status, timestamp)
        .description(SAMPLE_DESCRIPTIONS[i % SAMPLE_DESCRIPTIONS.len()])
}

/// Header + `count` sample entries + trailer, all stamped with `now`.
pub fn sample_record_set(
    file_name: &str,
    version: &str,
    count: usize,
    now: NaiveDateTime,
) -> Result<RecordSet, BuildError> {
    let timestamp = now.format(TIMESTAMP_FORMAT).to_string();
    RecordBuilder::new(file_name)
        .version(version)
        .created_at(now.format(DATE_FORMAT).to_string(), now.format(TIME_FORMAT).to_string())
        .entries((0..count).map(|i| sample_entry(i, &timestamp)))
        .build()
}

//! constants.rs
//! Wire-level constants shared by the field codecs, record codecs and reader.
//!
//! All multi-byte integers on the wire are little-endian.

/// Every encoded record occupies exactly this many bytes.
pub const RECORD_SIZE: usize = 120;

/// Pad byte for fixed-width ASCII and Shift_JIS text fields.
pub const TEXT_PAD: u8 = 0x00;

/// Reserved regions are always written as this byte.
pub const RESERVED_FILL: u8 = 0x00;

/// Version text written into headers when the caller does not pick one.
pub const DEFAULT_VERSION: &str = "1.0";

/// Discriminant bytes (offset 0 of every frame).
pub mod discriminants {
    pub const HEADER: u8 = 1;
    pub const DATA: u8 = 2;
    pub const TRAILER: u8 = 8;
}

/// Header field widths in bytes.
pub mod header_layout {
    pub const FILE_NAME: usize = 30;
    pub const CREATION_DATE: usize = 8;
    pub const CREATION_TIME: usize = 6;
    pub const TOTAL_RECORDS: usize = 4;
    pub const VERSION: usize = 10;
    pub const RESERVED: usize = 61;
}

/// Data field widths in bytes.
pub mod data_layout {
    pub const RECORD_ID: usize = 4;
    pub const NAME: usize = 50;
    pub const VALUE: usize = 4;
    pub const STATUS: usize = 1;
    pub const TIMESTAMP: usize = 14;
    pub const DESCRIPTION: usize = 40;
    pub const RESERVED: usize = 6;
}

/// Trailer field widths in bytes.
pub mod trailer_layout {
    pub const DATA_RECORD_COUNT: usize = 4;
    pub const TOTAL_VALUE_SUM: usize = 8;
    pub const CHECKSUM: usize = 4;
    pub const RESERVED: usize = 103;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layouts_fill_the_record_exactly() {
        use header_layout as h;
        use data_layout as d;
        use trailer_layout as t;

        let header = 1 + h::FILE_NAME + h::CREATION_DATE + h::CREATION_TIME
            + h::TOTAL_RECORDS + h::VERSION + h::RESERVED;
        let data = 1 + d::RECORD_ID + d::NAME + d::VALUE + d::STATUS
            + d::TIMESTAMP + d::DESCRIPTION + d::RESERVED;
        let trailer = 1 + t::DATA_RECORD_COUNT + t::TOTAL_VALUE_SUM + t::CHECKSUM + t::RESERVED;

        assert_eq!(header, RECORD_SIZE);
        assert_eq!(data, RECORD_SIZE);
        assert_eq!(trailer, RECORD_SIZE);
    }
}

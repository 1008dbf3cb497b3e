//! Booking core: pure extraction of booking records from report markup.
mod exclusions;
mod extract;
mod record;

pub use exclusions::{ExclusionList, DEFAULT_EXCLUDE_PHRASES};
pub use extract::{
    parse_row, BookingExtractor, Extraction, ExtractionStats, RecordExtractor, RowOutcome,
    DEFAULT_TABLE_CLASS,
};
pub use record::{BookingRecord, COLUMN_HEADERS};

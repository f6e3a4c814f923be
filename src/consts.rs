use time::{macros::datetime, OffsetDateTime};

/// Seconds between the QuickTime epoch (1904-01-01)
/// and the Unix epoch (1970-01-01).
pub const APPLE_EPOCH_ADJUSTMENT: i64 = 2_082_844_800;

/// Atom header size in bytes (32-bit size + FourCC).
pub const HEADER_SIZE: u64 = 8;

/// File extensions scanned by default (lowercase, no dot).
pub const EXTENSIONS: [&str; 2] = ["mov", "mp4"];

/// Default file name prefix for renamed files.
pub const DEFAULT_PREFIX: &str = "VID";

/// Default date format for renamed files, e.g. `20230731`.
pub const DEFAULT_DATE_FORMAT: &str = "[year][month][day]";

/// Separates prefix, date, and the preserved suffix in file names.
pub const NAME_SEPARATOR: char = '_';

/// Time zero for QuickTime containers. Midnight January 1, 1904 UTC.
pub fn mov_time_zero() -> OffsetDateTime {
    datetime!(1904-01-01 0:00 UTC)
}

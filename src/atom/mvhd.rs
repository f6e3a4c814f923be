//! Movie header atom (`mvhd`), leading fields only.
//!
//! Location: `moov/mvhd`
//!
//! See: <https://developer.apple.com/documentation/quicktime-file-format/movie_header_atom>

use binrw::BinRead;
use time::{Duration, OffsetDateTime};

use crate::consts::APPLE_EPOCH_ADJUSTMENT;

/// First 8 bytes of the movie header atom (`mvhd`) data load.
///
/// Only the 32-bit layout is read. For version 1 headers
/// `creation_time` holds the upper half of a 64-bit value.
#[derive(Debug, BinRead)]
#[br(big)]
pub struct MvhdPrefix {
    pub version: u8,
    pub flags: [u8; 3],
    /// Seconds since midnight, 1904-01-01 UTC
    pub creation_time: u32,
}

impl MvhdPrefix {
    /// Creation time as seconds since the Unix epoch.
    /// Not range checked, zero yields a date in 1904.
    pub fn unix_creation_time(&self) -> i64 {
        self.creation_time as i64 - APPLE_EPOCH_ADJUSTMENT
    }

    /// Creation time as UTC datetime.
    pub fn creation_time(&self) -> OffsetDateTime {
        OffsetDateTime::UNIX_EPOCH + Duration::seconds(self.unix_creation_time())
    }
}

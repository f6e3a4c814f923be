use log::warn;
use time::UtcOffset;

/// Single-byte chars from bytes, collected as `String`.
/// Maps 0-255 to `char`, exceeding ascii, since
/// some devices use ISO8859-1 in FourCC.
pub(crate) fn latin1_string(bytes: &[u8]) -> String {
    bytes.iter()
        .map(|b| *b as char)
        .collect()
}

/// Local UTC offset, falling back to UTC.
///
/// Must be called before any other threads are spawned,
/// otherwise the offset can not be determined on most
/// unix systems.
pub fn local_offset() -> UtcOffset {
    match UtcOffset::current_local_offset() {
        Ok(offset) => offset,
        Err(err) => {
            warn!("Could not determine local UTC offset, using UTC: {err}");
            UtcOffset::UTC
        }
    }
}

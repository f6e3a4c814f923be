//! Derives new file names from creation time.
//!
//! The original name is replaced, except for the text
//! after the last `_`, which usually holds a camera's
//! running clip number:
//!
//! ```ignore
//! IMG_1234.MOV          -> VID_20230731_1234.MOV
//! DJI_20230731_0056.MP4 -> VID_20230731_0056.MP4
//! clip.mov              -> VID_20230731_clip.mov
//! ```

use std::path::{Path, PathBuf};

use log::debug;
use time::{
    format_description::{self, OwnedFormatItem},
    macros::format_description,
    OffsetDateTime,
};

use crate::{
    consts::{DEFAULT_PREFIX, NAME_SEPARATOR},
    StampError,
};

/// Prefix and date format for new file names.
#[derive(Debug, Clone)]
pub struct NamingScheme {
    prefix: String,
    /// Parsed `time` format description, e.g. `[year][month][day]`.
    date_format: OwnedFormatItem,
}

impl Default for NamingScheme {
    /// Prefix `VID`, date format `[year][month][day]`
    /// (`consts::DEFAULT_DATE_FORMAT`).
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_owned(),
            date_format: OwnedFormatItem::from(format_description!(version = 2, "[year][month][day]")),
        }
    }
}

impl NamingScheme {
    /// Parses `date_format` (format description version 2) up front,
    /// so that formatting only fails for individual dates.
    pub fn new(prefix: &str, date_format: &str) -> Result<Self, StampError> {
        let date_format = format_description::parse_owned::<2>(date_format)
            .map_err(|err| StampError::InvalidDateFormat(err.to_string()))?;
        Ok(Self {
            prefix: prefix.to_owned(),
            date_format,
        })
    }

    /// Returns the text following the last `_` in `name`,
    /// or all of `name` if there is no `_`.
    pub fn suffix(name: &str) -> &str {
        name.rsplit(NAME_SEPARATOR)
            .next()
            .unwrap_or(name)
    }

    /// New file name for `original` (file name only, no directory).
    pub fn file_name(&self, original: &str, created: OffsetDateTime) -> Result<String, StampError> {
        let date = created.format(&self.date_format)?;
        Ok(format!(
            "{prefix}{sep}{date}{sep}{suffix}",
            prefix = self.prefix,
            sep = NAME_SEPARATOR,
            suffix = Self::suffix(original)
        ))
    }

    /// Plans renaming `path` within its directory.
    pub fn plan(&self, path: &Path, created: OffsetDateTime) -> Result<Rename, StampError> {
        let original = path.file_name()
            .ok_or_else(|| StampError::NoFileName(path.to_owned()))?
            .to_string_lossy();
        let name = self.file_name(&original, created)?;
        let rename = Rename {
            from: path.to_owned(),
            to: path.with_file_name(name),
        };
        debug!("Planned {rename:?}");
        Ok(rename)
    }
}

/// Single planned rename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub from: PathBuf,
    pub to: PathBuf,
}

impl Rename {
    /// `true` if the file already has the new name.
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }

    /// Renames file. Existing files are never replaced.
    pub fn apply(&self) -> Result<(), StampError> {
        if self.is_noop() {
            return Ok(());
        }
        if self.to.exists() {
            return Err(StampError::TargetExists(self.to.to_owned()));
        }
        std::fs::rename(&self.from, &self.to)
            .map_err(|err| StampError::Rename{
                from: self.from.to_owned(),
                to: self.to.to_owned(),
                err
            })
    }
}

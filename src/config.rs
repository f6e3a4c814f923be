use std::path::{Path, PathBuf};

use time::UtcOffset;

use crate::{consts::EXTENSIONS, support::local_offset, Descent, NamingScheme, Scanner};

/// Settings for a run over a file or directory.
#[derive(Debug, Clone)]
pub struct Config {
    /// File or directory to process.
    pub root: PathBuf,
    /// Lowercase extensions without leading dot.
    pub extensions: Vec<String>,
    pub naming: NamingScheme,
    pub descent: Descent,
    /// Only report planned renames.
    pub dry_run: bool,
    /// UTC offset for dates in new file names.
    /// Resolve before spawning threads, see `support::local_offset()`.
    pub offset: UtcOffset,
}

impl Config {
    /// Default settings for `root`, with dates in local time.
    ///
    /// The local UTC offset is resolved here, so call this
    /// before spawning threads. Set `offset` to `UtcOffset::UTC`
    /// for dates in UTC.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_owned(),
            extensions: EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            naming: NamingScheme::default(),
            descent: Descent::default(),
            dry_run: false,
            offset: local_offset(),
        }
    }

    pub fn scanner(&self) -> Scanner {
        Scanner::new(self.descent, self.offset)
    }
}

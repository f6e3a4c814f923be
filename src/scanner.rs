//! Creation time extraction for QuickTime (MOV) and MP4 files.
//!
//! The creation time is stored in the movie header atom (`mvhd`),
//! located inside the movie atom (`moov`):
//!
//! ```ignore
//! ftyp
//! free        (any number of top-level atoms, any order)
//! moov
//!  └─ mvhd    [version: u8][flags: 3 bytes][creation time: u32] ...
//! ```
//!
//! Atoms are self-describing and there is no index,
//! so `moov` can only be located by skipping atoms
//! one by one from the start of the file.
//!
//! ```no_run
//! use movstamp::Scanner;
//! use std::path::Path;
//!
//! fn main() -> Result<(), movstamp::StampError> {
//!     let created = Scanner::default().creation_time_at(Path::new("VIDEO.MOV"))?;
//!     println!("{created}");
//!     Ok(())
//! }
//! ```

use std::{
    fs::File,
    io::{BufReader, Read, Seek},
    path::Path,
};

use binrw::BinReaderExt;
use log::debug;
use time::{OffsetDateTime, UtcOffset};

use crate::{
    support::local_offset,
    AtomHeader,
    AtomHeaders,
    FormatError,
    FourCC,
    MvhdPrefix,
    StampError,
};

/// How to locate `mvhd` inside `moov`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Descent {
    /// Only inspect the first child of `moov`,
    /// where `mvhd` is located in practically all files.
    /// Any other first child fails the scan.
    #[default]
    FirstChild,
    /// Inspect all direct children of `moov`
    /// until `mvhd`, `cmov`, or `rmra` is found.
    Children,
}

/// Extracts the creation time from MOV/MP4 streams.
#[derive(Debug, Clone, Copy)]
pub struct Scanner {
    descent: Descent,
    /// Offset creation times are returned in.
    offset: UtcOffset,
}

impl Default for Scanner {
    /// `Descent::FirstChild`, local UTC offset.
    fn default() -> Self {
        Self::new(Descent::default(), local_offset())
    }
}

impl Scanner {
    pub fn new(descent: Descent, offset: UtcOffset) -> Self {
        Self { descent, offset }
    }

    /// Returns the creation time stored in the `mvhd` atom,
    /// with the scanner's UTC offset.
    ///
    /// `reader` must be positioned at the start of the file.
    /// The position is advanced and not restored, also on error.
    pub fn creation_time<R: Read + Seek>(
        &self,
        reader: &mut R
    ) -> Result<OffsetDateTime, FormatError> {
        let moov = AtomHeaders::new(reader)
            .find_name(&FourCC::Moov)?
            .ok_or(FormatError::HeaderNotFound)?;

        let mvhd = match self.descent {
            Descent::FirstChild => Self::first_child(reader)?,
            Descent::Children => Self::children(reader, &moov)?,
        };

        debug!("mvhd v{} creation time: {}", mvhd.version, mvhd.creation_time);

        Ok(mvhd.creation_time().to_offset(self.offset))
    }

    /// Opens file at `path` and returns its creation time.
    /// The file is closed before returning.
    pub fn creation_time_at(&self, path: &Path) -> Result<OffsetDateTime, StampError> {
        let file = File::open(path)
            .map_err(|err| StampError::Open{path: path.to_owned(), err})?;
        let mut reader = BufReader::new(file);
        self.creation_time(&mut reader)
            .map_err(|err| StampError::Format{path: path.to_owned(), err})
    }

    /// Reader must be at the data load of `moov`.
    fn first_child<R: Read + Seek>(reader: &mut R) -> Result<MvhdPrefix, FormatError> {
        let child = AtomHeader::read(reader)?;
        Self::dispatch(reader, &child)?
            .ok_or(FormatError::HeaderNotFound)
    }

    /// Reader must be at the data load of `moov`.
    fn children<R: Read + Seek>(
        reader: &mut R,
        moov: &AtomHeader
    ) -> Result<MvhdPrefix, FormatError> {
        let end = moov.offset_next_abs()?;
        let mut children = AtomHeaders::bounded(reader, end);
        while let Some(child) = children.next() {
            let child = child?;
            if let Some(mvhd) = Self::dispatch(children.reader(), &child)? {
                return Ok(mvhd);
            }
        }
        Err(FormatError::HeaderNotFound)
    }

    /// Returns `Ok(None)` for atoms other than
    /// `mvhd`, `cmov`, and `rmra`.
    fn dispatch<R: Read + Seek>(
        reader: &mut R,
        child: &AtomHeader
    ) -> Result<Option<MvhdPrefix>, FormatError> {
        match child.name() {
            FourCC::Mvhd => Ok(Some(reader.read_be::<MvhdPrefix>()?)),
            FourCC::Cmov => Err(FormatError::Compressed),
            FourCC::Rmra => Err(FormatError::ReferenceMovie),
            _ => Ok(None),
        }
    }
}

/// Returns the creation time with the local UTC offset,
/// inspecting only the first child of `moov`.
pub fn creation_time<R: Read + Seek>(reader: &mut R) -> Result<OffsetDateTime, FormatError> {
    Scanner::default().creation_time(reader)
}

use std::io::{ErrorKind, Read, Seek, SeekFrom};

use log::debug;

use crate::{consts::HEADER_SIZE, AtomHeader, FormatError};

/// Iterator over sibling atom headers,
/// starting at the current position of `reader`.
///
/// The reader is left at the data load of the last
/// yielded atom, so that a caller that found what it
/// was looking for can continue reading from there.
/// The data load is skipped when the next header is requested.
///
/// With an upper bound (e.g. the data load of `moov`)
/// iteration ends when the bound is reached. Without one,
/// iteration only ends on a failed read, which is yielded
/// as `FormatError::Truncated`. After an error, the
/// iterator is exhausted.
#[derive(Debug)]
pub struct AtomHeaders<'a, R> {
    reader: &'a mut R,
    /// Absolute, exclusive upper bound.
    end: Option<u64>,
    /// Last yielded header, its data load
    /// is skipped on the next call.
    previous: Option<AtomHeader>,
    done: bool,
}

impl<'a, R: Read + Seek> AtomHeaders<'a, R> {
    /// Headers from current position until the stream ends.
    pub fn new(reader: &'a mut R) -> Self {
        Self {
            reader,
            end: None,
            previous: None,
            done: false,
        }
    }

    /// Headers from current position until absolute offset `end`.
    pub fn bounded(reader: &'a mut R, end: u64) -> Self {
        Self {
            end: Some(end),
            ..Self::new(reader)
        }
    }

    /// Underlying reader. Reading from it is only
    /// valid before requesting the next header.
    pub fn reader(&mut self) -> &mut R {
        self.reader
    }

    fn skip_previous(&mut self) -> Result<(), FormatError> {
        if let Some(hdr) = self.previous.take() {
            let next = hdr.offset_next_abs()?;
            self.reader.seek(SeekFrom::Start(next))?;
        }
        Ok(())
    }

    fn next_header(&mut self) -> Result<Option<AtomHeader>, FormatError> {
        self.skip_previous()?;

        if let Some(end) = self.end {
            // trailing bytes too few for a header are ignored
            if self.reader.stream_position()? + HEADER_SIZE > end {
                return Ok(None);
            }
        }

        let hdr = AtomHeader::read(&mut *self.reader)?;
        debug!("{} @{} size: {}", hdr.name, hdr.offset, hdr.atom_size);
        self.previous = Some(hdr.clone());

        Ok(Some(hdr))
    }

    /// Returns the first header with FourCC `name`,
    /// reader positioned at its data load.
    ///
    /// For unbounded iteration, reaching the end of the stream
    /// is an error (`FormatError::Truncated`), for bounded
    /// iteration `Ok(None)` is returned instead.
    pub fn find_name(&mut self, name: &crate::FourCC) -> Result<Option<AtomHeader>, FormatError> {
        for hdr in self.by_ref() {
            let hdr = hdr?;
            if &hdr.name == name {
                return Ok(Some(hdr))
            }
        }
        match self.end {
            Some(_) => Ok(None),
            None => Err(FormatError::Truncated(ErrorKind::UnexpectedEof.into())),
        }
    }
}

impl<'a, R: Read + Seek> Iterator for AtomHeaders<'a, R> {
    type Item = Result<AtomHeader, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_header() {
            Ok(Some(hdr)) => Some(Ok(hdr)),
            Ok(None) => {
                self.done = true;
                None
            },
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

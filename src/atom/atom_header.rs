use std::io::{Read, Seek};

use binrw::{BinRead, BinReaderExt};

use crate::{consts::HEADER_SIZE, FormatError, FourCC};

/// Header as stored in the stream.
#[derive(Debug, BinRead)]
#[br(big)]
struct RawHeader {
    size: u32,
    name: [u8; 4],
}

/// Atom header.
/// Always 8 bytes, 64-bit sizes are not supported.
///
/// ```ignore
/// | [X X X X] [Y Y Y Y] |
///    |         |
///    |         FourCC
///    32bit size, including header
/// ```
#[derive(Debug, Clone, Default)]
pub struct AtomHeader {
    /// Total atom size in bytes including the 8 byte header.
    /// As stored, i.e. not validated.
    pub(crate) atom_size: u32,
    /// FourCC
    pub(crate) name: FourCC,
    /// Absolute byte offset for start of atom,
    /// i.e. byte offset for its header.
    pub(crate) offset: u64,
}

impl AtomHeader {
    /// Reads header at current position.
    ///
    /// Does not verify that current position
    /// is at atom boundary.
    pub fn read<R: Read + Seek>(reader: &mut R) -> Result<Self, FormatError> {
        let offset = reader.stream_position()?;
        let raw = reader.read_be::<RawHeader>()?;
        Ok(Self {
            atom_size: raw.size,
            name: FourCC::from_slice(&raw.name),
            offset,
        })
    }

    pub fn atom_size(&self) -> u32 {
        self.atom_size
    }

    pub fn name(&self) -> &FourCC {
        &self.name
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Data load absolute offset.
    pub fn data_offset(&self) -> u64 {
        self.offset + HEADER_SIZE
    }

    /// Returns the atom size if it covers at least the header.
    ///
    /// `0` (extends to end of file) and `1` (64-bit size follows)
    /// are rejected along with other sizes below 8.
    pub fn checked_size(&self) -> Result<u64, FormatError> {
        match self.atom_size as u64 >= HEADER_SIZE {
            true => Ok(self.atom_size as u64),
            false => Err(FormatError::UnexpectedAtomSize {
                size: self.atom_size,
                offset: self.offset,
            }),
        }
    }

    /// Absolute offset to next atom.
    pub fn offset_next_abs(&self) -> Result<u64, FormatError> {
        Ok(self.offset + self.checked_size()?)
    }
}

//! Atom FourCC.
//! See <https://developer.apple.com/documentation/quicktime-file-format/atoms>.
//! Only tags that the creation time scan cares about,
//! or that commonly precede `moov`, are named.

use std::fmt::Display;

use crate::support::latin1_string;

/// Atom Four CC.
#[derive(Debug, Clone, PartialEq)]
pub enum FourCC {
    /// File type atom
    Ftyp,
    /// Unused space
    Free,
    Skip,
    Wide,
    /// Media data
    Mdat,
    /// Movie atom
    Moov,
    /// Movie header atom
    Mvhd,
    /// Compressed movie atom
    Cmov,
    /// Reference movie atom
    Rmra,
    /// Any other tag. Bytes above the ASCII range
    /// are mapped as single-byte chars (ISO8859-1).
    Custom(String)
}

impl FourCC {
    pub fn from_slice(fourcc: &[u8]) -> Self {
        match fourcc {
            b"ftyp" => Self::Ftyp,
            b"free" => Self::Free,
            b"skip" => Self::Skip,
            b"wide" => Self::Wide,
            b"mdat" => Self::Mdat,
            b"moov" => Self::Moov,
            b"mvhd" => Self::Mvhd,
            b"cmov" => Self::Cmov,
            b"rmra" => Self::Rmra,
            _ => Self::Custom(latin1_string(fourcc)),
        }
    }

    pub fn from_u32(value: u32) -> Self {
        Self::from_slice(&value.to_be_bytes())
    }

    pub fn to_str(&self) -> &str {
        match self {
            Self::Ftyp => "ftyp",
            Self::Free => "free",
            Self::Skip => "skip",
            Self::Wide => "wide",
            Self::Mdat => "mdat",
            Self::Moov => "moov",
            Self::Mvhd => "mvhd",
            Self::Cmov => "cmov",
            Self::Rmra => "rmra",
            Self::Custom(s) => s.as_str()
        }
    }
}

impl Default for FourCC {
    fn default() -> Self {
        Self::Custom("None".to_owned())
    }
}

impl Display for FourCC {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

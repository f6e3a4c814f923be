//! Rename QuickTime (MOV) and MP4 files after the creation time
//! stored in their movie header atom (`moov/mvhd`).
//! Does not and will not support any kind of video de/encoding.
//!
//! The implementation was mostly done with help from
//! <https://developer.apple.com/documentation/quicktime-file-format>.
//!
//! ```no_run
//! use movstamp::{creation_time, NamingScheme};
//! use std::{fs::File, path::Path};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let path = Path::new("IMG_1234.MOV");
//!     let created = creation_time(&mut File::open(path)?)?;
//!
//!     // VID_20230731_1234.MOV
//!     let rename = NamingScheme::default().plan(path, created)?;
//!     rename.apply()?;
//!
//!     Ok(())
//! }
//! ```

pub mod atom;
pub mod config;
pub mod consts;
pub mod discover;
pub mod errors;
pub mod fourcc;
pub mod process;
pub mod rename;
pub mod scanner;
pub mod support;

mod reader;


pub use atom::{AtomHeader, MvhdPrefix};
pub use config::Config;
pub use consts::{APPLE_EPOCH_ADJUSTMENT, mov_time_zero};
pub use discover::discover;
pub use errors::{FormatError, StampError};
pub use fourcc::FourCC;
pub use process::{run, Outcome, Report};
pub use reader::AtomHeaders;
pub use rename::{NamingScheme, Rename};
pub use scanner::{creation_time, Descent, Scanner};

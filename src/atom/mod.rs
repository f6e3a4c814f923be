//! The two atom structures the creation time scan reads.

mod atom_header;
mod mvhd;

pub use atom_header::AtomHeader;
pub use mvhd::MvhdPrefix;

use clap::Parser;
use std::path::PathBuf;

use movstamp::consts::{DEFAULT_DATE_FORMAT, DEFAULT_PREFIX, EXTENSIONS};

/// Rename MOV/MP4 files after the creation time in their movie header.
#[derive(Parser, Clone, Debug)]
#[command(version)]
pub struct Cli {
    /// File or directory to process (recursively).
    pub root: PathBuf,

    /// File extensions to process, case-insensitive.
    #[arg(long = "ext", value_name = "EXT", default_values = EXTENSIONS)]
    pub extensions: Vec<String>,

    /// Prefix for new file names.
    #[arg(long, default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Date format for new file names, in `time` format description syntax.
    #[arg(long, default_value = DEFAULT_DATE_FORMAT)]
    pub date_format: String,

    /// Search all children of the movie atom for the movie header,
    /// not only the first one.
    #[arg(long)]
    pub deep: bool,

    /// Print planned renames without renaming.
    #[arg(long)]
    pub dry_run: bool,

    /// Use UTC instead of local time for dates.
    #[arg(long)]
    pub utc: bool,
}

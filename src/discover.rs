//! Locate MOV/MP4 files.

use std::path::{Path, PathBuf};

use log::{debug, warn};
use walkdir::WalkDir;

use crate::StampError;

/// Returns `true` if the lowercased extension of `path`
/// is in `extensions` (lowercase, without leading dot).
pub fn has_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    match path.extension() {
        Some(ext) => {
            let ext = ext.to_string_lossy().to_lowercase();
            extensions.iter().any(|e| e.as_ref() == ext)
        },
        None => false,
    }
}

/// Recursively lists absolute paths to files under `root`
/// with a matching extension. If `root` is a file,
/// it is returned alone if the extension matches.
///
/// Files are sorted by name within each directory.
/// Entries that can not be read are logged and skipped,
/// only an unreadable `root` is an error.
pub fn discover<S: AsRef<str>>(root: &Path, extensions: &[S]) -> Result<Vec<PathBuf>, StampError> {
    let root = root.canonicalize()
        .map_err(|err| StampError::Open{path: root.to_owned(), err})?;

    let mut paths: Vec<PathBuf> = Vec::new();

    let mut walker = WalkDir::new(&root)
        .sort_by_file_name()
        .into_iter();

    // the root must be readable
    if let Some(entry) = walker.next() {
        let entry = entry?;
        if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
            paths.push(entry.into_path());
        }
    }

    for entry in walker {
        match entry {
            Ok(e) => {
                if e.file_type().is_file() && has_extension(e.path(), extensions) {
                    debug!("Found {}", e.path().display());
                    paths.push(e.into_path());
                }
            },
            Err(err) => warn!("Skipping: {err}"),
        }
    }

    Ok(paths)
}

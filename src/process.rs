//! Discover, scan, and rename.
//!
//! Files are scanned in parallel, each through its own file handle.
//! Renames run sequentially in discovery order, so that two files
//! planned for the same new name are resolved deterministically:
//! the first one is renamed, the second is skipped.

use std::path::PathBuf;

use log::{info, warn};
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};

use crate::{discover::discover, Config, Rename, StampError};

/// Result for a single file.
#[derive(Debug)]
pub enum Outcome {
    /// File was renamed.
    Renamed(Rename),
    /// Dry run, file would have been renamed.
    Planned(Rename),
    /// File already has the derived name.
    Unchanged(PathBuf),
    /// Creation time could not be read,
    /// or the rename failed.
    Skipped{path: PathBuf, reason: StampError},
}

impl Outcome {
    pub fn path(&self) -> &PathBuf {
        match self {
            Outcome::Renamed(r) | Outcome::Planned(r) => &r.from,
            Outcome::Unchanged(path) | Outcome::Skipped{path, ..} => path,
        }
    }
}

/// Outcomes for all discovered files, in discovery order.
#[derive(Debug, Default)]
pub struct Report {
    pub outcomes: Vec<Outcome>,
}

impl Report {
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn renamed(&self) -> usize {
        self.outcomes.iter().filter(|o| matches!(o, Outcome::Renamed(_))).count()
    }

    pub fn planned(&self) -> usize {
        self.outcomes.iter().filter(|o| matches!(o, Outcome::Planned(_))).count()
    }

    pub fn unchanged(&self) -> usize {
        self.outcomes.iter().filter(|o| matches!(o, Outcome::Unchanged(_))).count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.iter().filter(|o| matches!(o, Outcome::Skipped{..})).count()
    }
}

/// Renames all files under `config.root` after their creation time.
///
/// Dates in new file names use `config.offset`, which
/// `Config::new` sets to the local UTC offset.
///
/// Only a failure to read `config.root` is returned as an error,
/// failures for individual files are reported as `Outcome::Skipped`.
pub fn run(config: &Config) -> Result<Report, StampError> {
    let paths = discover(&config.root, config.extensions.as_slice())?;
    info!("Found {} file(s) in {}", paths.len(), config.root.display());

    let scanner = config.scanner();

    let scanned: Vec<_> = paths.par_iter()
        .map(|path| (path, scanner.creation_time_at(path)))
        .collect();

    let outcomes = scanned.into_iter()
        .map(|(path, created)| {
            let outcome = created
                .and_then(|created| {
                    info!("Movie created at {created} ({})", path.display());
                    config.naming.plan(path, created)
                })
                .and_then(|rename| commit(rename, config.dry_run))
                .unwrap_or_else(|reason| Outcome::Skipped{path: path.to_owned(), reason});
            if let Outcome::Skipped{reason, ..} = &outcome {
                warn!("Skipping {}: {reason}", outcome.path().display());
            }
            outcome
        })
        .collect();

    Ok(Report { outcomes })
}

fn commit(rename: Rename, dry_run: bool) -> Result<Outcome, StampError> {
    if rename.is_noop() {
        info!("Unchanged {}", rename.from.display());
        return Ok(Outcome::Unchanged(rename.from));
    }
    if dry_run {
        info!("Would rename {} -> {}", rename.from.display(), rename.to.display());
        return Ok(Outcome::Planned(rename));
    }
    rename.apply()?;
    info!("Renamed {} -> {}", rename.from.display(), rename.to.display());
    Ok(Outcome::Renamed(rename))
}

// src/io/locator.rs
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{IndexError, IndexResult};

/// Find band files under `directory` whose name ends with `pattern`.
///
/// Sentinel-2 products bury band files several levels deep
/// (`GRANULE/<id>/IMG_DATA/R10m/...`), so the walk is recursive. The
/// pattern is a literal suffix fragment, matched against the file name
/// and against the file stem so that `B04_10m` finds
/// `T32TQM_..._B04_10m.jp2` regardless of extension.
///
/// Returns all matches sorted by path; returns `BandNotFound` when there
/// are none. Disambiguation between multiple matches is left to the
/// caller.
pub fn find_band(directory: &Path, pattern: &str) -> IndexResult<Vec<PathBuf>> {
    let mut matches: Vec<PathBuf> = WalkDir::new(directory)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            let name = entry.file_name().to_string_lossy();
            name.ends_with(pattern)
                || Path::new(name.as_ref())
                    .file_stem()
                    .is_some_and(|stem| stem.to_string_lossy().ends_with(pattern))
        })
        .map(|entry| entry.into_path())
        .collect();

    matches.sort();

    if matches.is_empty() {
        return Err(IndexError::BandNotFound {
            pattern: pattern.to_string(),
            directory: directory.to_path_buf(),
        });
    }

    Ok(matches)
}

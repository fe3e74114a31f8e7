//! Sample listings for a first run.
//!
//! `ctrlcv` is meant to work out of the box: when an input listing does not exist yet,
//! the matching sample from [`sample`] is written in its place and generation carries
//! on. Existing files are never touched.

pub mod sample;

pub use sample::{SAMPLE_JOURNALS, SAMPLE_PAPERS};

use crate::error::RenderError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write `contents` to `path` unless the file already exists.
///
/// Returns whether the file was created.
pub fn write_if_missing(path: &Path, contents: &str) -> Result<bool, RenderError> {
    if path.exists() {
        return Ok(false);
    }
    fs::write(path, contents).map_err(|e| RenderError::io(path, e))?;
    info!(path = %path.display(), "wrote sample listing");
    Ok(true)
}

/// Write the sample journal and paper listings where they are missing.
///
/// Returns the paths that were created.
pub fn write_missing_samples(journals: &Path, papers: &Path) -> Result<Vec<PathBuf>, RenderError> {
    let mut created = Vec::new();
    if write_if_missing(journals, SAMPLE_JOURNALS)? {
        created.push(journals.to_path_buf());
    }
    if write_if_missing(papers, SAMPLE_PAPERS)? {
        created.push(papers.to_path_buf());
    }
    Ok(created)
}

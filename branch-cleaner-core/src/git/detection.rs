//! Repository discovery helpers.

use std::env;
use std::path::{Path, PathBuf};

use git2::Repository;
use tracing::debug;

use crate::error::{CleanerError, Result};

/// Find the working directory of the repository containing `path`.
///
/// Bare repositories have no local checkout to clean up and are rejected.
pub fn discover_repository<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
  let path = path.as_ref();
  let repo = Repository::discover(path).map_err(|e| {
    CleanerError::source_unavailable(format!("{} is not inside a git repository ({})", path.display(), e.message()))
  })?;

  let workdir = repo
    .workdir()
    .map(Path::to_path_buf)
    .ok_or_else(|| CleanerError::source_unavailable(format!("{} is a bare repository", repo.path().display())))?;

  debug!("Using repository at {}", workdir.display());
  Ok(workdir)
}

/// Detect the repository containing the current directory.
pub fn detect_repository() -> Result<PathBuf> {
  let current_dir = env::current_dir()
    .map_err(|e| CleanerError::source_unavailable(format!("cannot read the current directory: {e}")))?;
  discover_repository(current_dir)
}

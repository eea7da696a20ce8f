//! # Git Command Helpers
//!
//! Spawns `git` sub-processes for listing and deleting branches.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use super::{BranchListing, BranchSink, BranchSource, DeleteMode, parse_branch_listing};
use crate::consts::GIT_EXECUTABLE;
use crate::error::{CleanerError, Result};

/// Captured output of a finished git command.
#[derive(Debug, Clone)]
pub struct GitCommandOutput {
  pub stdout: String,
  pub stderr: String,
  /// Whether the command exited with status code 0.
  pub success: bool,
}

impl GitCommandOutput {
  /// The most useful text to show when the command failed.
  pub fn failure_reason(&self) -> String {
    let stderr = self.stderr.trim();
    if stderr.is_empty() {
      self.stdout.trim().to_string()
    } else {
      stderr.to_string()
    }
  }
}

/// Execute a git command in `repo_path` and capture its output.
///
/// Only fails when the process cannot be spawned; a non-zero exit is reported
/// through [`GitCommandOutput::success`].
pub fn execute_git_command(repo_path: &Path, args: &[&str]) -> io::Result<GitCommandOutput> {
  debug!("Running {} {:?} in {}", GIT_EXECUTABLE, args, repo_path.display());
  let output = Command::new(GIT_EXECUTABLE)
    .args(args)
    .current_dir(repo_path)
    .output()?;

  Ok(GitCommandOutput {
    stdout: String::from_utf8_lossy(&output.stdout).to_string(),
    stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    success: output.status.success(),
  })
}

/// Branch source and sink backed by the `git` executable.
#[derive(Debug, Clone)]
pub struct GitCli {
  repo_path: PathBuf,
  delete_mode: DeleteMode,
}

impl GitCli {
  pub fn new(repo_path: impl Into<PathBuf>) -> Self {
    Self {
      repo_path: repo_path.into(),
      delete_mode: DeleteMode::default(),
    }
  }

  pub fn with_delete_mode(mut self, delete_mode: DeleteMode) -> Self {
    self.delete_mode = delete_mode;
    self
  }
}

impl BranchSource for GitCli {
  fn list_branches(&self) -> Result<BranchListing> {
    let output = execute_git_command(&self.repo_path, &["branch", "--list", "--no-color", "--no-column"])
      .map_err(|e| CleanerError::source_unavailable(format!("failed to run {GIT_EXECUTABLE}: {e}")))?;

    if !output.success {
      return Err(CleanerError::source_unavailable(format!(
        "git branch --list failed: {}",
        output.failure_reason()
      )));
    }

    let listing = parse_branch_listing(&output.stdout);
    debug!(
      "Found {} local branch(es), current: {:?}",
      listing.branches.len(),
      listing.current
    );
    Ok(listing)
  }
}

impl BranchSink for GitCli {
  fn delete_branch(&self, name: &str) -> Result<()> {
    // "--" keeps branch names that start with a dash from being read as flags
    let output = execute_git_command(&self.repo_path, &["branch", self.delete_mode.git_flag(), "--", name])
      .map_err(|e| CleanerError::DeletionFailed {
        branch: name.to_string(),
        reason: format!("failed to run {GIT_EXECUTABLE}: {e}"),
      })?;

    if output.success {
      Ok(())
    } else {
      let reason = output.failure_reason();
      debug!("git refused to delete '{}': {}", name, reason);
      Err(CleanerError::DeletionFailed {
        branch: name.to_string(),
        reason,
      })
    }
  }
}

#[cfg(test)]
mod tests {
  use branch_cleaner_test_utils::git::GitRepoTestGuard;

  use super::*;

  fn repo_with_branches() -> GitRepoTestGuard {
    GitRepoTestGuard::with_branches(&["feature/a", "release/1.0"])
  }

  #[test]
  fn test_list_branches_reports_current() {
    let guard = repo_with_branches();
    let git = GitCli::new(guard.path());

    let listing = git.list_branches().unwrap();
    assert_eq!(listing.branches, vec!["feature/a", "main", "release/1.0"]);
    assert_eq!(listing.current.as_deref(), Some("main"));
  }

  #[test]
  fn test_list_branches_outside_repository() {
    let dir = tempfile::TempDir::new().unwrap();
    let git = GitCli::new(dir.path());

    let error = git.list_branches().unwrap_err();
    assert!(matches!(error, CleanerError::SourceUnavailable { .. }));
  }

  #[test]
  fn test_delete_branch_removes_ref() {
    let guard = repo_with_branches();
    let git = GitCli::new(guard.path());

    git.delete_branch("feature/a").unwrap();
    assert!(!guard.has_branch("feature/a"));
  }

  #[test]
  fn test_delete_current_branch_fails() {
    let guard = repo_with_branches();
    let git = GitCli::new(guard.path());

    let error = git.delete_branch("main").unwrap_err();
    assert!(matches!(error, CleanerError::DeletionFailed { ref branch, .. } if branch == "main"));
  }

  #[test]
  fn test_safe_mode_refuses_unmerged_branch() {
    let guard = repo_with_branches();
    guard.add_unmerged_commit("feature/a").unwrap();

    let safe = GitCli::new(guard.path()).with_delete_mode(DeleteMode::Safe);
    let error = safe.delete_branch("feature/a").unwrap_err();
    assert!(matches!(error, CleanerError::DeletionFailed { .. }));

    // Force mode removes it anyway
    GitCli::new(guard.path()).delete_branch("feature/a").unwrap();
  }
}

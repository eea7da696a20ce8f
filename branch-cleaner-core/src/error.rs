//! Error types for branch cleanup runs.

use thiserror::Error;

/// Exit code for failures detected while running a cleanup
pub const EXIT_FAILURE: u8 = 1;

/// Exit code for invalid or conflicting command-line usage
pub const EXIT_USAGE: u8 = 2;

/// Everything that can go wrong while selecting or deleting branches.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CleanerError {
  /// Branches could not be enumerated (not inside a repository, git missing,
  /// or the listing command failed). Nothing has been deleted.
  #[error("unable to list local branches: {reason}")]
  SourceUnavailable { reason: String },

  /// Conflicting, unknown or malformed arguments.
  #[error("invalid arguments: {0}")]
  InvalidArguments(String),

  /// The computed deletion set contains the checked-out branch.
  #[error("refusing to run: the current branch '{branch}' would be deleted")]
  CurrentBranchProtected { branch: String },

  /// A single branch could not be deleted.
  #[error("failed to delete branch '{branch}': {reason}")]
  DeletionFailed { branch: String, reason: String },

  /// At least one deletion failed; the remaining branches were still
  /// processed.
  #[error("{} branch(es) could not be deleted: {}", .failed.len(), .failed.join(", "))]
  CleanupIncomplete { failed: Vec<String> },
}

impl CleanerError {
  /// Shorthand for [`CleanerError::SourceUnavailable`].
  pub fn source_unavailable(reason: impl Into<String>) -> Self {
    Self::SourceUnavailable { reason: reason.into() }
  }

  /// Process exit code to use when this error ends the run.
  pub const fn exit_code(&self) -> u8 {
    match self {
      Self::InvalidArguments(_) => EXIT_USAGE,
      Self::SourceUnavailable { .. }
      | Self::CurrentBranchProtected { .. }
      | Self::DeletionFailed { .. }
      | Self::CleanupIncomplete { .. } => EXIT_FAILURE,
    }
  }

  /// Follow-up actions worth suggesting to the user, if any.
  pub fn suggestions(&self) -> Vec<String> {
    match self {
      Self::SourceUnavailable { .. } => vec![
        "Run the command from inside a git working tree, or pass --repo <PATH>".to_string(),
        "Check that git is installed and on your PATH".to_string(),
      ],
      Self::CurrentBranchProtected { branch } => vec![
        format!("Protect it explicitly with --exclude:{branch}"),
        "Or switch to a branch covered by your exclusion patterns first".to_string(),
      ],
      Self::CleanupIncomplete { .. } => {
        vec!["Check the failed branches with `git log <branch>` before retrying".to_string()]
      }
      Self::InvalidArguments(_) | Self::DeletionFailed { .. } => Vec::new(),
    }
  }
}

/// Result alias used across the core crate.
pub type Result<T, E = CleanerError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_exit_codes() {
    assert_eq!(CleanerError::InvalidArguments("x".into()).exit_code(), EXIT_USAGE);
    assert_eq!(CleanerError::source_unavailable("no repo").exit_code(), EXIT_FAILURE);
    assert_eq!(
      CleanerError::CurrentBranchProtected {
        branch: "main".into()
      }
      .exit_code(),
      EXIT_FAILURE
    );
    assert_eq!(
      CleanerError::CleanupIncomplete {
        failed: vec!["a".into()]
      }
      .exit_code(),
      EXIT_FAILURE
    );
  }

  #[test]
  fn test_cleanup_incomplete_lists_failed_branches() {
    let error = CleanerError::CleanupIncomplete {
      failed: vec!["feature/a".into(), "bugfix/b".into()],
    };
    assert_eq!(
      error.to_string(),
      "2 branch(es) could not be deleted: feature/a, bugfix/b"
    );
  }

  #[test]
  fn test_current_branch_suggestion_names_branch() {
    let error = CleanerError::CurrentBranchProtected {
      branch: "feature/x".into(),
    };
    assert!(error.suggestions().iter().any(|s| s.contains("--exclude:feature/x")));
  }
}

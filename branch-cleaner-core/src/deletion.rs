//! Sequential branch deletion.
//!
//! Branches are deleted one at a time in plan order. A failure is recorded
//! and reported, and the loop moves on to the next branch.

use tracing::debug;

use crate::error::{CleanerError, Result};
use crate::git::BranchSink;

/// Progress notifications emitted while deleting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionEvent<'a> {
  Deleted(&'a str),
  Failed { branch: &'a str, reason: &'a str },
}

/// Outcome of a deletion pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionReport {
  pub deleted: Vec<String>,
  /// Failed branches with the reason git gave.
  pub failed: Vec<(String, String)>,
}

impl DeletionReport {
  pub fn is_success(&self) -> bool {
    self.failed.is_empty()
  }

  pub fn failed_branches(&self) -> Vec<String> {
    self.failed.iter().map(|(branch, _)| branch.clone()).collect()
  }

  /// Turn the report into an error if any deletion failed.
  pub fn into_result(self) -> Result<Vec<String>> {
    if self.is_success() {
      Ok(self.deleted)
    } else {
      Err(CleanerError::CleanupIncomplete {
        failed: self.failed_branches(),
      })
    }
  }
}

/// Delete `branches` through `sink`, calling `on_event` after each attempt.
pub fn delete_branches<K, F>(sink: &K, branches: &[String], mut on_event: F) -> DeletionReport
where
  K: BranchSink + ?Sized,
  F: FnMut(DeletionEvent<'_>),
{
  let mut report = DeletionReport::default();

  for branch in branches {
    match sink.delete_branch(branch) {
      Ok(()) => {
        debug!("Deleted branch '{}'", branch);
        on_event(DeletionEvent::Deleted(branch));
        report.deleted.push(branch.clone());
      }
      Err(error) => {
        let reason = match error {
          CleanerError::DeletionFailed { reason, .. } => reason,
          other => other.to_string(),
        };
        debug!("Could not delete branch '{}': {}", branch, reason);
        on_event(DeletionEvent::Failed {
          branch,
          reason: &reason,
        });
        report.failed.push((branch.clone(), reason));
      }
    }
  }

  report
}

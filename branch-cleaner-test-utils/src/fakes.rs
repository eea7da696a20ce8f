//! In-memory stand-ins for the git-backed branch source and sink.

use std::cell::RefCell;
use std::collections::HashMap;

use branch_cleaner_core::{BranchListing, BranchSink, BranchSource, CleanerError, Result};

/// A branch source that returns a fixed listing, or a fixed failure.
#[derive(Debug, Clone)]
pub struct FakeBranchSource {
  result: std::result::Result<BranchListing, String>,
}

impl FakeBranchSource {
  pub fn new(branches: &[&str], current: Option<&str>) -> Self {
    Self {
      result: Ok(BranchListing {
        branches: branches.iter().map(|b| b.to_string()).collect(),
        current: current.map(str::to_string),
      }),
    }
  }

  /// A source whose listing always fails with `SourceUnavailable`.
  pub fn unavailable(reason: &str) -> Self {
    Self {
      result: Err(reason.to_string()),
    }
  }
}

impl BranchSource for FakeBranchSource {
  fn list_branches(&self) -> Result<BranchListing> {
    self.result.clone().map_err(CleanerError::source_unavailable)
  }
}

/// A branch sink that records every deletion attempt.
///
/// Branches registered with [`RecordingBranchSink::fail_on`] are refused with
/// `DeletionFailed`; everything else succeeds.
#[derive(Debug, Default)]
pub struct RecordingBranchSink {
  attempts: RefCell<Vec<String>>,
  failures: HashMap<String, String>,
}

impl RecordingBranchSink {
  pub fn new() -> Self {
    Self::default()
  }

  /// Make deleting `branch` fail with `reason`.
  pub fn fail_on(mut self, branch: &str, reason: &str) -> Self {
    self.failures.insert(branch.to_string(), reason.to_string());
    self
  }

  /// Every branch the sink was asked to delete, in order.
  pub fn attempts(&self) -> Vec<String> {
    self.attempts.borrow().clone()
  }

  /// Branches that were actually deleted, in order.
  pub fn deleted(&self) -> Vec<String> {
    self
      .attempts
      .borrow()
      .iter()
      .filter(|branch| !self.failures.contains_key(*branch))
      .cloned()
      .collect()
  }
}

impl BranchSink for RecordingBranchSink {
  fn delete_branch(&self, name: &str) -> Result<()> {
    self.attempts.borrow_mut().push(name.to_string());
    match self.failures.get(name) {
      Some(reason) => Err(CleanerError::DeletionFailed {
        branch: name.to_string(),
        reason: reason.clone(),
      }),
      None => Ok(()),
    }
  }
}

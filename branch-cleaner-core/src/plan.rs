//! Cleanup requests and deletion plans.
//!
//! A [`CleanupRequest`] captures what the user asked for; [`plan_deletion`]
//! combines it with a [`BranchListing`] to decide which branches go.

use tracing::{debug, info};

use crate::error::Result;
use crate::filter::{enforce_current_branch_safety, filter_branches};
use crate::git::{BranchListing, DeleteMode};
use crate::pattern::ExcludePattern;

/// How the set of candidate branches is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupMode {
  /// Delete every branch that matches none of the patterns.
  Patterns(Vec<ExcludePattern>),
  /// Delete every branch except the current one.
  All,
}

/// A fully-resolved cleanup request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupRequest {
  pub mode: CleanupMode,
  pub dry_run: bool,
  pub delete_mode: DeleteMode,
}

impl CleanupRequest {
  /// Build a pattern-based request.
  ///
  /// `standard` is the set of built-in patterns; it is only included when
  /// `include_standard` is set so callers control where the defaults come
  /// from.
  pub fn with_patterns(standard: &[ExcludePattern], include_standard: bool, extra: Vec<ExcludePattern>) -> Self {
    let mut patterns = Vec::with_capacity(extra.len() + standard.len());
    if include_standard {
      patterns.extend_from_slice(standard);
    }
    patterns.extend(extra);

    Self {
      mode: CleanupMode::Patterns(patterns),
      dry_run: false,
      delete_mode: DeleteMode::default(),
    }
  }

  /// Build a request that removes everything but the current branch.
  pub fn all() -> Self {
    Self {
      mode: CleanupMode::All,
      dry_run: false,
      delete_mode: DeleteMode::default(),
    }
  }

  pub fn dry_run(mut self, dry_run: bool) -> Self {
    self.dry_run = dry_run;
    self
  }

  pub fn delete_mode(mut self, delete_mode: DeleteMode) -> Self {
    self.delete_mode = delete_mode;
    self
  }

  /// The exclusion patterns to apply for a given current branch.
  ///
  /// In [`CleanupMode::All`] the current branch is the only protected one.
  pub fn effective_patterns(&self, current_branch: Option<&str>) -> Vec<ExcludePattern> {
    match &self.mode {
      CleanupMode::Patterns(patterns) => patterns.clone(),
      CleanupMode::All => current_branch.map(ExcludePattern::exact).into_iter().collect(),
    }
  }
}

/// Branches selected for deletion, plus the ones kept by the patterns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletionPlan {
  /// Branches to delete, in listing order.
  pub branches: Vec<String>,
  /// Branches protected by an exclusion pattern, in listing order.
  pub protected: Vec<String>,
}

impl DeletionPlan {
  pub fn is_empty(&self) -> bool {
    self.branches.is_empty()
  }
}

/// Work out which branches a request would delete.
///
/// Fails with [`crate::CleanerError::CurrentBranchProtected`] when the current
/// branch is not covered by the request's patterns.
pub fn plan_deletion(listing: &BranchListing, request: &CleanupRequest) -> Result<DeletionPlan> {
  let current = listing.current.as_deref();
  let patterns = request.effective_patterns(current);
  debug!(
    "Planning deletion of {} branch(es) against {} pattern(s)",
    listing.branches.len(),
    patterns.len()
  );

  let eligible = filter_branches(&listing.branches, &patterns);
  let branches = enforce_current_branch_safety(eligible, current)?;

  let protected = listing
    .branches
    .iter()
    .filter(|branch| !branches.contains(branch))
    .cloned()
    .collect::<Vec<_>>();

  info!(
    "{} branch(es) selected for deletion, {} protected",
    branches.len(),
    protected.len()
  );

  Ok(DeletionPlan { branches, protected })
}

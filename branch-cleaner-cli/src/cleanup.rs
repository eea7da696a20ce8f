//! # Cleanup Workflow
//!
//! Lists branches, plans the deletion and then deletes (or previews) the
//! selected branches one at a time.

use anyhow::Result;
use branch_cleaner_core::output::{format_branch, format_branch_list, print_header};
use branch_cleaner_core::{
  BranchSink, BranchSource, CleanupMode, CleanupRequest, DeletionEvent, GitCli, delete_branches, detect_repository,
  discover_repository, plan_deletion, print_error, print_info, print_success, print_warning,
};
use tracing::{debug, info};

use crate::cli::{Cli, build_request};

/// What a successful run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupOutcome {
  /// No branch matched the request.
  NothingToDelete,
  /// Dry run: these branches would have been deleted.
  Previewed(Vec<String>),
  /// These branches were deleted.
  Deleted(Vec<String>),
}

/// Run a cleanup for the parsed command line against the real repository.
pub fn handle_cli(cli: &Cli) -> Result<CleanupOutcome> {
  let repo_path = match &cli.repo {
    Some(path) => discover_repository(path)?,
    None => detect_repository()?,
  };

  let request = build_request(cli);
  debug!("Cleanup request: {:?}", request);

  let git = GitCli::new(repo_path).with_delete_mode(request.delete_mode);
  Ok(run_cleanup(&git, &git, &request)?)
}

/// Plan and execute a cleanup.
///
/// Nothing is deleted when listing fails or the current branch would be
/// deleted. Individual deletion failures are reported as they happen; the
/// run then fails with [`branch_cleaner_core::CleanerError::CleanupIncomplete`].
pub fn run_cleanup<S, K>(
  source: &S,
  sink: &K,
  request: &CleanupRequest,
) -> branch_cleaner_core::Result<CleanupOutcome>
where
  S: BranchSource + ?Sized,
  K: BranchSink + ?Sized,
{
  let listing = source.list_branches()?;
  if request.mode == CleanupMode::All && listing.current.is_none() {
    print_warning("No branch is checked out, so --all keeps none");
  }
  let plan = plan_deletion(&listing, request)?;

  if plan.is_empty() {
    print_info("No branches to delete.");
    return Ok(CleanupOutcome::NothingToDelete);
  }

  if !plan.protected.is_empty() {
    info!("Keeping {}", plan.protected.join(", "));
  }

  if request.dry_run {
    print_header("Dry run: the following branches would be deleted:");
    for branch in &plan.branches {
      println!("  {}", format_branch(branch));
    }
    return Ok(CleanupOutcome::Previewed(plan.branches));
  }

  print_info(&format!("Deleting {} branch(es)", plan.branches.len()));
  let report = delete_branches(sink, &plan.branches, |event| match event {
    DeletionEvent::Deleted(branch) => print_success(&format!("Deleted {}", format_branch(branch))),
    DeletionEvent::Failed { branch, reason } => {
      print_error(&format!("Failed to delete {}: {}", format_branch(branch), reason));
    }
  });

  if !report.deleted.is_empty() {
    println!();
    print_success(&format!("Branches deleted: {}", format_branch_list(&report.deleted)));
  }

  report.into_result().map(CleanupOutcome::Deleted)
}

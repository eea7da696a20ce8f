//! # Branch Cleaner Core
//!
//! Core library for git-branch-cleaner. The filtering engine in [`filter`] and
//! [`plan`] is pure and works on in-memory branch lists; everything that talks
//! to git lives behind the [`git::BranchSource`] and [`git::BranchSink`]
//! traits so it can be swapped out in tests.

pub mod consts;
pub mod deletion;
pub mod error;
pub mod filter;
pub mod git;
pub mod output;
pub mod pattern;
pub mod plan;

// Re-export the types most callers need
pub use deletion::{DeletionEvent, DeletionReport, delete_branches};
pub use error::{CleanerError, Result};
pub use filter::{enforce_current_branch_safety, filter_branches, is_excluded};
pub use git::{BranchListing, BranchSink, BranchSource, DeleteMode, GitCli, detect_repository, discover_repository};
pub use output::{ColorMode, print_error, print_info, print_success, print_warning};
pub use pattern::{ExcludePattern, STANDARD_BRANCHES, standard_patterns};
pub use plan::{CleanupMode, CleanupRequest, DeletionPlan, plan_deletion};

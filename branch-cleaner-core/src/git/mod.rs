//! Git integration.
//!
//! The rest of the crate only sees the [`BranchSource`] and [`BranchSink`]
//! traits. [`GitCli`] implements both by running the `git` executable.

mod command;
mod detection;
mod listing;

pub use command::{GitCli, GitCommandOutput, execute_git_command};
pub use detection::{detect_repository, discover_repository};
pub use listing::parse_branch_listing;

use crate::error::Result;

/// Local branches in listing order, plus the checked-out branch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchListing {
  pub branches: Vec<String>,
  /// `None` when HEAD is detached.
  pub current: Option<String>,
}

/// How branches are removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeleteMode {
  /// `git branch -D`: delete regardless of merge status.
  #[default]
  Force,
  /// `git branch -d`: refuse branches with unmerged commits.
  Safe,
}

impl DeleteMode {
  /// The `git branch` flag for this mode.
  pub const fn git_flag(self) -> &'static str {
    match self {
      Self::Force => "-D",
      Self::Safe => "-d",
    }
  }
}

/// Something that can enumerate local branches.
pub trait BranchSource {
  /// List local branches in the order git reports them.
  fn list_branches(&self) -> Result<BranchListing>;
}

/// Something that can delete a local branch.
pub trait BranchSink {
  /// Delete a single branch.
  fn delete_branch(&self, name: &str) -> Result<()>;
}

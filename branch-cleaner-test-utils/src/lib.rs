//! Test utilities shared across the git-branch-cleaner workspace
//!
//! This crate provides:
//! - Temporary git repositories with branches ([`GitRepoTestGuard`])
//! - In-memory branch source/sink doubles ([`FakeBranchSource`],
//!   [`RecordingBranchSink`])
//!
//! The dead_code lint is disabled because not every test uses every helper.

#![allow(dead_code)]

pub mod fakes;
pub mod git;

// Re-export commonly used items
pub use fakes::{FakeBranchSource, RecordingBranchSink};
pub use git::{GitRepoTestGuard, checkout_branch, create_branch, create_commit, local_branches};

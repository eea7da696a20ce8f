//! Temporary git repositories for tests.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use git2::{BranchType, Repository, Signature};
use tempfile::TempDir;

/// Name of the branch HEAD points at in a fresh test repository.
pub const DEFAULT_BRANCH: &str = "main";

/// A temporary git repository that is removed when dropped.
///
/// HEAD starts out on [`DEFAULT_BRANCH`] regardless of the user's
/// `init.defaultBranch` setting, so the first commit creates it.
pub struct GitRepoTestGuard {
  /// The temporary directory containing the git repository
  pub temp_dir: TempDir,
  /// The git repository
  pub repo: Repository,
}

impl GitRepoTestGuard {
  pub fn new() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let repo = Repository::init(temp_dir.path()).expect("Failed to initialize git repository");

    {
      let mut config = repo.config().expect("Failed to get repository config");
      config
        .set_str("user.name", "Branch Cleaner Test User")
        .expect("Failed to set user.name");
      config
        .set_str("user.email", "branch-cleaner-test@example.com")
        .expect("Failed to set user.email");
    }

    repo
      .set_head(&format!("refs/heads/{DEFAULT_BRANCH}"))
      .expect("Failed to point HEAD at the default branch");

    Self { temp_dir, repo }
  }

  /// Create a repository with an initial commit on [`DEFAULT_BRANCH`] and a
  /// branch at the same commit for each of `branches`.
  pub fn with_branches(branches: &[&str]) -> Self {
    let guard = Self::new();
    create_commit(&guard.repo, "README.md", "test repository\n", "initial commit").expect("Failed to commit");
    for branch in branches {
      create_branch(&guard.repo, branch).expect("Failed to create branch");
    }
    guard
  }

  /// Get the path to the git repository
  pub fn path(&self) -> &Path {
    self.temp_dir.path()
  }

  /// Check whether a local branch exists
  pub fn has_branch(&self, name: &str) -> bool {
    self.repo.find_branch(name, BranchType::Local).is_ok()
  }

  /// Add a commit that only `branch` contains, then return to the branch that
  /// was checked out before.
  pub fn add_unmerged_commit(&self, branch: &str) -> Result<()> {
    let previous = self
      .repo
      .head()?
      .shorthand()
      .map(str::to_string)
      .context("HEAD is not on a branch")?;

    checkout_branch(&self.repo, branch)?;
    create_commit(
      &self.repo,
      &format!("{}.txt", branch.replace('/', "-")),
      "unmerged work\n",
      &format!("work on {branch}"),
    )?;
    checkout_branch(&self.repo, &previous)
  }
}

impl Default for GitRepoTestGuard {
  fn default() -> Self {
    Self::new()
  }
}

/// Create a commit on HEAD containing `file_name`
pub fn create_commit(repo: &Repository, file_name: &str, content: &str, message: &str) -> Result<()> {
  let workdir = repo.workdir().context("Repository has no working directory")?;
  fs::write(workdir.join(file_name), content)?;

  let mut index = repo.index()?;
  index.add_path(Path::new(file_name))?;
  index.write()?;

  let tree_id = index.write_tree()?;
  let tree = repo.find_tree(tree_id)?;
  let signature = Signature::now("Test User", "test@example.com")?;

  // An unborn HEAD has no parent commit
  let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
  let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
  repo.commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)?;

  Ok(())
}

/// Create a branch at HEAD
pub fn create_branch(repo: &Repository, branch_name: &str) -> Result<()> {
  let target = repo.head()?.peel_to_commit()?;

  repo.branch(branch_name, &target, false)?;
  Ok(())
}

/// Check out an existing local branch
pub fn checkout_branch(repo: &Repository, branch_name: &str) -> Result<()> {
  let commit = repo
    .revparse_single(&format!("refs/heads/{branch_name}"))?
    .peel_to_commit()?;

  repo.checkout_tree(
    commit.as_object(),
    Some(git2::build::CheckoutBuilder::new().force()),
  )?;
  repo.set_head(&format!("refs/heads/{branch_name}"))?;

  Ok(())
}

/// Names of all local branches, sorted
pub fn local_branches(repo: &Repository) -> Result<Vec<String>> {
  let mut names = Vec::new();
  for branch in repo.branches(Some(BranchType::Local))? {
    let (branch, _) = branch?;
    if let Some(name) = branch.name()? {
      names.push(name.to_string());
    }
  }
  names.sort();
  Ok(names)
}

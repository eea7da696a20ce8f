use assert_cmd::cargo::cargo_bin_cmd;
use branch_cleaner_test_utils::{GitRepoTestGuard, checkout_branch, local_branches};
use predicates::prelude::*;

#[test]
fn help_output_shows_usage() {
  cargo_bin_cmd!("git-branch-cleaner")
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("--standard"))
    .stdout(predicate::str::contains("--exclude"))
    .stdout(predicate::str::contains("--all"))
    .stdout(predicate::str::contains("--dry-run"))
    .stdout(predicate::str::contains("master, main, develop, release/*"));
}

#[test]
fn short_help_flag_shows_usage() {
  cargo_bin_cmd!("git-branch-cleaner")
    .arg("-h")
    .assert()
    .success()
    .stdout(predicate::str::contains("--exclude"))
    .stdout(predicate::str::contains("--all"));
}

#[test]
fn colors_never_keeps_output_plain() {
  let guard = GitRepoTestGuard::with_branches(&["feature/a"]);

  cargo_bin_cmd!("git-branch-cleaner")
    .current_dir(guard.path())
    .args(["--colors", "never", "--dry-run", "--standard"])
    .assert()
    .success()
    .stdout(predicate::str::contains("feature/a"))
    .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn colors_always_styles_piped_output() {
  let guard = GitRepoTestGuard::with_branches(&["feature/a"]);

  cargo_bin_cmd!("git-branch-cleaner")
    .current_dir(guard.path())
    .args(["--colors", "always", "--dry-run", "--standard"])
    .assert()
    .success()
    .stdout(predicate::str::contains("\x1b["));
}

#[test]
fn no_arguments_prints_usage_and_succeeds() {
  let guard = GitRepoTestGuard::with_branches(&["feature/a"]);

  cargo_bin_cmd!("git-branch-cleaner")
    .current_dir(guard.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("Examples:"));

  assert!(guard.has_branch("feature/a"));
}

#[test]
fn unknown_argument_is_a_usage_error() {
  let guard = GitRepoTestGuard::with_branches(&["feature/a"]);

  cargo_bin_cmd!("git-branch-cleaner")
    .current_dir(guard.path())
    .args(["--standard", "--frobnicate"])
    .assert()
    .code(2)
    .stderr(predicate::str::contains("--frobnicate"));

  assert!(guard.has_branch("feature/a"));
}

#[test]
fn all_conflicts_with_other_filters() {
  let guard = GitRepoTestGuard::with_branches(&["feature/a"]);

  cargo_bin_cmd!("git-branch-cleaner")
    .current_dir(guard.path())
    .args(["--all", "--exclude:feature/a"])
    .assert()
    .code(2);

  assert!(guard.has_branch("feature/a"));
}

#[test]
fn dry_run_lists_branches_without_deleting() {
  let guard = GitRepoTestGuard::with_branches(&["develop", "feature/a", "release/1.0"]);

  cargo_bin_cmd!("git-branch-cleaner")
    .current_dir(guard.path())
    .args(["--dry-run", "--standard"])
    .assert()
    .success()
    .stdout(predicate::str::contains("Dry run"))
    .stdout(predicate::str::contains("feature/a"))
    .stdout(predicate::str::contains("release/1.0").not());

  assert_eq!(
    local_branches(&guard.repo).unwrap(),
    vec!["develop", "feature/a", "main", "release/1.0"]
  );
}

#[test]
fn standard_cleanup_keeps_protected_branches() {
  let guard = GitRepoTestGuard::with_branches(&["develop", "feature/a", "bugfix/b", "release/1.0", "releases/2.0"]);

  cargo_bin_cmd!("git-branch-cleaner")
    .current_dir(guard.path())
    .arg("--standard")
    .assert()
    .success()
    .stdout(predicate::str::contains("Branches deleted"));

  // `release/*` protects `release/1.0` but not `releases/2.0`
  assert_eq!(
    local_branches(&guard.repo).unwrap(),
    vec!["develop", "main", "release/1.0"]
  );
}

#[test]
fn exclude_patterns_protect_matching_branches() {
  let guard = GitRepoTestGuard::with_branches(&["feature/a", "feature/b", "featured", "spike"]);

  cargo_bin_cmd!("git-branch-cleaner")
    .current_dir(guard.path())
    .args(["--exclude:main", "--exclude:feature/*"])
    .assert()
    .success();

  assert_eq!(
    local_branches(&guard.repo).unwrap(),
    vec!["feature/a", "feature/b", "main"]
  );
}

#[test]
fn all_deletes_everything_but_current_branch() {
  let guard = GitRepoTestGuard::with_branches(&["develop", "feature/x"]);
  checkout_branch(&guard.repo, "feature/x").unwrap();

  cargo_bin_cmd!("git-branch-cleaner")
    .current_dir(guard.path())
    .arg("--all")
    .assert()
    .success();

  assert_eq!(local_branches(&guard.repo).unwrap(), vec!["feature/x"]);
}

#[test]
fn refuses_to_run_when_current_branch_is_unprotected() {
  let guard = GitRepoTestGuard::with_branches(&["feature/x", "old"]);
  checkout_branch(&guard.repo, "feature/x").unwrap();

  cargo_bin_cmd!("git-branch-cleaner")
    .current_dir(guard.path())
    .arg("--standard")
    .assert()
    .code(1)
    .stderr(predicate::str::contains("current branch 'feature/x'"))
    .stderr(predicate::str::contains("--exclude:feature/x"));

  // Nothing is deleted, not even the unprotected branches
  assert_eq!(
    local_branches(&guard.repo).unwrap(),
    vec!["feature/x", "main", "old"]
  );
}

#[test]
fn failed_deletion_continues_and_exits_non_zero() {
  let guard = GitRepoTestGuard::with_branches(&["feature/a", "feature/b", "feature/c"]);
  guard.add_unmerged_commit("feature/b").unwrap();

  cargo_bin_cmd!("git-branch-cleaner")
    .current_dir(guard.path())
    .args(["--exclude:main", "--safe"])
    .assert()
    .code(1)
    .stderr(predicate::str::contains("Failed to delete"))
    .stderr(predicate::str::contains("feature/b"))
    // Reported once by the cleanup output, not again through the log
    .stderr(predicate::str::contains("WARN").not());

  assert_eq!(local_branches(&guard.repo).unwrap(), vec!["feature/b", "main"]);
}

#[test]
fn detached_head_has_no_current_branch_to_protect() {
  let guard = GitRepoTestGuard::with_branches(&["feature/a"]);
  let head = guard.repo.head().unwrap().peel_to_commit().unwrap().id();
  guard.repo.set_head_detached(head).unwrap();

  cargo_bin_cmd!("git-branch-cleaner")
    .current_dir(guard.path())
    .arg("--standard")
    .assert()
    .success();

  assert_eq!(local_branches(&guard.repo).unwrap(), vec!["main"]);
}

#[test]
fn all_with_detached_head_warns_that_nothing_is_kept() {
  let guard = GitRepoTestGuard::with_branches(&["feature/a"]);
  let head = guard.repo.head().unwrap().peel_to_commit().unwrap().id();
  guard.repo.set_head_detached(head).unwrap();

  cargo_bin_cmd!("git-branch-cleaner")
    .current_dir(guard.path())
    .args(["--all", "--dry-run"])
    .assert()
    .success()
    .stdout(predicate::str::contains("No branch is checked out"));
}

#[test]
fn symbolic_branch_ref_is_matched_by_its_own_name() {
  let guard = GitRepoTestGuard::with_branches(&["feature/a"]);
  guard
    .repo
    .reference_symbolic("refs/heads/alias", "refs/heads/main", false, "alias for main")
    .unwrap();

  cargo_bin_cmd!("git-branch-cleaner")
    .current_dir(guard.path())
    .args(["--standard", "--exclude:alias"])
    .assert()
    .success()
    .stdout(predicate::str::contains("alias -> main").not());

  assert!(guard.has_branch("alias"));
  assert!(guard.has_branch("main"));
  assert!(!guard.has_branch("feature/a"));
}

#[test]
fn repo_flag_targets_another_directory() {
  let guard = GitRepoTestGuard::with_branches(&["feature/a"]);
  let elsewhere = tempfile::TempDir::new().unwrap();

  cargo_bin_cmd!("git-branch-cleaner")
    .current_dir(elsewhere.path())
    .arg("--repo")
    .arg(guard.path())
    .arg("--standard")
    .assert()
    .success();

  assert_eq!(local_branches(&guard.repo).unwrap(), vec!["main"]);
}

#[test]
fn errors_outside_a_repository() {
  let dir = tempfile::TempDir::new().unwrap();

  cargo_bin_cmd!("git-branch-cleaner")
    .current_dir(dir.path())
    .arg("--standard")
    .assert()
    .code(1)
    .stderr(predicate::str::contains("not inside a git repository"));
}

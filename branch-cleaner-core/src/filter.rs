//! Branch filtering.
//!
//! Pure functions over in-memory branch lists. Order is preserved so that the
//! output of a run is reproducible and matches what `git branch` printed.

use tracing::trace;

use crate::error::{CleanerError, Result};
use crate::pattern::ExcludePattern;

/// Check whether `branch` matches any of the exclusion patterns.
pub fn is_excluded(branch: &str, patterns: &[ExcludePattern]) -> bool {
  patterns.iter().any(|pattern| pattern.matches(branch))
}

/// Keep the branches that match none of `patterns`, in their original order.
///
/// Duplicates in the input are kept as-is.
pub fn filter_branches<S: AsRef<str>>(branches: &[S], patterns: &[ExcludePattern]) -> Vec<String> {
  branches
    .iter()
    .map(|branch| branch.as_ref())
    .filter(|branch| {
      let excluded = is_excluded(branch, patterns);
      if excluded {
        trace!("Branch '{}' is protected by an exclusion pattern", branch);
      }
      !excluded
    })
    .map(str::to_string)
    .collect()
}

/// Refuse a deletion set that contains the checked-out branch.
///
/// The current branch is never filtered out silently: if it is still eligible
/// after applying the exclusion patterns the whole run is aborted with
/// [`CleanerError::CurrentBranchProtected`].
pub fn enforce_current_branch_safety(eligible: Vec<String>, current_branch: Option<&str>) -> Result<Vec<String>> {
  match current_branch {
    Some(current) if eligible.iter().any(|branch| branch == current) => Err(CleanerError::CurrentBranchProtected {
      branch: current.to_string(),
    }),
    _ => Ok(eligible),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn patterns(raw: &[&str]) -> Vec<ExcludePattern> {
    raw.iter().map(|p| ExcludePattern::parse(p).unwrap()).collect()
  }

  #[test]
  fn test_wildcard_scenario() {
    let branches = ["master", "develop", "release/1.0"];
    assert_eq!(
      filter_branches(&branches, &patterns(&["release/*"])),
      vec!["master", "develop"]
    );
  }

  #[test]
  fn test_hierarchical_exact_scenario() {
    let branches = ["master", "develop", "feature/x", "release/1.0"];
    assert_eq!(
      filter_branches(&branches, &patterns(&["feature/x"])),
      vec!["master", "develop", "release/1.0"]
    );
  }

  #[test]
  fn test_exact_pattern_only_removes_equal_name() {
    let branches = ["master", "main", "develop", "master-old"];
    assert_eq!(
      filter_branches(&branches, &patterns(&["master"])),
      vec!["main", "develop", "master-old"]
    );
  }

  #[test]
  fn test_no_patterns_keeps_everything() {
    let branches = ["b", "a", "c", "a"];
    assert_eq!(filter_branches(&branches, &[]), vec!["b", "a", "c", "a"]);
  }

  #[test]
  fn test_empty_branches_yield_empty_result() {
    let empty: [&str; 0] = [];
    assert!(filter_branches(&empty, &patterns(&["main", "release/*"])).is_empty());
    assert!(filter_branches(&empty, &[]).is_empty());
  }

  #[test]
  fn test_duplicates_are_preserved() {
    let branches = ["topic", "main", "topic"];
    assert_eq!(filter_branches(&branches, &patterns(&["main"])), vec!["topic", "topic"]);
  }

  #[test]
  fn test_result_is_ordered_subsequence() {
    let branches = [
      "zeta",
      "release/2.0",
      "alpha",
      "foo",
      "foobar",
      "foo/bar",
      "main",
      "prerelease/1.0",
    ];
    let result = filter_branches(&branches, &patterns(&["foo/*", "release/*", "main"]));
    assert_eq!(result, vec!["zeta", "alpha", "foo", "foobar", "prerelease/1.0"]);

    // Every surviving branch appears in the input after the previous one
    let mut cursor = 0;
    for branch in &result {
      let offset = branches[cursor..]
        .iter()
        .position(|candidate| candidate == branch)
        .expect("result must be a subsequence of the input");
      cursor += offset + 1;
    }
  }

  #[test]
  fn test_filtering_is_idempotent() {
    let branches = ["main", "develop", "feature/a", "release/1", "hotfix"];
    let excludes = patterns(&["develop", "release/*"]);
    let once = filter_branches(&branches, &excludes);
    let twice = filter_branches(&once, &excludes);
    assert_eq!(once, twice);
  }

  #[test]
  fn test_is_excluded() {
    let excludes = patterns(&["main", "release/*"]);
    assert!(is_excluded("main", &excludes));
    assert!(is_excluded("release/3", &excludes));
    assert!(!is_excluded("release", &excludes));
    assert!(!is_excluded("feature", &[]));
  }

  #[test]
  fn test_safety_refuses_current_branch() {
    let eligible = vec!["feature/x".to_string(), "old".to_string()];
    let result = enforce_current_branch_safety(eligible, Some("feature/x"));
    assert_eq!(
      result,
      Err(CleanerError::CurrentBranchProtected {
        branch: "feature/x".to_string()
      })
    );
  }

  #[test]
  fn test_safety_passes_when_current_is_protected() {
    let eligible = vec!["old".to_string(), "stale".to_string()];
    assert_eq!(
      enforce_current_branch_safety(eligible.clone(), Some("main")),
      Ok(eligible)
    );
  }

  #[test]
  fn test_safety_with_detached_head() {
    let eligible = vec!["old".to_string()];
    assert_eq!(enforce_current_branch_safety(eligible.clone(), None), Ok(eligible));
  }
}

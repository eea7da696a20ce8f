//! Exclusion patterns.
//!
//! A pattern is either an exact branch name or a hierarchy wildcard written
//! with a trailing `/*`. Wildcards only match branches *below* the prefix:
//! `release/*` protects `release/1.0` but not `release` or `releases/1.0`.

use std::fmt;
use std::str::FromStr;

use crate::consts::{BRANCH_SEPARATOR, WILDCARD_SUFFIX};
use crate::error::CleanerError;

/// Built-in protected branches added by `--standard`.
pub const STANDARD_BRANCHES: [&str; 4] = ["master", "main", "develop", "release/*"];

/// A rule describing branches that must be protected from deletion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExcludePattern {
  /// Matches a branch with exactly this name.
  Exact(String),
  /// Matches any branch nested under this prefix (`<prefix>/...`).
  Prefix(String),
}

impl ExcludePattern {
  /// Parse a pattern from its textual form.
  ///
  /// Empty patterns and a bare `/*` are rejected since they would either match
  /// nothing or everything.
  pub fn parse(raw: &str) -> Result<Self, CleanerError> {
    if raw.is_empty() {
      return Err(CleanerError::InvalidArguments(
        "exclusion pattern must not be empty".to_string(),
      ));
    }

    match raw.strip_suffix(WILDCARD_SUFFIX) {
      Some("") => Err(CleanerError::InvalidArguments(format!(
        "exclusion pattern '{raw}' has no prefix before '{WILDCARD_SUFFIX}'"
      ))),
      Some(prefix) => Ok(Self::Prefix(prefix.to_string())),
      None => Ok(Self::Exact(raw.to_string())),
    }
  }

  /// Exact-match pattern for a single branch.
  pub fn exact(branch: impl Into<String>) -> Self {
    Self::Exact(branch.into())
  }

  /// Check whether `branch` is protected by this pattern.
  pub fn matches(&self, branch: &str) -> bool {
    match self {
      Self::Exact(name) => branch == name,
      Self::Prefix(prefix) => branch
        .strip_prefix(prefix.as_str())
        .is_some_and(|rest| rest.starts_with(BRANCH_SEPARATOR)),
    }
  }
}

impl fmt::Display for ExcludePattern {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Exact(name) => f.write_str(name),
      Self::Prefix(prefix) => write!(f, "{prefix}{WILDCARD_SUFFIX}"),
    }
  }
}

impl FromStr for ExcludePattern {
  type Err = CleanerError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s)
  }
}

/// The [`STANDARD_BRANCHES`] as parsed patterns.
pub fn standard_patterns() -> Vec<ExcludePattern> {
  STANDARD_BRANCHES
    .iter()
    .filter_map(|raw| ExcludePattern::parse(raw).ok())
    .collect()
}

//! Parsing of `git branch --list` output.

use tracing::trace;

use super::BranchListing;

/// Marker git puts in front of the checked-out branch.
const CURRENT_MARKER: &str = "* ";

/// Marker git puts in front of a branch checked out in another worktree.
const WORKTREE_MARKER: &str = "+ ";

/// Separator between a symbolic branch ref and its target (`alias -> main`).
const SYMREF_SEPARATOR: &str = " -> ";

/// Parse the raw output of `git branch --list --no-color --no-column`.
///
/// Entries wrapped in parentheses such as `(HEAD detached at 1a2b3c)` are not
/// branches and are skipped. If the current-branch marker sits on one of them
/// the listing has no current branch. Symbolic refs are listed under their own
/// name, without the ` -> target` suffix.
pub fn parse_branch_listing(raw: &str) -> BranchListing {
  let mut listing = BranchListing::default();

  for line in raw.lines() {
    if line.trim().is_empty() {
      continue;
    }

    let (is_current, name) = if let Some(rest) = line.strip_prefix(CURRENT_MARKER) {
      (true, rest)
    } else if let Some(rest) = line.strip_prefix(WORKTREE_MARKER) {
      (false, rest)
    } else {
      (false, line)
    };
    let name = name.trim();

    if name.starts_with('(') {
      trace!("Skipping non-branch listing entry: {}", name);
      continue;
    }

    let name = match name.split_once(SYMREF_SEPARATOR) {
      Some((alias, target)) => {
        trace!("Branch '{}' is a symbolic ref to '{}'", alias, target);
        alias.trim_end()
      }
      None => name,
    };

    if is_current {
      listing.current = Some(name.to_string());
    }
    listing.branches.push(name.to_string());
  }

  listing
}

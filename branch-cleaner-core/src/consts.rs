//! Constants shared by the core library and the CLI.

/// Environment variable consulted for the tracing verbosity (0-3) when no
/// `-v` flag is given
pub const ENV_VERBOSITY: &str = "BRANCH_CLEANER_VERBOSITY";

/// Platform-specific Git executable name
#[cfg(windows)]
pub const GIT_EXECUTABLE: &str = "git.exe";

/// Platform-specific Git executable name
#[cfg(not(windows))]
pub const GIT_EXECUTABLE: &str = "git";

/// Separator between levels of a hierarchical branch name such as
/// `release/1.0`
pub const BRANCH_SEPARATOR: char = '/';

/// Suffix that turns an exclusion pattern into a prefix wildcard
pub const WILDCARD_SUFFIX: &str = "/*";

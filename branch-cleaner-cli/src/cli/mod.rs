//! # Command Line Interface
//!
//! Flag definitions for `git-branch-cleaner` and their translation into a
//! [`CleanupRequest`].

mod args;

use std::path::PathBuf;

use branch_cleaner_core::{
  CleanupRequest, ColorMode, DeleteMode, ExcludePattern, STANDARD_BRANCHES, standard_patterns,
};
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, ArgGroup, CommandFactory, Parser};

pub use self::args::{EXCLUDE_COLON_PREFIX, normalize_args};

/// Top-level CLI for git-branch-cleaner
#[derive(Parser, Debug)]
#[command(name = "git-branch-cleaner")]
#[command(about = "Delete local git branches that are not protected by an exclusion pattern")]
#[command(
  long_about = "Deletes local branches that match none of the given exclusion patterns.\n\n\
        A pattern is either an exact branch name or a prefix wildcard ending in '/*'\n\
        (e.g. 'release/*' protects 'release/1.0' but not 'release'). The current\n\
        branch is never deleted: unless --all is used it must be covered by a\n\
        pattern, otherwise the run is refused."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(after_help = after_help())]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
#[command(group(
  ArgGroup::new("filter")
    .args(["standard", "exclude", "all"])
    .required(true)
    .multiple(true)
))]
pub struct Cli {
  /// Protect the standard branches (master, main, develop, release/*)
  #[arg(long)]
  pub standard: bool,

  /// Protect branches matching PATTERN; repeatable. Also accepted as
  /// --exclude:<PATTERN>
  #[arg(short = 'e', long = "exclude", value_name = "PATTERN", action = ArgAction::Append)]
  pub exclude: Vec<ExcludePattern>,

  /// Delete every branch except the current one
  #[arg(long, conflicts_with_all = ["standard", "exclude"])]
  pub all: bool,

  /// Show which branches would be deleted without deleting them
  #[arg(short = 'n', long = "dry-run")]
  pub dry_run: bool,

  /// Use `git branch -d`, which refuses branches with unmerged commits
  #[arg(long)]
  pub safe: bool,

  /// Run against the repository at PATH instead of the current directory
  #[arg(short = 'C', long = "repo", value_name = "PATH")]
  pub repo: Option<PathBuf>,

  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(long, value_enum, ignore_case = true, default_value_t = ColorMode::Auto)]
  pub colors: ColorMode,
}

impl Cli {
  /// Translate the parsed flags into a cleanup request.
  ///
  /// `standard` is injected by the caller so the built-in list is not baked
  /// into argument handling.
  pub fn to_request(&self, standard: &[ExcludePattern]) -> CleanupRequest {
    let request = if self.all {
      CleanupRequest::all()
    } else {
      CleanupRequest::with_patterns(standard, self.standard, self.exclude.clone())
    };

    request.dry_run(self.dry_run).delete_mode(if self.safe {
      DeleteMode::Safe
    } else {
      DeleteMode::Force
    })
  }

  /// Render the long help text.
  pub fn usage() -> String {
    Self::command().render_long_help().to_string()
  }
}

fn after_help() -> String {
  format!(
    "Standard branches protected by --standard:\n  {}\n\n\
     Examples:\n  \
     git-branch-cleaner --standard --exclude:feature/* --exclude:bugfix/*\n  \
     git-branch-cleaner --all\n  \
     git-branch-cleaner --dry-run --standard",
    STANDARD_BRANCHES.join(", ")
  )
}

/// Build a request with the built-in [`STANDARD_BRANCHES`].
pub fn build_request(cli: &Cli) -> CleanupRequest {
  cli.to_request(&standard_patterns())
}

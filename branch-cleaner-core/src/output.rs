//! # Output Formatting
//!
//! Coloured, emoji-prefixed messages for the terminal. Status messages go to
//! stdout, errors to stderr. Colours respect [`ColorMode`] and are dropped
//! when the target stream is not a terminal.

use owo_colors::{OwoColorize, Stream, Style};

/// When coloured output is used
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Yes,
  /// Enable colored output (alias for Yes)
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  No,
  /// Disable colored output (alias for No)
  Never,
}

impl ColorMode {
  /// Apply this mode to the process-wide colour override.
  pub fn apply(self) {
    match self {
      Self::Always | Self::Yes => owo_colors::set_override(true),
      Self::Never | Self::No => owo_colors::set_override(false),
      // Leave detection to owo-colors (honours NO_COLOR and TTY checks)
      Self::Auto => owo_colors::unset_override(),
    }
  }
}

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

fn paint(text: &str, stream: Stream, style: Style) -> String {
  text.if_supports_color(stream, |t| t.style(style)).to_string()
}

/// Print a success message
pub fn print_success(message: &str) {
  let check = get_emoji_or_default("check_mark", "✓");
  println!("{} {}", paint(&check, Stream::Stdout, Style::new().green().bold()), message);
}

/// Print an error message
pub fn print_error(message: &str) {
  let cross = get_emoji_or_default("cross_mark", "✗");
  eprintln!("{} {}", paint(&cross, Stream::Stderr, Style::new().red().bold()), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
  let warning = get_emoji_or_default("warning", "⚠");
  println!("{} {}", paint(&warning, Stream::Stdout, Style::new().yellow().bold()), message);
}

/// Print an info message
pub fn print_info(message: &str) {
  let info = get_emoji_or_default("information", "ℹ");
  println!("{} {}", paint(&info, Stream::Stdout, Style::new().blue().bold()), message);
}

/// Print a section header
pub fn print_header(header: &str) {
  println!("\n{}", paint(header, Stream::Stdout, Style::new().blue().bold()));
}

/// Format a branch name
pub fn format_branch(name: &str) -> String {
  paint(name, Stream::Stdout, Style::new().bright_cyan())
}

/// Format a list of branch names as a comma-separated string
pub fn format_branch_list<S: AsRef<str>>(branches: &[S]) -> String {
  branches
    .iter()
    .map(|branch| format_branch(branch.as_ref()))
    .collect::<Vec<_>>()
    .join(", ")
}

//! Rewrites `--exclude:<pattern>` into a form clap understands.

use std::ffi::OsString;

/// Colon-separated spelling of the exclude flag, e.g. `--exclude:release/*`.
pub const EXCLUDE_COLON_PREFIX: &str = "--exclude:";

/// Rewrite every `--exclude:<pattern>` argument as `--exclude=<pattern>`.
///
/// Arguments after a literal `--` and arguments that are not valid UTF-8 are
/// passed through unchanged.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
  I: IntoIterator<Item = OsString>,
{
  let mut past_terminator = false;

  args
    .into_iter()
    .map(|arg| {
      if past_terminator {
        return arg;
      }
      if arg == "--" {
        past_terminator = true;
        return arg;
      }

      match arg.to_str().and_then(|s| s.strip_prefix(EXCLUDE_COLON_PREFIX)) {
        Some(pattern) => OsString::from(format!("--exclude={pattern}")),
        None => arg,
      }
    })
    .collect()
}

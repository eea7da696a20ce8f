//! Tracing setup.
//!
//! Log output goes to stderr so that stdout only carries the cleanup report.

use std::env;

use branch_cleaner_core::consts::ENV_VERBOSITY;
use tracing::Level;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Map a `-v` count to a tracing level.
pub const fn level_for_verbosity(verbosity: u8) -> Level {
  match verbosity {
    0 => Level::WARN,  // Default: warnings and errors
    1 => Level::INFO,  // -v: info, warnings, and errors
    2 => Level::DEBUG, // -vv: debug, info, warnings, and errors
    _ => Level::TRACE, // -vvv or more: trace and everything else
  }
}

/// Resolve the effective verbosity.
///
/// An explicit `-v` wins; otherwise `env_value` (from
/// `BRANCH_CLEANER_VERBOSITY`) is used when it holds a number from 0 to 3.
pub fn resolve_verbosity(flag_count: u8, env_value: Option<&str>) -> u8 {
  if flag_count > 0 {
    return flag_count;
  }

  env_value
    .and_then(|v| v.trim().parse::<u8>().ok())
    .filter(|level| *level <= 3)
    .unwrap_or(0)
}

/// Install the global tracing subscriber.
pub fn init_tracing(flag_count: u8) {
  let verbosity = resolve_verbosity(flag_count, env::var(ENV_VERBOSITY).ok().as_deref());
  let level = level_for_verbosity(verbosity);

  let fmt_layer = fmt::layer()
    .with_writer(std::io::stderr)
    .with_target(false)
    .with_level(true);
  let filter = EnvFilter::from_default_env().add_directive(level.into());

  // A subscriber may already be installed (e.g. in tests)
  tracing_subscriber::registry()
    .with(filter)
    .with(fmt_layer)
    .try_init()
    .ok();

  tracing::debug!("Tracing initialized with level: {}", level);
}

//! # git-branch-cleaner Entry Point
//!
//! Deletes local branches that are not protected by an exclusion pattern.

use std::env;
use std::process::ExitCode;

use branch_cleaner_cli::cleanup::handle_cli;
use branch_cleaner_cli::cli::{Cli, normalize_args};
use branch_cleaner_cli::logging::init_tracing;
use branch_cleaner_core::CleanerError;
use branch_cleaner_core::output::print_error;
use clap::Parser;

fn main() -> ExitCode {
  let args = normalize_args(env::args_os());

  // No arguments at all: show usage instead of a missing-argument error
  if args.len() <= 1 {
    println!("{}", Cli::usage());
    return ExitCode::SUCCESS;
  }

  // Usage errors print help and exit with status 2 before anything else runs
  let cli = Cli::parse_from(args);

  init_tracing(cli.verbose);
  cli.colors.apply();

  match handle_cli(&cli) {
    Ok(_) => ExitCode::SUCCESS,
    Err(err) => report_error(&err),
  }
}

fn report_error(err: &anyhow::Error) -> ExitCode {
  print_error(&format!("{err:#}"));

  match err.downcast_ref::<CleanerError>() {
    Some(cleaner_error) => {
      for suggestion in cleaner_error.suggestions() {
        eprintln!("  → {suggestion}");
      }
      ExitCode::from(cleaner_error.exit_code())
    }
    None => ExitCode::FAILURE,
  }
}

//! # Branch Cleaner CLI Library
//!
//! Argument parsing, logging setup and the cleanup workflow behind the
//! `git-branch-cleaner` binary.

pub mod cleanup;
pub mod cli;
pub mod logging;

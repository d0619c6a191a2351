//! Runtime constants
//!
//! # consts
//!
//! This module houses constants used throughout the code. Environment-derived
//! values are lazily evaluated, so each variable is read at most once per run.

use std::env;

use clap::crate_version;
use once_cell::sync::Lazy;

/// Environment variable holding the fallback master password.
pub const MASTER_PASSWORD_VAR: &str = "LESSPASS_MASTER_PASSWORD";
/// Environment variable holding the `env_logger` filter.
pub const LOG_VAR: &str = "LESSPASS_LOG";

pub const DEFAULT_LENGTH: i64 = 16;
pub const MIN_LENGTH: i64 = 1;
pub const MAX_LENGTH: i64 = 35;
pub const DEFAULT_COUNTER: i64 = 1;

pub static VERSION: Lazy<String> = Lazy::new(|| {
    let ver = crate_version!().to_owned();
    let commit_hash = env!("LESSPASS_GIT_HASH");

    if !commit_hash.is_empty() {
        format!("{} ({})", ver, commit_hash)
    } else {
        ver
    }
});

// snapshot; never re-read during a run
pub static LESSPASS_MASTER_PASSWORD: Lazy<Option<String>> =
    Lazy::new(|| env::var(MASTER_PASSWORD_VAR).ok());

//! Error types for the blacklister.

use std::path::PathBuf;
use thiserror::Error;

/// Conditions that end the run with a non-zero exit status.
///
/// Everything else (a failed feed download included) is either recovered
/// or reported through `anyhow`.
#[derive(Error, Debug)]
pub enum BlacklisterError {
    #[error("Unable to determine install directory - {0}")]
    InstallDir(String),

    #[error("I/O error while reading whitelist file - {source}")]
    WhitelistRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BlacklisterError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            BlacklisterError::InstallDir(_) => 2,
            BlacklisterError::WhitelistRead { .. } => 3,
        }
    }
}

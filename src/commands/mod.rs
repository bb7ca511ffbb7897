//! CLI command implementations.

pub mod check;
pub mod generate;

use std::path::{Path, PathBuf};

use crate::error::BlacklisterError;
use crate::locate::default_whitelist_path;

/// The `--whitelist` override, or the file next to the binary.
pub(crate) fn resolve_whitelist_path(
    explicit: Option<&Path>,
) -> Result<PathBuf, BlacklisterError> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_whitelist_path(),
    }
}

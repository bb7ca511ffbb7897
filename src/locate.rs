//! Locating the directory the binary is installed in.

use std::path::{Path, PathBuf};

use crate::error::BlacklisterError;
use crate::whitelist::WHITELIST_FILENAME;

/// Directory containing the running executable, symlinks resolved.
pub fn install_dir() -> Result<PathBuf, BlacklisterError> {
    let exe = std::env::current_exe().map_err(|e| BlacklisterError::InstallDir(e.to_string()))?;
    let exe = exe.canonicalize().unwrap_or(exe);
    parent_dir(&exe)
}

/// Directory holding `exe`, or `exe` itself when it is already a directory.
fn parent_dir(exe: &Path) -> Result<PathBuf, BlacklisterError> {
    if exe.is_dir() {
        return Ok(exe.to_path_buf());
    }
    exe.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .ok_or_else(|| BlacklisterError::InstallDir(format!("{:?} has no parent", exe)))
}

/// Default whitelist location: next to the binary.
pub fn default_whitelist_path() -> Result<PathBuf, BlacklisterError> {
    Ok(install_dir()?.join(WHITELIST_FILENAME))
}

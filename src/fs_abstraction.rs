//! Filesystem abstraction layer for testability
//!
//! The whitelist loader only needs to know whether a path is a regular file
//! and to read its bytes. Putting those two calls behind a trait lets the
//! loader's error paths (permission denied, read failures) be exercised
//! with mockall instead of real files.

use std::io;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

/// Trait abstracting the filesystem calls used by the whitelist loader.
///
/// # Example (testing)
/// ```ignore
/// use unbound_blacklister::fs_abstraction::MockFileSystem;
///
/// let mut mock_fs = MockFileSystem::new();
/// mock_fs.expect_is_file().returning(|_| true);
/// mock_fs.expect_read().returning(|_| Ok(b"example.com\n".to_vec()));
/// ```
#[cfg_attr(test, automock)]
pub trait FileSystem: Send + Sync {
    /// Whether `path` exists and is a regular file (symlinks followed).
    fn is_file(&self, path: &Path) -> bool;

    /// Read file contents as bytes.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;
}

/// Real filesystem implementation using std::fs.
#[derive(Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

static REAL_FS: RealFileSystem = RealFileSystem;

/// Get a reference to the global real filesystem instance.
pub fn real_fs() -> &'static RealFileSystem {
    &REAL_FS
}

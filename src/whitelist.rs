//! Local whitelist of domains that are never blocked.

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

use crate::classifier::split_lines;
use crate::error::BlacklisterError;
use crate::fs_abstraction::FileSystem;

/// File name looked up next to the executable.
pub const WHITELIST_FILENAME: &str = "whitelist.conf";

/// Domains exempted from blocking. Read-only once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Whitelist {
    domains: HashSet<String>,
}

impl Whitelist {
    /// Load the whitelist at `path`.
    ///
    /// Returns `Ok(None)` when the file is missing, is not a regular file or
    /// cannot be opened for lack of permission. Any other read failure is
    /// fatal.
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Option<Self>, BlacklisterError> {
        if !fs.is_file(path) {
            debug!("No whitelist at {:?}", path);
            return Ok(None);
        }

        let bytes = match fs.read(path) {
            Ok(bytes) => bytes,
            Err(e) if matches!(e.kind(), ErrorKind::PermissionDenied | ErrorKind::NotFound) => {
                debug!("Whitelist {:?} not readable: {}", path, e);
                return Ok(None);
            }
            Err(source) => {
                return Err(BlacklisterError::WhitelistRead {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let whitelist = Self::parse(&String::from_utf8_lossy(&bytes));
        debug!("Loaded {} whitelist entries from {:?}", whitelist.len(), path);
        Ok(Some(whitelist))
    }

    /// Parse whitelist content: one domain per line, `#` comments allowed.
    ///
    /// Entries are lower-cased because feed tokens always are.
    ///
    /// # Examples
    /// ```
    /// use unbound_blacklister::whitelist::Whitelist;
    /// let wl = Whitelist::parse("# keep these\nGood.Example.com\n\n");
    /// assert!(wl.contains("good.example.com"));
    /// assert_eq!(wl.len(), 1);
    /// ```
    pub fn parse(content: &str) -> Self {
        split_lines(content).collect()
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.domains.contains(domain)
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for Whitelist {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let domains = iter
            .into_iter()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();
        Self { domains }
    }
}

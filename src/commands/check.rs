//! Check command implementation.

use anyhow::Result;
use std::fmt;
use std::path::Path;

use super::resolve_whitelist_path;
use crate::fs_abstraction::real_fs;
use crate::output::render_directive;
use crate::validation::{validate_domain, Rejection};
use crate::whitelist::Whitelist;

/// What the generator would do with one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Blocked(String),
    Whitelisted(String),
    Rejected(String, Rejection),
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Blocked(domain) => {
                writeln!(f, "[BLOCK] {} would be blocked", domain)?;
                write!(f, "        {}", render_directive(domain))
            }
            Verdict::Whitelisted(domain) => {
                write!(f, "[ALLOW] {} is whitelisted", domain)
            }
            Verdict::Rejected(domain, reason) => {
                write!(f, "[SKIP]  {} is not a blockable domain: {}", domain, reason)
            }
        }
    }
}

/// Normalise `domain` the way a feed token is, then judge it.
pub fn verdict(domain: &str, whitelist: &Whitelist) -> Verdict {
    let token = domain.trim().to_lowercase();
    if let Err(reason) = validate_domain(&token) {
        return Verdict::Rejected(token, reason);
    }
    if whitelist.contains(&token) {
        Verdict::Whitelisted(token)
    } else {
        Verdict::Blocked(token)
    }
}

/// Run the check command
pub async fn run(domain: &str, whitelist: Option<&Path>) -> Result<()> {
    let path = resolve_whitelist_path(whitelist)?;
    let whitelist = Whitelist::load(real_fs(), &path)?.unwrap_or_default();

    println!("{}", verdict(domain, &whitelist));
    Ok(())
}

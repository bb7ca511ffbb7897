//! Hosts-file line classification.
//!
//! Decides, for one raw line of the remote feed, whether it is structural
//! noise (blank, comment, reserved address entry, too few fields) or a
//! record whose second field is a candidate domain.

/// Address prefixes of the stock entries every hosts file carries.
/// Checked in order; the first hit skips the line.
pub const RESERVED_PREFIXES: &[&str] = &[
    "127.0.0.1",
    "255.255.255.255",
    "::1",
    "fe80:",
    "ff02::1",
    "ff02::2",
];

/// Why a line produced no candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    Empty,
    Comment,
    Reserved,
    /// Not a comment or reserved entry, but fewer than two fields.
    Malformed,
}

/// Outcome of classifying a single feed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    Skip(SkipReason),
    Candidate(String),
}

impl LineClass {
    /// The candidate token, if any.
    pub fn candidate(&self) -> Option<&str> {
        match self {
            LineClass::Candidate(token) => Some(token),
            LineClass::Skip(_) => None,
        }
    }
}

/// Classify one line of a hosts-file feed.
///
/// The candidate is the second whitespace-separated field, lower-cased.
///
/// # Examples
/// ```
/// use unbound_blacklister::classifier::{classify, LineClass, SkipReason};
/// assert_eq!(classify("# comment"), LineClass::Skip(SkipReason::Comment));
/// assert_eq!(
///     classify("0.0.0.0 ads.example.com"),
///     LineClass::Candidate("ads.example.com".to_string())
/// );
/// ```
pub fn classify(line: &str) -> LineClass {
    let line = line.trim();

    if line.is_empty() {
        return LineClass::Skip(SkipReason::Empty);
    }
    if line.starts_with('#') {
        return LineClass::Skip(SkipReason::Comment);
    }
    if RESERVED_PREFIXES
        .iter()
        .any(|prefix| line.starts_with(prefix))
    {
        return LineClass::Skip(SkipReason::Reserved);
    }

    match line.split_whitespace().nth(1) {
        Some(field) => LineClass::Candidate(field.trim().to_lowercase()),
        None => LineClass::Skip(SkipReason::Malformed),
    }
}

/// Split text into lines ending at `\n`, `\r\n` or a bare `\r`.
///
/// A trailing terminator does not produce an extra empty line.
///
/// # Examples
/// ```
/// use unbound_blacklister::classifier::split_lines;
/// let lines: Vec<&str> = split_lines("a\rb\r\nc\n").collect();
/// assert_eq!(lines, ["a", "b", "c"]);
/// ```
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let line = match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(end) => {
                let line = &rest[..end];
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
                line
            }
            None => std::mem::take(&mut rest),
        };
        Some(line)
    })
}
